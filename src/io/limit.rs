use std::io::{self, Read};

/// A reader which produces at most a fixed number of bytes from an inner reader. Created by
/// [`limit`].
#[derive(Debug)]
pub struct Limit<R> {
    pub(crate) inner: R,
    pub(crate) remaining: u64,
}

/// Wraps `reader` so that no more than `limit` bytes are read from it.
pub const fn limit<R: Read>(reader: R, limit: u64) -> Limit<R> {
    Limit {
        inner: reader,
        remaining: limit,
    }
}

impl<R> Limit<R> {
    /// Returns the number of bytes which can still be read before the limit is reached.
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for Limit<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Ok(0);
        }

        let max = usize::try_from(self.remaining).map_or(buf.len(), |remaining| remaining.min(buf.len()));
        // A misbehaving reader may claim more than it was given room for.
        let count = self.inner.read(&mut buf[..max])?.min(max);
        self.remaining -= count as u64;
        Ok(count)
    }
}
