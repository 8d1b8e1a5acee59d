use std::io::{self, Read};
use std::iter::Fuse;

/// A reader which drains several readers one after another. Created by [`concat`].
///
/// Once every reader has been drained, `readers` is never polled again.
#[derive(Debug)]
pub struct Concat<I: Iterator> {
    pub(crate) readers: Fuse<I>,
    pub(crate) current: Option<I::Item>,
}

/// Concatenates the provided readers into a single reader. Each reader is only taken from
/// `readers` once the previous one has reached end of file.
pub fn concat<R, I>(readers: I) -> Concat<I::IntoIter>
where
    R: Read,
    I: IntoIterator<Item = R>,
{
    Concat {
        readers: readers.into_iter().fuse(),
        current: None,
    }
}

impl<R: Read, I: Iterator<Item = R>> Read for Concat<I> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            let Some(reader) = &mut self.current else {
                // The next reader isn't touched until the current one is exhausted.
                match self.readers.next() {
                    Some(next) => self.current = Some(next),
                    None => return Ok(0),
                }
                continue;
            };

            match reader.read(buf)? {
                0 => self.current = None,
                count => return Ok(count),
            }
        }
    }
}
