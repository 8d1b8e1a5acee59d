use std::io::{self, Write};

/// A writer which duplicates everything written to it into several writers. Created by [`tee`].
#[derive(Debug)]
pub struct Tee<W> {
    pub(crate) writers: Vec<W>,
}

/// Creates a writer which writes every buffer in full to each of `writers`, in order.
pub fn tee<W, I>(writers: I) -> Tee<W>
where
    W: Write,
    I: IntoIterator<Item = W>,
{
    Tee {
        writers: writers.into_iter().collect(),
    }
}

impl<W> Tee<W> {
    pub fn writers(&self) -> &[W] {
        &self.writers
    }

    pub fn into_inner(self) -> Vec<W> {
        self.writers
    }
}

impl<W: Write> Write for Tee<W> {
    /// Writes all of `buf` to every writer.
    ///
    /// If any writer fails, the writers after it don't receive `buf` and the writers before it
    /// already have.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for writer in &mut self.writers {
            writer.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for writer in &mut self.writers {
            writer.flush()?;
        }
        Ok(())
    }
}
