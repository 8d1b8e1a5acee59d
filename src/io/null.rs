use std::fmt;
use std::io::{self, Write};

/// A sink which accepts and discards everything written to it, as bytes or as characters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullWriter;

pub const fn null_writer() -> NullWriter {
    NullWriter
}

impl Write for NullWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for NullWriter {
    fn write_str(&mut self, _: &str) -> fmt::Result {
        Ok(())
    }
}
