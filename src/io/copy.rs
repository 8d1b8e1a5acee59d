use std::fmt;
use std::io::{self, ErrorKind, Read, Write};
use std::str;

use super::{BUFFER_SIZE, InvalidUtf8Error, ReadError};

/// Copies every byte from `reader` into `writer`, returning the number of bytes copied.
///
/// Reads interrupted by a signal are retried. `writer` isn't flushed.
///
/// # Errors
/// Returns the first error encountered while reading or writing, after which the amount of data
/// written is unspecified.
pub fn copy<R: Read, W: Write>(mut reader: R, mut writer: W) -> io::Result<u64> {
    let mut buf = [0_u8; BUFFER_SIZE];
    let mut total = 0_u64;

    loop {
        let count = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(count) => count,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..count])?;
        total += count as u64;
    }

    tracing::trace!(bytes = total, "copied byte stream");
    Ok(total)
}

/// Copies every character from `reader`, which must produce UTF-8, into the character sink
/// `writer`. Returns the number of characters copied.
///
/// Characters split across reads are handled correctly.
///
/// # Errors
/// Returns an error if reading fails, if the stream isn't valid UTF-8 (including a truncated
/// character at the end of the stream) or if `writer` fails.
pub fn copy_to_fmt<R: Read, W: fmt::Write>(mut reader: R, mut writer: W) -> Result<usize, ReadError> {
    let mut buf = [0_u8; BUFFER_SIZE];
    // Number of bytes at the start of buf which belong to an incomplete character.
    let mut carried = 0;
    // Offset in the stream of the first byte in buf.
    let mut offset = 0_u64;
    let mut chars = 0;

    loop {
        let count = match reader.read(&mut buf[carried..]) {
            Ok(0) if carried == 0 => break,
            Ok(0) => Err(InvalidUtf8Error { offset })?,
            Ok(count) => count,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => Err(e)?,
        };
        let filled = carried + count;

        let valid = match str::from_utf8(&buf[..filled]) {
            Ok(text) => text,
            Err(e) if e.error_len().is_some() => Err(InvalidUtf8Error {
                offset: offset + e.valid_up_to() as u64,
            })?,
            // SAFETY: from_utf8 guarantees that everything before valid_up_to is valid UTF-8.
            Err(e) => unsafe { str::from_utf8_unchecked(&buf[..e.valid_up_to()]) },
        };

        writer.write_str(valid)?;
        chars += valid.chars().count();

        let consumed = valid.len();
        buf.copy_within(consumed..filled, 0);
        carried = filled - consumed;
        offset += consumed as u64;
    }

    tracing::trace!(chars, "copied character stream");
    Ok(chars)
}

/// Encodes every character from `chars` as UTF-8 into `writer`, returning the number of bytes
/// written.
///
/// # Errors
/// Returns the first error produced by `writer`.
pub fn copy_chars<I, W>(chars: I, mut writer: W) -> io::Result<u64>
where
    I: IntoIterator<Item = char>,
    W: Write,
{
    let mut buf = [0_u8; BUFFER_SIZE];
    let mut filled = 0;
    let mut total = 0_u64;

    for c in chars {
        if filled + c.len_utf8() > buf.len() {
            writer.write_all(&buf[..filled])?;
            total += filled as u64;
            filled = 0;
        }
        filled += c.encode_utf8(&mut buf[filled..]).len();
    }

    writer.write_all(&buf[..filled])?;
    total += filled as u64;
    Ok(total)
}

/// Reads `reader` to its end, decoding it as UTF-8.
///
/// # Errors
/// See [`copy_to_fmt`].
pub fn read_to_string<R: Read>(reader: R) -> Result<String, ReadError> {
    let mut out = String::new();
    copy_to_fmt(reader, &mut out)?;
    Ok(out)
}
