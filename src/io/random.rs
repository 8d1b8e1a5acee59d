use std::io::{self, Read};
use std::iter::FusedIterator;

use rand::Rng;
use rand::rngs::ThreadRng;

use super::EmptyAlphabetError;

/// An endless stream of characters picked uniformly at random from an alphabet. Created by
/// [`random`] or [`random_with`].
///
/// The stream is an [`Iterator`] of chars. Use [`Random::into_reader`] to consume it as a
/// [`Read`]er producing their UTF-8 encoding instead.
#[derive(Debug, Clone)]
pub struct Random<G> {
    pub(crate) alphabet: Box<[char]>,
    pub(crate) rng: G,
}

/// Creates a random character stream over `alphabet`, using the thread-local generator.
///
/// # Errors
/// Returns [`EmptyAlphabetError`] if `alphabet` contains no characters.
pub fn random(alphabet: &[char]) -> Result<Random<ThreadRng>, EmptyAlphabetError> {
    random_with(alphabet, rand::thread_rng())
}

/// Creates a random character stream over `alphabet`, using the provided generator.
///
/// # Errors
/// Returns [`EmptyAlphabetError`] if `alphabet` contains no characters.
pub fn random_with<G: Rng>(alphabet: &[char], rng: G) -> Result<Random<G>, EmptyAlphabetError> {
    if alphabet.is_empty() {
        Err(EmptyAlphabetError)?
    }

    Ok(Random {
        alphabet: alphabet.into(),
        rng,
    })
}

impl<G> Random<G> {
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Turns the stream into a reader of UTF-8 bytes.
    pub fn into_reader(self) -> RandomReader<G> {
        RandomReader {
            chars: self,
            pending: [0; 4],
            pending_start: 0,
            pending_end: 0,
        }
    }
}

impl<G: Rng> Random<G> {
    fn next_char(&mut self) -> char {
        self.alphabet[self.rng.gen_range(0..self.alphabet.len())]
    }
}

impl<G: Rng> Iterator for Random<G> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_char())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<G: Rng> FusedIterator for Random<G> {}

/// A [`Read`]er over the UTF-8 encoding of a [`Random`] stream. Created by
/// [`Random::into_reader`].
///
/// Characters are never split across reads unless `buf` is too short to hold a single character.
#[derive(Debug, Clone)]
pub struct RandomReader<G> {
    pub(crate) chars: Random<G>,
    // UTF-8 bytes of a character which didn't fit into the last read.
    pub(crate) pending: [u8; 4],
    pub(crate) pending_start: usize,
    pub(crate) pending_end: usize,
}

impl<G> RandomReader<G> {
    /// Returns the character stream, dropping any bytes of a partially read character.
    pub fn into_inner(self) -> Random<G> {
        self.chars
    }
}

impl<G: Rng> Read for RandomReader<G> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;

        if self.pending_start < self.pending_end {
            let pending = &self.pending[self.pending_start..self.pending_end];
            let count = pending.len().min(buf.len());
            buf[..count].copy_from_slice(&pending[..count]);
            self.pending_start += count;
            filled = count;
        }

        while filled < buf.len() {
            let c = self.chars.next_char();
            let len = c.len_utf8();

            if filled + len <= buf.len() {
                c.encode_utf8(&mut buf[filled..]);
                filled += len;
            } else if filled == 0 {
                // buf can't hold a whole character, so hand it out piece by piece.
                c.encode_utf8(&mut self.pending);
                let count = buf.len();
                buf.copy_from_slice(&self.pending[..count]);
                self.pending_start = count;
                self.pending_end = len;
                filled = count;
            } else {
                c.encode_utf8(&mut self.pending);
                self.pending_start = 0;
                self.pending_end = len;
                break;
            }
        }

        Ok(filled)
    }
}
