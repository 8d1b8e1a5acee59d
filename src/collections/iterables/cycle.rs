use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::rc::Rc;

use super::Iterable;

/// An infinite view which repeats a fixed sequence of elements. Created by [`cycle`] or
/// [`cycle_of`].
///
/// Unlike the other views in this module, `Cycle` doesn't refer back to its source. The source is
/// copied into an immutable buffer when the view is created, so any later change to the source is
/// never observed by the view. All cursors (and clones of the view) share that buffer.
///
/// Cycling over nothing produces cursors which yield nothing, rather than cursors that never
/// return.
pub struct Cycle<T> {
    pub(crate) buffer: Rc<[T]>,
}

/// Creates an infinite view over a snapshot of the elements currently in `iterable`.
pub fn cycle<I: Iterable>(iterable: I) -> Cycle<I::Item> {
    Cycle {
        buffer: iterable.into_cursor().collect(),
    }
}

/// Creates an infinite view over the provided elements.
pub fn cycle_of<T, const N: usize>(elements: [T; N]) -> Cycle<T> {
    Cycle::from(Vec::from(elements))
}

impl<T> Cycle<T> {
    /// Returns the snapshot which this view repeats.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns a new cursor, starting from the first element of the snapshot.
    pub fn iter(&self) -> CycleIter<T> {
        CycleIter {
            buffer: Rc::clone(&self.buffer),
            index: 0,
        }
    }
}

impl<T> From<Vec<T>> for Cycle<T> {
    fn from(value: Vec<T>) -> Self {
        Cycle {
            buffer: Rc::from(value),
        }
    }
}

impl<T> Clone for Cycle<T> {
    fn clone(&self) -> Self {
        Cycle {
            buffer: Rc::clone(&self.buffer),
        }
    }
}

impl<T: Debug> Debug for Cycle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cycle").field(&self.buffer).finish()
    }
}

impl<T: Clone> IntoIterator for Cycle<T> {
    type Item = T;

    type IntoIter = CycleIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        CycleIter {
            buffer: self.buffer,
            index: 0,
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a Cycle<T> {
    type Item = T;

    type IntoIter = CycleIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The cursor type for [`Cycle`]. Produces clones of the buffered elements, wrapping back to the
/// first element after the last.
pub struct CycleIter<T> {
    pub(crate) buffer: Rc<[T]>,
    pub(crate) index: usize,
}

impl<T: Clone> Iterator for CycleIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.buffer.get(self.index)?.clone();
        self.index = (self.index + 1) % self.buffer.len();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.buffer.len() {
            0 => (0, Some(0)),
            _ => (usize::MAX, None),
        }
    }
}

// Either always returns None (empty buffer) or never does.
impl<T: Clone> FusedIterator for CycleIter<T> {}
