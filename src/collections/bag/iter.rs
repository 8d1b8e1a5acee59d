use std::collections::hash_map;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::HashBag;

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashBag<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A type for borrowed iteration over a [`HashBag`]. Produces one `&T` per occurrence.
///
/// See [`HashBag::iter`].
pub struct Iter<'a, T> {
    pub(crate) inner: hash_map::Iter<'a, T, usize>,
    // The value currently being repeated and the number of repetitions left.
    pub(crate) current: Option<(&'a T, usize)>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((value, remaining)) = &mut self.current {
                if *remaining > 0 {
                    *remaining -= 1;
                    self.len -= 1;
                    return Some(*value);
                }
            }

            let (value, count) = self.inner.next()?;
            self.current = Some((value, *count));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            current: self.current,
            len: self.len,
        }
    }
}

/// A type for borrowed iteration over the distinct values of a [`HashBag`] and their counts.
///
/// See [`HashBag::counts`].
pub struct Counts<'a, T>(pub(crate) hash_map::Iter<'a, T, usize>);

impl<'a, T> Iterator for Counts<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(value, count)| (value, *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> FusedIterator for Counts<'a, T> {}

/// A type for owned iteration over the distinct values of a [`HashBag`] and their counts.
///
/// See [`HashBag::into_counts`].
pub struct IntoCounts<T>(pub(crate) hash_map::IntoIter<T, usize>);

impl<T> Iterator for IntoCounts<T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> FusedIterator for IntoCounts<T> {}
