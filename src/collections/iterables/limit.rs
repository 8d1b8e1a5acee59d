use std::iter::FusedIterator;

use super::{InvalidArgumentError, Iterable, checked_count};

/// A view which produces at most a fixed number of elements from its source. Created by
/// [`limit`].
#[derive(Debug, Clone)]
pub struct Limit<I> {
    pub(crate) iterable: I,
    pub(crate) limit: usize,
}

/// Creates a view over the first `limit` elements of `iterable`, or all of them if there are
/// fewer.
///
/// # Errors
/// Returns an [`InvalidArgumentError`] if `limit` is negative or can't be represented as a
/// `usize`.
pub fn limit<I, N>(iterable: I, limit: N) -> Result<Limit<I>, InvalidArgumentError>
where
    I: Iterable,
    N: TryInto<usize> + PartialOrd + Default + Copy,
{
    Ok(Limit {
        iterable,
        limit: checked_count(limit)?,
    })
}

impl<I: Iterable> Limit<I> {
    /// Returns the maximum number of elements produced by each traversal.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    pub fn iter(&self) -> LimitIter<I::Cursor> {
        LimitIter {
            cursor: self.iterable.cursor(),
            remaining: self.limit,
        }
    }
}

impl<I: Iterable> IntoIterator for Limit<I> {
    type Item = I::Item;

    type IntoIter = LimitIter<I::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        LimitIter {
            cursor: self.iterable.into_cursor(),
            remaining: self.limit,
        }
    }
}

impl<'a, I: Iterable> IntoIterator for &'a Limit<I> {
    type Item = I::Item;

    type IntoIter = LimitIter<I::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The cursor type for [`Limit`].
#[derive(Debug, Clone)]
pub struct LimitIter<C> {
    pub(crate) cursor: C,
    pub(crate) remaining: usize,
}

impl<C: Iterator> Iterator for LimitIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match self.cursor.next() {
            Some(value) => {
                self.remaining -= 1;
                Some(value)
            },
            None => {
                // Never poll an exhausted source again.
                self.remaining = 0;
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }

        let (lower, upper) = self.cursor.size_hint();
        (
            lower.min(self.remaining),
            Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))),
        )
    }
}

impl<C: Iterator> FusedIterator for LimitIter<C> {}
