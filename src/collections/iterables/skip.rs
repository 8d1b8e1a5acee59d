use std::mem;

use super::{InvalidArgumentError, Iterable, checked_count};

/// A view which discards a fixed number of leading elements from its source. Created by
/// [`skip`].
#[derive(Debug, Clone)]
pub struct Skip<I> {
    pub(crate) iterable: I,
    pub(crate) n: usize,
}

/// Creates a view over all but the first `n` elements of `iterable`. If `iterable` has `n`
/// elements or fewer, the view is empty.
///
/// Elements are only discarded once a cursor is first advanced, not when the cursor is created.
///
/// # Errors
/// Returns an [`InvalidArgumentError`] if `n` is negative or can't be represented as a `usize`.
pub fn skip<I, N>(iterable: I, n: N) -> Result<Skip<I>, InvalidArgumentError>
where
    I: Iterable,
    N: TryInto<usize> + PartialOrd + Default + Copy,
{
    Ok(Skip {
        iterable,
        n: checked_count(n)?,
    })
}

impl<I: Iterable> Skip<I> {
    /// Returns the number of elements discarded by each traversal.
    pub const fn n(&self) -> usize {
        self.n
    }

    pub fn iter(&self) -> SkipIter<I::Cursor> {
        SkipIter {
            cursor: self.iterable.cursor(),
            pending: self.n,
        }
    }
}

impl<I: Iterable> IntoIterator for Skip<I> {
    type Item = I::Item;

    type IntoIter = SkipIter<I::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        SkipIter {
            cursor: self.iterable.into_cursor(),
            pending: self.n,
        }
    }
}

impl<'a, I: Iterable> IntoIterator for &'a Skip<I> {
    type Item = I::Item;

    type IntoIter = SkipIter<I::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The cursor type for [`Skip`].
#[derive(Debug, Clone)]
pub struct SkipIter<C> {
    pub(crate) cursor: C,
    pub(crate) pending: usize,
}

impl<C: Iterator> Iterator for SkipIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::take(&mut self.pending) {
            0 => self.cursor.next(),
            // nth(n) discards n elements and returns the one after them.
            n => self.cursor.nth(n),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|upper| upper.saturating_sub(self.pending)),
        )
    }
}
