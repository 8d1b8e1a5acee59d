use std::iter::{Fuse, FusedIterator};

use super::Iterable;

/// A view over several iterables, traversed one after another. Created by [`concat`].
///
/// Every element of the first iterable is produced before any element of the second, and so on.
/// A source is only asked for a cursor once all of the sources before it have been exhausted.
#[derive(Debug, Clone)]
pub struct Concat<I> {
    pub(crate) iterables: I,
}

/// Concatenates the provided iterables into a single view.
///
/// The outer iterable can be anything which produces iterables, such as a `Vec` of borrowed
/// slices or a fixed-size array when the number of sources is known: `concat([&a, &b, &c])`.
/// Concatenating zero iterables produces an empty view.
pub fn concat<I>(iterables: I) -> Concat<I>
where
    I: Iterable,
    I::Item: Iterable,
{
    Concat {
        iterables,
    }
}

impl<I> Concat<I>
where
    I: Iterable,
    I::Item: Iterable,
{
    /// Returns a new cursor over the concatenated elements.
    pub fn iter(&self) -> ConcatIter<I::Cursor> {
        ConcatIter {
            outer: self.iterables.cursor().fuse(),
            current: None,
        }
    }
}

impl<I> IntoIterator for Concat<I>
where
    I: Iterable,
    I::Item: Iterable,
{
    type Item = <I::Item as Iterable>::Item;

    type IntoIter = ConcatIter<I::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        ConcatIter {
            outer: self.iterables.into_cursor().fuse(),
            current: None,
        }
    }
}

impl<'a, I> IntoIterator for &'a Concat<I>
where
    I: Iterable,
    I::Item: Iterable,
{
    type Item = <I::Item as Iterable>::Item;

    type IntoIter = ConcatIter<I::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The cursor type for [`Concat`].
pub struct ConcatIter<O>
where
    O: Iterator,
    O::Item: Iterable,
{
    // Fused, so that an exhausted cursor stays exhausted.
    pub(crate) outer: Fuse<O>,
    pub(crate) current: Option<<O::Item as Iterable>::Cursor>,
}

impl<O> Iterator for ConcatIter<O>
where
    O: Iterator,
    O::Item: Iterable,
{
    type Item = <O::Item as Iterable>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cursor) = &mut self.current {
                match cursor.next() {
                    Some(value) => return Some(value),
                    None => self.current = None,
                }
            }

            // Only poll the next source once the current one is exhausted.
            self.current = Some(self.outer.next()?.into_cursor());
        }
    }
}

impl<O> FusedIterator for ConcatIter<O>
where
    O: Iterator,
    O::Item: Iterable,
{
}
