use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::marker::PhantomData;

/// An iterable with no elements. Created by [`empty`].
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Returns an iterable which never produces any elements of type `T`.
pub const fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> Debug for Empty<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Empty")
    }
}

impl<T> IntoIterator for Empty<T> {
    type Item = T;

    type IntoIter = iter::Empty<T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}
