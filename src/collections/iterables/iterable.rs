/// A source of elements that can be traversed any number of times, producing a fresh cursor (an
/// [`Iterator`]) on every request.
///
/// This is implemented for every type that is both [`IntoIterator`] and [`Clone`], so borrowed
/// collections (`&Vec<T>`, `&[T]`, `&HashSet<T>`), ranges and all of the views in this module are
/// iterables. Passing a borrowed collection is the usual way to build a view: the view holds the
/// borrow and never takes ownership of the collection. Passing an owned collection works too, but
/// it is cloned for every traversal by reference. Consuming the view (or handing it to a reducer)
/// moves the collection into the cursor instead.
///
/// Iterables in this module don't synchronize anything. Traversing the same iterable from several
/// cursors at once is exactly as safe as traversing its sources that way.
pub trait Iterable {
    /// The type of the elements produced by the iterable's cursors.
    type Item;

    /// The cursor type used for traversal.
    type Cursor: Iterator<Item = Self::Item>;

    /// Creates a new cursor positioned before the first element. Cursors are independent of each
    /// other; advancing one never affects another.
    fn cursor(&self) -> Self::Cursor;

    /// Turns the iterable itself into a cursor, without copying any elements it owns.
    fn into_cursor(self) -> Self::Cursor
    where
        Self: Sized;
}

impl<I: IntoIterator + Clone> Iterable for I {
    type Item = I::Item;

    type Cursor = I::IntoIter;

    fn cursor(&self) -> Self::Cursor {
        self.clone().into_iter()
    }

    fn into_cursor(self) -> Self::Cursor {
        self.into_iter()
    }
}
