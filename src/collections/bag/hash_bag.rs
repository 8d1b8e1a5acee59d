use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};

use super::{Counts, IntoCounts, Iter};

/// An unordered collection which counts how many times each distinct value has been inserted,
/// also known as a multiset.
///
/// Two values are considered the same if they are equal according to [`Eq`] and produce the same
/// [`Hash`]. Only one copy of each distinct value is stored, alongside its count.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of distinct values in the HashBag.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `distinct_len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `count` | `O(1)`* |
/// | `iter` | `O(n)` to exhaust, plus one step per repeated element |
///
/// *Amortized, assuming a reasonable hash distribution.
#[derive(Clone)]
pub struct HashBag<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) counts: HashMap<T, usize, B>,
    pub(crate) len: usize,
}

impl<T: Hash + Eq> HashBag<T> {
    /// Creates a new HashBag with no elements.
    pub fn new() -> HashBag<T> {
        HashBag::with_hasher(RandomState::new())
    }

    /// Creates a new HashBag with capacity for at least `cap` distinct values.
    pub fn with_cap(cap: usize) -> HashBag<T> {
        HashBag::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashBag<T, B> {
    pub fn with_hasher(hasher: B) -> HashBag<T, B> {
        HashBag {
            counts: HashMap::with_hasher(hasher),
            len: 0,
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashBag<T, B> {
        HashBag {
            counts: HashMap::with_capacity_and_hasher(cap, hasher),
            len: 0,
        }
    }

    /// Returns the total number of elements in the HashBag, counting every occurrence.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of distinct values in the HashBag.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if the HashBag contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts one occurrence of `value`, returning the number of occurrences before insertion.
    pub fn insert(&mut self, value: T) -> usize {
        self.insert_many(value, 1)
    }

    /// Inserts `count` occurrences of `value`, returning the number of occurrences before
    /// insertion. Inserting zero occurrences leaves the HashBag unchanged.
    ///
    /// # Panics
    /// Panics if the total number of elements would overflow a `usize`.
    pub fn insert_many(&mut self, value: T, count: usize) -> usize {
        if count == 0 {
            return self.count(&value);
        }

        self.len = self.len.checked_add(count).unwrap_or_else(|| panic!("HashBag length overflow!"));
        let entry = self.counts.entry(value).or_insert(0);
        let previous = *entry;
        *entry += count;
        previous
    }

    /// Removes one occurrence of `value`, returning the number of occurrences before removal.
    pub fn remove<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_many(value, 1)
    }

    /// Removes up to `count` occurrences of `value`, returning the number of occurrences before
    /// removal. The value is forgotten entirely once its count reaches zero.
    pub fn remove_many<Q>(&mut self, value: &Q, count: usize) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(current) = self.counts.get_mut(value) else {
            return 0;
        };

        let previous = *current;
        let removed = previous.min(count);
        *current -= removed;
        self.len -= removed;

        if *current == 0 {
            self.counts.remove(value);
        }
        previous
    }

    /// Removes every occurrence of `value`, returning how many there were.
    pub fn remove_all<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.counts.remove(value).unwrap_or(0);
        self.len -= removed;
        removed
    }

    /// Returns the number of occurrences of `value` in the HashBag.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Returns true if the HashBag contains at least one occurrence of `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(value)
    }

    /// Removes every element from the HashBag.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }

    /// Returns an iterator over every element, producing each value once per occurrence. Equal
    /// values are produced consecutively, but otherwise in no particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.counts.iter(),
            current: None,
            len: self.len,
        }
    }

    /// Returns an iterator over each distinct value and its number of occurrences.
    pub fn counts(&self) -> Counts<'_, T> {
        Counts(self.counts.iter())
    }

    /// Consumes the HashBag, returning an iterator over each distinct value and its number of
    /// occurrences.
    pub fn into_counts(self) -> IntoCounts<T> {
        IntoCounts(self.counts.into_iter())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashBag<T, B> {
    fn default() -> Self {
        HashBag::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashBag<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashBag<T, B> {}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashBag<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashBag<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = HashBag::default();
        bag.extend(iter);
        bag
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashBag<T> {
    fn from(value: [T; N]) -> Self {
        HashBag::from_iter(value)
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashBag<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}
