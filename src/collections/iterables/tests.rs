#![cfg(test)]

use std::cell::Cell;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use super::*;

#[test]
fn test_concat() {
    let first = vec!["a", "b"];
    let second = vec!["c"];
    assert_eq!(
        to_list(concat([&first, &second])),
        [&"a", &"b", &"c"],
        "Elements should be produced in source order."
    );

    let none: [&Vec<i32>; 0] = [];
    assert_eq!(
        concat(none).iter().next(),
        None,
        "Concatenating nothing should produce an empty traversal."
    );

    let nested = vec![vec![1, 2], vec![], vec![3], vec![]];
    assert_eq!(
        to_list(concat(&nested)),
        [&1, &2, &3],
        "Empty sources should be passed over."
    );
}

#[test]
fn test_concat_is_lazy() {
    let polled = Cell::new(0);
    let sources = [0..2, 2..4, 4..6];
    let counted = sources.iter().map(|range| {
        polled.set(polled.get() + 1);
        range.clone()
    });

    let view = concat(counted);
    let mut iter = view.iter();
    assert_eq!(polled.get(), 0, "Creating a cursor shouldn't touch any source.");

    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(polled.get(), 1, "Only the first source should have been polled.");

    assert_eq!(iter.next(), Some(2));
    assert_eq!(polled.get(), 2, "The second source is polled once the first is exhausted.");
}

/// Produces nothing on its first poll and a source on every poll after that.
#[derive(Debug, Clone)]
struct Resuming {
    polls: usize,
}

impl Iterator for Resuming {
    type Item = Vec<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        self.polls += 1;
        (self.polls > 1).then(|| vec![1, 2])
    }
}

#[test]
fn test_concat_stays_exhausted() {
    let view = concat(Resuming {
        polls: 0,
    });

    let mut iter = view.iter();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None, "An exhausted cursor shouldn't resume.");
    assert_eq!(iter.next(), None);

    let mut iter = view.into_iter();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None, "An exhausted cursor shouldn't resume.");
}

/// An element which counts how many times it has been cloned.
#[derive(Debug)]
struct Tracked<'a> {
    id: usize,
    clones: &'a Cell<usize>,
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Tracked {
            id: self.id,
            clones: self.clones,
        }
    }
}

impl PartialEq for Tracked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tracked<'_> {}

impl Hash for Tracked<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Tracked<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

fn tracked(clones: &Cell<usize>, len: usize) -> Vec<Tracked<'_>> {
    (0..len).map(|id| Tracked {
        id,
        clones,
    }).collect()
}

#[test]
fn test_consuming_owned_sources() {
    let clones = Cell::new(0);

    assert_eq!(limit(tracked(&clones, 1000), 2).unwrap().into_iter().count(), 2);
    assert_eq!(to_list(limit(tracked(&clones, 1000), 2).unwrap()).len(), 2);
    assert_eq!(to_list(skip(tracked(&clones, 1000), 998).unwrap()).len(), 2);
    assert_eq!(to_list(concat(vec![tracked(&clones, 3), tracked(&clones, 4)])).len(), 7);
    assert_eq!(to_set(limit(tracked(&clones, 10), 3).unwrap()).len(), 3);
    assert_eq!(to_bag(skip(tracked(&clones, 10), 5).unwrap()).len(), 5);
    assert_eq!(to_string(limit(tracked(&clones, 10), 2).unwrap()), "[#0, #1]");
    assert_eq!(clones.get(), 0, "Consuming a view shouldn't copy the source it owns.");

    let view = limit(tracked(&clones, 10), 2).unwrap();
    assert_eq!(view.iter().count(), 2);
    assert_eq!(clones.get(), 10, "Traversing by reference copies an owned source.");
}

#[test]
fn test_cycle() {
    let source = vec!["x", "y"];
    let view = limit(cycle(&source), 5).unwrap();
    assert_eq!(to_list(&view), [&"x", &"y", &"x", &"y", &"x"]);

    let empty = cycle_of::<i32, 0>([]);
    assert!(
        to_list(limit(&empty, 5).unwrap()).is_empty(),
        "Cycling over nothing should produce nothing rather than stall."
    );
    assert_eq!(empty.iter().size_hint(), (0, Some(0)));
}

#[test]
fn test_cycle_snapshot() {
    let mut source = vec![1, 2, 3];
    let view = cycle(source.iter().copied());
    source.push(4);
    source[0] = 100;

    assert_eq!(view.as_slice(), [1, 2, 3], "The snapshot shouldn't follow its source.");
    assert_eq!(to_list(limit(&view, 7).unwrap()), [1, 2, 3, 1, 2, 3, 1]);
}

#[test]
fn test_limit() {
    let source = [1, 2, 3, 4];
    assert_eq!(to_list(limit(source, 2).unwrap()), [1, 2]);
    assert_eq!(to_list(limit(source, 10).unwrap()), [1, 2, 3, 4]);
    assert!(to_list(limit(source, 0).unwrap()).is_empty());

    assert_eq!(
        limit(source, -1).unwrap_err(),
        InvalidArgumentError::NegativeCount(NegativeCountError),
        "A negative limit should be rejected."
    );
    assert!(limit(source, u128::MAX).unwrap_err().is_count_overflow());
}

#[test]
fn test_limit_stops_polling() {
    let polled = Cell::new(0);
    let view = limit((0..).inspect(|_| polled.set(polled.get() + 1)), 3).unwrap();
    let mut iter = view.iter();
    assert_eq!(polled.get(), 0, "Creating a cursor shouldn't touch the source.");

    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(iter.next(), None);
    assert_eq!(polled.get(), 3, "The source shouldn't be polled past the limit.");
}

#[test]
fn test_skip() {
    let source = ["a", "b", "c", "d"];
    assert_eq!(to_list(skip(source, 2).unwrap()), ["c", "d"]);
    assert_eq!(to_list(skip(source, 0).unwrap()), ["a", "b", "c", "d"]);
    assert_eq!(to_list(skip(source, 4).unwrap()), Vec::<&str>::new());
    assert_eq!(to_list(skip(source, 40).unwrap()), Vec::<&str>::new());

    assert!(
        skip(source, -3_i64).unwrap_err().is_negative_count(),
        "A negative count should be rejected."
    );
}

#[test]
fn test_independent_traversals() {
    let first = vec![1, 2];
    let second = vec![3, 4, 5];
    let view = skip(concat([&first, &second]), 1).unwrap();

    let mut a = view.iter();
    let mut b = view.iter();
    assert_eq!(a.next(), Some(&2));
    assert_eq!(a.next(), Some(&3));
    assert_eq!(b.next(), Some(&2), "Cursors shouldn't share any state.");
    assert_eq!(a.collect::<Vec<_>>(), [&4, &5]);
    assert_eq!(b.collect::<Vec<_>>(), [&3, &4, &5]);

    assert_eq!(to_list(&view), to_list(&view), "Views should be repeatable.");
}

#[test]
fn test_empty() {
    assert_eq!(empty::<u8>().cursor().next(), None);
    assert_eq!(to_string(empty::<u8>()), "[]");
    assert!(to_list(concat([empty::<u8>(), empty()])).is_empty());
}

#[test]
fn test_reducers() {
    let source = ["a", "b", "a", "c", "a"];

    assert_eq!(to_list(source), source);
    assert_eq!(to_set(source), HashSet::from(["a", "b", "c"]));

    let bag = to_bag(source);
    assert_eq!(bag.count(&"a"), 3, "Bags should count duplicates.");
    assert_eq!(bag.count(&"b"), 1);
    assert_eq!(bag.count(&"z"), 0);
    assert_eq!(bag.len(), 5);

    assert_eq!(to_string([1, 2, 3]), "[1, 2, 3]");
    assert_eq!(to_string(["solo"]), "[solo]");
}

proptest! {
    #[test]
    fn prop_concat_preserves_order(a: Vec<u8>, b: Vec<u8>, c: Vec<u8>) {
        let joined = to_list(concat([&a, &b, &c]));
        prop_assert_eq!(joined.len(), a.len() + b.len() + c.len());

        let expected: Vec<&u8> = a.iter().chain(&b).chain(&c).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn prop_limited_cycle(source in prop::collection::vec(any::<u8>(), 1..16), k in 0_usize..64) {
        let view = limit(cycle(&source), k).unwrap();
        let produced = to_list(&view);

        prop_assert_eq!(produced.len(), k);
        for (i, value) in produced.into_iter().enumerate() {
            prop_assert_eq!(value, &source[i % source.len()]);
        }
    }

    #[test]
    fn prop_skip_yields_suffix(source: Vec<u8>, n in 0_usize..32) {
        let rest = to_list(skip(&source, n).unwrap());
        let expected: Vec<&u8> = source.iter().skip(n).collect();
        prop_assert_eq!(rest, expected);
    }

    #[test]
    fn prop_limit_zero_is_empty(source: Vec<u8>) {
        prop_assert!(to_list(limit(&source, 0).unwrap()).is_empty());
    }

    #[test]
    fn prop_negative_counts_rejected(source: Vec<u8>, n in i64::MIN..0) {
        prop_assert!(limit(&source, n).is_err());
        prop_assert!(skip(&source, n).is_err());
    }
}
