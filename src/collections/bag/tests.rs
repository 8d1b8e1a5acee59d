#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_insert_and_count() {
    let mut bag = HashBag::new();
    assert!(bag.is_empty());

    assert_eq!(bag.insert("penny"), 0, "First insertion should report no previous occurrences.");
    assert_eq!(bag.insert("penny"), 1);
    assert_eq!(bag.insert_many("lane", 3), 0);
    assert_eq!(bag.insert_many("lane", 0), 3, "Inserting nothing should only report the count.");

    assert_eq!(bag.count("penny"), 2);
    assert_eq!(bag.count("lane"), 3);
    assert_eq!(bag.count("abbey"), 0);
    assert!(bag.contains("lane"));
    assert!(!bag.contains("abbey"));

    assert_eq!(bag.len(), 5, "Length should count every occurrence.");
    assert_eq!(bag.distinct_len(), 2);
}

#[test]
fn test_remove() {
    let mut bag = HashBag::from(['a', 'b', 'b', 'c', 'c', 'c']);

    assert_eq!(bag.remove(&'b'), 2);
    assert_eq!(bag.count(&'b'), 1);
    assert_eq!(bag.remove(&'b'), 1);
    assert!(!bag.contains(&'b'), "Values should be forgotten once their count reaches zero.");
    assert_eq!(bag.remove(&'b'), 0);

    assert_eq!(bag.remove_many(&'c', 10), 3, "Removing too many should remove all.");
    assert_eq!(bag.count(&'c'), 0);

    bag.insert('z');
    assert_eq!(bag.remove_all(&'z'), 1);
    assert_eq!(bag.len(), 1);

    bag.clear();
    assert!(bag.is_empty());
    assert_eq!(bag.distinct_len(), 0);
}

#[test]
fn test_len_overflow() {
    assert_panics!({
        let mut bag = HashBag::new();
        bag.insert_many(1, usize::MAX);
        bag.insert(2);
    });
}

#[test]
fn test_iterators() {
    let bag = HashBag::from([1, 2, 2, 3, 3, 3]);

    let mut all: Vec<i32> = bag.iter().copied().collect();
    all.sort();
    assert_eq!(all, [1, 2, 2, 3, 3, 3], "Each occurrence should be produced.");
    assert_eq!(bag.iter().len(), 6);

    let mut counts: Vec<(i32, usize)> = bag.counts().map(|(v, c)| (*v, c)).collect();
    counts.sort();
    assert_eq!(counts, [(1, 1), (2, 2), (3, 3)]);

    let mut owned: Vec<(i32, usize)> = bag.clone().into_counts().collect();
    owned.sort();
    assert_eq!(owned, counts);

    let mut borrowed = 0;
    for _ in &bag {
        borrowed += 1;
    }
    assert_eq!(borrowed, bag.len());
}

#[test]
fn test_equality() {
    let a = HashBag::from(["x", "y", "x"]);
    let b: HashBag<_> = ["y", "x", "x"].into_iter().collect();
    let c = HashBag::from(["x", "y"]);

    assert_eq!(a, b, "Insertion order shouldn't matter.");
    assert_ne!(a, c, "Multiplicity should matter.");
    assert_eq!(HashBag::<u8>::default(), HashBag::new());
}
