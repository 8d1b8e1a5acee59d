use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use super::Iterable;
use crate::collections::bag::HashBag;

/// Collects every element of `iterable` into a `Vec`, in traversal order.
pub fn to_list<I: Iterable>(iterable: I) -> Vec<I::Item> {
    iterable.into_cursor().collect()
}

/// Collects every distinct element of `iterable` into a `HashSet`.
pub fn to_set<I>(iterable: I) -> HashSet<I::Item>
where
    I: Iterable,
    I::Item: Hash + Eq,
{
    iterable.into_cursor().collect()
}

/// Collects every element of `iterable` into a [`HashBag`], counting duplicates.
pub fn to_bag<I>(iterable: I) -> HashBag<I::Item>
where
    I: Iterable,
    I::Item: Hash + Eq,
{
    iterable.into_cursor().collect()
}

/// Renders the elements of `iterable` in the format `[e1, e2, ..., en]`.
pub fn to_string<I>(iterable: I) -> String
where
    I: Iterable,
    I::Item: Display,
{
    let mut out = String::from("[");
    for (index, element) in iterable.into_cursor().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&element.to_string());
    }
    out.push(']');
    out
}
