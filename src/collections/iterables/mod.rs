//! Lazy views over [`Iterable`]s, and a few functions for collecting them.
//!
//! Each view ([`Concat`], [`Cycle`], [`Limit`], [`Skip`] and [`Empty`]) is a small descriptor
//! which produces a new cursor every time it is traversed. Nothing is read from a source when a
//! view is created, with the single exception of [`Cycle`], which takes a snapshot of its source
//! so that it can repeat it. Views are iterables themselves, so they compose:
//!
//! ```
//! use pitaya::collections::iterables::{concat, cycle_of, limit, skip, to_list};
//!
//! let a = vec!["a", "b"];
//! let b = vec!["c"];
//! assert_eq!(to_list(concat([&a, &b])), [&"a", &"b", &"c"]);
//!
//! let repeated = limit(cycle_of(["x", "y"]), 5).unwrap();
//! assert_eq!(to_list(&repeated), ["x", "y", "x", "y", "x"]);
//!
//! let rest = skip(&repeated, 3).unwrap();
//! assert_eq!(to_list(rest), ["y", "x"]);
//! ```
//!
//! Views never modify their sources. Sources which are passed by reference are borrowed for the
//! lifetime of the view.

mod concat;
mod cycle;
mod empty;
mod error;
mod iterable;
mod limit;
mod reduce;
mod skip;
mod tests;

pub use concat::*;
pub use cycle::*;
pub use empty::*;
pub use error::*;
pub use iterable::*;
pub use limit::*;
pub use reduce::*;
pub use skip::*;
