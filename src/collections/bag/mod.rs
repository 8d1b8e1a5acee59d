//! A module containing [`HashBag`] and associated types.
//!
//! The only other included types are for iteration: [`Iter`] produces every occurrence of every
//! element, while [`Counts`] and [`IntoCounts`] produce each distinct element once alongside its
//! count.

mod hash_bag;
mod iter;
mod tests;

pub use hash_bag::*;
pub use iter::*;
