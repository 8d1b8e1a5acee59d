//! Collection types and utilities for working with iterables.
//!
//! # Purpose
//! [`iterables`] provides lazy views that compose any number of iterables without copying them,
//! while [`bag`] provides the counting collection produced by
//! [`to_bag`](iterables::to_bag).

#[cfg(feature = "bag")]
pub mod bag;
#[cfg(feature = "iterables")]
pub mod iterables;
