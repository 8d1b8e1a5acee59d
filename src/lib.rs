//! A small general-purpose utility library: lazy iterable views, stream helpers, a chronometer and
//! access to system properties.
//!
//! # Purpose
//! Each module here wraps a standard library primitive (iteration, byte streams, the monotonic
//! clock or the environment) in a slightly more convenient or more strongly typed API. The modules
//! are independent of each other, apart from [`collections::iterables::to_bag`] producing a
//! [`collections::bag::HashBag`].
//!
//! # Error Handling
//! Functions return [`Result`]s for failures a caller can reasonably handle, such as a negative
//! count passed to [`collections::iterables::limit`] or starting a
//! [`time::Chronometer`] that is already running. Errors are strongly typed: each failure is a
//! struct (often a ZST) which implements [`Error`](std::error::Error), and functions with several
//! failure modes return an enum of exactly those structs, using static rather than dynamic
//! dispatch.
//!
//! Failures that indicate a broken invariant, like an OS call rejecting a pointer that is known to
//! be valid, panic instead.
//!
//! # Dependencies
//! The [`time`] and [`sys`] modules rely on `libc` for their thin syscall wrappers and are only
//! available on Linux. [`io::random`] uses `rand`. Logging goes through the `tracing` facade;
//! this crate never installs a subscriber.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.
//!
//! # Features
//! Every module sits behind a feature of the same name, all of which are enabled by default.
//! `collections-all` enables both `bag` and `iterables`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "io")]
pub mod io;
#[cfg(feature = "sys")]
pub mod sys;
#[cfg(feature = "time")]
pub mod time;

pub(crate) mod util;
