//! Measurement of elapsed time, based on the system's monotonic clock.
//!
//! [`Instant`] is a thin wrapper around `clock_gettime(CLOCK_MONOTONIC)`, and [`Chronometer`]
//! builds a start / stop / reset stopwatch on top of it.
#![cfg(target_os = "linux")]

pub mod clock;

mod chronometer;
mod error;

pub use chronometer::*;
#[doc(inline)]
pub use clock::Instant;
pub use error::*;
