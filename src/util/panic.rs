use std::error::Error;

#[cfg(any(feature = "time", feature = "sys"))]
use derive_more::{Display, Error};
#[cfg(any(feature = "time", feature = "sys"))]
use libc::c_int;

/// An error which indicates a broken invariant rather than a recoverable failure, usually an OS
/// call being used in a way that should be impossible.
#[allow(dead_code)]
pub(crate) trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[cfg(any(feature = "time", feature = "sys"))]
#[derive(Debug, Display, Error)]
#[display("pointer exceeded stack space")]
pub(crate) struct BadStackAddrPanic;
#[cfg(any(feature = "time", feature = "sys"))]
impl Panic for BadStackAddrPanic {}

#[cfg(feature = "time")]
#[derive(Debug, Display, Error)]
#[display("clock is not supported by this system")]
pub(crate) struct UnsupportedClockPanic;
#[cfg(feature = "time")]
impl Panic for UnsupportedClockPanic {}

#[cfg(any(feature = "time", feature = "sys"))]
#[derive(Debug, Display, Error)]
#[display("unexpected OS error with code: {_0}")]
pub(crate) struct UnexpectedErrorPanic(#[error(not(source))] pub c_int);
#[cfg(any(feature = "time", feature = "sys"))]
impl Panic for UnexpectedErrorPanic {}

#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
