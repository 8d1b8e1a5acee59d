//! Helpers for byte and character streams, built on [`std::io::Read`], [`std::io::Write`] and
//! [`std::fmt::Write`].
//!
//! Byte streams are the std traits themselves; character streams are byte streams containing
//! UTF-8, or [`fmt::Write`](std::fmt::Write) sinks such as `String`. No other encoding is
//! supported.

mod concat;
mod copy;
mod error;
mod limit;
mod null;
mod random;
mod tee;

pub use concat::*;
pub use copy::*;
pub use error::*;
pub use limit::*;
pub use null::*;
pub use random::*;
pub use tee::*;

/// The size of the stack buffers used when copying between streams.
pub(crate) const BUFFER_SIZE: usize = 4096;
