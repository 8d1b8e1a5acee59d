//! Access to properties of the running system, process and user.
//!
//! Each property has an accessor function returning a strongly typed value (for example,
//! [`user_home`] returns a `PathBuf`), and can also be looked up by its dotted key through
//! [`property`], which renders every value as a string.
//!
//! Operating system properties come from `uname(2)` and user properties from the password
//! database, with the usual environment variables as a fallback.
#![cfg(target_os = "linux")]

mod accessors;
mod error;
mod passwd;
mod property;
mod tests;
mod uname;

pub use accessors::*;
pub use error::*;
pub use property::*;
