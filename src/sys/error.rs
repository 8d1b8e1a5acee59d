use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use super::Property;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("unknown system property: {key:?}")]
pub struct UnknownKeyError {
    pub key: String,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("system property {property} is unavailable")]
pub struct UnavailableError {
    pub property: Property,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("OS error with code: {_0}")]
pub struct OsError(#[error(not(source))] pub c_int);

/// The error produced when looking up a system property.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum PropertyError {
    UnknownKey(UnknownKeyError),
    Unavailable(UnavailableError),
    Os(OsError),
}
