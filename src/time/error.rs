use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("chronometer is already running")]
pub struct AlreadyRunningError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("chronometer is not running")]
pub struct NotRunningError;
