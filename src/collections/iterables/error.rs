use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("count must not be negative")]
pub struct NegativeCountError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("count exceeds the maximum addressable length")]
pub struct CountOverflowError;

/// The error produced when a view is constructed with an argument it can't accept.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum InvalidArgumentError {
    NegativeCount(NegativeCountError),
    CountOverflow(CountOverflowError),
}

/// Converts a caller-provided count into a `usize`, distinguishing negative values from values
/// that are too large to be represented.
pub(crate) fn checked_count<N>(n: N) -> Result<usize, InvalidArgumentError>
where
    N: TryInto<usize> + PartialOrd + Default + Copy,
{
    match n.try_into() {
        Ok(count) => Ok(count),
        Err(_) if n < N::default() => Err(NegativeCountError)?,
        Err(_) => Err(CountOverflowError)?,
    }
}
