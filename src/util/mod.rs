pub(crate) mod panic;
#[cfg(any(feature = "time", feature = "sys"))]
pub(crate) mod syscall;
