use std::io;

use libc::c_int;

/// Returns the calling thread's current `errno`.
pub(crate) fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}
