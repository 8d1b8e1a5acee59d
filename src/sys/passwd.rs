use std::ffi::{CStr, OsStr};
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;
use std::ptr;

use libc::{EBADF, EINTR, ENOENT, EPERM, ERANGE, ESRCH, c_char, passwd};

use super::OsError;

const FALLBACK_BUFFER_SIZE: usize = 1024;
const MAX_BUFFER_SIZE: usize = 1 << 20;

/// The parts of the current user's password database entry which are exposed as system
/// properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Passwd {
    pub name: String,
    pub home: PathBuf,
}

impl Passwd {
    /// Looks up the entry for the effective user of this process. Returns `Ok(None)` if the user
    /// has no entry.
    pub fn current() -> Result<Option<Passwd>, OsError> {
        // SAFETY: geteuid always succeeds.
        let uid = unsafe { libc::geteuid() };

        // SAFETY: sysconf has no memory safety requirements.
        let mut buf_len = match unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) } {
            size if size > 0 => size as usize,
            _ => FALLBACK_BUFFER_SIZE,
        };

        loop {
            let mut buf: Vec<c_char> = vec![0; buf_len];
            let mut entry: MaybeUninit<passwd> = MaybeUninit::uninit();
            let mut result: *mut passwd = ptr::null_mut();

            // SAFETY: All pointers are valid for the duration of the call and buf.len() is the
            // true length of buf.
            let code = unsafe {
                libc::getpwuid_r(uid, entry.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result)
            };

            match code {
                0 if result.is_null() => return Ok(None),
                0 => {
                    // SAFETY: On success, result points to entry, which has been initialized.
                    let entry = unsafe { entry.assume_init() };
                    // SAFETY: The strings in entry point into buf, which is still alive.
                    return Ok(unsafe { Passwd::from_raw(&entry) });
                },
                ERANGE if buf_len < MAX_BUFFER_SIZE => buf_len *= 2,
                EINTR => continue,
                // Various implementations use these to indicate that there is no entry.
                ENOENT | ESRCH | EBADF | EPERM => return Ok(None),
                e => Err(OsError(e))?,
            }
        }
    }

    /// # Safety
    /// The string pointers in `entry` must be either null or valid and nul-terminated.
    unsafe fn from_raw(entry: &passwd) -> Option<Passwd> {
        if entry.pw_name.is_null() || entry.pw_dir.is_null() {
            return None;
        }

        // SAFETY: Both pointers are non-null and the caller guarantees their validity.
        let (name, home) = unsafe { (CStr::from_ptr(entry.pw_name), CStr::from_ptr(entry.pw_dir)) };
        Some(Passwd {
            name: name.to_string_lossy().into_owned(),
            home: PathBuf::from(OsStr::from_bytes(home.to_bytes())),
        })
    }
}
