use std::mem::MaybeUninit;

use libc::{EFAULT, c_char, utsname};

use crate::util::panic::{BadStackAddrPanic, Panic, UnexpectedErrorPanic};
use crate::util::syscall::err_no;

/// The parts of `uname(2)` which are exposed as system properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Uname {
    pub sysname: String,
    pub release: String,
    pub machine: String,
}

impl Uname {
    pub fn get() -> Uname {
        let mut raw: MaybeUninit<utsname> = MaybeUninit::uninit();
        // SAFETY: raw is a valid pointer to a utsname, which uname initializes on success.
        if unsafe { libc::uname(raw.as_mut_ptr()) } == -1 {
            match err_no() {
                EFAULT => BadStackAddrPanic.panic(),
                e =>      UnexpectedErrorPanic(e).panic(),
            }
        }
        // SAFETY: uname either initializes raw or returns an error and diverges.
        let raw = unsafe { raw.assume_init() };

        Uname {
            sysname: field(&raw.sysname),
            release: field(&raw.release),
            machine: field(&raw.machine),
        }
    }
}

/// Converts a nul-terminated utsname field into a String, replacing any invalid UTF-8.
fn field(raw: &[c_char]) -> String {
    #[allow(clippy::unnecessary_cast)]
    let bytes: Vec<u8> = raw.iter()
        .take_while(|c| **c != 0)
        .map(|c| *c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}
