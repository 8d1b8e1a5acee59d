use std::env;
use std::path::PathBuf;

use super::passwd::Passwd;
use super::uname::Uname;
use super::{Property, PropertyError, UnavailableError};

pub const FILE_SEPARATOR: &str = "/";
pub const PATH_SEPARATOR: &str = ":";
pub const LINE_SEPARATOR: &str = "\n";

const DEFAULT_TMP_DIR: &str = "/tmp";

/// Returns the name of the operating system, such as `"Linux"`.
pub fn os_name() -> String {
    Uname::get().sysname
}

/// Returns the hardware architecture, such as `"x86_64"`.
pub fn os_arch() -> String {
    Uname::get().machine
}

/// Returns the release of the operating system (the kernel version on Linux).
pub fn os_version() -> String {
    Uname::get().release
}

/// Returns the login name of the process' effective user.
///
/// The password database is consulted first, then the `USER` environment variable.
///
/// # Errors
/// Returns [`PropertyError::Os`] if the password database can't be read, or
/// [`PropertyError::Unavailable`] if neither source knows the user.
pub fn user_name() -> Result<String, PropertyError> {
    match Passwd::current()? {
        Some(entry) => Ok(entry.name),
        None => from_env("USER", Property::UserName),
    }
}

/// Returns the home directory of the process' effective user.
///
/// The password database is consulted first, then the `HOME` environment variable.
///
/// # Errors
/// See [`user_name`].
pub fn user_home() -> Result<PathBuf, PropertyError> {
    match Passwd::current()? {
        Some(entry) => Ok(entry.home),
        None => from_env("HOME", Property::UserHome).map(PathBuf::from),
    }
}

/// Returns the working directory of the process.
///
/// # Errors
/// Returns [`PropertyError::Unavailable`] if the working directory has been removed or can't be
/// accessed.
pub fn user_dir() -> Result<PathBuf, PropertyError> {
    env::current_dir().map_err(|error| {
        tracing::debug!(%error, "unable to read the working directory");
        UnavailableError {
            property: Property::UserDir,
        }.into()
    })
}

/// Returns the directory for temporary files: `TMPDIR` if it is set, otherwise `/tmp`.
pub fn tmp_dir() -> PathBuf {
    env::var_os("TMPDIR")
        .filter(|dir| !dir.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_TMP_DIR), PathBuf::from)
}

/// Returns the extra directories searched for shared libraries, from `LD_LIBRARY_PATH`. Empty
/// entries are left out.
pub fn library_path() -> Vec<PathBuf> {
    match env::var_os("LD_LIBRARY_PATH") {
        Some(paths) => env::split_paths(&paths)
            .filter(|path| !path.as_os_str().is_empty())
            .collect(),
        None => Vec::new(),
    }
}

fn from_env(var: &str, property: Property) -> Result<String, PropertyError> {
    tracing::debug!(var, %property, "no password database entry, falling back to the environment");

    match env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(UnavailableError { property })?,
    }
}
