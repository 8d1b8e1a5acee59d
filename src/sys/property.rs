use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::{PropertyError, UnknownKeyError};

/// A named property of the running system, process or user.
///
/// Every property has a dotted key, such as `"os.name"`, which can be parsed back into the
/// property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    OsName,
    OsArch,
    OsVersion,
    UserName,
    UserHome,
    UserDir,
    TmpDir,
    FileSeparator,
    PathSeparator,
    LineSeparator,
    LibraryPath,
}

use Property::*;

impl Property {
    pub const ALL: [Property; 11] = [
        OsName,
        OsArch,
        OsVersion,
        UserName,
        UserHome,
        UserDir,
        TmpDir,
        FileSeparator,
        PathSeparator,
        LineSeparator,
        LibraryPath,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            OsName =>        "os.name",
            OsArch =>        "os.arch",
            OsVersion =>     "os.version",
            UserName =>      "user.name",
            UserHome =>      "user.home",
            UserDir =>       "user.dir",
            TmpDir =>        "io.tmpdir",
            FileSeparator => "file.separator",
            PathSeparator => "path.separator",
            LineSeparator => "line.separator",
            LibraryPath =>   "library.path",
        }
    }

    /// Reads the current value of the property, rendering paths as (lossy) strings.
    ///
    /// # Errors
    /// See the accessor function for each property, such as [`user_name`](super::user_name).
    pub fn value(self) -> Result<String, PropertyError> {
        Ok(match self {
            OsName =>        super::os_name(),
            OsArch =>        super::os_arch(),
            OsVersion =>     super::os_version(),
            UserName =>      super::user_name()?,
            UserHome =>      super::user_home()?.to_string_lossy().into_owned(),
            UserDir =>       super::user_dir()?.to_string_lossy().into_owned(),
            TmpDir =>        super::tmp_dir().to_string_lossy().into_owned(),
            FileSeparator => super::FILE_SEPARATOR.to_owned(),
            PathSeparator => super::PATH_SEPARATOR.to_owned(),
            LineSeparator => super::LINE_SEPARATOR.to_owned(),
            LibraryPath =>   super::library_path()
                .iter()
                .map(|path| path.to_string_lossy())
                .collect::<Vec<_>>()
                .join(super::PATH_SEPARATOR),
        })
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Property {
    type Err = UnknownKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL.into_iter()
            .find(|property| property.key() == s)
            .ok_or_else(|| UnknownKeyError {
                key: s.to_owned(),
            })
    }
}

/// Looks up a system property by its key.
///
/// ```
/// assert_eq!(pitaya::sys::property("file.separator").unwrap(), "/");
/// ```
///
/// # Errors
/// Returns [`PropertyError::UnknownKey`] if `key` doesn't name a [`Property`], or any error
/// produced while reading it.
pub fn property(key: &str) -> Result<String, PropertyError> {
    key.parse::<Property>()?.value()
}
