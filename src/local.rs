//! Access to the vendored copy of TinyTest.

use crate::error::{BoxError, Error as ErrorCommon};

use std::error as stderr;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Reads the whole content of the file at `path`.
pub fn read(path: &Path) -> Result<String, Error> {
    let content = fs::read_to_string(path).map_err(|err| Error::from_io(path, err))?;
    debug!(path = %path.display(), bytes = content.len(), "local file read");
    Ok(content)
}

/// Replaces the whole content of the file at `path` with `content`.
pub fn write(path: &Path, content: &str) -> Result<(), Error> {
    fs::write(path, content).map_err(|err| Error::from_io(path, err))?;
    debug!(path = %path.display(), bytes = content.len(), "local file written");
    Ok(())
}

/// The error returned when the vendored file cannot be accessed.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Common error kinds which are shared across all the modules of this
    /// crate.
    Common(ErrorCommon),
    /// The file doesn't exist.
    NotFound { path: PathBuf },
    /// The process doesn't have permissions for accessing the file.
    PermissionDenied { path: PathBuf },
}

impl Error {
    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_owned(),
            },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.to_owned(),
            },
            _ => Error::Common(ErrorCommon::internal(
                format!("error while accessing '{}'", path.display()),
                BoxError::from(err),
            )),
        }
    }
}

impl stderr::Error for Error {
    fn source(&self) -> Option<&(dyn stderr::Error + 'static)> {
        match self {
            Error::Common(c) => c.source(),
            Error::NotFound { .. } | Error::PermissionDenied { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::Common(c) => c.fmt(f),
            Error::NotFound { path } => write!(f, "File '{}' does not exist", path.display()),
            Error::PermissionDenied { path } => write!(
                f,
                "Permissions to access '{}' are missing",
                path.display()
            ),
        }
    }
}
