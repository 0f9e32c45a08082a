//! File accessibility probe and scoped read handles.
//!
//! The probe opens-then-drops a handle to answer "can I use this path"
//! without retaining anything. The read helper hands the caller an open
//! [`File`], whose descriptor closes on drop, so early returns on the
//! caller's side cannot leak it.

use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing::error;

use crate::error::StarterError;

/// How a path should be probed by [`check_accessible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Open for reading.
    Read,

    /// Open for writing. The file must already exist; the probe never
    /// creates or truncates anything.
    Write,
}

/// Probes whether `path` can be opened in `mode`.
///
/// Failures are logged once with the OS error and reported as `false`.
/// This never returns an error and never panics.
pub fn check_accessible(path: impl AsRef<Path>, mode: AccessMode) -> bool {
    // ---
    let path = path.as_ref();
    let result = match mode {
        AccessMode::Read => OpenOptions::new().read(true).open(path),
        AccessMode::Write => OpenOptions::new().write(true).open(path),
    };

    match result {
        Ok(_handle) => true,
        Err(err) => {
            error!("cannot access '{}': {}", path.display(), err);
            false
        }
    }
}

/// Opens `path` for reading and hands the open handle to the caller.
///
/// # Errors
///
/// Returns [`StarterError::Io`], after logging it, when the file cannot
/// be opened. The caller decides whether that is fatal; the shipped
/// binary maps it to exit code 1.
pub fn open_for_read(path: impl AsRef<Path>) -> Result<File, StarterError> {
    // ---
    let path = path.as_ref();
    File::open(path).map_err(|err| {
        error!("I/O error opening '{}': {}", path.display(), err);
        StarterError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    })
}
