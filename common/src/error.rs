//! Typed failures shared across starter binaries.

use std::path::PathBuf;

use thiserror::Error;

/// Errors a starter binary surfaces to its caller.
///
/// Usage errors (malformed flags, stray positionals) are not represented
/// here: clap reports those itself with the usage text and exit code 2.
#[derive(Debug, Error)]
pub enum StarterError {
    /// A required option was absent (strict validation).
    #[error("missing required argument '{name}'")]
    MissingArgument {
        /// The offending argument name.
        name: &'static str,
    },

    /// A file could not be opened or probed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl StarterError {
    // ---
    /// The CLI exit code for this error.
    ///
    /// Missing arguments are argument-class failures and share clap's
    /// usage exit code; I/O failures terminate with 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument { .. } => 2,
            Self::Io { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn missing_argument_names_the_argument() {
        // ---
        let err = StarterError::MissingArgument { name: "arg1" };
        assert_eq!(err.to_string(), "missing required argument 'arg1'");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn io_error_carries_path_and_source() {
        // ---
        let err = StarterError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert_eq!(err.exit_code(), 1);
    }
}
