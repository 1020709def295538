//! Secret values and the refresh-token file reader.

use std::fmt;
use std::io;
use std::path::Path;

use tracing::{error, info, warn};

/// A string that must never appear in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the raw secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Read a secret from a text file, trimming surrounding whitespace.
///
/// Never fails: a missing file is logged as a warning, any other read
/// error (permissions, not valid UTF-8, path is a directory) as an error,
/// and both yield `None`. A file holding only whitespace also yields `None`.
pub fn read_secret_file(path: &Path) -> Option<Secret> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let value = content.trim();
            if value.is_empty() {
                warn!(path = %path.display(), "Refresh token file is empty");
                return None;
            }
            info!(path = %path.display(), "Refresh token loaded");
            Some(Secret::new(value))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Refresh token file not found");
            None
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Error loading refresh token");
            None
        }
    }
}
