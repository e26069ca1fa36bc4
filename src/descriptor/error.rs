//! Error types for descriptor reading

use std::path::PathBuf;
use thiserror::Error;

/// Failures reading a descriptor that exists on disk
///
/// A missing file is represented by `Ok(None)` from the reader, not by a
/// variant here.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("malformed workflow document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DescriptorError {
    /// Path of the file that failed
    pub fn path(&self) -> &std::path::Path {
        match self {
            DescriptorError::Malformed { path, .. } | DescriptorError::Unreadable { path, .. } => {
                path
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DescriptorError::Malformed {
            path: PathBuf::from("workflows/broken.json"),
            source,
        };

        let display = err.to_string();
        assert!(display.contains("malformed"));
        assert!(display.contains("workflows/broken.json"));
        assert_eq!(err.path(), std::path::Path::new("workflows/broken.json"));
    }

    #[test]
    fn test_unreadable_exposes_source() {
        let err = DescriptorError::Unreadable {
            path: PathBuf::from("locked.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("locked.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
