//! Error types for the business card

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for business card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Writing to the system clipboard failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A static asset could not be read
    #[error("Asset error ({path}): {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile JSON could not be parsed
    #[error("Profile parse error: {0}")]
    ProfileParse(#[from] serde_json::Error),

    /// Profile parsed but violates a content rule
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<arboard::Error> for CardError {
    fn from(err: arboard::Error) -> Self {
        CardError::Clipboard(err.to_string())
    }
}

/// Result type alias for business card operations
pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard error: no display");

        let err = CardError::InvalidProfile("empty name".to_string());
        assert_eq!(err.to_string(), "Invalid profile: empty name");
    }

    #[test]
    fn test_asset_error_includes_path() {
        let err = CardError::Asset {
            path: PathBuf::from("img/logo.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("img/logo.png"));
        assert!(msg.contains("missing"));
    }
}
