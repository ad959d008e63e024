//! Error types for xmlbuild

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Comment content contains the forbidden `--` sequence
    CommentDoubleHyphen,
    /// CDATA content contains the forbidden `]]>` sequence
    CdataEndMarker,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommentDoubleHyphen => write!(f, "comment must not contain '--'"),
            Self::CdataEndMarker => write!(f, "CDATA content must not contain ']]>'"),
        }
    }
}

/// Main error type for xmlbuild
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed markup: {}", self.message)
    }
}

/// Result type alias for xmlbuild
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::CommentDoubleHyphen);
        assert_eq!(err.kind(), ErrorKind::CommentDoubleHyphen);
        assert_eq!(err.message(), "comment must not contain '--'");
    }

    #[test]
    fn test_error_display() {
        let err = Error::new(ErrorKind::CdataEndMarker);
        let display = err.to_string();
        assert!(display.contains("malformed markup"));
        assert!(display.contains("]]>"));
    }

    #[test]
    fn test_error_with_message() {
        let err = Error::with_message(ErrorKind::CommentDoubleHyphen, "in comment \"a--b\"");
        assert_eq!(err.message(), "in comment \"a--b\"");
    }
}
