//! Error handling for the MCP server generator.
//!
//! Only conditions that end a run live here. Local problems inside the
//! document (an unresolvable pointer, a parameter without a name) are not
//! errors: the builders log them and leave the element out of the output.
//!
//! # Examples
//!
//! ```
//! use openapi_mcp_generator::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::not_supported("TypeScript specifications"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for generator operations
#[derive(Debug, Error)]
pub enum Error {
    /// The specification file does not exist
    #[error("OpenAPI specification file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The specification file exists but could not be read as UTF-8 text
    #[error("Error reading OpenAPI specification file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The specification text is not a document with a mapping at the top level
    #[error("Error parsing OpenAPI specification {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A loader variant that exists but is not implemented
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Template(#[from] tera::Error),

    /// Writing generated files failed
    #[error("Output error: {0}")]
    Output(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new parse error for `path`
    pub fn parse<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new "not supported" error
    pub fn not_supported<S: Into<String>>(msg: S) -> Self {
        Self::NotSupported(msg.into())
    }

    /// Create a new output error
    pub fn output<S: Into<String>>(msg: S) -> Self {
        Self::Output(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_not_found_display() {
        let error = Error::NotFound {
            path: PathBuf::from("missing.yaml"),
        };
        assert_eq!(
            error.to_string(),
            "OpenAPI specification file not found: missing.yaml"
        );
    }

    #[test]
    fn test_error_parse_creation() {
        let error = Error::parse("spec.yaml", "expected a mapping at the top level");
        assert!(matches!(error, Error::Parse { .. }));
        assert_eq!(
            error.to_string(),
            "Error parsing OpenAPI specification spec.yaml: expected a mapping at the top level"
        );
    }

    #[test]
    fn test_error_not_supported_creation() {
        let error = Error::not_supported("TypeScript specifications");
        assert!(matches!(error, Error::NotSupported(_)));
        assert_eq!(error.to_string(), "Not supported: TypeScript specifications");
    }

    #[test]
    fn test_error_read_keeps_source() {
        let error = Error::Read {
            path: PathBuf::from("spec.yaml"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert!(error.to_string().contains("spec.yaml"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("I/O error"));
    }
}
