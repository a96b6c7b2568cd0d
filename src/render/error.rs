//! Rendering errors
//!
//! This module defines the error types for template rendering and output
//! delivery. All errors propagate to the CLI layer; the core never retries
//! and never terminates the process itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rendering and output error type
#[derive(Error, Debug)]
pub enum RenderError {
    /// Malformed template; indicates a build-time defect in a bundled asset
    #[error("Failed to parse template: {0}")]
    TemplateParse(String),

    /// Template referenced a field the value tree does not have
    #[error("Failed to render template: {0}")]
    TemplateExecution(String),

    /// Parent directory of the requested output file does not exist
    #[error("Provided path does not exist: {}", .0.display())]
    DestinationDirectoryMissing(PathBuf),

    /// Filesystem failure while creating or writing the destination
    #[error("Unable to write output to {}: {source}", .path.display())]
    DestinationWrite {
        /// Destination the write was addressed to
        path: PathBuf,
        /// Underlying IO failure
        source: io::Error,
    },
}

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_offending_path() {
        let err = RenderError::DestinationDirectoryMissing(PathBuf::from("/no/such/dir"));
        assert!(format!("{}", err).contains("/no/such/dir"));

        let err = RenderError::DestinationWrite {
            path: PathBuf::from("/tmp/out.yml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("/tmp/out.yml"));
        assert!(msg.contains("denied"));
    }
}
