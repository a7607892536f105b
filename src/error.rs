//! Custom error types for route-mapper.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for route-mapper operations.
#[derive(Error, Debug)]
pub enum RouteMapperError {
    // Input errors
    #[error("Project path does not exist: {}", .0.display())]
    ProjectNotFound(PathBuf),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    // Output errors
    #[error("JSON serialization error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    // Pattern errors
    #[error("Glob pattern error: {0}")]
    GlobPatternError(#[from] glob::PatternError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using RouteMapperError
pub type Result<T> = std::result::Result<T, RouteMapperError>;

impl RouteMapperError {
    /// Create a project-not-found error
    pub fn project_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ProjectNotFound(path.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for RouteMapperError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = RouteMapperError::project_not_found("/no/such/project");
        assert_eq!(
            err.to_string(),
            "Project path does not exist: /no/such/project"
        );

        let err = RouteMapperError::invalid_config("method window is zero");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: method window is zero"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = RouteMapperError::project_not_found("missing");
        assert!(matches!(err, RouteMapperError::ProjectNotFound(_)));

        let err = RouteMapperError::invalid_config("bad");
        assert!(matches!(err, RouteMapperError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_conversions() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid");
        assert!(toml_err.is_err());
        let err: RouteMapperError = toml_err.unwrap_err().into();
        assert!(matches!(err, RouteMapperError::TomlParseError(_)));

        let glob_err = glob::Pattern::new("src/[").unwrap_err();
        let err: RouteMapperError = glob_err.into();
        assert!(matches!(err, RouteMapperError::GlobPatternError(_)));

        let io_err = std::io::Error::other("disk gone");
        let err: RouteMapperError = io_err.into();
        assert!(matches!(err, RouteMapperError::Other(_)));
    }
}
