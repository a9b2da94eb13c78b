//! Unified Error Type System
//!
//! Centralized error type for the library. The binary wraps it in
//! `anyhow` at the top level; everything below `main` returns
//! [`Result`] and propagates with `?`.
//!
//! ## Error Groups
//!
//! - **System**: IO and (de)serialization failures (auto `From` impls)
//! - **Setup**: missing or invalid configuration
//! - **Files**: missing inputs, refused overwrites, empty directories
//! - **Media**: ffmpeg/ffprobe failures and timeouts
//! - **Site**: documentation site validation issues

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::site::SiteIssue;

#[derive(Error, Debug)]
pub enum VmakerError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(String),

    // -------------------------------------------------------------------------
    // Setup Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Config missing. Please run 'vmaker init'.")]
    NotInitialized,

    // -------------------------------------------------------------------------
    // File Errors
    // -------------------------------------------------------------------------
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("The file already exists in {}!", .0.display())]
    AlreadyExists(PathBuf),

    #[error("No videos found in {}", .0.display())]
    NoVideos(PathBuf),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    // -------------------------------------------------------------------------
    // Media Errors
    // -------------------------------------------------------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("{tool} failed: {message}")]
    Media { tool: String, message: String },

    #[error("Timeout after {duration:?}: {operation}")]
    Timeout {
        operation: String,
        duration: Duration,
    },

    // -------------------------------------------------------------------------
    // Site Errors
    // -------------------------------------------------------------------------
    #[error("Site config has {} issue(s):\n{}", .0.len(), format_issues(.0))]
    Validation(Vec<SiteIssue>),

    #[error("Cancelled")]
    Cancelled,
}

impl From<toml::de::Error> for VmakerError {
    fn from(err: toml::de::Error) -> Self {
        VmakerError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for VmakerError {
    fn from(err: toml::ser::Error) -> Self {
        VmakerError::Toml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VmakerError>;

fn format_issues(issues: &[SiteIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Helper Functions
// =============================================================================

impl VmakerError {
    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a media tool error
    pub fn media(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Media {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;

    /// Add context using a closure (lazy evaluation)
    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| VmakerError::Config(format!("{}: {}", context.into(), e)))
    }

    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| VmakerError::Config(format!("{}: {}", f().into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteIssue;

    #[test]
    fn test_not_initialized_message() {
        assert_eq!(
            VmakerError::NotInitialized.to_string(),
            "Config missing. Please run 'vmaker init'."
        );
    }

    #[test]
    fn test_already_exists_message() {
        let err = VmakerError::AlreadyExists(PathBuf::from("clips/a.mp4"));
        assert_eq!(err.to_string(), "The file already exists in clips/a.mp4!");
    }

    #[test]
    fn test_validation_lists_every_issue() {
        let err = VmakerError::Validation(vec![
            SiteIssue::new("title", "must not be empty"),
            SiteIssue::new("themeConfig.sidebar[0]", "group has no items"),
        ]);
        let message = err.to_string();
        assert!(message.starts_with("Site config has 2 issue(s)"));
        assert!(message.contains("  - title: must not be empty"));
        assert!(message.contains("  - themeConfig.sidebar[0]: group has no items"));
    }

    #[test]
    fn test_with_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.with_context("writing config").unwrap_err();
        assert_eq!(err.to_string(), "Config error: writing config: denied");
    }

    #[test]
    fn test_timeout_helper() {
        let err = VmakerError::timeout("ffprobe a.mp4", Duration::from_secs(5));
        assert_eq!(err.to_string(), "Timeout after 5s: ffprobe a.mp4");
    }
}
