use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::constants::video::DISPLAY_DATETIME_FORMAT;
use crate::types::Result;

/// A video file with the metadata shown in tables
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInfo {
    pub path: PathBuf,
    pub name: String,
    pub modified: DateTime<Local>,
    pub size: u64,
    /// Whole seconds, once probed
    pub duration: Option<u64>,
}

impl VideoInfo {
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = path.metadata()?;
        let modified = DateTime::<Local>::from(metadata.modified()?);
        Ok(Self {
            path: path.to_path_buf(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            modified,
            size: metadata.len(),
            duration: None,
        })
    }

    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }

    /// Extension without the dot, as written on disk
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    pub fn modified_display(&self) -> String {
        self.modified.format(DISPLAY_DATETIME_FORMAT).to_string()
    }

    pub fn duration_display(&self) -> String {
        self.duration
            .map(format_hms)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn size_display(&self) -> String {
        format!("{:.2}", size_mb(self.size))
    }
}

/// Seconds as `HH:MM:SS`; hours keep growing past 99
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Bytes as megabytes rounded to two decimals
pub fn size_mb(bytes: u64) -> f64 {
    let mb = bytes as f64 / 1024.0 / 1024.0;
    (mb * 100.0).round() / 100.0
}
