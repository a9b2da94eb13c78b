//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Directories default to empty; `vmaker init` fills them in.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{media, video};
use crate::types::{Result, VmakerError};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the screen recorder writes raw recordings
    pub raw_dir: PathBuf,

    /// Root of per-episode clip directories
    pub clip_dir: PathBuf,

    /// Where finished videos go
    pub output_dir: PathBuf,

    /// Current episode directory under `clip_dir`
    pub curr_dirname: String,

    /// Video discovery settings
    pub video: VideoConfig,

    /// ffmpeg/ffprobe settings
    pub ffmpeg: FfmpegConfig,
}

impl Config {
    pub fn raw_path(&self) -> &Path {
        &self.raw_dir
    }

    pub fn clip_path(&self) -> &Path {
        &self.clip_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_dir
    }

    /// `clip_dir/curr_dirname`, or `clip_dir` itself when no episode is set
    pub fn curr_path(&self) -> PathBuf {
        if self.curr_dirname.is_empty() {
            self.clip_dir.clone()
        } else {
            self.clip_dir.join(&self.curr_dirname)
        }
    }

    /// Name used for clip numbering: the episode, else the clip dir's name
    pub fn clip_label(&self) -> String {
        if !self.curr_dirname.is_empty() {
            return self.curr_dirname.clone();
        }
        self.clip_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("clip")
            .to_string()
    }

    /// Fail with `NotInitialized` unless every directory is configured
    pub fn require_dirs(&self) -> Result<()> {
        let all_set = [&self.raw_dir, &self.clip_dir, &self.output_dir]
            .iter()
            .all(|p| !p.as_os_str().is_empty());
        if all_set {
            Ok(())
        } else {
            Err(VmakerError::NotInitialized)
        }
    }

    /// Validate configuration values are within acceptable ranges.
    /// Unset directories are accepted; `require_dirs` enforces them.
    pub fn validate(&self) -> Result<()> {
        if self.ffmpeg.timeout_secs == 0 {
            return Err(VmakerError::Config(
                "ffmpeg timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.video.extensions.is_empty() {
            return Err(VmakerError::Config(
                "video extensions must not be empty".to_string(),
            ));
        }

        for (key, dir) in [
            ("raw_dir", &self.raw_dir),
            ("clip_dir", &self.clip_dir),
            ("output_dir", &self.output_dir),
        ] {
            if !dir.as_os_str().is_empty() && !is_valid_dir(dir, true) {
                return Err(VmakerError::Config(format!(
                    "Incorrect {}: {}. Run 'vmaker init' again.",
                    key,
                    dir.display()
                )));
            }
        }

        if self.curr_dirname.contains(['/', '\\']) {
            return Err(VmakerError::Config(format!(
                "curr_dirname must be a single directory name, got '{}'",
                self.curr_dirname
            )));
        }

        Ok(())
    }
}

/// A usable directory path: non-empty, no NUL byte, not an existing file.
/// With `allow_not_exist` false the directory must also exist.
pub fn is_valid_dir(path: &Path, allow_not_exist: bool) -> bool {
    let text = path.to_string_lossy();
    if text.trim().is_empty() || text.contains('\0') {
        return false;
    }
    if path.exists() {
        path.is_dir()
    } else {
        allow_not_exist
    }
}

// =============================================================================
// Video Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// File extensions (without dot) treated as videos
    pub extensions: Vec<String>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            extensions: video::DEFAULT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

// =============================================================================
// ffmpeg Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FfmpegConfig {
    /// ffmpeg executable (name on PATH or absolute path)
    pub ffmpeg_bin: String,

    /// ffprobe executable
    pub ffprobe_bin: String,

    /// Per-invocation timeout
    pub timeout_secs: u64,

    /// Pass `-y` instead of `-n`
    pub overwrite: bool,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            ffmpeg_bin: media::DEFAULT_FFMPEG_BIN.to_string(),
            ffprobe_bin: media::DEFAULT_FFPROBE_BIN.to_string(),
            timeout_secs: media::DEFAULT_TIMEOUT_SECS,
            overwrite: false,
        }
    }
}
