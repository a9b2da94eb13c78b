//! CLI Common Utilities
//!
//! Shared initialization and path handling for CLI commands.

use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::config::{Config, ConfigLoader};
use crate::media::Ffmpeg;
use crate::types::Result;
use crate::video::VideoScanner;

/// Command execution context
///
/// Created via `CommandContext::load()` for commands that need the
/// configured directories.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
}

impl CommandContext {
    /// Load configuration and require `vmaker init` to have run
    pub fn load() -> Result<Self> {
        Ok(Self {
            config: ConfigLoader::load_initialized()?,
        })
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn raw_scanner(&self) -> VideoScanner {
        VideoScanner::new(self.config.raw_path(), &self.config.video.extensions)
    }

    /// Clips directly inside the current episode directory
    pub fn current_scanner(&self) -> VideoScanner {
        VideoScanner::new(self.config.curr_path(), &self.config.video.extensions).shallow()
    }

    pub fn ffmpeg(&self) -> Ffmpeg {
        Ffmpeg::new(&self.config.ffmpeg)
    }

    /// Existing paths as given; bare names are looked up in the current dir
    pub fn resolve_input(&self, input: &Path) -> PathBuf {
        if input.is_absolute() || input.exists() {
            input.to_path_buf()
        } else {
            self.config.curr_path().join(input)
        }
    }
}

/// `<stem>_<suffix>.<ext>` next to the input
pub fn derived_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match input.extension() {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}_{}", stem, suffix),
    };
    input.with_file_name(name)
}

/// Runtime for commands that drive external processes
pub fn runtime() -> Result<Runtime> {
    Ok(Runtime::new()?)
}
