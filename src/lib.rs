//! Vmaker - Tutorial Video Maker for Programmers
//!
//! Picks up the latest screen recording, files it into the current
//! episode directory, and drives ffmpeg for the small edits a tutorial
//! needs. Also owns the configuration of its documentation site.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vmaker::{ConfigLoader, Ffmpeg, MediaTool, VideoScanner};
//!
//! let config = ConfigLoader::load_initialized()?;
//! let latest = VideoScanner::new(config.raw_path(), &config.video.extensions).latest()?;
//! let seconds = Ffmpeg::new(&config.ffmpeg).probe_duration(&latest.path).await?;
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Layered configuration (files, `VMAKER_CONFIG`, env vars)
//! - [`video`]: Recording discovery, rename strategies, copying
//! - [`media`]: ffmpeg/ffprobe operations behind the `MediaTool` trait
//! - [`site`]: Documentation site config model, validation and export
//! - [`cli`]: Command handlers used by the `vmaker` binary

pub mod cli;
pub mod config;
pub mod constants;
pub mod media;
pub mod site;
pub mod types;
pub mod video;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader, FfmpegConfig, InitOptions, VideoConfig};

pub use types::{Result, ResultExt, VmakerError};

pub use media::{Ffmpeg, MediaTool, Timestamp};

pub use site::{NavEntry, SidebarGroup, SiteConfig, SiteIssue, SocialIcon, SocialLink};

pub use video::{RenameStrategy, VideoInfo, VideoScanner};
