//! Media Operations
//!
//! Defines the MediaTool trait for the edits vmaker performs on clips.
//! `Ffmpeg` is the only backend; commands depend on the trait so they
//! can run against any implementation.

mod ffmpeg;
mod timestamp;

pub use ffmpeg::{Ffmpeg, parse_duration};
pub use timestamp::Timestamp;

use async_trait::async_trait;
use futures::future::join_all;
use std::path::Path;

use crate::types::Result;
use crate::video::VideoInfo;

#[async_trait]
pub trait MediaTool: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    /// Keep `[start, end)` of the input
    async fn cut(&self, input: &Path, start: Timestamp, end: Timestamp, output: &Path)
    -> Result<()>;

    /// Silence the audio track, keeping video untouched
    async fn mute(&self, input: &Path, output: &Path) -> Result<()>;

    /// Re-encode into the container implied by the output extension
    async fn convert(&self, input: &Path, output: &Path) -> Result<()>;

    /// Duration in whole seconds
    async fn probe_duration(&self, input: &Path) -> Result<u64>;
}

/// Probe every video concurrently; failed probes leave the duration unset
pub async fn probe_all(tool: &dyn MediaTool, videos: Vec<VideoInfo>) -> Vec<VideoInfo> {
    let probes = videos.iter().map(|v| tool.probe_duration(&v.path));
    let durations = join_all(probes).await;

    videos
        .into_iter()
        .zip(durations)
        .map(|(video, duration)| match duration {
            Ok(seconds) => video.with_duration(seconds),
            Err(e) => {
                tracing::warn!("{} could not probe {}: {}", tool.name(), video.name, e);
                video
            }
        })
        .collect()
}
