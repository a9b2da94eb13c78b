//! ffmpeg CLI Backend
//!
//! Executes the configured ffmpeg/ffprobe binaries. Argument vectors are
//! built by pure functions so they can be checked without the binaries.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use super::MediaTool;
use super::timestamp::Timestamp;
use crate::config::FfmpegConfig;
use crate::constants::media::STDERR_TAIL_LINES;
use crate::types::{Result, VmakerError};

pub struct Ffmpeg {
    ffmpeg_bin: String,
    ffprobe_bin: String,
    timeout: Duration,
    overwrite: bool,
}

impl Ffmpeg {
    pub fn new(config: &FfmpegConfig) -> Self {
        Self {
            ffmpeg_bin: config.ffmpeg_bin.clone(),
            ffprobe_bin: config.ffprobe_bin.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            overwrite: config.overwrite,
        }
    }

    fn overwrite_flag(&self) -> &'static str {
        if self.overwrite { "-y" } else { "-n" }
    }

    pub fn cut_args(
        &self,
        input: &Path,
        start: Timestamp,
        end: Timestamp,
        output: &Path,
    ) -> Vec<OsString> {
        let (s, e) = (start.to_ffmpeg(), end.to_ffmpeg());
        vec![
            self.overwrite_flag().into(),
            "-i".into(),
            input.into(),
            "-vf".into(),
            format!("trim=start={}:end={},setpts=PTS-STARTPTS", s, e).into(),
            "-af".into(),
            format!("atrim=start={}:end={},asetpts=PTS-STARTPTS", s, e).into(),
            output.into(),
        ]
    }

    pub fn mute_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            self.overwrite_flag().into(),
            "-i".into(),
            input.into(),
            "-c:v".into(),
            "copy".into(),
            "-af".into(),
            "volume=0".into(),
            output.into(),
        ]
    }

    pub fn convert_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            self.overwrite_flag().into(),
            "-i".into(),
            input.into(),
            output.into(),
        ]
    }

    pub fn probe_args(input: &Path) -> Vec<OsString> {
        vec![
            "-i".into(),
            input.into(),
            "-show_entries".into(),
            "format=duration".into(),
            "-v".into(),
            "quiet".into(),
            "-of".into(),
            "csv=p=0".into(),
        ]
    }

    /// Run a binary to completion, returning stdout
    async fn run(&self, bin: &str, args: Vec<OsString>, operation: &str) -> Result<String> {
        let start_time = Instant::now();
        debug!("Executing {} {:?}", bin, args);

        let child = Command::new(bin)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                VmakerError::media(
                    bin,
                    format!("failed to start: {}. Is it installed and on PATH?", e),
                )
            })?;

        let output = timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| VmakerError::timeout(operation, self.timeout))?
            .map_err(|e| VmakerError::media(bin, format!("execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let tail = stderr_tail(&stderr, STDERR_TAIL_LINES);
            let message = if tail.is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {}", output.status, tail)
            };
            return Err(VmakerError::media(bin, message));
        }

        debug!("{} finished in {:?}", operation, start_time.elapsed());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn require_input(input: &Path) -> Result<()> {
        if input.is_file() {
            Ok(())
        } else {
            Err(VmakerError::NotFound(input.to_path_buf()))
        }
    }
}

#[async_trait]
impl MediaTool for Ffmpeg {
    fn name(&self) -> &str {
        &self.ffmpeg_bin
    }

    async fn cut(
        &self,
        input: &Path,
        start: Timestamp,
        end: Timestamp,
        output: &Path,
    ) -> Result<()> {
        Self::require_input(input)?;
        if start >= end {
            return Err(VmakerError::InvalidTimestamp(format!(
                "start {} must be before end {}",
                start, end
            )));
        }
        info!("Cutting {} [{} - {}]", input.display(), start, end);
        let args = self.cut_args(input, start, end, output);
        self.run(&self.ffmpeg_bin, args, &format!("cut {}", input.display()))
            .await?;
        Ok(())
    }

    async fn mute(&self, input: &Path, output: &Path) -> Result<()> {
        Self::require_input(input)?;
        info!("Muting {}", input.display());
        let args = self.mute_args(input, output);
        self.run(&self.ffmpeg_bin, args, &format!("mute {}", input.display()))
            .await?;
        Ok(())
    }

    async fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        Self::require_input(input)?;
        info!("Converting {} -> {}", input.display(), output.display());
        let args = self.convert_args(input, output);
        self.run(
            &self.ffmpeg_bin,
            args,
            &format!("convert {}", input.display()),
        )
        .await?;
        Ok(())
    }

    async fn probe_duration(&self, input: &Path) -> Result<u64> {
        Self::require_input(input)?;
        let stdout = self
            .run(
                &self.ffprobe_bin,
                Self::probe_args(input),
                &format!("probe {}", input.display()),
            )
            .await?;
        parse_duration(&stdout).ok_or_else(|| {
            VmakerError::media(
                &self.ffprobe_bin,
                format!("unexpected duration output '{}'", stdout.trim()),
            )
        })
    }
}

/// Whole seconds from ffprobe's `csv=p=0` duration output
pub fn parse_duration(stdout: &str) -> Option<u64> {
    let seconds: f64 = stdout.lines().next()?.trim().parse().ok()?;
    if seconds.is_finite() && seconds >= 0.0 {
        Some(seconds.floor() as u64)
    } else {
        None
    }
}

fn stderr_tail(stderr: &str, lines: usize) -> String {
    let kept: Vec<&str> = stderr
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect();
    kept[kept.len().saturating_sub(lines)..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ffmpeg(overwrite: bool) -> Ffmpeg {
        Ffmpeg::new(&FfmpegConfig {
            overwrite,
            ..Default::default()
        })
    }

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_cut_args() {
        let args = ffmpeg(false).cut_args(
            Path::new("in.mp4"),
            "00:01:05".parse().unwrap(),
            "00:02:00.5".parse().unwrap(),
            Path::new("out.mp4"),
        );
        assert_eq!(
            strings(args),
            vec![
                "-n",
                "-i",
                "in.mp4",
                "-vf",
                "trim=start=65:end=120.5,setpts=PTS-STARTPTS",
                "-af",
                "atrim=start=65:end=120.5,asetpts=PTS-STARTPTS",
                "out.mp4",
            ]
        );
    }

    #[test]
    fn test_mute_and_convert_args() {
        assert_eq!(
            strings(ffmpeg(true).mute_args(Path::new("a.mkv"), Path::new("b.mkv"))),
            vec!["-y", "-i", "a.mkv", "-c:v", "copy", "-af", "volume=0", "b.mkv"]
        );
        assert_eq!(
            strings(ffmpeg(false).convert_args(Path::new("a.mkv"), Path::new("a.mp4"))),
            vec!["-n", "-i", "a.mkv", "a.mp4"]
        );
    }

    #[test]
    fn test_probe_args() {
        assert_eq!(
            strings(Ffmpeg::probe_args(Path::new("a.mp4"))),
            vec![
                "-i",
                "a.mp4",
                "-show_entries",
                "format=duration",
                "-v",
                "quiet",
                "-of",
                "csv=p=0"
            ]
        );
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("125.733000\n"), Some(125));
        assert_eq!(parse_duration("0.4"), Some(0));
        assert_eq!(parse_duration("N/A"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("-3"), None);
    }

    #[test]
    fn test_stderr_tail() {
        let stderr = "a\n\nb\nc\nd\n";
        assert_eq!(stderr_tail(stderr, 2), "c\nd");
        assert_eq!(stderr_tail(stderr, 10), "a\nb\nc\nd");
        assert_eq!(stderr_tail("", 3), "");
    }

    #[tokio::test]
    async fn test_missing_input() {
        let err = ffmpeg(false)
            .mute(&PathBuf::from("/nonexistent/in.mp4"), Path::new("out.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, VmakerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cut_requires_ordered_range() {
        let temp = tempfile::TempDir::new().unwrap();
        let input = temp.path().join("in.mp4");
        std::fs::write(&input, b"x").unwrap();
        let err = ffmpeg(false)
            .cut(
                &input,
                "10".parse().unwrap(),
                "5".parse().unwrap(),
                &temp.path().join("out.mp4"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, VmakerError::InvalidTimestamp(_)));
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let temp = tempfile::TempDir::new().unwrap();
        let input = temp.path().join("in.mp4");
        std::fs::write(&input, b"x").unwrap();
        let tool = Ffmpeg::new(&FfmpegConfig {
            ffprobe_bin: "vmaker-no-such-ffprobe".to_string(),
            ..Default::default()
        });
        let err = tool.probe_duration(&input).await.unwrap_err();
        assert!(err.to_string().contains("vmaker-no-such-ffprobe"));
    }

    #[cfg(unix)]
    mod scripted {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn script(dir: &Path, name: &str, body: &str) -> String {
            let path = dir.join(name);
            std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path.to_string_lossy().into_owned()
        }

        fn input(dir: &Path) -> PathBuf {
            let path = dir.join("in.mp4");
            std::fs::write(&path, b"x").unwrap();
            path
        }

        #[tokio::test]
        async fn test_probe_with_fake_ffprobe() {
            let temp = TempDir::new().unwrap();
            let tool = Ffmpeg::new(&FfmpegConfig {
                ffprobe_bin: script(temp.path(), "ffprobe", "echo 125.73"),
                ..Default::default()
            });
            assert_eq!(tool.probe_duration(&input(temp.path())).await.unwrap(), 125);
        }

        #[tokio::test]
        async fn test_failure_carries_stderr() {
            let temp = TempDir::new().unwrap();
            let tool = Ffmpeg::new(&FfmpegConfig {
                ffmpeg_bin: script(temp.path(), "ffmpeg", "echo 'Invalid data found' >&2\nexit 1"),
                ..Default::default()
            });
            let err = tool
                .convert(&input(temp.path()), &temp.path().join("out.mkv"))
                .await
                .unwrap_err();
            assert!(err.to_string().contains("Invalid data found"));
        }

        #[tokio::test]
        async fn test_timeout() {
            let temp = TempDir::new().unwrap();
            let tool = Ffmpeg::new(&FfmpegConfig {
                ffmpeg_bin: script(temp.path(), "ffmpeg", "sleep 5"),
                timeout_secs: 1,
                ..Default::default()
            });
            let err = tool
                .mute(&input(temp.path()), &temp.path().join("out.mp4"))
                .await
                .unwrap_err();
            assert!(matches!(err, VmakerError::Timeout { .. }));
        }
    }
}
