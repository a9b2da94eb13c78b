//! Rename Strategies
//!
//! Decides the file name a video gets when it is copied into the
//! current clip directory. The source extension is always kept.

use std::fmt;

use super::info::VideoInfo;
use crate::constants::video::RENAME_TIME_FORMAT;
use crate::types::{Result, VmakerError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenameStrategy {
    /// Keep the recorder's file name
    #[default]
    DontRename,
    /// Modification time as `YYYYmmdd_HHMMSS`
    WithTime,
    /// `<episode>_<NN>` numbered after the clips already present
    WithClipInfo,
    /// `<stem>_<suffix>`
    WithSuffix(String),
    /// A name chosen by the user
    Explicit(String),
}

/// What the strategies need to know about the destination
#[derive(Debug, Clone)]
pub struct ClipContext {
    /// Episode label (current dir name)
    pub label: String,
    /// Videos already in the current dir
    pub existing: usize,
}

impl RenameStrategy {
    /// Pick a strategy from CLI inputs; nothing given means no rename
    pub fn from_options(
        new_name: Option<String>,
        with_time: bool,
        with_clip_info: bool,
        suffix: Option<String>,
    ) -> Self {
        if let Some(name) = new_name.filter(|n| !n.trim().is_empty()) {
            RenameStrategy::Explicit(name)
        } else if with_time {
            RenameStrategy::WithTime
        } else if with_clip_info {
            RenameStrategy::WithClipInfo
        } else if let Some(suffix) = suffix.filter(|s| !s.trim().is_empty()) {
            RenameStrategy::WithSuffix(suffix)
        } else {
            RenameStrategy::DontRename
        }
    }

    /// Destination file name for `video`
    pub fn target_name(&self, video: &VideoInfo, ctx: &ClipContext) -> Result<String> {
        let stem = match self {
            RenameStrategy::DontRename => return Ok(video.name.clone()),
            RenameStrategy::WithTime => video.modified.format(RENAME_TIME_FORMAT).to_string(),
            RenameStrategy::WithClipInfo => format!("{}_{:02}", ctx.label, ctx.existing + 1),
            RenameStrategy::WithSuffix(suffix) => format!("{}_{}", video.stem(), suffix.trim()),
            RenameStrategy::Explicit(name) => {
                let name = name.trim();
                check_file_stem(name)?;
                std::path::Path::new(name)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or(name)
                    .to_string()
            }
        };

        check_file_stem(&stem)?;
        Ok(match video.extension() {
            Some(ext) => format!("{}.{}", stem, ext),
            None => stem,
        })
    }
}

impl fmt::Display for RenameStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameStrategy::DontRename => write!(f, "keep name"),
            RenameStrategy::WithTime => write!(f, "by time"),
            RenameStrategy::WithClipInfo => write!(f, "by clip number"),
            RenameStrategy::WithSuffix(s) => write!(f, "with suffix '{}'", s),
            RenameStrategy::Explicit(n) => write!(f, "as '{}'", n),
        }
    }
}

/// Reject names that would escape the destination directory
fn check_file_stem(stem: &str) -> Result<()> {
    if stem.is_empty() || stem == "." || stem == ".." {
        return Err(VmakerError::InvalidName(stem.to_string()));
    }
    if stem.contains(['/', '\\', '\0']) {
        return Err(VmakerError::InvalidName(format!(
            "'{}' must not contain path separators",
            stem
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::path::PathBuf;

    fn video(name: &str) -> VideoInfo {
        VideoInfo {
            path: PathBuf::from("/raw").join(name),
            name: name.to_string(),
            modified: Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
            size: 0,
            duration: None,
        }
    }

    fn ctx() -> ClipContext {
        ClipContext {
            label: "ep03".to_string(),
            existing: 4,
        }
    }

    #[test]
    fn test_dont_rename() {
        let name = RenameStrategy::DontRename
            .target_name(&video("Recording 1.mp4"), &ctx())
            .unwrap();
        assert_eq!(name, "Recording 1.mp4");
    }

    #[test]
    fn test_with_time() {
        let name = RenameStrategy::WithTime
            .target_name(&video("rec.mkv"), &ctx())
            .unwrap();
        assert_eq!(name, "20240309_140507.mkv");
    }

    #[test]
    fn test_with_clip_info() {
        let name = RenameStrategy::WithClipInfo
            .target_name(&video("rec.mp4"), &ctx())
            .unwrap();
        assert_eq!(name, "ep03_05.mp4");
    }

    #[test]
    fn test_with_suffix() {
        let name = RenameStrategy::WithSuffix("intro".into())
            .target_name(&video("rec.mp4"), &ctx())
            .unwrap();
        assert_eq!(name, "rec_intro.mp4");
    }

    #[test]
    fn test_explicit_replaces_extension() {
        let strategy = RenameStrategy::Explicit("opening.mov".into());
        assert_eq!(
            strategy.target_name(&video("rec.mp4"), &ctx()).unwrap(),
            "opening.mp4"
        );
        let strategy = RenameStrategy::Explicit("opening".into());
        assert_eq!(
            strategy.target_name(&video("rec.mp4"), &ctx()).unwrap(),
            "opening.mp4"
        );
    }

    #[test]
    fn test_rejects_separators() {
        for strategy in [
            RenameStrategy::WithSuffix("../escape".into()),
            RenameStrategy::Explicit("clips/a.mp4".into()),
            RenameStrategy::Explicit("..".into()),
        ] {
            assert!(matches!(
                strategy.target_name(&video("rec.mp4"), &ctx()),
                Err(VmakerError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn test_from_options_precedence() {
        assert_eq!(
            RenameStrategy::from_options(Some("a".into()), true, true, Some("s".into())),
            RenameStrategy::Explicit("a".into())
        );
        assert_eq!(
            RenameStrategy::from_options(None, true, true, None),
            RenameStrategy::WithTime
        );
        assert_eq!(
            RenameStrategy::from_options(None, false, true, None),
            RenameStrategy::WithClipInfo
        );
        assert_eq!(
            RenameStrategy::from_options(Some("  ".into()), false, false, Some("x".into())),
            RenameStrategy::WithSuffix("x".into())
        );
        assert_eq!(
            RenameStrategy::from_options(None, false, false, None),
            RenameStrategy::DontRename
        );
    }
}
