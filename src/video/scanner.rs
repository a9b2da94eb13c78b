use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::info::VideoInfo;
use crate::types::{Result, VmakerError};

/// Recursive video finder for the raw and clip directories
pub struct VideoScanner {
    root: PathBuf,
    extensions: Vec<String>,
    recursive: bool,
}

impl VideoScanner {
    pub fn new<P: AsRef<Path>>(root: P, extensions: &[String]) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            recursive: true,
        }
    }

    /// Only look at the root directory itself
    pub fn shallow(mut self) -> Self {
        self.recursive = false;
        self
    }

    pub fn is_video(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.contains(&ext.to_ascii_lowercase()))
            .unwrap_or(false)
    }

    /// All videos under the root, oldest first. A missing root yields none.
    pub fn scan(&self) -> Result<Vec<VideoInfo>> {
        if !self.root.exists() {
            debug!("Scan root does not exist: {}", self.root.display());
            return Ok(Vec::new());
        }
        if !self.root.is_dir() {
            return Err(VmakerError::Config(format!(
                "Not a directory: {}",
                self.root.display()
            )));
        }

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .follow_links(false);
        if !self.recursive {
            builder.max_depth(Some(1));
        }

        let mut videos = Vec::new();
        for entry in builder.build().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() || !self.is_video(path) {
                continue;
            }
            match VideoInfo::from_path(path) {
                Ok(info) => videos.push(info),
                Err(e) => debug!("Skipping {}: {}", path.display(), e),
            }
        }

        videos.sort_by(|a, b| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.name.cmp(&b.name))
        });
        debug!("Found {} videos in {}", videos.len(), self.root.display());
        Ok(videos)
    }

    /// Most recently modified video
    pub fn latest(&self) -> Result<VideoInfo> {
        self.scan()?
            .pop()
            .ok_or_else(|| VmakerError::NoVideos(self.root.clone()))
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.scan()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::video::DEFAULT_EXTENSIONS;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn extensions() -> Vec<String> {
        DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    }

    fn touch(path: &Path, age_secs: u64) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let file = File::create(path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
            .unwrap();
    }

    #[test]
    fn test_latest_is_newest_video() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("old.mp4"), 300);
        touch(&temp.path().join("nested/newest.mkv"), 10);
        touch(&temp.path().join("middle.MOV"), 100);
        touch(&temp.path().join("notes.txt"), 0);

        let scanner = VideoScanner::new(temp.path(), &extensions());
        let latest = scanner.latest().unwrap();
        assert_eq!(latest.name, "newest.mkv");

        let names: Vec<_> = scanner.scan().unwrap().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["old.mp4", "middle.MOV", "newest.mkv"]);
    }

    #[test]
    fn test_shallow_skips_nested() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("top.mp4"), 50);
        touch(&temp.path().join("nested/deep.mp4"), 10);

        let scanner = VideoScanner::new(temp.path(), &extensions()).shallow();
        assert_eq!(scanner.count().unwrap(), 1);
        assert_eq!(scanner.latest().unwrap().name, "top.mp4");
    }

    #[test]
    fn test_hidden_files_skipped() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join(".partial.mp4"), 0);

        let scanner = VideoScanner::new(temp.path(), &extensions());
        assert!(matches!(scanner.latest(), Err(VmakerError::NoVideos(_))));
    }

    #[test]
    fn test_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let scanner = VideoScanner::new(temp.path().join("nope"), &extensions());
        assert!(scanner.scan().unwrap().is_empty());
    }

    #[test]
    fn test_extension_normalization() {
        let scanner = VideoScanner::new(".", &[".MP4".to_string()]);
        assert!(scanner.is_video(Path::new("a.mp4")));
        assert!(scanner.is_video(Path::new("a.Mp4")));
        assert!(!scanner.is_video(Path::new("a.mkv")));
        assert!(!scanner.is_video(Path::new("mp4")));
    }
}
