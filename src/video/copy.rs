use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, info};

use crate::types::{Result, VmakerError};

/// Copy `source` to `dest`, keeping the modification time.
/// Never overwrites: an existing `dest` is an error.
pub fn copy_video(source: &Path, dest: &Path) -> Result<u64> {
    if !source.is_file() {
        return Err(VmakerError::NotFound(source.to_path_buf()));
    }
    if dest.exists() {
        return Err(VmakerError::AlreadyExists(dest.to_path_buf()));
    }
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    debug!("Copying {} -> {}", source.display(), dest.display());
    let bytes = fs::copy(source, dest)?;

    let modified = source.metadata()?.modified()?;
    File::options()
        .write(true)
        .open(dest)?
        .set_modified(modified)?;

    info!("Copied {} ({} bytes)", dest.display(), bytes);
    Ok(bytes)
}
