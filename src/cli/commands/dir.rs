//! Dir Command
//!
//! Show the raw, clip, current and output directories.

use crate::cli::CommandContext;
use crate::cli::ui::Output;
use crate::types::Result;

pub fn run() -> Result<()> {
    let ctx = CommandContext::load()?;
    let out = Output::new();
    let config = &ctx.config;

    out.path_line("Source Dir", config.raw_path());
    out.path_line("Clip Dir", config.clip_path());
    out.path_line("Current Dir", &config.curr_path());
    out.path_line("Output Dir", config.output_path());

    for (label, path) in [
        ("Source Dir", config.raw_path().to_path_buf()),
        ("Current Dir", config.curr_path()),
        ("Output Dir", config.output_path().to_path_buf()),
    ] {
        if !path.is_dir() {
            out.warning(&format!("{} does not exist yet: {}", label, path.display()));
        }
    }

    Ok(())
}
