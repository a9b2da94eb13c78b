//! List Command
//!
//! Table of the clips in the current dir (or the raw recordings).

use crate::cli::CommandContext;
use crate::cli::ui::{Output, VideoTable};
use crate::media::probe_all;
use crate::types::Result;
use crate::video::size_mb;

pub async fn run(raw: bool, probe: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    let out = Output::new();

    let (scanner, root) = if raw {
        (ctx.raw_scanner(), ctx.config.raw_path().to_path_buf())
    } else {
        (ctx.current_scanner(), ctx.config.curr_path())
    };

    let mut videos = scanner.scan()?;
    if videos.is_empty() {
        out.info(&format!("No videos in {}", root.display()));
        return Ok(());
    }

    if probe {
        videos = probe_all(&ctx.ffmpeg(), videos).await;
    }

    out.section(&root.display().to_string());
    VideoTable::new(&videos).print();

    let total_bytes: u64 = videos.iter().map(|v| v.size).sum();
    println!();
    println!("{} videos, {:.2} MB", videos.len(), size_mb(total_bytes));
    if probe {
        let total_secs: u64 = videos.iter().filter_map(|v| v.duration).sum();
        println!("Total length: {}", crate::video::format_hms(total_secs));
    }

    Ok(())
}
