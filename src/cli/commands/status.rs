//! Status Command
//!
//! Display configuration state and clip counts.

use crate::cli::CommandContext;
use crate::config::ConfigLoader;
use crate::types::{Result, VmakerError};

pub fn run(format: &str) -> Result<()> {
    let json_output = format == "json";

    let config = ConfigLoader::load()?;
    if config.require_dirs().is_err() {
        if json_output {
            println!("{{\"status\": \"not_initialized\"}}");
        } else {
            println!("Vmaker Status");
            println!("══════════════════════════════════════");
            println!("Not initialized. Run 'vmaker init' first.");
        }
        // Informational command: not being set up is not an error
        return Ok(());
    }

    let ctx = CommandContext::from_config(config);
    let raw_videos = ctx.raw_scanner().scan()?;
    let raw_count = raw_videos.len();
    let clip_count = ctx.current_scanner().count()?;
    // Sorted oldest first
    let latest = raw_videos.last();
    let config = &ctx.config;

    if json_output {
        let status = serde_json::json!({
            "status": "initialized",
            "raw_dir": config.raw_path(),
            "clip_dir": config.clip_path(),
            "current_dir": config.curr_path(),
            "output_dir": config.output_path(),
            "raw_videos": raw_count,
            "current_clips": clip_count,
            "latest_recording": latest.map(|v| &v.name),
            "ffmpeg": config.ffmpeg.ffmpeg_bin,
        });

        let json = serde_json::to_string_pretty(&status).map_err(VmakerError::Json)?;
        println!("{}", json);
    } else {
        println!("Vmaker Status");
        println!("══════════════════════════════════════");
        println!("Current: {}", config.clip_label());
        println!();

        println!("Videos:");
        println!("  Raw recordings: {}", raw_count);
        println!("  Current clips:  {}", clip_count);
        if let Some(video) = latest {
            println!(
                "  Latest:         {} ({})",
                video.name,
                video.modified_display()
            );
        }
        println!();

        println!("Paths:");
        println!("  Raw:     {}", config.raw_path().display());
        println!("  Current: {}", config.curr_path().display());
        println!("  Output:  {}", config.output_path().display());
        println!("  ffmpeg:  {}", config.ffmpeg.ffmpeg_bin);
    }

    Ok(())
}
