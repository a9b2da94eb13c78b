//! Add Command
//!
//! Copy the latest recording from the raw dir into the current clip
//! directory, optionally renamed.

use console::style;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::CommandContext;
use crate::cli::ui::{Output, VideoTable};
use crate::types::{Result, VmakerError};
use crate::video::{ClipContext, RenameStrategy, VideoInfo, copy_video};

#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub strategy: RenameStrategy,
    /// Skip the confirmation prompt
    pub yes: bool,
}

/// The copy `add` is about to make
#[derive(Debug, Clone)]
pub struct AddPlan {
    pub video: VideoInfo,
    pub dest: PathBuf,
}

pub fn run(options: AddOptions) -> Result<()> {
    let ctx = CommandContext::load()?;
    let out = Output::new();

    let plan = plan(&ctx, &options.strategy)?;
    let dest_name = plan
        .dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!(
        "Will copy the video below to {} with the new name {}.",
        style(ctx.config.curr_path().display()).green(),
        style(&dest_name).green()
    );
    VideoTable::new(std::slice::from_ref(&plan.video)).print();

    if !options.yes {
        ensure_confirmed(out.confirm("Sure to continue?", true)?)?;
    }

    copy_video(&plan.video.path, &plan.dest)?;
    out.success(&format!("Added {}", plan.dest.display()));
    Ok(())
}

fn ensure_confirmed(confirmed: bool) -> Result<()> {
    if confirmed {
        Ok(())
    } else {
        Err(VmakerError::Cancelled)
    }
}

/// Pick the latest raw video and decide where it goes
pub fn plan(ctx: &CommandContext, strategy: &RenameStrategy) -> Result<AddPlan> {
    let video = ctx.raw_scanner().latest()?;
    let clip = ClipContext {
        label: ctx.config.clip_label(),
        existing: ctx.current_scanner().count()?,
    };
    let name = strategy.target_name(&video, &clip)?;
    let dest = ctx.config.curr_path().join(name);
    debug!(
        "Planned {} -> {} ({})",
        video.path.display(),
        dest.display(),
        strategy
    );
    Ok(AddPlan { video, dest })
}
