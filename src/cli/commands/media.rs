//! Media Commands
//!
//! `cut`, `mute` and `convert` on a clip. Bare file names resolve
//! against the current clip directory.

use std::path::{Path, PathBuf};

use crate::cli::ui::Output;
use crate::cli::{CommandContext, derived_output};
use crate::constants::video::{CUT_SUFFIX, MUTE_SUFFIX};
use crate::media::{MediaTool, Timestamp};
use crate::types::{Result, VmakerError};

pub async fn cut(input: &Path, start: &str, end: &str, output: Option<PathBuf>) -> Result<()> {
    let ctx = CommandContext::load()?;
    let start: Timestamp = start.parse()?;
    let end: Timestamp = end.parse()?;
    let written = run_cut(&ctx, &ctx.ffmpeg(), input, start, end, output).await?;
    Output::new().success(&format!("Cut saved to {}", written.display()));
    Ok(())
}

pub async fn mute(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let ctx = CommandContext::load()?;
    let written = run_mute(&ctx, &ctx.ffmpeg(), input, output).await?;
    Output::new().success(&format!("Muted copy saved to {}", written.display()));
    Ok(())
}

pub async fn convert(input: &Path, output: &Path) -> Result<()> {
    let ctx = CommandContext::load()?;
    let written = run_convert(&ctx, &ctx.ffmpeg(), input, output).await?;
    Output::new().success(&format!("Converted to {}", written.display()));
    Ok(())
}

pub async fn run_cut(
    ctx: &CommandContext,
    tool: &dyn MediaTool,
    input: &Path,
    start: Timestamp,
    end: Timestamp,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let input = ctx.resolve_input(input);
    let output = output.unwrap_or_else(|| derived_output(&input, CUT_SUFFIX));
    check_distinct(&input, &output)?;
    tool.cut(&input, start, end, &output).await?;
    Ok(output)
}

pub async fn run_mute(
    ctx: &CommandContext,
    tool: &dyn MediaTool,
    input: &Path,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let input = ctx.resolve_input(input);
    let output = output.unwrap_or_else(|| derived_output(&input, MUTE_SUFFIX));
    check_distinct(&input, &output)?;
    tool.mute(&input, &output).await?;
    Ok(output)
}

pub async fn run_convert(
    ctx: &CommandContext,
    tool: &dyn MediaTool,
    input: &Path,
    output: &Path,
) -> Result<PathBuf> {
    let input = ctx.resolve_input(input);
    let output = if output.parent().is_some_and(|p| p.as_os_str().is_empty()) {
        // bare name: next to the input
        input.with_file_name(output)
    } else {
        output.to_path_buf()
    };
    check_distinct(&input, &output)?;
    tool.convert(&input, &output).await?;
    Ok(output)
}

/// ffmpeg cannot read and write the same file
fn check_distinct(input: &Path, output: &Path) -> Result<()> {
    if input == output {
        return Err(VmakerError::InvalidName(format!(
            "output must differ from input: {}",
            output.display()
        )));
    }
    Ok(())
}
