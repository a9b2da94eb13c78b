//! New Command
//!
//! Start a new episode: create `clip_dir/<name>` and make it current.

use std::env;

use crate::cli::CommandContext;
use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::constants::config::ENV_PREFIX;
use crate::types::{Result, VmakerError};

pub fn run(name: &str) -> Result<()> {
    let ctx = CommandContext::load()?;
    let name = name.trim();
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(VmakerError::InvalidName(format!(
            "'{}' must be a single directory name",
            name
        )));
    }

    // set_current_dir writes the global file
    if !ConfigLoader::global_config_path().is_some_and(|p| p.exists()) {
        return Err(VmakerError::NotInitialized);
    }

    let dir = ctx.config.clip_path().join(name);
    let existed = dir.is_dir();
    std::fs::create_dir_all(&dir)?;
    ConfigLoader::set_current_dir(name)?;

    let out = Output::new();
    if existed {
        out.info(&format!("Switched to existing directory '{}'", name));
    } else {
        out.success(&format!("Created '{}'", name));
    }
    out.path_line("Current Dir", &dir);

    let override_var = format!("{}CURR_DIRNAME", ENV_PREFIX);
    if env::var_os(&override_var).is_some() {
        out.warning(&format!(
            "{} is set and overrides the saved current directory",
            override_var
        ));
    }
    Ok(())
}
