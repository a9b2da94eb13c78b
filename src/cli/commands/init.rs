//! Init Command
//!
//! Write the global configuration and create the configured directories.

use crate::cli::ui::Output;
use crate::config::{ConfigLoader, InitOptions};
use crate::types::Result;

pub fn run(options: InitOptions) -> Result<()> {
    let out = Output::new();
    let config_path = ConfigLoader::init_global(&options)?;

    out.success("Initialized Vmaker");
    out.path_line("Config", &config_path);
    out.path_line("Raw Dir", &options.raw_dir);
    out.path_line("Clip Dir", &options.clip_dir);
    out.path_line("Output Dir", &options.output_dir);
    if !options.curr_dirname.is_empty() {
        println!("Current: {}", options.curr_dirname);
    }
    println!();
    println!("Next steps:");
    println!("  1. Record a video, then run 'vmaker add' to copy it into the current dir");
    println!("  2. Run 'vmaker new <name>' to start a new episode directory");

    Ok(())
}
