//! Config Command
//!
//! Manage Vmaker configuration.
//!
//! Usage:
//!   vmaker config show [-f json]
//!   vmaker config path
//!   vmaker config edit

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(format: &str) -> Result<()> {
    ConfigLoader::show_config(format == "json")
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Edit the global configuration file
pub fn edit() -> Result<()> {
    ConfigLoader::edit_config()
}
