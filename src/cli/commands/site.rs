//! Site Command
//!
//! Inspect, validate and export the documentation site config.
//!
//! Usage:
//!   vmaker site show [-f json|toml|yaml|module] [--file site.toml]
//!   vmaker site check [--file site.toml]
//!   vmaker site export [-o docs/.vitepress/config.mts] [--file site.toml]

use std::path::Path;

use crate::cli::ui::Output;
use crate::site::{ExportFormat, SiteConfig};
use crate::types::{Result, VmakerError};

/// The config in `file`, or the built-in Vmaker site
pub fn load(file: Option<&Path>) -> Result<SiteConfig> {
    match file {
        Some(path) => SiteConfig::load(path),
        None => Ok(SiteConfig::vmaker()),
    }
}

pub fn show(format: ExportFormat, file: Option<&Path>) -> Result<()> {
    let site = load(file)?;
    println!("{}", site.render(format)?);
    Ok(())
}

pub fn check(file: Option<&Path>) -> Result<()> {
    let site = load(file)?;
    let out = Output::new();
    let issues = site.validate();

    if issues.is_empty() {
        let theme = &site.theme_config;
        out.success(&format!(
            "'{}' is valid: {} nav entries, {} sidebar groups, {} social links",
            site.title,
            theme.nav.len(),
            theme.sidebar.len(),
            theme.social_links.len()
        ));
        return Ok(());
    }

    for issue in &issues {
        out.error(&issue.to_string());
    }
    Err(VmakerError::Validation(issues))
}

pub fn export(output: &Path, file: Option<&Path>) -> Result<()> {
    let site = load(file)?;
    site.export_module(output)?;
    Output::new().success(&format!("Exported site config to {}", output.display()));
    Ok(())
}
