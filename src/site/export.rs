//! Site Config Export
//!
//! Renders the site config in the shapes the generator and humans read:
//! JSON, TOML, YAML, or a ready-to-use `config.mts` module.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use super::model::SiteConfig;
use crate::types::{Result, ResultExt};

/// Output format for `vmaker site show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Toml,
    Yaml,
    Module,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Toml => write!(f, "toml"),
            ExportFormat::Yaml => write!(f, "yaml"),
            ExportFormat::Module => write!(f, "module"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "toml" => Ok(ExportFormat::Toml),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "module" | "mts" => Ok(ExportFormat::Module),
            _ => Err(format!(
                "Invalid format '{}'. Valid values: json, toml, yaml, module",
                s
            )),
        }
    }
}

impl SiteConfig {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Generator config module; JSON is valid object-literal syntax
    pub fn render_module(&self) -> Result<String> {
        let body = self.to_json()?;
        Ok(format!(
            "// Generated by vmaker. Edit the site config and re-export instead.\n\
             import {{ defineConfig }} from 'vitepress'\n\
             \n\
             export default defineConfig({})\n",
            body
        ))
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Toml => self.to_toml(),
            ExportFormat::Yaml => self.to_yaml(),
            ExportFormat::Module => self.render_module(),
        }
    }

    /// Validate, then write the config module to `path`
    pub fn export_module(&self, path: &Path) -> Result<()> {
        self.check()?;
        let content = self.render_module()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .with_context_fn(|| format!("Failed to write {}", path.display()))?;
        info!("Exported site config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{SiteFormat, SocialLink};
    use crate::types::VmakerError;
    use tempfile::TempDir;

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&SiteConfig::vmaker().to_json().unwrap()).unwrap();
        assert_eq!(json["title"], "Vmaker");
        assert!(json["themeConfig"]["nav"].is_array());
        assert!(json["themeConfig"]["sidebar"][0]["items"].is_array());
        assert_eq!(json["themeConfig"]["socialLinks"][0]["icon"], "github");
        assert!(
            json["themeConfig"]["socialLinks"][1]["icon"]["svg"]
                .as_str()
                .unwrap()
                .starts_with("<svg")
        );
        assert!(json.get("theme_config").is_none());
    }

    #[test]
    fn test_module_wraps_json() {
        let module = SiteConfig::vmaker().render_module().unwrap();
        assert!(module.contains("import { defineConfig } from 'vitepress'"));
        assert!(module.contains("export default defineConfig({"));
        assert!(module.trim_end().ends_with("})"));
    }

    #[test]
    fn test_yaml_parses_back() {
        let site = SiteConfig::vmaker();
        let from_yaml = SiteConfig::parse(&site.to_yaml().unwrap(), SiteFormat::Yaml).unwrap();
        assert_eq!(from_yaml, site);
    }

    #[test]
    fn test_toml_output() {
        let toml = SiteConfig::vmaker().to_toml().unwrap();
        assert!(toml.contains("title = \"Vmaker\""));
        assert!(toml.contains("themeConfig"));
    }

    #[test]
    fn test_export_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docs/.vitepress/config.mts");
        SiteConfig::vmaker().export_module(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"socialLinks\""));
    }

    #[test]
    fn test_export_refuses_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.mts");
        let mut site = SiteConfig::vmaker();
        site.theme_config
            .social_links
            .push(SocialLink::named("github", ""));
        assert!(matches!(
            site.export_module(&path),
            Err(VmakerError::Validation(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("mts".parse::<ExportFormat>().unwrap(), ExportFormat::Module);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
