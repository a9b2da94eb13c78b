//! Site Config Types
//!
//! Declarative configuration for the documentation site generator.
//! Field names serialize in the generator's camelCase shape
//! (`themeConfig`, `socialLinks`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;
use url::Url;

use crate::types::{Result, VmakerError};

/// Root of the documentation site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title shown in the navigation bar and page titles
    pub title: String,

    /// Meta description
    #[serde(default)]
    pub description: String,

    /// Navigation, sidebar and social links
    #[serde(default)]
    pub theme_config: ThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub nav: Vec<NavEntry>,
    pub sidebar: Vec<SidebarGroup>,
    pub social_links: Vec<SocialLink>,
}

/// A labeled link in the top navigation bar or inside a sidebar group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub text: String,
    pub link: String,
}

impl NavEntry {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn target(&self) -> Option<LinkTarget> {
        LinkTarget::classify(&self.link)
    }
}

/// Labeled, ordered collection of entries shown in the side panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,
    #[serde(default)]
    pub items: Vec<NavEntry>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

/// Icon plus URL pair linking to an external profile or repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

impl SocialLink {
    pub fn named(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: SocialIcon::Named(icon.into()),
            link: link.into(),
        }
    }

    pub fn svg(markup: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: SocialIcon::Svg {
                svg: markup.into(),
            },
            link: link.into(),
        }
    }
}

/// Social icon: a name the generator ships with, or inline SVG markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialIcon {
    Named(String),
    Svg { svg: String },
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialIcon::Named(name) => write!(f, "{}", name),
            SocialIcon::Svg { .. } => write!(f, "<svg>"),
        }
    }
}

/// Where a link points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Route inside the site, e.g. `/guide/getting-started`
    Internal(String),
    /// Absolute URL outside the site
    External(Url),
}

impl LinkTarget {
    /// Classify a link; `None` when it is neither a route nor an absolute URL
    pub fn classify(link: &str) -> Option<Self> {
        let link = link.trim();
        if link.is_empty() {
            return None;
        }
        if link.starts_with('/') && !link.starts_with("//") {
            return Some(LinkTarget::Internal(link.to_string()));
        }
        Url::parse(link).ok().map(LinkTarget::External)
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, LinkTarget::Internal(_))
    }
}

/// Serialization format of a site config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteFormat {
    Toml,
    Yaml,
    Json,
}

impl SiteFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(SiteFormat::Toml),
            "yaml" | "yml" => Ok(SiteFormat::Yaml),
            "json" => Ok(SiteFormat::Json),
            _ => Err(VmakerError::Config(format!(
                "Unsupported site config format '{}'. Valid extensions: toml, yaml, yml, json",
                path.display()
            ))),
        }
    }
}

impl SiteConfig {
    /// Load a site config from a TOML, YAML or JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let format = SiteFormat::from_path(path)?;
        if !path.exists() {
            return Err(VmakerError::NotFound(path.to_path_buf()));
        }
        debug!("Loading site config from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: SiteFormat) -> Result<Self> {
        let config: SiteConfig = match format {
            SiteFormat::Toml => toml::from_str(content)?,
            SiteFormat::Yaml => serde_yaml::from_str(content)?,
            SiteFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// All nav entries, top bar first, then sidebar items in order
    pub fn all_entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.theme_config.nav.iter().chain(
            self.theme_config
                .sidebar
                .iter()
                .flat_map(|group| group.items.iter()),
        )
    }
}
