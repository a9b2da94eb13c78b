//! Site Config Validation
//!
//! Collects every issue instead of stopping at the first one, so a
//! broken config can be fixed in a single pass.

use std::fmt;
use tracing::warn;
use url::Url;

use super::model::{LinkTarget, NavEntry, SiteConfig, SocialIcon};
use crate::constants::site::KNOWN_SOCIAL_ICONS;
use crate::types::{Result, VmakerError};

/// A single validation problem, located by its serialized path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIssue {
    pub path: String,
    pub message: String,
}

impl SiteIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SiteIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl SiteConfig {
    /// Return every issue found; empty means valid
    pub fn validate(&self) -> Vec<SiteIssue> {
        let mut issues = Vec::new();

        if self.title.trim().is_empty() {
            issues.push(SiteIssue::new("title", "must not be empty"));
        }

        let theme = &self.theme_config;
        for (i, entry) in theme.nav.iter().enumerate() {
            check_entry(&format!("themeConfig.nav[{}]", i), entry, &mut issues);
        }

        for (g, group) in theme.sidebar.iter().enumerate() {
            let path = format!("themeConfig.sidebar[{}]", g);
            if group.text.trim().is_empty() {
                issues.push(SiteIssue::new(format!("{}.text", path), "must not be empty"));
            }
            if group.items.is_empty() {
                issues.push(SiteIssue::new(&path, "group has no items"));
            }
            for (i, entry) in group.items.iter().enumerate() {
                check_entry(&format!("{}.items[{}]", path, i), entry, &mut issues);
            }
        }

        for (i, social) in theme.social_links.iter().enumerate() {
            let path = format!("themeConfig.socialLinks[{}]", i);
            match &social.icon {
                SocialIcon::Named(name) if name.trim().is_empty() => {
                    issues.push(SiteIssue::new(format!("{}.icon", path), "must not be empty"));
                }
                SocialIcon::Named(name) if !KNOWN_SOCIAL_ICONS.contains(&name.as_str()) => {
                    warn!("{}.icon: '{}' is not a common icon name", path, name);
                }
                SocialIcon::Svg { svg } if !svg.trim_start().starts_with("<svg") => {
                    issues.push(SiteIssue::new(
                        format!("{}.icon.svg", path),
                        "must start with <svg",
                    ));
                }
                _ => {}
            }
            let link = social.link.trim();
            if link.is_empty() {
                issues.push(SiteIssue::new(format!("{}.link", path), "must not be empty"));
            } else if Url::parse(link).is_err() {
                issues.push(SiteIssue::new(
                    format!("{}.link", path),
                    format!("'{}' is not an absolute URL", link),
                ));
            }
        }

        issues
    }

    /// Fail with every issue when the config is invalid
    pub fn check(&self) -> Result<()> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(VmakerError::Validation(issues))
        }
    }
}

fn check_entry(path: &str, entry: &NavEntry, issues: &mut Vec<SiteIssue>) {
    if entry.text.trim().is_empty() {
        issues.push(SiteIssue::new(format!("{}.text", path), "must not be empty"));
    }
    if entry.link.trim().is_empty() {
        issues.push(SiteIssue::new(format!("{}.link", path), "must not be empty"));
    } else if LinkTarget::classify(&entry.link).is_none() {
        issues.push(SiteIssue::new(
            format!("{}.link", path),
            format!("'{}' is neither a /route nor an absolute URL", entry.link),
        ));
    }
}
