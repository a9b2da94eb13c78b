//! Built-in Vmaker documentation site

use super::model::{NavEntry, SidebarGroup, SiteConfig, SocialLink, ThemeConfig};
use crate::constants::site::{FFMPEG_ICON_SVG, SITE_DESCRIPTION, SITE_TITLE};

impl SiteConfig {
    /// Navigation, sidebar and social links for the Vmaker docs
    pub fn vmaker() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            theme_config: ThemeConfig {
                nav: vec![
                    NavEntry::new("Home", "/"),
                    NavEntry::new("Guide", "/guide/getting-started"),
                    NavEntry::new("Reference", "/reference/commands"),
                ],
                sidebar: vec![
                    SidebarGroup::new(
                        "Guide",
                        vec![
                            NavEntry::new("Getting Started", "/guide/getting-started"),
                            NavEntry::new("Configuration", "/guide/configuration"),
                            NavEntry::new("Recording Workflow", "/guide/workflow"),
                        ],
                    ),
                    SidebarGroup::new(
                        "Reference",
                        vec![
                            NavEntry::new("Commands", "/reference/commands"),
                            NavEntry::new("Rename Strategies", "/reference/rename-strategies"),
                            NavEntry::new("ffmpeg Integration", "/reference/ffmpeg"),
                        ],
                    ),
                ],
                social_links: vec![
                    SocialLink::named("github", "https://github.com/FFmpeg/FFmpeg"),
                    SocialLink::svg(FFMPEG_ICON_SVG, "https://ffmpeg.org"),
                ],
            },
        }
    }
}
