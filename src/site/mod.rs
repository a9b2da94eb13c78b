//! Documentation Site Configuration
//!
//! Typed model of the documentation site config: title, description,
//! top navigation, sidebar groups and social links. The config is built
//! once (built-in or loaded from a file), validated, and exported in the
//! shape the external site generator consumes.

mod builtin;
mod export;
mod model;
mod validate;

pub use export::ExportFormat;
pub use model::{
    LinkTarget, NavEntry, SidebarGroup, SiteConfig, SiteFormat, SocialIcon, SocialLink,
    ThemeConfig,
};
pub use validate::SiteIssue;
