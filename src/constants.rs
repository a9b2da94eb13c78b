//! Global Constants
//!
//! Centralized constants for configuration and defaults.

/// Documentation site constants
pub mod site {
    pub const SITE_TITLE: &str = "Vmaker";

    pub const SITE_DESCRIPTION: &str =
        "A tutorial video maker for programmers. Built on ffmpeg.";

    /// Common icon names; others are allowed but logged
    pub const KNOWN_SOCIAL_ICONS: &[&str] = &[
        "bluesky",
        "discord",
        "facebook",
        "github",
        "instagram",
        "linkedin",
        "mastodon",
        "npm",
        "slack",
        "twitter",
        "x",
        "youtube",
    ];

    pub const FFMPEG_ICON_SVG: &str = r#"<svg role="img" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><title>FFmpeg</title><path d="M3 4h18v16H3zM6 4v16M18 4v16M3 8h3M3 12h3M3 16h3M18 8h3M18 12h3M18 16h3"/></svg>"#;

    /// Default export target of `vmaker site export`
    pub const DEFAULT_MODULE_PATH: &str = "docs/.vitepress/config.mts";
}

/// Video discovery constants
pub mod video {
    /// Extensions treated as videos (compared case-insensitively)
    pub const DEFAULT_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv", "flv"];

    /// Datetime format shown in video tables
    pub const DISPLAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// File stem format for time-based renames
    pub const RENAME_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

    /// Suffix appended by `vmaker cut` when no output is given
    pub const CUT_SUFFIX: &str = "cut";

    /// Suffix appended by `vmaker mute` when no output is given
    pub const MUTE_SUFFIX: &str = "muted";
}

/// ffmpeg process constants
pub mod media {
    pub const DEFAULT_FFMPEG_BIN: &str = "ffmpeg";

    pub const DEFAULT_FFPROBE_BIN: &str = "ffprobe";

    /// Per-invocation timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

    /// Lines of stderr kept in error messages
    pub const STDERR_TAIL_LINES: usize = 8;
}

/// Configuration file constants
pub mod config {
    /// Application name used for the platform config directory
    pub const APP_NAME: &str = "vmaker";

    pub const CONFIG_FILE: &str = "config.toml";

    /// Project-local directory holding an override config
    pub const PROJECT_DIR: &str = ".vmaker";

    /// JSON blob env var carrying a full config
    pub const CONFIG_ENV: &str = "VMAKER_CONFIG";

    /// Prefix of per-key env overrides
    pub const ENV_PREFIX: &str = "VMAKER_";
}
