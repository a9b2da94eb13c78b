//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (<config dir>/vmaker/config.toml)
//! 3. Project config (.vmaker/config.toml)
//! 4. `VMAKER_CONFIG` (JSON object with the same keys)
//! 5. Environment variables (VMAKER_* prefix, `__` separates sections)

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use super::types::Config;
use crate::constants::config::{APP_NAME, CONFIG_ENV, CONFIG_FILE, ENV_PREFIX, PROJECT_DIR};
use crate::types::{Result, ResultExt, VmakerError};

/// Keys taken from the environment verbatim
const TEXT_KEYS: &[&str] = &[
    "raw_dir",
    "clip_dir",
    "output_dir",
    "curr_dirname",
    "ffmpeg.ffmpeg_bin",
    "ffmpeg.ffprobe_bin",
];

/// Values written by `vmaker init`
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub raw_dir: PathBuf,
    pub clip_dir: PathBuf,
    pub output_dir: PathBuf,
    pub curr_dirname: String,
    pub force: bool,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → VMAKER_CONFIG → env vars
    pub fn load() -> Result<Config> {
        let config: Config = Self::figment()?
            .extract()
            .map_err(|e| VmakerError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration and require the directories to be set
    pub fn load_initialized() -> Result<Config> {
        let config = Self::load()?;
        config.require_dirs()?;
        Ok(config)
    }

    fn figment() -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Ok(raw) = env::var(CONFIG_ENV)
            && !raw.trim().is_empty()
        {
            debug!("Loading config from {}", CONFIG_ENV);
            serde_json::from_str::<serde_json::Value>(&raw)
                .with_context(format!("Invalid {}", CONFIG_ENV))?;
            figment = figment.merge(Json::string(&raw));
        }

        // e.g. VMAKER_RAW_DIR -> raw_dir, VMAKER_FFMPEG__TIMEOUT_SECS -> ffmpeg.timeout_secs
        let env = Env::prefixed(ENV_PREFIX)
            .ignore(&["config"])
            .split("__")
            .lowercase(true);
        figment = figment.merge(env.clone().ignore(TEXT_KEYS));

        // Env parses values, which would turn an episode named `01` into 1
        for (key, value) in env.only(TEXT_KEYS).iter() {
            debug!("Env override for {}", key);
            figment = figment.merge(Serialized::default(key.as_str(), value));
        }

        Ok(figment)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory
    pub fn global_dir() -> Option<PathBuf> {
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
            && !xdg.is_empty()
        {
            return Some(PathBuf::from(xdg).join(APP_NAME));
        }
        directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_DIR).join(CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());

        let env_set = if env::var(CONFIG_ENV).is_ok() { "✓" } else { "✗" };
        println!("  Env:     {} {}", env_set, CONFIG_ENV);
    }

    /// Show current effective configuration
    pub fn show_config(as_json: bool) -> Result<()> {
        let config = Self::load()?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!("{}", toml::to_string_pretty(&config)?);
        }

        Ok(())
    }

    /// Edit the global config file with the default editor
    pub fn edit_config() -> Result<()> {
        let path = Self::global_config_path().ok_or_else(|| {
            VmakerError::Config("Cannot determine global config path".to_string())
        })?;

        if !path.exists() {
            println!("Config file does not exist: {}", path.display());
            println!("Run: vmaker init");
            return Ok(());
        }

        let editor = env::var("EDITOR").unwrap_or_else(|_| {
            if cfg!(target_os = "macos") {
                "open".to_string()
            } else if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        });

        let status = Command::new(&editor)
            .arg(&path)
            .status()
            .with_context_fn(|| format!("Failed to launch editor {}", editor))?;

        if !status.success() {
            return Err(VmakerError::Config("Editor exited with error".to_string()));
        }

        println!("Config saved: {}", path.display());
        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the global configuration and create the configured directories
    pub fn init_global(options: &InitOptions) -> Result<PathBuf> {
        let config_path = Self::global_config_path().ok_or_else(|| {
            VmakerError::Config("Cannot determine global config directory".to_string())
        })?;

        if config_path.exists() && !options.force {
            return Err(VmakerError::Config(format!(
                "Already initialized at {}. Use --force to overwrite.",
                config_path.display()
            )));
        }

        let config = Config {
            raw_dir: options.raw_dir.clone(),
            clip_dir: options.clip_dir.clone(),
            output_dir: options.output_dir.clone(),
            curr_dirname: options.curr_dirname.clone(),
            ..Default::default()
        };
        config.require_dirs()?;
        config.validate()?;

        fs::create_dir_all(config.raw_path())?;
        fs::create_dir_all(config.curr_path())?;
        fs::create_dir_all(config.output_path())?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = format!(
            "# Vmaker Configuration\n# Generated by 'vmaker init'. Env vars (VMAKER_*) override these values.\n\n{}",
            toml::to_string_pretty(&config)?
        );
        fs::write(&config_path, content)?;
        info!("Created global config: {}", config_path.display());

        Ok(config_path)
    }

    /// Point `curr_dirname` at a new episode, keeping every other key
    pub fn set_current_dir(name: &str) -> Result<PathBuf> {
        let config_path = Self::global_config_path()
            .filter(|p| p.exists())
            .ok_or(VmakerError::NotInitialized)?;

        let content = fs::read_to_string(&config_path)?;
        let mut table: toml::Table = content.parse()?;
        table.insert(
            "curr_dirname".to_string(),
            toml::Value::String(name.to_string()),
        );

        // Keep the comment header written by init
        let header: String = content
            .lines()
            .take_while(|line| line.starts_with('#') || line.trim().is_empty())
            .map(|line| format!("{}\n", line))
            .collect();
        fs::write(
            &config_path,
            format!("{}{}", header, toml::to_string_pretty(&table)?),
        )?;
        info!("Current clip directory set to '{}'", name);

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::path::Path;

    fn options(root: &Path) -> InitOptions {
        InitOptions {
            raw_dir: root.join("raw"),
            clip_dir: root.join("clips"),
            output_dir: root.join("out"),
            curr_dirname: "ep01".to_string(),
            force: false,
        }
    }

    #[test]
    fn test_load_default_config() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            assert!(matches!(
                ConfigLoader::load_initialized(),
                Err(VmakerError::NotInitialized)
            ));
            Ok(())
        });
    }

    #[test]
    fn test_init_then_load() {
        Jail::expect_with(|jail| {
            let root = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", root.join("xdg").display());

            let path = ConfigLoader::init_global(&options(&root)).map_err(|e| e.to_string())?;
            assert_eq!(path, root.join("xdg/vmaker/config.toml"));
            assert!(root.join("raw").is_dir());
            assert!(root.join("clips/ep01").is_dir());
            assert!(root.join("out").is_dir());

            let config = ConfigLoader::load_initialized().map_err(|e| e.to_string())?;
            assert_eq!(config.raw_dir, root.join("raw"));
            assert_eq!(config.curr_path(), root.join("clips/ep01"));
            Ok(())
        });
    }

    #[test]
    fn test_init_refuses_overwrite() {
        Jail::expect_with(|jail| {
            let root = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", root.join("xdg").display());

            let mut opts = options(&root);
            ConfigLoader::init_global(&opts).map_err(|e| e.to_string())?;
            assert!(ConfigLoader::init_global(&opts).is_err());

            opts.force = true;
            opts.curr_dirname = "ep02".to_string();
            ConfigLoader::init_global(&opts).map_err(|e| e.to_string())?;
            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config.curr_dirname, "ep02");
            Ok(())
        });
    }

    #[test]
    fn test_project_overrides_global_and_env_overrides_project() {
        Jail::expect_with(|jail| {
            let root = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", root.join("xdg").display());
            ConfigLoader::init_global(&options(&root)).map_err(|e| e.to_string())?;

            jail.create_dir(".vmaker")?;
            jail.create_file(".vmaker/config.toml", "curr_dirname = \"project-ep\"\n")?;
            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config.curr_dirname, "project-ep");

            jail.set_env("VMAKER_CURR_DIRNAME", "env-ep");
            jail.set_env("VMAKER_FFMPEG__TIMEOUT_SECS", "42");
            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config.curr_dirname, "env-ep");
            assert_eq!(config.ffmpeg.timeout_secs, 42);
            Ok(())
        });
    }

    #[test]
    fn test_config_json_env() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.set_env(
                "VMAKER_CONFIG",
                r#"{"raw_dir": "raw", "clip_dir": "clips", "output_dir": "out", "curr_dirname": "ep07"}"#,
            );
            let config = ConfigLoader::load_initialized().map_err(|e| e.to_string())?;
            assert_eq!(config.raw_dir, PathBuf::from("raw"));
            assert_eq!(config.curr_dirname, "ep07");
            Ok(())
        });
    }

    #[test]
    fn test_config_json_env_invalid() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.set_env("VMAKER_CONFIG", "{not json");
            let err = ConfigLoader::load().unwrap_err();
            assert!(err.to_string().contains("Invalid VMAKER_CONFIG"));
            Ok(())
        });
    }

    #[test]
    fn test_set_current_dir_keeps_other_keys() {
        Jail::expect_with(|jail| {
            let root = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", root.join("xdg").display());
            assert!(matches!(
                ConfigLoader::set_current_dir("ep02"),
                Err(VmakerError::NotInitialized)
            ));

            ConfigLoader::init_global(&options(&root)).map_err(|e| e.to_string())?;
            ConfigLoader::set_current_dir("ep02").map_err(|e| e.to_string())?;

            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config.curr_dirname, "ep02");
            assert_eq!(config.clip_dir, root.join("clips"));

            let content = fs::read_to_string(root.join("xdg/vmaker/config.toml"))
                .map_err(|e| e.to_string())?;
            assert!(content.starts_with("# Vmaker Configuration\n"));
            assert_eq!(content.matches("curr_dirname").count(), 1);
            Ok(())
        });
    }

    #[test]
    fn test_numeric_env_values_stay_text() {
        Jail::expect_with(|jail| {
            let root = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", root.join("xdg").display());
            jail.set_env("VMAKER_CURR_DIRNAME", "01");
            jail.set_env("VMAKER_RAW_DIR", "2024");
            jail.set_env("VMAKER_FFMPEG__TIMEOUT_SECS", "30");

            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config.curr_dirname, "01");
            assert_eq!(config.raw_dir, PathBuf::from("2024"));
            assert_eq!(config.ffmpeg.timeout_secs, 30);
            Ok(())
        });
    }
}
