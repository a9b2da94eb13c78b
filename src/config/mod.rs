//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (<config dir>/vmaker/config.toml)
//! 3. Project config (.vmaker/config.toml)
//! 4. `VMAKER_CONFIG` JSON blob
//! 5. Environment variables (VMAKER_*)

mod loader;
mod types;

pub use loader::{ConfigLoader, InitOptions};
pub use types::*;
