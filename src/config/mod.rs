//! Configuration module for fwkit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FWKIT_*)
//! 3. Project config (fwkit.toml, or `--config FILE`)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{with_env_overrides, with_env_overrides_from, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{
    AudioConfig, Config, EmbedConfig, OtaConfig, ProjectConfig, DEFAULT_ASSET_FILES, DEFAULT_ENV,
};
