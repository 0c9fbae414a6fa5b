//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::VersionFallbacks;
use crate::error::FwkitResult;

use super::loader::{self, ConfigWarning};

/// PlatformIO environment used when nothing else selects one
pub const DEFAULT_ENV: &str = "seeed_xiao_esp32s3";

/// Web assets embedded by default, in registry order
pub const DEFAULT_ASSET_FILES: &[&str] = &[
    "index.html",
    "style.css",
    "setup.html",
    "wifi-setup.html",
    "live.html",
    "guide.html",
    "ota.html",
    "sip.html",
    "tr064.html",
    "logs-doorbell.html",
    "logs-camera.html",
];

/// Project layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_env")]
    pub env: String,

    #[serde(default = "default_platformio_ini")]
    pub platformio_ini: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            platformio_ini: default_platformio_ini(),
        }
    }
}

fn default_env() -> String {
    DEFAULT_ENV.to_string()
}

fn default_platformio_ini() -> PathBuf {
    PathBuf::from("platformio.ini")
}

/// Web asset embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Allow-list of files under the data directory
    #[serde(default = "default_asset_files")]
    pub files: Vec<String>,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_include_dir")]
    pub include_dir: PathBuf,

    /// Time budget for the embed child process spawned by `prebuild`
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            files: default_asset_files(),
            data_dir: default_data_dir(),
            include_dir: default_include_dir(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_asset_files() -> Vec<String> {
    DEFAULT_ASSET_FILES.iter().map(|s| s.to_string()).collect()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_include_dir() -> PathBuf {
    PathBuf::from("include")
}

fn default_timeout_secs() -> u64 {
    30
}

/// OTA packaging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtaConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_build_tool")]
    pub build_tool: String,
}

impl Default for OtaConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            output_dir: default_output_dir(),
            build_tool: default_build_tool(),
        }
    }
}

fn default_prefix() -> String {
    "XIAOS3Sense".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist/ota")
}

fn default_build_tool() -> String {
    "pio".to_string()
}

/// Audio conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_sample_rate")]
    pub expected_sample_rate: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            expected_sample_rate: default_sample_rate(),
        }
    }
}

fn default_sample_rate() -> u32 {
    16_000
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub embed: EmbedConfig,

    #[serde(default)]
    pub ota: OtaConfig,

    #[serde(default)]
    pub version: VersionFallbacks,

    #[serde(default)]
    pub audio: AudioConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FwkitResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FwkitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `--config FILE`, else `<project_dir>/fwkit.toml`, else defaults;
    /// then apply `FWKIT_*` overrides.
    pub fn load_or_default(
        project_dir: &Path,
        explicit: Option<&Path>,
    ) -> FwkitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_dir, explicit)
    }

    /// Apply environment variable overrides (FWKIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// `platformio.ini` location relative to `project_dir`
    pub fn platformio_ini_in(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.project.platformio_ini)
    }
}
