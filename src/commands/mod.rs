//! Command handlers, one per subcommand.

pub mod embed;
pub mod fs_patch;
pub mod ota;
pub mod prebuild;
pub mod stamp;
pub mod wav2pcm;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fwkit::config::Config;

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Global options shared by every command
#[derive(Debug, Clone)]
pub struct Globals {
    pub ui: UiContext,
    pub project_dir: PathBuf,
    pub config_path: Option<PathBuf>,
}

impl Globals {
    /// Load fwkit.toml (or `--config`) and report unknown keys.
    pub fn load_config(&self, command: &str) -> Result<Config> {
        let (config, warnings) =
            Config::load_or_default(&self.project_dir, self.config_path.as_deref())
                .context("loading configuration")?;
        print_config_warnings(&self.ui, command, &warnings);
        Ok(config)
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }
}

/// Env for commands PlatformIO invokes: flag, then `$PIOENV`, then config.
pub(crate) fn build_env(flag: Option<String>, pioenv: Option<String>, config: &Config) -> String {
    flag.or_else(|| pioenv.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| config.project.env.clone())
}
