//! Prebuild Use Case
//!
//! Build-lifecycle hook run by PlatformIO before compilation. Regenerates
//! the embedded web asset headers by launching `fwkit embed` as a child
//! process under a time budget, so a hung embed cannot stall the build.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::ports::{CapturedOutput, CommandRunner, CommandSpec};
use crate::domain::value_objects::HeaderDialect;
use crate::error::{FwkitError, FwkitResult};
use crate::infrastructure::IniDocument;

/// Options for the prebuild hook
#[derive(Debug, Clone)]
pub struct PrebuildOptions {
    pub project_dir: PathBuf,
    pub data_dir: PathBuf,
    pub include_dir: PathBuf,
    pub platformio_ini: PathBuf,
    pub env: String,
    pub timeout: Duration,
    /// Executable providing the `embed` subcommand
    pub launcher: PathBuf,
    /// Config file forwarded to the child, if one was given explicitly
    pub config: Option<PathBuf>,
}

/// Result of the prebuild hook
#[derive(Debug, Clone)]
pub enum PrebuildReport {
    /// No data directory; nothing to embed
    NoDataDir { data_dir: PathBuf },
    /// Child embed run succeeded
    Embedded {
        dialect: HeaderDialect,
        output: CapturedOutput,
    },
}

/// Header dialect for `env`, from its `framework` (with `[env]` inheritance).
///
/// An unreadable `platformio.ini` or missing `framework` means Arduino.
pub fn detect_dialect(options: &PrebuildOptions) -> HeaderDialect {
    match IniDocument::load(&options.platformio_ini) {
        Ok(doc) => doc
            .env_value(&options.env, "framework")
            .map(HeaderDialect::from_framework)
            .unwrap_or_default(),
        Err(e) => {
            log::debug!("framework detection skipped: {}", e);
            HeaderDialect::default()
        }
    }
}

/// Prebuild Use Case
pub struct PrebuildUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> PrebuildUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// The embed invocation the hook runs
    pub fn embed_command(&self, options: &PrebuildOptions, dialect: HeaderDialect) -> CommandSpec {
        let mut args: Vec<String> = Vec::new();
        if let Some(config) = &options.config {
            args.push("--config".to_string());
            args.push(config.display().to_string());
        }
        args.push("embed".to_string());
        args.push(options.data_dir.display().to_string());
        args.push(options.include_dir.display().to_string());
        if dialect.is_idf() {
            args.push("--idf".to_string());
        }

        CommandSpec::new(options.launcher.display().to_string())
            .args(args)
            .cwd(&options.project_dir)
    }

    pub fn execute(&self, options: &PrebuildOptions) -> FwkitResult<PrebuildReport> {
        if !options.data_dir.is_dir() {
            return Ok(PrebuildReport::NoDataDir {
                data_dir: options.data_dir.clone(),
            });
        }

        let dialect = detect_dialect(options);
        let command = self.embed_command(options, dialect);
        log::info!("running {} (timeout {}s)", command, options.timeout.as_secs());

        let output = self.runner.run_captured(&command, options.timeout)?;
        if !output.success() {
            for line in output.stderr_lines() {
                log::error!("embed: {}", line);
            }
            return Err(FwkitError::CommandFailed {
                program: "fwkit embed".to_string(),
                code: output.code,
            });
        }

        Ok(PrebuildReport::Embedded { dialect, output })
    }
}
