//! Stamp Use Case
//!
//! Computes the firmware version and build time that get compiled into the
//! image, and renders them in the shape the caller needs. Nothing here
//! fails: missing metadata degrades to the configured fallbacks.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde_json::json;

use crate::domain::ports::SourceControl;
use crate::domain::services::resolve_firmware_version;
use crate::domain::value_objects::{BuildTime, FirmwareVersion, VersionFallbacks};
use crate::infrastructure::IniDocument;

use super::ota::VERSION_KEY;

/// Rendering of a version stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StampFormat {
    /// Compiler flags for `build_flags = !fwkit stamp`
    #[default]
    BuildFlags,
    /// C header with two `#define`s
    Header,
    Json,
    /// `KEY=value` lines for shell or CI environments
    Env,
}

/// Options for the stamp operation
#[derive(Debug, Clone)]
pub struct StampOptions {
    pub platformio_ini: PathBuf,
    pub env: String,
    pub fallbacks: VersionFallbacks,
    /// Raw `SOURCE_DATE_EPOCH` value, if set
    pub source_date_epoch: Option<String>,
}

/// Version and build time for one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStamp {
    pub env: String,
    pub version: FirmwareVersion,
    pub build_time: BuildTime,
}

impl VersionStamp {
    pub fn render(&self, format: StampFormat) -> String {
        let version = self.version.to_string();
        let build_time = self.build_time.to_string();
        let mut out = String::new();

        match format {
            StampFormat::BuildFlags => {
                let _ = writeln!(out, "{}", define_flag("FW_VERSION", &version));
                let _ = writeln!(out, "{}", define_flag("FW_BUILD_TIME", &build_time));
            }
            StampFormat::Header => {
                out.push_str("// Auto-generated firmware version stamp\n");
                out.push_str("#pragma once\n\n");
                let _ = writeln!(out, "#define FW_VERSION \"{}\"", version);
                let _ = writeln!(out, "#define FW_BUILD_TIME \"{}\"", build_time);
            }
            StampFormat::Json => {
                let value = json!({
                    "env": self.env,
                    "version": version,
                    "base": self.version.base(),
                    "hash": self.version.hash(),
                    "build_time": build_time,
                });
                let _ = writeln!(out, "{}", value);
            }
            StampFormat::Env => {
                let _ = writeln!(out, "FW_VERSION={}", version);
                let _ = writeln!(out, "FW_BUILD_TIME={}", build_time);
            }
        }

        out
    }
}

/// One `-DNAME="value"` flag as a single shell word.
///
/// PlatformIO splits `!command` output with shell rules, so the whole flag is
/// single-quoted to keep the spaces in the build time inside one argument.
fn define_flag(name: &str, value: &str) -> String {
    let c_literal = value.replace('\\', "\\\\").replace('"', "\\\"");
    let flag = format!("-D{}=\"{}\"", name, c_literal);
    format!("'{}'", flag.replace('\'', "'\\''"))
}

/// Resolve the version stamp for `options.env`.
///
/// `custom_fw_version` is looked up with `[env]` inheritance; an unreadable
/// `platformio.ini` just means there is no configured version.
pub fn compute_stamp(options: &StampOptions, scm: &dyn SourceControl) -> VersionStamp {
    let configured = match IniDocument::load(&options.platformio_ini) {
        Ok(doc) => doc
            .env_value(&options.env, VERSION_KEY)
            .map(str::to_string),
        Err(e) => {
            log::debug!("no configured version: {}", e);
            None
        }
    };

    let version = resolve_firmware_version(configured.as_deref(), scm, &options.fallbacks);
    let build_time = BuildTime::from_env_or_now(options.source_date_epoch.as_deref());
    log::info!("firmware version {} built {}", version, build_time);

    VersionStamp {
        env: options.env.clone(),
        version,
        build_time,
    }
}
