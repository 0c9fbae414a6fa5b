//! Firmware version value object.
//!
//! `<base>+<hash>`, e.g. `1.4.2+a1b2c3d` or `0.0.0+nogit`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tokens used when a version component cannot be determined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionFallbacks {
    #[serde(default = "default_fallback_base")]
    pub fallback_base: String,

    #[serde(default = "default_fallback_hash")]
    pub fallback_hash: String,
}

impl Default for VersionFallbacks {
    fn default() -> Self {
        Self {
            fallback_base: default_fallback_base(),
            fallback_hash: default_fallback_hash(),
        }
    }
}

fn default_fallback_base() -> String {
    "0.0.0".to_string()
}

fn default_fallback_hash() -> String {
    "nogit".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareVersion {
    base: String,
    hash: String,
}

impl FirmwareVersion {
    pub fn new(base: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            hash: hash.into(),
        }
    }

    /// Normalize a version base: drop leading `v` characters and whitespace.
    ///
    /// Returns `None` when nothing is left.
    pub fn normalize_base(raw: &str) -> Option<String> {
        let base = raw.trim().trim_start_matches('v').trim();
        if base.is_empty() {
            None
        } else {
            Some(base.to_string())
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.base, self.hash)
    }
}
