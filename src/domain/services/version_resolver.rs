//! Firmware version resolution.
//!
//! Every lookup degrades to a fallback; resolution cannot fail.

use crate::domain::ports::SourceControl;
use crate::domain::value_objects::{FirmwareVersion, VersionFallbacks};

/// Resolve `<base>+<hash>`.
///
/// Base: configured version, else latest tag, else fallback base.
/// Hash: short commit hash, else fallback hash.
pub fn resolve_firmware_version(
    configured: Option<&str>,
    scm: &dyn SourceControl,
    fallbacks: &VersionFallbacks,
) -> FirmwareVersion {
    let base = configured
        .and_then(FirmwareVersion::normalize_base)
        .or_else(|| {
            let tag = scm.latest_tag();
            if tag.is_none() {
                log::debug!("no tag reachable, using fallback base {}", fallbacks.fallback_base);
            }
            tag.and_then(|t| FirmwareVersion::normalize_base(&t))
        })
        .unwrap_or_else(|| fallbacks.fallback_base.clone());

    let hash = scm
        .short_hash()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| {
            log::debug!("no commit hash available, using {}", fallbacks.fallback_hash);
            fallbacks.fallback_hash.clone()
        });

    FirmwareVersion::new(base, hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::source_control::StaticSourceControl;

    #[test]
    fn configured_version_wins_over_tag() {
        let scm = StaticSourceControl::new(Some("v9.9.9"), Some("abc1234"));
        let v = resolve_firmware_version(Some("v1.2.3"), &scm, &VersionFallbacks::default());
        assert_eq!(v.to_string(), "1.2.3+abc1234");
    }

    #[test]
    fn blank_configured_version_uses_tag() {
        let scm = StaticSourceControl::new(Some("v2.0.1"), Some("deadbee"));
        let v = resolve_firmware_version(Some("  "), &scm, &VersionFallbacks::default());
        assert_eq!(v.to_string(), "2.0.1+deadbee");
    }

    #[test]
    fn no_git_falls_back_to_defaults() {
        let scm = StaticSourceControl::new(None, None);
        let v = resolve_firmware_version(None, &scm, &VersionFallbacks::default());
        assert_eq!(v.to_string(), "0.0.0+nogit");
    }

    #[test]
    fn custom_fallback_tokens() {
        let scm = StaticSourceControl::new(None, None);
        let fallbacks = VersionFallbacks {
            fallback_base: "0.1.0".to_string(),
            fallback_hash: "local".to_string(),
        };
        let v = resolve_firmware_version(None, &scm, &fallbacks);
        assert_eq!(v.to_string(), "0.1.0+local");
    }
}
