//! OtaArtifact entity - a built image exported under a versioned name

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::ContentHash;

/// Image kinds produced by a PlatformIO build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Firmware,
    Littlefs,
}

impl ArtifactKind {
    /// File name PlatformIO writes under `.pio/build/<env>/`
    pub fn image_name(&self) -> &'static str {
        match self {
            ArtifactKind::Firmware => "firmware.bin",
            ArtifactKind::Littlefs => "littlefs.bin",
        }
    }

    /// Arguments passed to the build tool to produce this image
    pub fn build_args(&self, env: &str) -> Vec<String> {
        let mut args = vec!["run".to_string()];
        if matches!(self, ArtifactKind::Littlefs) {
            args.push("-t".to_string());
            args.push("buildfs".to_string());
        }
        args.push("-e".to_string());
        args.push(env.to_string());
        args
    }

    /// Exported file name, `<prefix>-<version>-<kind>.bin`
    pub fn export_name(&self, prefix: &str, version: &str) -> String {
        format!("{}-{}-{}.bin", prefix, version, self)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Firmware => f.write_str("firmware"),
            ArtifactKind::Littlefs => f.write_str("littlefs"),
        }
    }
}

/// An image copied to the OTA output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtaArtifact {
    pub kind: ArtifactKind,
    pub source: PathBuf,
    pub exported: PathBuf,
    pub size: u64,
    #[serde(serialize_with = "serialize_hash")]
    pub sha256: ContentHash,
}

fn serialize_hash<S: serde::Serializer>(hash: &ContentHash, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(hash.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firmware_build_args() {
        assert_eq!(
            ArtifactKind::Firmware.build_args("seeed_xiao_esp32s3"),
            vec!["run", "-e", "seeed_xiao_esp32s3"]
        );
    }

    #[test]
    fn filesystem_build_args_use_buildfs_target() {
        assert_eq!(
            ArtifactKind::Littlefs.build_args("esp32"),
            vec!["run", "-t", "buildfs", "-e", "esp32"]
        );
    }

    #[test]
    fn export_name_includes_prefix_version_and_kind() {
        assert_eq!(
            ArtifactKind::Firmware.export_name("XIAOS3Sense", "1.2.0"),
            "XIAOS3Sense-1.2.0-firmware.bin"
        );
        assert_eq!(
            ArtifactKind::Littlefs.export_name("XIAOS3Sense", "1.2.0"),
            "XIAOS3Sense-1.2.0-littlefs.bin"
        );
    }
}
