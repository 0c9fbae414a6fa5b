//! LittleFS subtype compatibility patch for the espressif32 PlatformIO builder.
//!
//! The builder only recognises filesystem partitions whose subtype is one of
//! the strings `spiffs`, `fat`, `littlefs`. ESP-IDF 4.4 partition tables spell
//! LittleFS numerically (`0x83`), so `buildfs`/`uploadfs` refuse the
//! partition. The patch adds `"0x83"` to the accepted tuple.

/// Build targets that provision a filesystem image
pub const FS_TARGETS: &[&str] = &["buildfs", "uploadfs", "uploadfsota"];

const NEEDLE: &str = r#"p["subtype"] in ("spiffs", "fat", "littlefs")"#;
const REPLACEMENT: &str = r#"p["subtype"] in ("spiffs", "fat", "littlefs", "0x83")"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Content with the first occurrence of the subtype check rewritten
    Patched(String),
    /// The accepted tuple already lists `0x83`
    AlreadyApplied,
    /// The builder no longer contains the expected check
    NeedleMissing,
}

impl PatchOutcome {
    pub fn is_change(&self) -> bool {
        matches!(self, PatchOutcome::Patched(_))
    }
}

/// Compute the patched builder source without touching the file.
pub fn patch_builder_source(content: &str) -> PatchOutcome {
    if content.contains(NEEDLE) {
        PatchOutcome::Patched(content.replacen(NEEDLE, REPLACEMENT, 1))
    } else if content.contains(REPLACEMENT) {
        PatchOutcome::AlreadyApplied
    } else {
        PatchOutcome::NeedleMissing
    }
}

/// Whether any requested target builds or uploads a filesystem image.
pub fn requires_fs_patch<S: AsRef<str>>(targets: &[S]) -> bool {
    targets
        .iter()
        .any(|t| FS_TARGETS.contains(&t.as_ref().trim()))
}
