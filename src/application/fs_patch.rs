//! Builder patch use case
//!
//! Makes the espressif32 PlatformIO builder accept numeric LittleFS
//! partitions. By default the patched builder is written to a separate
//! override file and the platform package is left alone; rewriting the
//! package in place must be asked for.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::{patch_builder_source, requires_fs_patch, PatchOutcome};
use crate::error::FwkitResult;
use crate::infrastructure::fs::{write_if_changed, WriteStatus};

/// Where the patched builder goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchDestination {
    /// Rewrite the builder itself
    InPlace,
    /// Write a patched copy here
    Output(PathBuf),
}

/// Options for the patch operation
#[derive(Debug, Clone)]
pub struct FsPatchOptions {
    /// The builder's `main.py`
    pub builder: PathBuf,
    /// Build targets of the current invocation; `None` applies unconditionally
    pub targets: Option<Vec<String>>,
    pub destination: PatchDestination,
}

impl FsPatchOptions {
    /// Builder script inside an espressif32 platform package
    pub fn builder_in_platform(platform_dir: &Path) -> PathBuf {
        platform_dir.join("builder").join("main.py")
    }
}

/// What the patch run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsPatchStatus {
    /// No filesystem target requested
    NotRequested,
    /// Builder file does not exist
    BuilderMissing,
    /// Subtype check rewritten and written out
    Patched,
    /// Builder already accepts `0x83`
    AlreadyApplied,
    /// Builder no longer contains the expected check
    NeedleMissing,
}

/// Result of the patch operation
#[derive(Debug, Clone)]
pub struct FsPatchReport {
    pub builder: PathBuf,
    pub status: FsPatchStatus,
    /// File written by this run, if any
    pub written: Option<PathBuf>,
}

impl FsPatchReport {
    fn new(builder: &Path, status: FsPatchStatus) -> Self {
        Self {
            builder: builder.to_path_buf(),
            status,
            written: None,
        }
    }
}

/// Apply the LittleFS subtype patch. Applying twice changes nothing.
pub fn apply_fs_patch(options: &FsPatchOptions) -> FwkitResult<FsPatchReport> {
    let builder = options.builder.as_path();

    if let Some(targets) = &options.targets {
        if !requires_fs_patch(targets.as_slice()) {
            log::debug!("no filesystem target in {:?}", targets);
            return Ok(FsPatchReport::new(builder, FsPatchStatus::NotRequested));
        }
    }

    if !builder.is_file() {
        log::debug!("builder not found at {}", builder.display());
        return Ok(FsPatchReport::new(builder, FsPatchStatus::BuilderMissing));
    }

    let content = fs::read_to_string(builder)?;
    let (status, patched) = match patch_builder_source(&content) {
        PatchOutcome::Patched(patched) => (FsPatchStatus::Patched, patched),
        PatchOutcome::AlreadyApplied => (FsPatchStatus::AlreadyApplied, content),
        PatchOutcome::NeedleMissing => {
            return Ok(FsPatchReport::new(builder, FsPatchStatus::NeedleMissing));
        }
    };

    let target = match &options.destination {
        PatchDestination::InPlace if status == FsPatchStatus::AlreadyApplied => {
            return Ok(FsPatchReport::new(builder, status));
        }
        PatchDestination::InPlace => builder.to_path_buf(),
        PatchDestination::Output(path) => path.clone(),
    };

    let mut report = FsPatchReport::new(builder, status);
    if write_if_changed(&target, patched.as_bytes())? == WriteStatus::Written {
        log::info!("wrote patched builder to {}", target.display());
        report.written = Some(target);
    }
    Ok(report)
}
