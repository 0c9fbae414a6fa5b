//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `embed_assets` - Web assets to C headers
//! - `OtaUseCase` - Build and export versioned OTA images
//! - `compute_stamp` - Firmware version and build time
//! - `convert_wav_to_pcm` - WAV clip to raw PCM
//! - `apply_fs_patch` - LittleFS subtype patch for the PlatformIO builder
//! - `PrebuildUseCase` - Pre-compile hook that re-embeds assets

pub mod audio;
pub mod embed;
pub mod fs_patch;
pub mod ota;
pub mod prebuild;
pub mod stamp;

pub use audio::{convert_wav_to_pcm, PcmConversion, RateMismatch};
pub use embed::{embed_assets, EmbedOptions, EmbedReport, EmbeddedEntry, HeaderEntry, HeaderStatus};
pub use fs_patch::{apply_fs_patch, FsPatchOptions, FsPatchReport, FsPatchStatus, PatchDestination};
pub use ota::{resolve_version, OtaOptions, OtaPlan, OtaResult, OtaStep, OtaUseCase};
pub use prebuild::{detect_dialect, PrebuildOptions, PrebuildReport, PrebuildUseCase};
pub use stamp::{compute_stamp, StampFormat, StampOptions, VersionStamp};
