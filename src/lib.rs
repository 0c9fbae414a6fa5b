//! fwkit - build tooling for ESP32 PlatformIO firmware
//!
//! fwkit turns the loose scripts around a firmware build into one tool:
//! web assets are gzip-compressed into C headers, firmware and filesystem
//! images are exported under versioned names for OTA, version and build time
//! are stamped into the compile, and WAV clips are reduced to raw PCM.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    apply_fs_patch, compute_stamp, convert_wav_to_pcm, embed_assets, EmbedOptions, EmbedReport,
    OtaOptions, OtaUseCase, PrebuildUseCase, StampFormat,
};
pub use config::Config;
pub use domain::value_objects::{FirmwareVersion, HeaderDialect};
pub use error::{FwkitError, FwkitResult};
