//! Domain Services
//!
//! Stateless transforms over in-memory data.

pub mod builder_patch;
pub mod compression;
pub mod header_renderer;
pub mod version_resolver;
pub mod wav;

pub use builder_patch::{patch_builder_source, requires_fs_patch, PatchOutcome, FS_TARGETS};
pub use header_renderer::HeaderRenderer;
pub use version_resolver::resolve_firmware_version;
pub use wav::{WavClip, WavFormat};
