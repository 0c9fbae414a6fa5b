//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_time;
mod firmware_version;
mod hash;
mod header_dialect;
mod identifier;
mod mime;

pub use build_time::BuildTime;
pub use firmware_version::{FirmwareVersion, VersionFallbacks};
pub use hash::ContentHash;
pub use header_dialect::HeaderDialect;
pub use identifier::AssetIdentifier;
pub use mime::MimeType;
