//! Domain Entities
//!
//! Generated artifacts, each written once per build.
//! - `EmbeddedAsset` - A compressed web asset destined for a C header
//! - `GeneratedHeader` - Rendered header text and its file name
//! - `OtaArtifact` - A versioned firmware or filesystem image

mod embedded_asset;
mod generated_header;
mod ota_artifact;

pub use embedded_asset::EmbeddedAsset;
pub use generated_header::GeneratedHeader;
pub use ota_artifact::{ArtifactKind, OtaArtifact};
