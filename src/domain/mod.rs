//! Domain Layer
//!
//! Pure build-tool logic: header rendering, WAV parsing, version resolution,
//! builder patching. Nothing here touches the file system or spawns processes.
//!
//! ## Structure
//!
//! - `entities/` - Generated artifacts (EmbeddedAsset, OtaArtifact)
//! - `value_objects/` - Immutable value types (AssetIdentifier, MimeType, FirmwareVersion)
//! - `services/` - Stateless transforms (HeaderRenderer, WavClip, builder patch)
//! - `ports/` - Interfaces for infrastructure (CommandRunner, SourceControl)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
