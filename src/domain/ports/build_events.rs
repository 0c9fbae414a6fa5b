//! Build Event Port
//!
//! Progress of a multi-step OTA build, observed by the terminal or a JSON
//! event stream.

use std::path::PathBuf;

use crate::domain::entities::{ArtifactKind, OtaArtifact};

/// Event emitted while building and exporting OTA images
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Build tool about to run for one image
    StepStarted {
        kind: ArtifactKind,
        env: String,
        command: String,
    },

    /// Image copied to the output directory
    Exported { artifact: OtaArtifact },

    /// Manifest describing the exported images was written
    ManifestWritten { path: PathBuf },
}

/// Receives build events
pub trait BuildEventSink {
    fn on_event(&self, event: BuildEvent);
}

/// Silent sink
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}
