//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod command_runner;
pub mod source_control;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use command_runner::{CapturedOutput, CommandRunner, CommandSpec};
pub use source_control::SourceControl;
