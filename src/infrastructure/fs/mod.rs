//! File System Helpers
//!
//! All generated output goes through `atomic_write`, so an interrupted run
//! never leaves a half-written header or image behind.

mod local;

pub use local::{atomic_write, copy_atomic, write_if_changed, WriteStatus};
