//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Atomic writes, change-aware writes, artifact copies
//! - `process` - Blocking child processes with optional timeout
//! - `git` - Version metadata from the `git` CLI
//! - `platformio` - `platformio.ini` reading

pub mod fs;
pub mod git;
pub mod platformio;
pub mod process;

pub use fs::{atomic_write, copy_atomic, write_if_changed, WriteStatus};
pub use git::GitCli;
pub use platformio::IniDocument;
pub use process::SystemRunner;
