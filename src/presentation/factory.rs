//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{OtaUseCase, PrebuildUseCase};
use crate::infrastructure::{GitCli, SystemRunner};

/// OtaUseCase driving the real build tool
pub type ConcreteOtaUseCase = OtaUseCase<SystemRunner>;

/// PrebuildUseCase spawning a real child `fwkit embed`
pub type ConcretePrebuildUseCase = PrebuildUseCase<SystemRunner>;

pub fn create_ota_use_case() -> ConcreteOtaUseCase {
    OtaUseCase::new(SystemRunner::new())
}

pub fn create_prebuild_use_case() -> ConcretePrebuildUseCase {
    PrebuildUseCase::new(SystemRunner::new())
}

/// Version metadata from the git checkout containing `project_dir`
pub fn create_source_control(project_dir: &Path) -> GitCli {
    GitCli::new(project_dir)
}
