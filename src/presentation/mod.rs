//! Presentation Layer
//!
//! Wires use cases to their infrastructure for the CLI.
//!
//! ```ignore
//! use fwkit::presentation::factory;
//!
//! let use_case = factory::create_ota_use_case();
//! let plan = use_case.plan(&options)?;
//! let result = use_case.execute(&plan, &sink)?;
//! ```

pub mod factory;

pub use factory::{create_ota_use_case, create_prebuild_use_case, create_source_control};
