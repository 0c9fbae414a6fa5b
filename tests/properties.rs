//! Property tests for fwkit.
//!
//! Randomized inputs protect the invariants the generated firmware sources
//! depend on: valid C identifiers, reproducible headers, never-panicking
//! parsers and an idempotent builder patch.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/assets.rs"]
mod assets;

#[path = "properties/builder_patch.rs"]
mod builder_patch;

#[path = "properties/wav.rs"]
mod wav;

#[path = "properties/platformio_ini.rs"]
mod platformio_ini;
