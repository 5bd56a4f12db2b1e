//! CLI command implementations.

pub mod common;
pub mod defaults;
pub mod fields;
pub mod legacy;
pub mod presets;
pub mod set;
