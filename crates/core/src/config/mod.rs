//! Configuration loading and schema definitions
//!
//! Tool configuration shared across the Bubblepop tool suite.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
