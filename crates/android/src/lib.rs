//! Android release tooling for Bubblepop
//!
//! This crate owns the Android release build configuration:
//! - Keystore credential loading with fallback defaults
//! - Release configuration assembly (application identity, SDK targets,
//!   app version, signing parameters)

#![warn(missing_docs)]

pub mod keystore;
pub mod release;
