//! Core utilities for Bubblepop development tools
//!
//! This crate provides shared functionality used by the platform-specific tools:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Property files**: `key=value` parsing with explicit missing-file handling
//! - **Configuration**: TOML-based tool configuration with defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use bubblepop_core::properties;
//! use std::path::Path;
//!
//! let file = properties::load(Path::new("android/key.properties")).unwrap();
//! let props = file.into_set();
//! let alias = props.get_or("keyAlias", "wally");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod properties;

pub use error::{Error, ErrorCode, Result, ResultExt};
