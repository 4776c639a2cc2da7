//! Configuration schema definitions
//!
//! Shared configuration types for the Bubblepop tool suite.

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub signing: SigningConfig,

    #[serde(default)]
    pub android: AndroidConfig,
}

/// General project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Project name
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Android project directory relative to the repo root
    #[serde(default = "default_android_dir")]
    pub android_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            android_dir: default_android_dir(),
        }
    }
}

fn default_project_name() -> String {
    "Bubblepop".to_string()
}

fn default_android_dir() -> String {
    "android".to_string()
}

/// Release signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Name of the properties file holding release credentials,
    /// looked up under the project root
    #[serde(default = "default_properties_file")]
    pub properties_file: String,

    /// Fail the build instead of falling back to the built-in
    /// development credentials when overrides are missing
    #[serde(default)]
    pub require_overrides: bool,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            properties_file: default_properties_file(),
            require_overrides: false,
        }
    }
}

fn default_properties_file() -> String {
    "key.properties".to_string()
}

/// Android build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AndroidConfig {
    /// Application id (also used as the manifest namespace)
    #[serde(default = "default_application_id")]
    pub application_id: String,

    /// SDK version the app compiles against
    #[serde(default = "default_compile_sdk")]
    pub compile_sdk: u32,

    /// Lowest supported SDK version
    #[serde(default = "default_min_sdk")]
    pub min_sdk: u32,

    /// SDK version the app targets at runtime
    #[serde(default = "default_target_sdk")]
    pub target_sdk: u32,

    /// Pinned NDK version, when native code is built
    #[serde(default)]
    pub ndk_version: Option<String>,

    /// JVM bytecode target for Kotlin/Java compilation
    #[serde(default = "default_jvm_target")]
    pub jvm_target: u32,

    /// Monotonic version code submitted to the store
    #[serde(default = "default_version_code")]
    pub version_code: u32,

    /// Human-readable version name
    #[serde(default = "default_version_name")]
    pub version_name: String,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            application_id: default_application_id(),
            compile_sdk: default_compile_sdk(),
            min_sdk: default_min_sdk(),
            target_sdk: default_target_sdk(),
            ndk_version: None,
            jvm_target: default_jvm_target(),
            version_code: default_version_code(),
            version_name: default_version_name(),
        }
    }
}

fn default_application_id() -> String {
    "com.walther.bubblepop".to_string()
}

fn default_compile_sdk() -> u32 {
    35
}

fn default_min_sdk() -> u32 {
    21
}

fn default_target_sdk() -> u32 {
    35
}

fn default_jvm_target() -> u32 {
    11
}

fn default_version_code() -> u32 {
    1
}

fn default_version_name() -> String {
    "1.0.0".to_string()
}
