//! Release configuration assembly
//!
//! Produces everything the Android build needs for a signed release:
//! application identity, SDK version targets, app version, and the
//! resolved signing parameters.

use crate::keystore::{self, SigningParameters};
use bubblepop_core::config::{AndroidConfig, ConfigSchema};
use bubblepop_core::error::{Error, Result, ResultExt};
use serde::Serialize;
use std::path::Path;

/// SDK version targets for the Android build
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkVersions {
    /// SDK version the app compiles against
    pub compile_sdk: u32,
    /// Lowest supported SDK version
    pub min_sdk: u32,
    /// SDK version the app targets at runtime
    pub target_sdk: u32,
    /// Pinned NDK version, when native code is built
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ndk_version: Option<String>,
    /// JVM bytecode target for Kotlin/Java compilation
    pub jvm_target: u32,
}

impl SdkVersions {
    /// Build SDK targets from tool configuration, validating ordering
    pub fn from_config(config: &AndroidConfig) -> Result<Self> {
        if config.min_sdk > config.target_sdk || config.target_sdk > config.compile_sdk {
            return Err(Error::invalid_value(format!(
                "SDK versions must satisfy minSdk <= targetSdk <= compileSdk, got {} / {} / {}",
                config.min_sdk, config.target_sdk, config.compile_sdk
            )));
        }

        Ok(Self {
            compile_sdk: config.compile_sdk,
            min_sdk: config.min_sdk,
            target_sdk: config.target_sdk,
            ndk_version: config.ndk_version.clone(),
            jvm_target: config.jvm_target,
        })
    }
}

/// Application version identity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVersion {
    /// Monotonic version code submitted to the store
    pub code: u32,
    /// Human-readable version name
    pub name: String,
}

impl AppVersion {
    /// Build the app version from tool configuration
    pub fn from_config(config: &AndroidConfig) -> Result<Self> {
        if config.version_code == 0 {
            return Err(Error::invalid_value("versionCode must be at least 1"));
        }
        if config.version_name.trim().is_empty() {
            return Err(Error::invalid_value("versionName must not be empty"));
        }

        Ok(Self {
            code: config.version_code,
            name: config.version_name.clone(),
        })
    }
}

/// Fully-resolved release build configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
    /// Application id (also the manifest namespace)
    pub application_id: String,
    /// SDK version targets
    pub sdk: SdkVersions,
    /// Application version
    pub version: AppVersion,
    /// Release signing parameters
    pub signing: SigningParameters,
}

/// Resolve the complete release configuration for a project
pub fn resolve(project_root: &Path, config: &ConfigSchema) -> Result<ReleaseConfig> {
    let sdk = SdkVersions::from_config(&config.android)?;
    let version = AppVersion::from_config(&config.android)?;
    let signing = keystore::resolve(project_root, &config.signing)
        .context("While resolving release signing parameters")?;

    Ok(ReleaseConfig {
        application_id: config.android.application_id.clone(),
        sdk,
        version,
        signing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubblepop_core::ErrorCode;

    #[test]
    fn test_resolve_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let release = resolve(dir.path(), &ConfigSchema::default()).unwrap();

        assert_eq!(release.application_id, "com.walther.bubblepop");
        assert_eq!(release.sdk.compile_sdk, 35);
        assert_eq!(release.sdk.min_sdk, 21);
        assert_eq!(release.version.code, 1);
        assert_eq!(release.signing.key_alias, "wally");
    }

    #[test]
    fn test_sdk_ordering_is_validated() {
        let config = AndroidConfig {
            min_sdk: 30,
            target_sdk: 24,
            ..AndroidConfig::default()
        };

        let err = SdkVersions::from_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_version_code_zero_is_rejected() {
        let config = AndroidConfig {
            version_code: 0,
            ..AndroidConfig::default()
        };

        let err = AppVersion::from_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_blank_version_name_is_rejected() {
        let config = AndroidConfig {
            version_name: "  ".to_string(),
            ..AndroidConfig::default()
        };

        assert!(AppVersion::from_config(&config).is_err());
    }

    #[test]
    fn test_ndk_version_omitted_from_json_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let release = resolve(dir.path(), &ConfigSchema::default()).unwrap();

        let json = serde_json::to_value(&release).unwrap();
        assert_eq!(json["applicationId"], "com.walther.bubblepop");
        assert_eq!(json["sdk"]["compileSdk"], 35);
        assert!(json["sdk"].get("ndkVersion").is_none());
        assert_eq!(json["signing"]["keyAlias"], "wally");
    }

    #[test]
    fn test_signing_failure_carries_context() {
        use bubblepop_core::config::SigningConfig;

        let dir = tempfile::tempdir().unwrap();
        let config = ConfigSchema {
            signing: SigningConfig {
                require_overrides: true,
                ..SigningConfig::default()
            },
            ..ConfigSchema::default()
        };

        let err = resolve(dir.path(), &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CredentialsNotConfigured);
        assert!(err.context.is_some());
    }
}
