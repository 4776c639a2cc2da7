//! Keystore credential loading
//!
//! Release signing credentials live in an optional properties file
//! (`key.properties` by default) at the Android project root. Keys absent
//! from the file fall back to the built-in development defaults, and every
//! fallback is logged: a release signed with development credentials must
//! never be a silent accident.

use bubblepop_core::config::SigningConfig;
use bubblepop_core::error::{Error, Result};
use bubblepop_core::properties::{self, PropertySet};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Development fallback for `keyAlias`
pub const DEFAULT_KEY_ALIAS: &str = "wally";
/// Development fallback for `keyPassword`
pub const DEFAULT_KEY_PASSWORD: &str = "Manchester2000";
/// Development fallback for `storeFile`
pub const DEFAULT_STORE_FILE: &str = "keystore.jks";
/// Development fallback for `storePassword`
pub const DEFAULT_STORE_PASSWORD: &str = "Manchester2000";

/// Fully-resolved release signing parameters.
///
/// Every field is non-empty after resolution: values come from the
/// properties file when present, otherwise from the development defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningParameters {
    /// Alias of the signing key inside the keystore
    pub key_alias: String,
    /// Password for the signing key
    pub key_password: String,
    /// Keystore file, resolved against the project root
    pub store_file: PathBuf,
    /// Password for the keystore itself
    pub store_password: String,
    #[serde(skip)]
    defaulted: Vec<&'static str>,
}

impl SigningParameters {
    /// Resolve signing parameters from a property set.
    ///
    /// A relative `storeFile` resolves against `project_root`, not the
    /// current working directory. Absolute values pass through unchanged.
    pub fn from_properties(props: &PropertySet, project_root: &Path) -> Self {
        let mut defaulted = Vec::new();
        let mut resolve = |key: &'static str, fallback: &str| match props.get(key) {
            Some(value) => value.to_string(),
            None => {
                defaulted.push(key);
                fallback.to_string()
            }
        };

        let key_alias = resolve("keyAlias", DEFAULT_KEY_ALIAS);
        let key_password = resolve("keyPassword", DEFAULT_KEY_PASSWORD);
        let store = resolve("storeFile", DEFAULT_STORE_FILE);
        let store_password = resolve("storePassword", DEFAULT_STORE_PASSWORD);

        let store_file = if Path::new(&store).is_absolute() {
            PathBuf::from(store)
        } else {
            project_root.join(store)
        };

        Self {
            key_alias,
            key_password,
            store_file,
            store_password,
            defaulted,
        }
    }

    /// Keys that fell back to the built-in development defaults
    pub fn defaulted_keys(&self) -> &[&'static str] {
        &self.defaulted
    }

    /// Whether every field was supplied by the properties file
    pub fn fully_configured(&self) -> bool {
        self.defaulted.is_empty()
    }
}

/// Load and resolve release signing parameters for a project.
///
/// A missing properties file is an expected condition and resolves to the
/// development defaults, unless `require_overrides` is set, in which case
/// incomplete credentials are a hard error.
pub fn resolve(project_root: &Path, config: &SigningConfig) -> Result<SigningParameters> {
    let path = project_root.join(&config.properties_file);
    let file = properties::load(&path)?;

    if file.is_missing() {
        debug!(path = %path.display(), "signing properties file not found");
    } else {
        debug!(path = %path.display(), "loaded signing properties");
    }

    let params = SigningParameters::from_properties(&file.into_set(), project_root);

    if !params.fully_configured() {
        if config.require_overrides {
            return Err(Error::credentials_not_configured(&path).with_context(format!(
                "Missing keys: {}",
                params.defaulted_keys().join(", ")
            )));
        }
        warn!(
            path = %path.display(),
            keys = %params.defaulted_keys().join(", "),
            "using built-in development signing defaults"
        );
    }

    Ok(params)
}
