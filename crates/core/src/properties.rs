//! Property-file parsing and loading
//!
//! Parses the `key=value` format Android tooling uses for files like
//! `key.properties`: one pair per line, `#` starts a comment, blank lines
//! are ignored. A missing file is an expected condition, not an error, and
//! is reported as an explicit [`PropertyFile::Missing`] branch.

use crate::error::{Error, Result};
use std::path::Path;

/// An ordered set of `key=value` pairs loaded from a property file.
///
/// Keys are unique; a later duplicate overwrites the earlier value while
/// keeping its original position, matching standard property-file
/// semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: Vec<(String, String)>,
}

impl PropertySet {
    /// Create an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse property-file content.
    ///
    /// Lines without a `=` separator are skipped silently, matching
    /// typical property-file parser behavior.
    pub fn parse(content: &str) -> Self {
        let mut set = Self::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                set.insert(key.trim(), value.trim());
            }
        }
        set
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a value by key, falling back to a default when absent
    pub fn get_or(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or(fallback).to_string()
    }

    /// Whether the set contains a key
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }
}

/// Result of attempting to load a property file.
///
/// Absence is modeled as a branch rather than an error so callers decide
/// how to handle the fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyFile {
    /// The file existed and was parsed
    Found(PropertySet),
    /// No file at the given path
    Missing,
}

impl PropertyFile {
    /// The parsed set, or an empty set when the file was missing
    pub fn into_set(self) -> PropertySet {
        match self {
            PropertyFile::Found(set) => set,
            PropertyFile::Missing => PropertySet::new(),
        }
    }

    /// Whether the file was missing
    pub fn is_missing(&self) -> bool {
        matches!(self, PropertyFile::Missing)
    }
}

/// Load a property file from disk.
///
/// A missing file returns [`PropertyFile::Missing`]. Any other read
/// failure (for example permission denied) is a configuration error:
/// building while unable to read an existing file is unsafe to ignore.
pub fn load(path: &Path) -> Result<PropertyFile> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(PropertyFile::Found(PropertySet::parse(&content))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PropertyFile::Missing),
        Err(e) => Err(Error::config(format!(
            "Failed to read property file {}: {}",
            path.display(),
            e
        ))
        .with_source(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let props = PropertySet::parse("keyAlias=upload\nstorePassword=secret");
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("keyAlias"), Some("upload"));
        assert_eq!(props.get("storePassword"), Some("secret"));
        assert!(props.get("keyPassword").is_none());
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let with_noise = "# release credentials\n\n  \nkeyAlias=upload\n# trailing note\nstoreFile=release.jks\n";
        let stripped = "keyAlias=upload\nstoreFile=release.jks";
        assert_eq!(PropertySet::parse(with_noise), PropertySet::parse(stripped));
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let props = PropertySet::parse("not a property line\nkeyAlias=upload");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("keyAlias"), Some("upload"));
    }

    #[test]
    fn test_parse_later_duplicate_overwrites() {
        let props = PropertySet::parse("keyAlias=first\nkeyAlias=second");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("keyAlias"), Some("second"));
    }

    #[test]
    fn test_parse_value_may_contain_separator() {
        let props = PropertySet::parse("storeFile=keys/release=v2.jks");
        assert_eq!(props.get("storeFile"), Some("keys/release=v2.jks"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let props = PropertySet::parse("  keyAlias = upload  ");
        assert_eq!(props.get("keyAlias"), Some("upload"));
    }

    #[test]
    fn test_parse_preserves_order() {
        let props = PropertySet::parse("b=2\na=1\nb=3");
        let keys: Vec<&str> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_get_or_falls_back() {
        let props = PropertySet::parse("keyAlias=upload");
        assert_eq!(props.get_or("keyAlias", "wally"), "upload");
        assert_eq!(props.get_or("storeFile", "keystore.jks"), "keystore.jks");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("key.properties")).unwrap();
        assert!(result.is_missing());
        assert!(result.into_set().is_empty());
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.properties");
        std::fs::write(&path, "keyAlias=upload\nstorePassword=secret").unwrap();

        let first = load(&path).unwrap();
        let second = load(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_unreadable_path_is_error() {
        // Reading a directory fails without hitting the missing-file case.
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).is_err());
    }
}
