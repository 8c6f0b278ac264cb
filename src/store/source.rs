// SPDX-License-Identifier: PMPL-1.0-or-later

//! Where raw country entries come from.

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// One flat country object as it appears in the data file:
/// `{"id": 1, "alpha2": "us", "alpha3": "usa", "en": "United States", ...}`.
pub type RawEntry = Map<String, Value>;

/// Anything that can hand the store a list of raw country entries.
pub trait TranslationSource {
    fn entries(&self) -> Result<Vec<RawEntry>>;

    /// Short human-readable origin used in error messages.
    fn describe(&self) -> String;
}

/// Data file on disk. `.yaml`/`.yml` files are read as YAML, anything else as JSON.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        )
    }
}

impl TranslationSource for FileSource {
    fn entries(&self) -> Result<Vec<RawEntry>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading translation data {}", self.path.display()))?;
        let value: Value = if self.is_yaml() {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml translation data {}", self.path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing json translation data {}", self.path.display()))?
        };
        entries_from_value(value, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

const BUNDLED_SAMPLE: &str = include_str!("../../data/sample.json");

/// Entries held in memory, for tests and embedded data.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    entries: Vec<RawEntry>,
}

impl FixtureSource {
    pub fn new(entries: Vec<RawEntry>) -> Self {
        Self { entries }
    }

    /// The sample data compiled into the binary; used when no data file is given.
    pub fn bundled() -> Result<Self> {
        let value: Value =
            serde_json::from_str(BUNDLED_SAMPLE).context("parsing bundled sample.json")?;
        Ok(Self::new(entries_from_value(value, "bundled sample.json")?))
    }

    /// Accepts the same array-of-objects shape as the data file.
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(Self::new(entries_from_value(value, "fixture")?))
    }
}

impl TranslationSource for FixtureSource {
    fn entries(&self) -> Result<Vec<RawEntry>> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        "fixture".to_string()
    }
}

fn entries_from_value(value: Value, origin: &str) -> Result<Vec<RawEntry>> {
    let Value::Array(items) = value else {
        return Err(anyhow!("{}: expected an array of country objects", origin));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(entry) => Ok(entry),
            other => Err(anyhow!(
                "{}: entry {} is not an object (found {})",
                origin,
                index,
                kind_of(&other)
            )),
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fixture_accepts_array_of_objects() {
        let source = FixtureSource::from_json(json!([
            {"id": 1, "alpha3": "usa", "en": "United States"},
            {"id": 2, "alpha3": "can", "en": "Canada"}
        ]))
        .expect("fixture should build");
        assert_eq!(source.entries().unwrap().len(), 2);
    }

    #[test]
    fn top_level_must_be_array() {
        let err = FixtureSource::from_json(json!({"alpha3": "usa"})).unwrap_err();
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn entries_must_be_objects() {
        let err = FixtureSource::from_json(json!([{"alpha3": "usa"}, "can"])).unwrap_err();
        assert!(err.to_string().contains("entry 1 is not an object (found string)"));
    }

    #[test]
    fn bundled_sample_parses() {
        let entries = FixtureSource::bundled().unwrap().entries().unwrap();
        assert!(entries.iter().any(|entry| entry["alpha3"] == "usa"));
    }

    #[test]
    fn yaml_detected_by_extension() {
        assert!(FileSource::new("data/sample.yaml").is_yaml());
        assert!(FileSource::new("data/sample.yml").is_yaml());
        assert!(!FileSource::new("data/sample.json").is_yaml());
        assert!(!FileSource::new("data/sample").is_yaml());
    }
}
