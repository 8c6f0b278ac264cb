// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation store: country names per language, keyed by alpha-3 code.
//!
//! The store is built once from a [`TranslationSource`] and is read-only
//! afterwards. Every code that goes in or comes out is uppercase; lookups
//! accept any case.
//!
//! Each raw entry contributes every field except the reserved identifiers
//! (`id`, `alpha2`, `alpha3`) as a language code → translated name pair.

mod source;

pub use source::{FileSource, FixtureSource, RawEntry, TranslationSource};

use crate::codes::normalize_code;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::collections::HashMap;

const ALPHA3_FIELD: &str = "alpha3";
const RESERVED_FIELDS: [&str; 3] = ["id", "alpha2", ALPHA3_FIELD];

/// Read-only access to country name translations.
///
/// The interactive session only talks to this trait, so any implementation
/// (file-backed store, hand-written table) can drive it.
pub trait Translator {
    /// Known alpha-3 country codes, unordered.
    fn countries(&self) -> Vec<String>;

    /// Language codes available for a country, or `None` if the country is unknown.
    fn country_languages(&self, country_code: &str) -> Option<Vec<String>>;

    /// Country name in the given language, or `None` if either code is unknown.
    fn translate(&self, country_code: &str, language_code: &str) -> Option<&str>;
}

/// Translations of a single country's name, keyed by uppercase language code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRecord {
    names: HashMap<String, String>,
}

impl CountryRecord {
    pub fn name(&self, language_code: &str) -> Option<&str> {
        self.names
            .get(&normalize_code(language_code))
            .map(String::as_str)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    records: HashMap<String, CountryRecord>,
}

impl TranslationStore {
    /// Load every entry from `source`. Any malformed entry fails the whole load.
    pub fn load(source: &dyn TranslationSource) -> Result<Self> {
        let entries = source.entries()?;
        Self::from_entries(entries)
            .with_context(|| format!("loading translations from {}", source.describe()))
    }

    /// Build the store from raw entries. A later entry with the same alpha-3
    /// code replaces an earlier one.
    pub fn from_entries(entries: Vec<RawEntry>) -> Result<Self> {
        let mut records = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let (code, record) = parse_entry(index, entry)?;
            records.insert(code, record);
        }
        Ok(Self { records })
    }

    pub fn record(&self, country_code: &str) -> Option<&CountryRecord> {
        self.records.get(&normalize_code(country_code))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Translator for TranslationStore {
    fn countries(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    fn country_languages(&self, country_code: &str) -> Option<Vec<String>> {
        self.record(country_code)
            .map(|record| record.languages().map(str::to_string).collect())
    }

    fn translate(&self, country_code: &str, language_code: &str) -> Option<&str> {
        self.record(country_code)?.name(language_code)
    }
}

fn is_reserved(field: &str) -> bool {
    RESERVED_FIELDS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(field))
}

fn parse_entry(index: usize, entry: RawEntry) -> Result<(String, CountryRecord)> {
    let code = entry
        .get(ALPHA3_FIELD)
        .and_then(Value::as_str)
        .map(normalize_code)
        .filter(|code| !code.is_empty())
        .ok_or_else(|| anyhow!("entry {} has no string '{}' field", index, ALPHA3_FIELD))?;

    let mut names = HashMap::new();
    for (field, value) in entry {
        if is_reserved(&field) {
            continue;
        }
        let Value::String(name) = value else {
            return Err(anyhow!(
                "entry {} ({}): field '{}' is not a string",
                index,
                code,
                field
            ));
        };
        names.insert(normalize_code(&field), name);
    }

    Ok((code, CountryRecord { names }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one_record_store() -> TranslationStore {
        let source = FixtureSource::from_json(json!([{
            "id": 1,
            "alpha2": "us",
            "alpha3": "usa",
            "en": "United States",
            "es": "Estados Unidos"
        }]))
        .unwrap();
        TranslationStore::load(&source).expect("fixture should load")
    }

    #[test]
    fn single_record_scenario() {
        let store = one_record_store();
        assert_eq!(store.countries(), vec!["USA".to_string()]);

        let mut languages = store.country_languages("usa").unwrap();
        languages.sort();
        assert_eq!(languages, vec!["EN", "ES"]);

        assert_eq!(store.translate("usa", "es"), Some("Estados Unidos"));
    }

    #[test]
    fn translate_ignores_case() {
        let store = one_record_store();
        assert_eq!(store.translate("usa", "en"), store.translate("USA", "EN"));
        assert_eq!(store.translate("uSa", "eN"), Some("United States"));
    }

    #[test]
    fn missing_language_is_not_found() {
        let store = one_record_store();
        assert_eq!(store.translate("usa", "fr"), None);
    }

    #[test]
    fn unknown_country_is_not_found() {
        let store = one_record_store();
        assert_eq!(store.country_languages("can"), None);
        assert_eq!(store.translate("can", "en"), None);
    }

    #[test]
    fn reserved_fields_ignored_in_any_case() {
        let store = TranslationStore::from_entries(
            FixtureSource::from_json(json!([
                {"ID": 7, "Alpha2": "fr", "alpha3": "fra", "fr": "France"}
            ]))
            .unwrap()
            .entries()
            .unwrap(),
        )
        .unwrap();
        assert_eq!(store.country_languages("FRA").unwrap(), vec!["FR"]);
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let source = FixtureSource::from_json(json!([
            {"alpha3": "usa", "en": "USA"},
            {"alpha3": "USA", "en": "United States"}
        ]))
        .unwrap();
        let store = TranslationStore::load(&source).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.translate("usa", "en"), Some("United States"));
    }

    #[test]
    fn missing_alpha3_fails_load() {
        let source = FixtureSource::from_json(json!([{"id": 1, "en": "Nowhere"}])).unwrap();
        let err = TranslationStore::load(&source).unwrap_err();
        assert!(format!("{:#}", err).contains("no string 'alpha3' field"));
    }

    #[test]
    fn non_string_translation_fails_load() {
        let source =
            FixtureSource::from_json(json!([{"alpha3": "usa", "en": ["United States"]}])).unwrap();
        let err = TranslationStore::load(&source).unwrap_err();
        assert!(format!("{:#}", err).contains("field 'en' is not a string"));
    }
}
