// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reference code tables for countries and languages.
//!
//! Both converters share the same backing structure: a [`CodeTable`] that maps
//! a short code to its display name and back. Tables are plain tab-separated
//! text with a single header line:
//!
//! | File                 | Columns                                    |
//! |----------------------|--------------------------------------------|
//! | `country-codes.txt`  | `Country`, `Alpha-2`, `Alpha-3`, `Numeric` |
//! | `language-codes.txt` | `Language`, `Code`                         |
//!
//! Codes are stored in their canonical uppercase form and compared
//! case-insensitively. Display names are matched after trimming and
//! lowercasing, so `"united states"` and `"United States"` resolve the same.
//!
//! Copies of both tables are embedded at compile time, so the converters work
//! without any file I/O unless an external table is requested.

mod country;
mod language;

pub use country::CountryCodeConverter;
pub use language::LanguageCodeConverter;

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Canonical form of a country or language code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Column positions of the two fields a converter cares about.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableLayout {
    pub name_column: usize,
    pub code_column: usize,
}

impl TableLayout {
    fn width(&self) -> usize {
        self.name_column.max(self.code_column) + 1
    }
}

/// Bidirectional mapping between normalized codes and display names.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    names_by_code: HashMap<String, String>,
    codes_by_name: HashMap<String, String>,
}

impl CodeTable {
    /// Build a table from `(code, name)` pairs.
    ///
    /// Later pairs replace earlier ones that share a code or a name.
    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: AsRef<str>,
    {
        let mut table = Self::default();
        for (code, name) in pairs {
            table.insert(code.as_ref(), name.as_ref());
        }
        table
    }

    fn insert(&mut self, code: &str, name: &str) {
        let code = normalize_code(code);
        let name = name.trim().to_string();
        self.codes_by_name.insert(normalize_name(&name), code.clone());
        self.names_by_code.insert(code, name);
    }

    /// Parse tab-separated table text. The first line is a header and is skipped.
    pub(crate) fn parse(content: &str, origin: &str, layout: TableLayout) -> Result<Self> {
        let mut table = Self::default();
        for (index, line) in content.lines().enumerate().skip(1) {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() < layout.width() {
                return Err(anyhow!(
                    "{}:{}: expected at least {} tab-separated columns, found {}",
                    origin,
                    index + 1,
                    layout.width(),
                    columns.len()
                ));
            }
            let name = columns[layout.name_column].trim();
            let code = columns[layout.code_column].trim();
            if name.is_empty() || code.is_empty() {
                return Err(anyhow!("{}:{}: empty name or code", origin, index + 1));
            }
            table.insert(code, name);
        }
        Ok(table)
    }

    pub(crate) fn load(path: &Path, layout: TableLayout) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading code table {}", path.display()))?;
        Self::parse(&content, &path.display().to_string(), layout)
    }

    /// Display name for a code, if the table knows it.
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.names_by_code
            .get(&normalize_code(code))
            .map(String::as_str)
    }

    /// Canonical code for a display name, if the table knows it.
    pub fn code_of(&self, name: &str) -> Option<&str> {
        self.codes_by_name
            .get(&normalize_name(name))
            .map(String::as_str)
    }

    /// All display names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names_by_code.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names_by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names_by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: TableLayout = TableLayout {
        name_column: 0,
        code_column: 1,
    };

    #[test]
    fn header_and_blank_lines_skipped() {
        let table = CodeTable::parse("Language\tCode\n\nEnglish\ten\r\nSpanish\tes\n", "t", LAYOUT)
            .expect("table should parse");
        assert_eq!(table.len(), 2);
        assert_eq!(table.name_of("EN"), Some("English"));
        assert_eq!(table.code_of("Spanish"), Some("ES"));
    }

    #[test]
    fn lookups_ignore_case_and_padding() {
        let table = CodeTable::from_pairs([("usa", "United States")]);
        assert_eq!(table.name_of(" Usa "), Some("United States"));
        assert_eq!(table.code_of("  united STATES "), Some("USA"));
        assert_eq!(table.code_of("United Kingdom"), None);
    }

    #[test]
    fn short_row_reports_line_number() {
        let err = CodeTable::parse("Language\tCode\nEnglish\ten\nFrench\n", "langs.txt", LAYOUT)
            .unwrap_err();
        assert!(err.to_string().contains("langs.txt:3"), "got: {}", err);
    }

    #[test]
    fn empty_code_rejected() {
        assert!(CodeTable::parse("Language\tCode\nEnglish\t \n", "t", LAYOUT).is_err());
    }
}
