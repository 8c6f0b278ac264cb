// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language names.
//!
//! The bundled table covers the languages that appear in the sample data plus
//! a handful of common codes for display purposes.

use super::{CodeTable, TableLayout};
use anyhow::{anyhow, Result};
use std::path::Path;

const BUNDLED_TABLE: &str = include_str!("../../data/language-codes.txt");

const LAYOUT: TableLayout = TableLayout {
    name_column: 0,
    code_column: 1,
};

/// Converts between two-letter language codes and English language names.
#[derive(Debug, Clone)]
pub struct LanguageCodeConverter {
    table: CodeTable,
}

impl LanguageCodeConverter {
    pub fn builtin() -> Result<Self> {
        Self::parse(BUNDLED_TABLE, "bundled language-codes.txt")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self {
            table: CodeTable::load(path, LAYOUT)?,
        })
    }

    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        Ok(Self {
            table: CodeTable::parse(content, origin, LAYOUT)?,
        })
    }

    pub fn from_code(&self, code: &str) -> Result<&str> {
        self.table
            .name_of(code)
            .ok_or_else(|| anyhow!("unknown language code '{}'", code))
    }

    pub fn from_name(&self, name: &str) -> Result<&str> {
        self.table
            .code_of(name)
            .ok_or_else(|| anyhow!("unknown language name '{}'", name.trim()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.names()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
