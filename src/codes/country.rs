// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country names keyed by ISO 3166-1 alpha-3 codes.

use super::{CodeTable, TableLayout};
use anyhow::{anyhow, Result};
use std::path::Path;

const BUNDLED_TABLE: &str = include_str!("../../data/country-codes.txt");

// Country, Alpha-2, Alpha-3, Numeric
const LAYOUT: TableLayout = TableLayout {
    name_column: 0,
    code_column: 2,
};

/// Converts between alpha-3 country codes and English country names.
#[derive(Debug, Clone)]
pub struct CountryCodeConverter {
    table: CodeTable,
}

impl CountryCodeConverter {
    /// Converter backed by the table bundled with the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUNDLED_TABLE, "bundled country-codes.txt")
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

    /// Display name for an alpha-3 code (any case).
    pub fn from_code(&self, code: &str) -> Result<&str> {
        self.table
            .name_of(code)
            .ok_or_else(|| anyhow!("unknown country code '{}'", code))
    }

    /// Uppercase alpha-3 code for a country name (any case).
    pub fn from_name(&self, name: &str) -> Result<&str> {
        self.table
            .code_of(name)
            .ok_or_else(|| anyhow!("unknown country name '{}'", name.trim()))
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
