// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country-Translator — country names in other languages, from a static table.
//!
//! The crate is split the same way the data flows:
//!
//! 1. **Store**: loads a data file (an array of flat country objects) into an
//!    immutable map of alpha-3 code → language code → translated name.
//! 2. **Codes**: bidirectional converters between codes and display names for
//!    countries and languages.
//! 3. **Session**: the interactive prompt loop that ties the two together.

pub mod codes;
pub mod session;
pub mod store;

pub use codes::{CountryCodeConverter, LanguageCodeConverter};
pub use session::{Session, QUIT};
pub use store::{FileSource, FixtureSource, TranslationSource, TranslationStore, Translator};
