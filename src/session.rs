// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive prompt loop.
//!
//! The session walks a small state machine:
//!
//! ```text
//! SelectCountry -> SelectLanguage -> ShowResult -> SelectCountry ...
//!       \                 \               \
//!        +-----------------+---------------+--> Exit   ("quit" or end of input)
//! ```
//!
//! A name that the converters cannot resolve prints an `unknown ...` line and
//! re-prompts the same step instead of ending the session.

use crate::codes::{CountryCodeConverter, LanguageCodeConverter};
use crate::store::Translator;
use anyhow::Result;
use colored::*;
use std::io::{BufRead, Write};

/// Typing this at any prompt ends the session. Compared exactly, before any trimming.
pub const QUIT: &str = "quit";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    code: String,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    SelectCountry,
    SelectLanguage(Selection),
    ShowResult {
        country: Selection,
        language: Selection,
    },
    Exit,
}

pub struct Session<'a, T: Translator + ?Sized, R, W> {
    translator: &'a T,
    countries: &'a CountryCodeConverter,
    languages: &'a LanguageCodeConverter,
    input: R,
    output: W,
    verbose: bool,
    color: bool,
}

impl<'a, T, R, W> Session<'a, T, R, W>
where
    T: Translator + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(
        translator: &'a T,
        countries: &'a CountryCodeConverter,
        languages: &'a LanguageCodeConverter,
        input: R,
        output: W,
    ) -> Self {
        Self {
            translator,
            countries,
            languages,
            input,
            output,
            verbose: false,
            color: false,
        }
    }

    /// Report data codes missing from the reference tables on stderr.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Highlight prompts and errors. Only set this when the writer is a terminal.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Run until the user quits or input ends. Errors are I/O failures only.
    pub fn run(&mut self) -> Result<()> {
        let mut step = Step::SelectCountry;
        loop {
            step = match step {
                Step::SelectCountry => self.select_country()?,
                Step::SelectLanguage(country) => self.select_language(country)?,
                Step::ShowResult { country, language } => self.show_result(&country, &language)?,
                Step::Exit => return Ok(()),
            };
        }
    }

    /// Consumes the session and hands back the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn select_country(&mut self) -> Result<Step> {
        let mut names: Vec<&str> = Vec::new();
        for code in self.translator.countries() {
            match self.countries.from_code(&code) {
                Ok(name) => names.push(name),
                Err(err) => self.warn(&err),
            }
        }
        names.sort_unstable();

        for name in &names {
            writeln!(self.output, "{}", name)?;
        }
        let Some(input) = self.prompt("select a country from above:")? else {
            return Ok(Step::Exit);
        };
        if input == QUIT {
            return Ok(Step::Exit);
        }

        let Ok(code) = self.countries.from_name(&input) else {
            let message = self.alert(format!("unknown country: {}", input));
            writeln!(self.output, "{}", message)?;
            return Ok(Step::SelectCountry);
        };
        let country = Selection {
            code: code.to_string(),
            name: self.countries.from_code(code)?.to_string(),
        };
        Ok(Step::SelectLanguage(country))
    }

    fn select_language(&mut self, country: Selection) -> Result<Step> {
        let Some(codes) = self.translator.country_languages(&country.code) else {
            let message = self.alert(format!("no translations available for {}", country.name));
            writeln!(self.output, "{}", message)?;
            return Ok(Step::SelectCountry);
        };

        let mut names: Vec<&str> = Vec::new();
        for code in codes {
            match self.languages.from_code(&code) {
                Ok(name) => names.push(name),
                Err(err) => self.warn(&err),
            }
        }
        names.sort_unstable();

        for name in &names {
            writeln!(self.output, "{}", name)?;
        }
        let Some(input) = self.prompt("select a language from above:")? else {
            return Ok(Step::Exit);
        };
        if input == QUIT {
            return Ok(Step::Exit);
        }

        let Ok(code) = self.languages.from_name(&input) else {
            let message = self.alert(format!("unknown language: {}", input));
            writeln!(self.output, "{}", message)?;
            return Ok(Step::SelectLanguage(country));
        };
        let language = Selection {
            code: code.to_string(),
            name: self.languages.from_code(code)?.to_string(),
        };
        Ok(Step::ShowResult { country, language })
    }

    fn show_result(&mut self, country: &Selection, language: &Selection) -> Result<Step> {
        match self.translator.translate(&country.code, &language.code) {
            Some(translation) => writeln!(
                self.output,
                "{} in {} is {}",
                country.name, language.name, translation
            )?,
            None => writeln!(
                self.output,
                "{} in {} is not available",
                country.name, language.name
            )?,
        }

        match self.prompt("Press enter to continue or quit to exit.")? {
            Some(input) if input == QUIT => Ok(Step::Exit),
            Some(_) => Ok(Step::SelectCountry),
            None => Ok(Step::Exit),
        }
    }

    /// Print a prompt and read one line. `None` means input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        if self.color {
            writeln!(self.output, "{}", text.bold())?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn alert(&self, message: String) -> String {
        if self.color {
            message.red().to_string()
        } else {
            message
        }
    }

    fn warn(&self, err: &anyhow::Error) {
        if self.verbose {
            eprintln!("warning: {} (not listed)", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct SingleCountry;

    impl Translator for SingleCountry {
        fn countries(&self) -> Vec<String> {
            vec!["CAN".to_string()]
        }

        fn country_languages(&self, country_code: &str) -> Option<Vec<String>> {
            country_code
                .eq_ignore_ascii_case("can")
                .then(|| vec!["EN".to_string(), "FR".to_string()])
        }

        fn translate(&self, country_code: &str, language_code: &str) -> Option<&str> {
            if !country_code.eq_ignore_ascii_case("can") {
                return None;
            }
            match language_code {
                "EN" | "FR" => Some("Canada"),
                _ => None,
            }
        }
    }

    fn run_with(input: &str) -> String {
        let countries = CountryCodeConverter::builtin().unwrap();
        let languages = LanguageCodeConverter::builtin().unwrap();
        let mut session = Session::new(
            &SingleCountry,
            &countries,
            &languages,
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        session.run().expect("session should finish");
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn any_translator_can_drive_the_session() {
        let output = run_with("Canada\nFrench\nquit\n");
        assert!(output.contains("Canada in French is Canada"), "{}", output);
    }

    #[test]
    fn quit_is_case_sensitive() {
        let output = run_with("QUIT\nquit\n");
        assert!(output.contains("unknown country: QUIT"), "{}", output);
    }

    #[test]
    fn crlf_line_endings_accepted() {
        let output = run_with("Canada\r\nEnglish\r\nquit\r\n");
        assert!(output.contains("Canada in English is Canada"), "{}", output);
    }
}
