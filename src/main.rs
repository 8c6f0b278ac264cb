// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-translator: pick a country, pick a language, read its name.
//!
//! Running without arguments uses the sample data and code tables compiled
//! into the binary, then starts the interactive session on stdin/stdout.

use anyhow::Result;
use clap::Parser;
use colored::*;
use country_translator::{
    CountryCodeConverter, FileSource, FixtureSource, LanguageCodeConverter, Session,
    TranslationStore,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "country-translator")]
#[command(version)]
#[command(about = "Translate country names between languages")]
#[command(long_about = None)]
struct Cli {
    /// Translation data file (JSON, or YAML with a .yaml/.yml extension);
    /// defaults to the bundled sample data
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Country code table (tab-separated); defaults to the bundled table
    #[arg(long, value_name = "PATH")]
    countries: Option<PathBuf>,

    /// Language code table (tab-separated); defaults to the bundled table
    #[arg(long, value_name = "PATH")]
    languages: Option<PathBuf>,

    /// Report skipped codes and load statistics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let countries = match &cli.countries {
        Some(path) => CountryCodeConverter::from_file(path)?,
        None => CountryCodeConverter::builtin()?,
    };
    let languages = match &cli.languages {
        Some(path) => LanguageCodeConverter::from_file(path)?,
        None => LanguageCodeConverter::builtin()?,
    };
    let store = match &cli.data {
        Some(path) => TranslationStore::load(&FileSource::new(path))?,
        None => TranslationStore::load(&FixtureSource::bundled()?)?,
    };

    if cli.verbose {
        let origin = cli
            .data
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "bundled sample".to_string());
        eprintln!(
            "loaded {} countries from {} ({} country names, {} language names)",
            store.len(),
            origin,
            countries.len(),
            languages.len()
        );
    }

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut session = Session::new(
        &store,
        &countries,
        &languages,
        io::stdin().lock(),
        stdout.lock(),
    )
    .verbose(cli.verbose)
    .color(color);
    session.run()
}
