use std::path::PathBuf;

use clap::{Parser, Subcommand};
use katsuyo_core::types::Formality;
use katsuyo_lang_japanese::{Construction, Person, Toggle};

#[derive(Debug, Parser)]
#[command(name = "katsuyo", about = "Japanese verb conjugation engine")]
pub struct Cli {
    /// Config file; missing files fall back to defaults
    #[arg(long, global = true, default_value = "katsuyo.json")]
    pub config: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply feature toggles in order and conjugate the result
    Conjugate {
        verb: String,

        /// AXIS=VALUE (e.g. voice=potential) or `negative`; repeatable
        #[arg(short, long = "toggle", value_parser = parse_toggle)]
        toggles: Vec<Toggle>,

        #[arg(short, long, value_parser = parse_formality)]
        formality: Option<Formality>,
    },

    /// Conjugate toggled features in all four formalities
    Grid {
        verb: String,

        #[arg(short, long = "toggle", value_parser = parse_toggle)]
        toggles: Vec<Toggle>,
    },

    /// Conjugate a construction by name, e.g. "past negative causative"
    Form {
        verb: String,

        #[arg(value_parser = parse_construction)]
        construction: Construction,

        #[arg(short, long, value_parser = parse_formality)]
        formality: Option<Formality>,

        #[arg(short, long, default_value = "first", value_parser = parse_person)]
        person: Person,
    },

    /// Show the inflection class of a verb
    Classify { verb: String },

    /// Show the pre-computed forms of the rule provider
    Provide {
        verb: String,

        #[arg(long)]
        negative: bool,

        #[arg(long)]
        polite: bool,
    },

    /// List every construction name
    Constructions,
}

fn parse_toggle(s: &str) -> Result<Toggle, String> {
    s.parse()
}

fn parse_formality(s: &str) -> Result<Formality, String> {
    s.parse()
}

fn parse_person(s: &str) -> Result<Person, String> {
    s.parse()
}

fn parse_construction(s: &str) -> Result<Construction, String> {
    s.parse().map_err(|e: katsuyo_core::error::ConjugateError| e.to_string())
}
