//! Command line argument parsing for the thesaurus CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::synonym::config::ThesaurusConfig;

/// Inspect thesaurus files and look up synonyms
#[derive(Parser, Debug, Clone)]
#[command(name = "thesaurus")]
#[command(about = "Look up synonyms in line-oriented thesaurus files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ThesaurusArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ThesaurusArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the synonyms of one or more words
    Lookup(LookupArgs),

    /// Expand every word of a text with its synonyms
    Expand(ExpandArgs),

    /// Show thesaurus statistics
    Stats(StatsArgs),
}

/// Options selecting which thesaurus to open
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Language of the thesaurus
    #[arg(short, long, default_value = "de")]
    pub language: String,

    /// Thesaurus file, overriding the language default
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory holding <language>.txt thesaurus files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Match terms with exact case
    #[arg(long)]
    pub no_case_folding: bool,
}

impl SourceArgs {
    pub fn to_config(&self) -> ThesaurusConfig {
        let config = ThesaurusConfig::new(self.language.clone()).case_folding(!self.no_case_folding);
        match &self.file {
            Some(file) => config.path(file.clone()),
            None => config,
        }
    }
}

/// Arguments for looking up words
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for expanding text
#[derive(Args, Debug, Clone)]
pub struct ExpandArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Text to expand
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for thesaurus statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_args() {
        let args = ThesaurusArgs::try_parse_from([
            "thesaurus",
            "lookup",
            "--language",
            "en",
            "--file",
            "/tmp/en.txt",
            "car",
            "house",
        ])
        .unwrap();

        match args.command {
            Command::Lookup(lookup) => {
                assert_eq!(lookup.words, vec!["car", "house"]);
                let config = lookup.source.to_config();
                assert_eq!(config.language, "en");
                assert!(config.case_folding);
                assert_eq!(config.path, Some(PathBuf::from("/tmp/en.txt")));
            }
            _ => panic!("Expected lookup command"),
        }
    }

    #[test]
    fn test_lookup_requires_word() {
        assert!(ThesaurusArgs::try_parse_from(["thesaurus", "lookup"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = ThesaurusArgs::try_parse_from([
            "thesaurus",
            "-vv",
            "-f",
            "json",
            "stats",
            "--no-case-folding",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 3);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Stats(stats) => {
                assert_eq!(stats.source.language, "de");
                assert!(!stats.source.to_config().case_folding);
            }
            _ => panic!("Expected stats command"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args =
            ThesaurusArgs::try_parse_from(["thesaurus", "-q", "-v", "expand", "a b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
