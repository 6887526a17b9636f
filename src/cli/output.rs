//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::synonym::expansion::ExpandedTerm;
use crate::cli::args::{OutputFormat, ThesaurusArgs};
use crate::error::Result;

/// Synonyms found for a single word.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub synonyms: Option<Vec<String>>,
}

/// Result structure for lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResults {
    pub language: String,
    pub results: Vec<LookupResult>,
}

/// Result structure for text expansion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpansionResults {
    pub language: String,
    pub text: String,
    pub expansions: Vec<ExpandedTerm>,
}

/// Thesaurus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ThesaurusStats {
    pub language: String,
    pub source: String,
    pub case_folding: bool,
    pub declared_encoding: Option<String>,
    pub terms: usize,
    pub groups: usize,
    pub load_time_ms: u64,
}

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    fn render_human(&self) -> Vec<String>;
}

impl HumanOutput for LookupResults {
    fn render_human(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|r| match &r.synonyms {
                Some(synonyms) => format!("{}: {}", r.word, synonyms.join(", ")),
                None => format!("{}: (no synonyms)", r.word),
            })
            .collect()
    }
}

impl HumanOutput for ExpansionResults {
    fn render_human(&self) -> Vec<String> {
        if self.expansions.is_empty() {
            return vec!["No terms expanded".to_string()];
        }
        self.expansions
            .iter()
            .map(|e| format!("{} -> {}", e.source_term, e.synonyms.join(", ")))
            .collect()
    }
}

impl HumanOutput for ThesaurusStats {
    fn render_human(&self) -> Vec<String> {
        vec![
            format!("Language:      {}", self.language),
            format!("Source:        {}", self.source),
            format!("Case folding:  {}", self.case_folding),
            format!(
                "Encoding:      {}",
                self.declared_encoding.as_deref().unwrap_or("-")
            ),
            format!("Terms:         {}", self.terms),
            format!("Groups:        {}", self.groups),
            format!("Load time:     {} ms", self.load_time_ms),
        ]
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &ThesaurusArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_human<T: HumanOutput>(message: &str, result: &T, args: &ThesaurusArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    for line in result.render_human() {
        println!("{line}");
    }
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &ThesaurusArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
