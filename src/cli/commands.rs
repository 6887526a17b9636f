//! Command implementations for the thesaurus CLI.

use std::sync::Arc;
use std::time::Instant;

use crate::analysis::synonym::expansion::SynonymExpander;
use crate::analysis::synonym::source::DataDirectory;
use crate::analysis::synonym::thesaurus::{SynonymProvider, Thesaurus};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: ThesaurusArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => lookup_words(lookup_args, &args),
        Command::Expand(expand_args) => expand_text(expand_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Open the thesaurus selected by the source arguments.
pub fn open_thesaurus(source: &SourceArgs) -> Result<Thesaurus> {
    let config = source.to_config();
    config.validate()?;
    let data_dir = source
        .data_dir
        .as_ref()
        .map(DataDirectory::new)
        .unwrap_or_default();
    Ok(Thesaurus::from_config(&config, &data_dir))
}

fn lookup_words(args: &LookupArgs, cli_args: &ThesaurusArgs) -> Result<()> {
    let thesaurus = open_thesaurus(&args.source)?;

    let mut results = Vec::with_capacity(args.words.len());
    for word in &args.words {
        let synonyms = thesaurus.terms_for(word)?.map(|terms| {
            let mut terms: Vec<String> = terms.into_iter().collect();
            terms.sort();
            terms
        });
        results.push(LookupResult {
            word: word.clone(),
            synonyms,
        });
    }

    output_result(
        &format!("Synonyms from {}", thesaurus.source_name()),
        &LookupResults {
            language: thesaurus.language().to_string(),
            results,
        },
        cli_args,
    )
}

fn expand_text(args: &ExpandArgs, cli_args: &ThesaurusArgs) -> Result<()> {
    let thesaurus = Arc::new(open_thesaurus(&args.source)?);
    let expander = SynonymExpander::new(thesaurus);

    let expansions = expander.expand_text(&args.text)?;
    output_result(
        "Expanded terms",
        &ExpansionResults {
            language: expander.language().to_string(),
            text: args.text.clone(),
            expansions,
        },
        cli_args,
    )
}

fn show_stats(args: &StatsArgs, cli_args: &ThesaurusArgs) -> Result<()> {
    let thesaurus = open_thesaurus(&args.source)?;

    let start = Instant::now();
    let table = thesaurus.table()?;
    let load_time_ms = start.elapsed().as_millis() as u64;

    output_result(
        "Thesaurus statistics",
        &ThesaurusStats {
            language: thesaurus.language().to_string(),
            source: thesaurus.source_name(),
            case_folding: thesaurus.case_folding(),
            declared_encoding: table.declared_encoding().map(str::to_string),
            terms: table.term_count(),
            groups: table.group_count(),
            load_time_ms,
        },
        cli_args,
    )
}
