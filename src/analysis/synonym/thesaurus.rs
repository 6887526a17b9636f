//! Lazily loaded thesaurus for synonym lookup.
//!
//! A [`Thesaurus`] is created unloaded and reads its source on the first
//! [`terms_for`](SynonymProvider::terms_for) or [`size`](SynonymProvider::size)
//! call. A failed load leaves it unloaded, so the next call tries again.
//!
//! # Examples
//!
//! ```
//! use thesaurus::analysis::synonym::source::MemorySource;
//! use thesaurus::analysis::synonym::thesaurus::{SynonymProvider, Thesaurus};
//!
//! let source = MemorySource::new(
//!     "en",
//!     ["# encoding = iso-8859-15", "car auto, automobile, vehicle"],
//! );
//! let thesaurus = Thesaurus::with_source("en", true, source);
//!
//! let terms = thesaurus.terms_for("Car").unwrap().unwrap();
//! assert!(terms.contains("automobile"));
//! assert!(!terms.contains("car"));
//! assert_eq!(thesaurus.size().unwrap(), 4);
//! ```

use std::collections::HashSet;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

use crate::analysis::synonym::config::ThesaurusConfig;
use crate::analysis::synonym::encoding::{SOURCE_ENCODING, is_source_encoding};
use crate::analysis::synonym::parser::{SynonymTable, ThesaurusParser};
use crate::analysis::synonym::source::{DataDirectory, FileSource, ThesaurusSource};
use crate::error::Result;

/// Synonym lookup as consumed by a search engine.
pub trait SynonymProvider: Send + Sync + Debug {
    /// Terms equivalent to `word`, excluding `word` itself.
    ///
    /// Returns `Ok(None)` when the word has no synonyms.
    fn terms_for(&self, word: &str) -> Result<Option<HashSet<String>>>;

    /// Language tag of this thesaurus.
    fn language(&self) -> &str;

    /// Number of distinct terms known to the thesaurus.
    fn size(&self) -> Result<usize>;
}

#[derive(Debug)]
enum LoadState {
    Unloaded,
    Loaded(Arc<SynonymTable>),
}

/// A thesaurus for one language and case-folding policy.
#[derive(Debug)]
pub struct Thesaurus {
    language: String,
    parser: ThesaurusParser,
    source: Box<dyn ThesaurusSource>,
    state: RwLock<LoadState>,
}

impl Thesaurus {
    /// Create a thesaurus for `language`.
    ///
    /// Reads `path` when given, otherwise the language's file in the default
    /// [`DataDirectory`]. Nothing is read until the first lookup.
    pub fn new<S: Into<String>>(language: S, case_folding: bool, path: Option<PathBuf>) -> Self {
        let language = language.into();
        let path = path.unwrap_or_else(|| DataDirectory::default().path_for(&language));
        Self::with_source(language, case_folding, FileSource::new(path))
    }

    /// Create a thesaurus from its configuration, resolving default paths in `data_dir`.
    pub fn from_config(config: &ThesaurusConfig, data_dir: &DataDirectory) -> Self {
        Self::with_source(
            config.language.clone(),
            config.case_folding,
            FileSource::new(config.resolve_path(data_dir)),
        )
    }

    /// Create a thesaurus backed by an arbitrary source.
    pub fn with_source<S, T>(language: S, case_folding: bool, source: T) -> Self
    where
        S: Into<String>,
        T: ThesaurusSource + 'static,
    {
        Thesaurus {
            language: language.into(),
            parser: ThesaurusParser::new(case_folding),
            source: Box::new(source),
            state: RwLock::new(LoadState::Unloaded),
        }
    }

    pub fn case_folding(&self) -> bool {
        self.parser.case_folding()
    }

    /// Name of the backing source.
    pub fn source_name(&self) -> String {
        self.source.name()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.state.read(), LoadState::Loaded(_))
    }

    /// Load the thesaurus now, if it is not loaded yet.
    pub fn load(&self) -> Result<()> {
        self.table().map(|_| ())
    }

    /// The parsed table, loading it on first use.
    ///
    /// Concurrent first callers serialize on the write lock; only the first
    /// one reads the source.
    pub fn table(&self) -> Result<Arc<SynonymTable>> {
        if let LoadState::Loaded(table) = &*self.state.read() {
            return Ok(Arc::clone(table));
        }

        let mut state = self.state.write();
        if let LoadState::Loaded(table) = &*state {
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.read_table()?);
        *state = LoadState::Loaded(Arc::clone(&table));
        Ok(table)
    }

    fn read_table(&self) -> Result<SynonymTable> {
        let name = self.source.name();
        debug!("loading thesaurus '{}' from {}", self.language, name);

        let table = self
            .source
            .read_lines()
            .and_then(|lines| self.parser.parse(&name, lines))
            .inspect_err(|e| warn!("failed to load thesaurus '{}': {}", self.language, e))?;

        if let Some(declared) = table.declared_encoding()
            && !is_source_encoding(declared)
        {
            debug!(
                "thesaurus {} declares encoding '{}', decoded as {}",
                name, declared, SOURCE_ENCODING
            );
        }

        debug!(
            "loaded thesaurus '{}': {} terms in {} groups",
            self.language,
            table.term_count(),
            table.group_count()
        );
        Ok(table)
    }
}

impl SynonymProvider for Thesaurus {
    fn terms_for(&self, word: &str) -> Result<Option<HashSet<String>>> {
        let table = self.table()?;
        Ok(table.lookup(&self.parser.normalize(word)))
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn size(&self) -> Result<usize> {
        Ok(self.table()?.term_count())
    }
}
