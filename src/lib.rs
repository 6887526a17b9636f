//! # Thesaurus
//!
//! Synonym expansion for full-text search.
//!
//! ## Features
//!
//! - Parser for the line-oriented, encoding-tagged thesaurus format
//! - Lazily loaded, thread-safe thesaurus with bidirectional term lookup
//! - Pluggable thesaurus sources (files, in-memory text, custom backends)
//! - Host-owned registry of thesauri per language
//! - Query token expansion

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::synonym::{
        DataDirectory, SynonymExpander, SynonymProvider, Thesaurus, ThesaurusConfig,
        ThesaurusRegistry, ThesaurusSettings,
    };
    pub use crate::error::{Result, ThesaurusError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
