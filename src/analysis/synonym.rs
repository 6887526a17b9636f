//! Thesaurus-based synonym lookup.
//!
//! A thesaurus file groups mutually synonymous terms, one group per line.
//! Looking up a word returns every other member of the groups it belongs to,
//! so matching "car" can also match "automobile" and "vehicle".
//!
//! # Components
//!
//! - [`encoding`] - encoding declarations and ISO-8859-15 decoding
//! - [`parser`] - the line format and the parsed [`SynonymTable`]
//! - [`source`] - where thesaurus lines come from
//! - [`thesaurus`] - the lazily loaded [`Thesaurus`] and the [`SynonymProvider`] trait
//! - [`registry`] - host-owned language to thesaurus registry
//! - [`expansion`] - expanding query tokens with synonyms
//! - [`config`] - serde configuration
//!
//! # Examples
//!
//! ```
//! use thesaurus::analysis::synonym::{MemorySource, SynonymProvider, Thesaurus};
//!
//! let source = MemorySource::new("de", ["# encoding = iso-8859-15", "Haus Heim, Gebäude"]);
//! let thesaurus = Thesaurus::with_source("de", true, source);
//!
//! let terms = thesaurus.terms_for("heim").unwrap().unwrap();
//! assert!(terms.contains("haus"));
//! assert!(terms.contains("gebäude"));
//! ```

pub mod config;
pub mod encoding;
pub mod expansion;
pub mod parser;
pub mod registry;
pub mod source;
pub mod thesaurus;

pub use config::{ThesaurusConfig, ThesaurusSettings};
pub use expansion::{ExpandedTerm, SynonymExpander};
pub use parser::{GroupId, SynonymTable, ThesaurusParser};
pub use registry::ThesaurusRegistry;
pub use source::{DataDirectory, FileSource, MemorySource, ThesaurusSource};
pub use thesaurus::{SynonymProvider, Thesaurus};
