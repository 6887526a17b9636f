//! Synonym-based query term expansion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::synonym::thesaurus::SynonymProvider;
use crate::error::Result;

/// A query term together with the synonyms it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedTerm {
    pub source_term: String,
    /// Sorted synonyms, never containing `source_term`.
    pub synonyms: Vec<String>,
}

/// Expands query tokens through a [`SynonymProvider`].
#[derive(Debug, Clone)]
pub struct SynonymExpander {
    provider: Arc<dyn SynonymProvider>,
}

impl SynonymExpander {
    pub fn new(provider: Arc<dyn SynonymProvider>) -> Self {
        SynonymExpander { provider }
    }

    pub fn language(&self) -> &str {
        self.provider.language()
    }

    /// Expand each token; tokens without synonyms are left out.
    pub fn expand<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<ExpandedTerm>> {
        let mut expansions = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            if let Some(synonyms) = self.provider.terms_for(token)? {
                let mut synonyms: Vec<String> = synonyms.into_iter().collect();
                synonyms.sort();
                expansions.push(ExpandedTerm {
                    source_term: token.to_string(),
                    synonyms,
                });
            }
        }

        Ok(expansions)
    }

    /// Split `text` on whitespace and expand every word.
    pub fn expand_text(&self, text: &str) -> Result<Vec<ExpandedTerm>> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        self.expand(&tokens)
    }
}
