//! Host-owned registry of thesauri keyed by language.

use std::sync::Arc;

use ahash::AHashMap;
use log::info;
use parking_lot::RwLock;

use crate::analysis::synonym::config::ThesaurusSettings;
use crate::analysis::synonym::source::DataDirectory;
use crate::analysis::synonym::thesaurus::{SynonymProvider, Thesaurus};
use crate::error::{Result, ThesaurusError};

/// Language tag of the default German thesaurus.
pub const GERMAN: &str = "de";

/// Registry mapping language tags to synonym providers.
#[derive(Debug, Default)]
pub struct ThesaurusRegistry {
    providers: RwLock<AHashMap<String, Arc<dyn SynonymProvider>>>,
}

impl ThesaurusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from settings.
    ///
    /// With `settings.eager` every thesaurus is loaded before returning, and
    /// the first load failure is returned.
    pub fn from_settings(settings: &ThesaurusSettings) -> Result<Self> {
        settings.validate()?;
        let data_dir = settings.data_directory();
        let registry = Self::new();

        for config in &settings.thesauri {
            let thesaurus = Thesaurus::from_config(config, &data_dir);
            if settings.eager {
                thesaurus.load()?;
            }
            registry.register(Arc::new(thesaurus));
        }

        info!(
            "thesaurus registry ready with {} language(s)",
            registry.len()
        );
        Ok(registry)
    }

    /// A case-folding German thesaurus read from `data_dir`.
    pub fn german(data_dir: &DataDirectory) -> Thesaurus {
        Thesaurus::with_source(GERMAN, true, data_dir.source_for(GERMAN))
    }

    /// Register a provider under its language, returning the one it replaced.
    pub fn register(&self, provider: Arc<dyn SynonymProvider>) -> Option<Arc<dyn SynonymProvider>> {
        let language = provider.language().to_string();
        self.providers.write().insert(language, provider)
    }

    pub fn get(&self, language: &str) -> Option<Arc<dyn SynonymProvider>> {
        self.providers.read().get(language).cloned()
    }

    /// Like [`get`](Self::get) but fails for unknown languages.
    pub fn require(&self, language: &str) -> Result<Arc<dyn SynonymProvider>> {
        self.get(language).ok_or_else(|| {
            ThesaurusError::not_found(format!("No thesaurus registered for \"{language}\""))
        })
    }

    pub fn remove(&self, language: &str) -> Option<Arc<dyn SynonymProvider>> {
        self.providers.write().remove(language)
    }

    /// Registered language tags, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.providers.read().keys().cloned().collect();
        languages.sort();
        languages
    }

    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}
