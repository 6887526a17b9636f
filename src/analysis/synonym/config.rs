//! Configuration for thesauri and the registry that hosts them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::synonym::source::DataDirectory;
use crate::error::{Result, ThesaurusError};

fn default_case_folding() -> bool {
    true
}

/// Configuration of a single thesaurus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesaurusConfig {
    /// Language tag, e.g. `"de"`.
    pub language: String,

    /// Lowercase terms and queries.
    #[serde(default = "default_case_folding")]
    pub case_folding: bool,

    /// Explicit thesaurus file, overriding the per-language default.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ThesaurusConfig {
    pub fn new<S: Into<String>>(language: S) -> Self {
        ThesaurusConfig {
            language: language.into(),
            case_folding: true,
            path: None,
        }
    }

    pub fn case_folding(mut self, case_folding: bool) -> Self {
        self.case_folding = case_folding;
        self
    }

    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The file this thesaurus is read from.
    pub fn resolve_path(&self, data_dir: &DataDirectory) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| data_dir.path_for(&self.language))
    }

    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(ThesaurusError::invalid_config("language must not be empty"));
        }
        Ok(())
    }
}

/// Settings for a set of thesauri, typically read from a JSON file.
///
/// ```json
/// {
///   "data_dir": "/usr/share/thesaurus",
///   "eager": false,
///   "thesauri": [
///     { "language": "de" },
///     { "language": "en", "case_folding": false, "path": "/tmp/en.txt" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesaurusSettings {
    /// Directory holding `<lang>.txt` files. Falls back to [`DataDirectory::default`].
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Load every thesaurus when the registry is built instead of on first use.
    #[serde(default)]
    pub eager: bool,

    #[serde(default)]
    pub thesauri: Vec<ThesaurusConfig>,
}

impl ThesaurusSettings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ThesaurusError::not_found(format!(
                    "No thesaurus settings file '{}' found",
                    path.display()
                ))
            } else {
                ThesaurusError::invalid_config(format!(
                    "Failed to read thesaurus settings '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let settings: ThesaurusSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn data_directory(&self) -> DataDirectory {
        self.data_dir
            .as_ref()
            .map(DataDirectory::new)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for config in &self.thesauri {
            config.validate()?;
            if !seen.insert(config.language.as_str()) {
                return Err(ThesaurusError::invalid_config(format!(
                    "duplicate thesaurus for language '{}'",
                    config.language
                )));
            }
        }
        Ok(())
    }
}
