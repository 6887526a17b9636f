//! Backing sources a thesaurus is read from.
//!
//! A [`ThesaurusSource`] yields the raw lines of a thesaurus. The file system
//! is the usual backend, but anything that can produce lines (an embedded
//! resource, a database row) can implement the trait.

use std::ffi::OsString;
use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::synonym::encoding::decode_latin9;
use crate::error::{Result, ThesaurusError};

/// Environment variable overriding the default thesaurus data directory.
pub const DATA_DIR_ENV: &str = "THESAURUS_DIR";

/// Data directory used when neither configuration nor environment name one.
///
/// Anchored at the crate root so the bundled files are found from any
/// working directory.
pub const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/thesaurus");

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").expect("valid line break pattern");
}

/// Split decoded text into lines, accepting `\r\n`, `\r` and `\n` endings.
///
/// A final terminator does not produce a trailing empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = LINE_BREAK.split(text).map(str::to_string).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// A source of thesaurus lines.
pub trait ThesaurusSource: Send + Sync + Debug {
    /// Human-readable name used in log and error messages.
    fn name(&self) -> String;

    /// Read the whole source.
    ///
    /// Must fail with [`ThesaurusError::NotFound`] when the source does not
    /// exist. Nothing is held open after this returns.
    fn read_lines(&self) -> Result<Vec<String>>;
}

/// A thesaurus file on disk, decoded as ISO-8859-15.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThesaurusSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let bytes = fs::read(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ThesaurusError::not_found(format!(
                    "No thesaurus file '{}' found",
                    self.path.display()
                ))
            } else {
                ThesaurusError::Io(e)
            }
        })?;

        Ok(split_lines(&decode_latin9(&bytes)))
    }
}

/// Thesaurus lines held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<N, I, S>(name: N, lines: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemorySource {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split already decoded text into lines.
    pub fn from_text<N: Into<String>>(name: N, text: &str) -> Self {
        Self::new(name, split_lines(text))
    }
}

impl ThesaurusSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// Resolves a language code to its default thesaurus file, `<root>/<lang>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirectory {
    root: PathBuf,
}

impl Default for DataDirectory {
    /// `$THESAURUS_DIR` when set, else [`DEFAULT_DATA_DIR`].
    fn default() -> Self {
        Self::from_env_value(std::env::var_os(DATA_DIR_ENV))
    }
}

impl DataDirectory {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        DataDirectory { root: root.into() }
    }

    /// Resolve the directory from the value of [`DATA_DIR_ENV`].
    pub fn from_env_value(value: Option<OsString>) -> Self {
        let root = value
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        DataDirectory { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the thesaurus file for `language`.
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.root.join(format!("{language}.txt"))
    }

    /// File source for `language`.
    pub fn source_for(&self, language: &str) -> FileSource {
        FileSource::new(self.path_for(language))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_source_missing() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("xx.txt"));
        let err = source.read_lines().unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("xx.txt"));
    }

    #[test]
    fn test_file_source_decodes_latin9() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("de.txt");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"# encoding = iso-8859-15\r\nhaus geb\xe4ude, heim\n")
            .unwrap();

        let lines = FileSource::new(&path).read_lines().unwrap();
        assert_eq!(lines, vec!["# encoding = iso-8859-15", "haus gebäude, heim"]);
    }

    #[test]
    fn test_file_source_carriage_return_endings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mac.txt");
        fs::write(&path, b"# encoding = latin9\rcar auto\rbus coach\r").unwrap();

        let lines = FileSource::new(&path).read_lines().unwrap();
        assert_eq!(lines, vec!["# encoding = latin9", "car auto", "bus coach"]);
    }

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::from_text("embedded", "a b\nc d\n");
        assert_eq!(source.name(), "embedded");
        assert_eq!(source.read_lines().unwrap(), vec!["a b", "c d"]);
    }

    #[test]
    fn test_default_data_directory_is_anchored() {
        let dir = DataDirectory::from_env_value(None);
        assert!(dir.root().is_absolute());
        assert!(dir.path_for("de").is_file());

        let empty = DataDirectory::from_env_value(Some(OsString::new()));
        assert_eq!(empty, dir);

        let custom = DataDirectory::from_env_value(Some(OsString::from("/srv/thesaurus")));
        assert_eq!(custom.path_for("en"), PathBuf::from("/srv/thesaurus/en.txt"));
    }

    #[test]
    fn test_data_directory_paths() {
        let dir = DataDirectory::new("/data/thesaurus");
        assert_eq!(dir.path_for("de"), PathBuf::from("/data/thesaurus/de.txt"));
        assert_eq!(
            dir.source_for("en").path(),
            Path::new("/data/thesaurus/en.txt")
        );
    }
}
