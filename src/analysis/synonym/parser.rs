//! Parser for the line-oriented thesaurus format.
//!
//! ```text
//! # encoding = iso-8859-15
//! # comment lines start with a hash
//! car auto, automobile, vehicle
//! house home, building
//! ```
//!
//! Every data line forms one synonym group: the head term (everything before
//! the first space) followed by the comma separated synonyms. An encoding
//! declaration must precede the first data line.

use std::collections::HashSet;
use std::fmt;

use ahash::AHashMap;
use log::debug;

use crate::analysis::synonym::encoding::parse_encoding_declaration;
use crate::error::{Result, ThesaurusError};

/// Identifier of a synonym group, the 1-based line number of its data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parsed thesaurus contents.
///
/// Holds the synonym groups keyed by [`GroupId`] and the reverse index from
/// each term to the groups it belongs to. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    groups: AHashMap<GroupId, Vec<String>>,
    terms: AHashMap<String, Vec<GroupId>>,
    declared_encoding: Option<String>,
}

impl SynonymTable {
    /// Members of a group, head term first.
    pub fn group(&self, id: GroupId) -> Option<&[String]> {
        self.groups.get(&id).map(|members| members.as_slice())
    }

    /// Groups a term belongs to, in source order.
    pub fn groups_for(&self, term: &str) -> Option<&[GroupId]> {
        self.terms.get(term).map(|ids| ids.as_slice())
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of synonym groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Encoding named by the last declaration in the source.
    pub fn declared_encoding(&self) -> Option<&str> {
        self.declared_encoding.as_deref()
    }

    /// Iterate over all distinct terms.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|t| t.as_str())
    }

    /// Union of the members of every group `term` belongs to, minus `term`.
    ///
    /// `term` must already be normalized. Lookup is one level deep: members of
    /// the returned groups are not expanded further.
    pub fn lookup(&self, term: &str) -> Option<HashSet<String>> {
        let ids = self.terms.get(term)?;

        let mut result: HashSet<String> = ids
            .iter()
            .filter_map(|id| self.groups.get(id))
            .flatten()
            .cloned()
            .collect();
        result.remove(term);

        if result.is_empty() { None } else { Some(result) }
    }

    fn insert_group(&mut self, id: GroupId, members: Vec<String>) {
        for term in &members {
            let ids = self.terms.entry(term.clone()).or_default();
            // A term repeated within one group is recorded once.
            if ids.last() != Some(&id) {
                ids.push(id);
            }
        }
        self.groups.insert(id, members);
    }
}

/// Parser turning thesaurus lines into a [`SynonymTable`].
#[derive(Debug, Clone, Copy)]
pub struct ThesaurusParser {
    case_folding: bool,
}

impl Default for ThesaurusParser {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ThesaurusParser {
    /// Create a parser. With `case_folding` every term is lowercased.
    pub fn new(case_folding: bool) -> Self {
        ThesaurusParser { case_folding }
    }

    /// Whether terms are lowercased while parsing.
    pub fn case_folding(&self) -> bool {
        self.case_folding
    }

    /// Parse `lines` read from the source called `source_name`.
    ///
    /// Fails with [`ThesaurusError::Format`] if a data line appears before any
    /// encoding declaration, or if a data line has no head term.
    pub fn parse<I, S>(&self, source_name: &str, lines: I) -> Result<SynonymTable>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = SynonymTable::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_no = idx + 1;

            if line.trim().is_empty() {
                continue;
            }

            if let Some(encoding) = parse_encoding_declaration(line) {
                table.declared_encoding = Some(encoding.to_string());
                continue;
            }

            if line.starts_with('#') {
                continue;
            }

            if table.declared_encoding.is_none() {
                return Err(ThesaurusError::format(format!(
                    "Thesaurus file {source_name} has no 'encoding' parameter specified \
                     (data on line {line_no})"
                )));
            }

            let members = self.parse_data_line(source_name, line_no, line)?;
            table.insert_group(GroupId(line_no), members);
        }

        debug!(
            "parsed thesaurus {}: {} groups, {} terms",
            source_name,
            table.group_count(),
            table.term_count()
        );

        Ok(table)
    }

    fn parse_data_line(&self, source_name: &str, line_no: usize, line: &str) -> Result<Vec<String>> {
        let (head, rest) = line.split_once(' ').ok_or_else(|| {
            ThesaurusError::format(format!(
                "Thesaurus file {source_name} line {line_no}: expected '<term> <synonym>,...'"
            ))
        })?;

        let head = head.trim();
        if head.is_empty() {
            return Err(ThesaurusError::format(format!(
                "Thesaurus file {source_name} line {line_no}: missing head term"
            )));
        }

        let mut members = Vec::with_capacity(rest.matches(',').count() + 2);
        members.push(self.normalize(head));
        members.extend(
            rest.split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(|w| self.normalize(w)),
        );

        Ok(members)
    }

    /// Apply the parser's case-folding policy to a term.
    pub fn normalize(&self, term: &str) -> String {
        if self.case_folding {
            term.to_lowercase()
        } else {
            term.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_basic_group() {
        let table = ThesaurusParser::new(true)
            .parse(
                "test",
                ["# encoding = iso-8859-15", "car auto, automobile, vehicle"],
            )
            .unwrap();

        assert_eq!(table.group_count(), 1);
        assert_eq!(table.term_count(), 4);
        assert_eq!(table.declared_encoding(), Some("iso-8859-15"));
        assert_eq!(
            table.group(GroupId(2)).unwrap(),
            &["car", "auto", "automobile", "vehicle"]
        );
        assert_eq!(table.groups_for("vehicle").unwrap(), &[GroupId(2)]);
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let table = ThesaurusParser::new(true)
            .parse(
                "test",
                [
                    "",
                    "   ",
                    "# encoding = utf-8",
                    "# a comment",
                    "#another comment",
                    "house home, building",
                ],
            )
            .unwrap();

        assert_eq!(table.group_count(), 1);
        assert!(table.group(GroupId(6)).is_some());
    }

    #[test]
    fn test_missing_encoding_is_format_error() {
        let err = ThesaurusParser::new(true)
            .parse("nolang.txt", ["car auto"])
            .unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("nolang.txt"));
    }

    #[test]
    fn test_encoding_after_data_is_too_late() {
        let err = ThesaurusParser::new(true)
            .parse("late.txt", ["# comment", "car auto", "# encoding = latin9"])
            .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_later_declaration_overrides() {
        let table = ThesaurusParser::new(true)
            .parse(
                "test",
                ["# encoding = latin1", "car auto", "# encoding = latin9", "a b"],
            )
            .unwrap();
        assert_eq!(table.declared_encoding(), Some("latin9"));
        assert_eq!(table.group_count(), 2);
    }

    #[test]
    fn test_line_without_space_is_format_error() {
        let err = ThesaurusParser::new(true)
            .parse("bad.txt", ["# encoding = latin9", "lonely"])
            .unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_leading_space_is_format_error() {
        let err = ThesaurusParser::new(true)
            .parse("bad.txt", ["# encoding = latin9", " car auto"])
            .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_only_first_space_separates_head() {
        let table = ThesaurusParser::new(false)
            .parse("test", ["# encoding = latin9", "ml machine learning, ML"])
            .unwrap();
        assert_eq!(
            table.group(GroupId(2)).unwrap(),
            &["ml", "machine learning", "ML"]
        );
    }

    #[test]
    fn test_tokens_trimmed_and_empty_dropped() {
        let table = ThesaurusParser::new(true)
            .parse("test", ["# encoding = latin9", "car  auto ,  wagen ,,\r"])
            .unwrap();
        assert_eq!(table.group(GroupId(2)).unwrap(), &["car", "auto", "wagen"]);
        assert!(table.groups_for("").is_none());
        assert_eq!(table.term_count(), 3);

        let table = ThesaurusParser::new(true)
            .parse("test", ["# encoding = latin9", "car auto,,vehicle"])
            .unwrap();
        assert_eq!(table.term_count(), 3);
    }

    #[test]
    fn test_case_folding() {
        let lines = ["# encoding = latin9", "Car Auto, VEHICLE"];

        let folded = ThesaurusParser::new(true).parse("test", lines).unwrap();
        assert!(folded.groups_for("car").is_some());
        assert!(folded.groups_for("vehicle").is_some());
        assert!(folded.groups_for("Car").is_none());

        let exact = ThesaurusParser::new(false).parse("test", lines).unwrap();
        assert!(exact.groups_for("Car").is_some());
        assert!(exact.groups_for("car").is_none());
    }

    #[test]
    fn test_term_in_multiple_groups() {
        let table = ThesaurusParser::new(true)
            .parse(
                "test",
                ["# encoding = latin9", "bank shore, riverside", "bank institute, lender"],
            )
            .unwrap();

        assert_eq!(table.groups_for("bank").unwrap(), &[GroupId(2), GroupId(3)]);
        assert_eq!(table.term_count(), 5);
        assert_eq!(
            table.lookup("bank").unwrap(),
            set(&["shore", "riverside", "institute", "lender"])
        );
    }

    #[test]
    fn test_lookup_is_one_level_deep() {
        let table = ThesaurusParser::new(true)
            .parse("test", ["# encoding = latin9", "a b", "b c"])
            .unwrap();
        assert_eq!(table.lookup("a").unwrap(), set(&["b"]));
        assert_eq!(table.lookup("b").unwrap(), set(&["a", "c"]));
    }

    #[test]
    fn test_lookup_of_repeated_term_only() {
        let table = ThesaurusParser::new(true)
            .parse("test", ["# encoding = latin9", "echo echo"])
            .unwrap();
        assert_eq!(table.groups_for("echo").unwrap(), &[GroupId(2)]);
        assert!(table.lookup("echo").is_none());
        assert!(table.lookup("missing").is_none());
    }
}
