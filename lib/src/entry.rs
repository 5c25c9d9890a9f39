extern crate hashbrown;

use std::fmt::{Display, Formatter};

use hashbrown::HashSet;

use crate::error::{Error, Result};

const FIELD_SEPARATOR: char = ' ';
const TAG_SEPARATOR: char = ':';

/// Grammatical tag codes of a single dictionary line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tags(HashSet<String>);

impl Tags {
    #[inline]
    pub fn parse(tags: &str) -> Self {
        tags.split(TAG_SEPARATOR).collect()
    }

    #[inline]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// True if at least one of `tags` is present.
    #[inline]
    pub fn contains_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.contains(tag))
    }

    /// Exact set equality, `tags` is expected to be duplicate-free.
    #[inline]
    pub fn is_exactly(&self, tags: &[&str]) -> bool {
        self.len() == tags.len() && tags.iter().all(|tag| self.contains(tag))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Tags {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Tags(iter.into_iter().map(String::from).collect())
    }
}

/// One parsed dictionary line: `<lexeme> <lemma> <tag>:<tag>:...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    lexeme: String,
    lemma: String,
    tags: Tags,
}

impl Entry {
    #[inline]
    pub fn new<S: Into<String>>(lexeme: S, lemma: S, tags: Tags) -> Self {
        Self {
            lexeme: lexeme.into(),
            lemma: lemma.into(),
            tags,
        }
    }

    /// Parses a raw line. `line` is the 1-based position used in errors.
    pub fn parse(text: &str, line: usize) -> Result<Self> {
        let fields = text.trim().split(FIELD_SEPARATOR).collect::<Vec<_>>();

        match fields.as_slice() {
            [lexeme, lemma, tags] => Ok(Self::new(*lexeme, *lemma, Tags::parse(tags))),
            _ => Err(Error::MalformedLine {
                line,
                fields: fields.len(),
                content: text.to_string(),
            }),
        }
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    #[inline]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    #[inline]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", self.lexeme, self.lemma)?;

        let mut tags = self.tags.0.iter().map(String::as_str).collect::<Vec<_>>();
        tags.sort_unstable();
        f.write_str(&tags.join(":"))
    }
}

#[cfg(test)]
#[macro_export]
macro_rules! entries {
    ( $( $line:expr ),* $(,)? ) => {{
        vec![
            $( $crate::entry::Entry::parse($line, 0).unwrap() ),*
        ]
    }};
}

#[cfg(test)]
mod tests {
    use crate::{
        entry::{Entry, Tags},
        error::Error,
    };

    #[test]
    fn test_entry_parse_basic() {
        let entry = Entry::parse("книжки книжка noun:f:v_rod", 1).unwrap();

        assert_eq!(entry.lexeme(), "книжки");
        assert_eq!(entry.lemma(), "книжка");
        assert_eq!(entry.tags(), &Tags::parse("v_rod:f:noun"));
        assert_eq!(entry.tags().len(), 3);
    }

    #[test]
    fn test_entry_parse_trims_line() {
        let entry = Entry::parse("  робив робити verb:imperf:past:m\n", 1).unwrap();

        assert_eq!(entry.lexeme(), "робив");
        assert!(entry.tags().contains("past"));
    }

    #[test]
    fn test_entry_parse_two_fields() {
        let error = Entry::parse("книжки noun:f:v_rod", 7).unwrap_err();

        assert!(matches!(
            error,
            Error::MalformedLine {
                line: 7,
                fields: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_entry_parse_four_fields() {
        let error = Entry::parse("a b c d", 2).unwrap_err();
        assert!(matches!(error, Error::MalformedLine { fields: 4, .. }));
    }

    #[test]
    fn test_entry_parse_double_space() {
        let error = Entry::parse("книжки  книжка noun", 3).unwrap_err();
        assert!(matches!(error, Error::MalformedLine { fields: 4, .. }));
    }

    #[test]
    fn test_entry_parse_blank() {
        let error = Entry::parse("   ", 4).unwrap_err();
        assert!(matches!(error, Error::MalformedLine { fields: 1, .. }));
    }

    #[test]
    fn test_tags_exact_match() {
        let tags = Tags::parse("verb:imperf:inf");

        assert!(tags.is_exactly(&["inf", "verb", "imperf"]));
        assert!(!tags.is_exactly(&["verb", "imperf"]));
        assert!(!tags.is_exactly(&["verb", "imperf", "inf", "rev"]));
    }

    #[test]
    fn test_tags_contains_any() {
        let tags = Tags::parse("noun:f:v_rod:rare");

        assert!(tags.contains_any(&["bad", "rare"]));
        assert!(!tags.contains_any(&["bad", "arch"]));
        assert!(!tags.contains_any(&[]));
    }

    #[test]
    fn test_entry_display_sorted_tags() {
        let entry = Entry::parse("гарна гарний adj:f:v_naz", 1).unwrap();
        assert_eq!(entry.to_string(), "гарна гарний adj:f:v_naz");
    }
}
