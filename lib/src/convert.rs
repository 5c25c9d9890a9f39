//! The [`Converter`] drives a single conversion run.
//!
//! Entries flow through the [`FilterPipeline`] into the part-of-speech
//! [`Selector`], which records the interesting forms in the run's
//! [`Aggregator`]. Nothing is written until the input is fully consumed.

use std::io::{BufRead, Write};

use crate::{
    aggregate::Aggregator,
    entry::Entry,
    error::Result,
    filter::FilterPipeline,
    reader::EntryReader,
    selector::{FormSelector, PartOfSpeech, Selector},
    writer::{OutputFormat, TableWriter},
};

/// Counters of a conversion run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Entries parsed.
    pub read: usize,

    /// Entries rejected by the filters.
    pub filtered: usize,
}

#[derive(Debug)]
pub struct Converter {
    filters: FilterPipeline,
    selector: Selector,
    forms: Aggregator,
    stats: Stats,
}

impl Converter {
    /// Creates a converter with the default quality filter.
    pub fn new(part_of_speech: PartOfSpeech) -> Self {
        Self::with_filters(part_of_speech, FilterPipeline::default())
    }

    pub fn with_filters(part_of_speech: PartOfSpeech, filters: FilterPipeline) -> Self {
        Self {
            filters,
            selector: Selector::new(part_of_speech),
            forms: Aggregator::new(),
            stats: Stats::default(),
        }
    }

    pub fn feed(&mut self, entry: &Entry) {
        self.stats.read += 1;

        if !self.filters.accept(entry) {
            self.stats.filtered += 1;
            return;
        }

        self.selector.add(entry, &mut self.forms);
    }

    /// Consumes all entries, stopping at the first error.
    pub fn read_from<R: BufRead>(&mut self, reader: EntryReader<R>) -> Result<()> {
        for entry in reader {
            self.feed(&entry?);
        }

        tracing::debug!(
            part_of_speech = %self.selector.part_of_speech(),
            read = self.stats.read,
            filtered = self.stats.filtered,
            lemmas = self.forms.len(),
            conflicts = self.forms.conflicts(),
            "input consumed"
        );

        Ok(())
    }

    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<usize> {
        TableWriter::new(&self.selector, &self.forms).write(out, format)
    }

    /// Text output lines, in first-seen lemma order.
    pub fn lines(&self) -> Vec<String> {
        TableWriter::new(&self.selector, &self.forms)
            .lines()
            .collect()
    }

    #[inline]
    pub fn forms(&self) -> &Aggregator {
        &self.forms
    }

    #[inline]
    pub fn stats(&self) -> Stats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::{
        convert::{Converter, Stats},
        entries,
        error::Error,
        filter::FilterPipeline,
        reader::EntryReader,
        selector::PartOfSpeech,
    };

    #[test]
    fn test_convert_noun_example() {
        let mut converter = Converter::new(PartOfSpeech::Noun);

        for entry in entries!["книжки книжка noun:f:v_rod", "книжки книжка noun:p:v_naz"] {
            converter.feed(&entry);
        }

        assert_eq!(converter.lines(), vec!["книжка | книжки | книжки"]);
    }

    #[test]
    fn test_convert_excluded_tag() {
        let mut converter = Converter::new(PartOfSpeech::Noun);

        for entry in entries!["дівка дівка noun:bad:v_rod"] {
            converter.feed(&entry);
        }

        assert!(converter.forms().get("дівка").is_none());
        assert!(converter.lines().is_empty());
        assert_eq!(converter.stats(), Stats { read: 1, filtered: 1 });
    }

    #[test]
    fn test_convert_without_filters() {
        let mut converter = Converter::with_filters(PartOfSpeech::Noun, FilterPipeline::new());

        for entry in entries!["дівки дівка noun:bad:v_rod"] {
            converter.feed(&entry);
        }

        assert_eq!(converter.lines(), vec!["дівка | дівки | -"]);
    }

    #[test]
    fn test_convert_lemma_order_skips_unrelated() {
        let mut converter = Converter::new(PartOfSpeech::Adjective);

        for entry in entries![
            "книжки книжка noun:f:v_rod",
            "синя синій adj:f:v_naz",
            "гарного гарний adj:m:v_rod",
            "гарний гарний adj:m:v_naz",
            "синій синій adj:m:v_naz",
        ] {
            converter.feed(&entry);
        }

        assert_eq!(
            converter.lines(),
            vec!["синій | - | синя | -", "гарний | - | - | -"]
        );
    }

    #[test]
    fn test_convert_read_from_malformed() {
        let input = "робити робити verb:imperf:inf\nроблю verb:imperf:pres:s:1\n";
        let mut converter = Converter::new(PartOfSpeech::Verb);

        let error = converter
            .read_from(EntryReader::new(Cursor::new(input)))
            .unwrap_err();

        assert!(matches!(error, Error::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_convert_write_text() {
        let input = "робити робити verb:imperf:inf\n\
                     роблю робити verb:imperf:pres:s:1\n\
                     робив робити verb:imperf:past:m\n";
        let mut converter = Converter::new(PartOfSpeech::Verb);
        converter
            .read_from(EntryReader::new(Cursor::new(input)))
            .unwrap();

        let mut out = Vec::new();
        let rows = converter
            .write(&mut out, crate::writer::OutputFormat::Text)
            .unwrap();

        assert_eq!(rows, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "робити | роблю | робив\n");
    }
}
