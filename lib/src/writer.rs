use std::{io::Write, str::FromStr};

use serde::Serialize;

use crate::{
    aggregate::Aggregator,
    error::{Error, IoError, Result},
    form::LemmaRecord,
    selector::FormSelector,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `lemma | form | form` lines.
    #[default]
    Text,

    /// One JSON object per lemma.
    JsonLines,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(format: &str) -> std::result::Result<Self, Self::Err> {
        match format {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::JsonLines),
            _ => Err(format!("Could not parse output format: {format}")),
        }
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    lemma: &'a str,
    forms: &'a LemmaRecord,
}

/// Writes the collected lemmas in first-seen order.
pub struct TableWriter<'w, S: FormSelector> {
    selector: &'w S,
    forms: &'w Aggregator,
}

impl<'w, S: FormSelector> TableWriter<'w, S> {
    pub fn new(selector: &'w S, forms: &'w Aggregator) -> Self {
        Self { selector, forms }
    }

    /// Text lines for every lemma the selector can format.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.forms
            .iter()
            .filter_map(|(lemma, record)| self.selector.format(lemma, record))
    }

    /// Writes all rows and returns how many were written.
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<usize> {
        let mut rows = 0;

        for (lemma, record) in self.forms {
            let Some(line) = self.selector.format(lemma, record) else {
                continue;
            };

            match format {
                OutputFormat::Text => writeln!(out, "{line}").map_err(writer_error)?,
                OutputFormat::JsonLines => {
                    let row = JsonRow {
                        lemma,
                        forms: record,
                    };
                    serde_json::to_writer(&mut *out, &row)?;
                    out.write_all(b"\n").map_err(writer_error)?;
                }
            }

            rows += 1;
        }

        out.flush().map_err(writer_error)?;
        Ok(rows)
    }
}

fn writer_error(error: std::io::Error) -> Error {
    IoError::Writer(error.kind()).into()
}

#[cfg(test)]
mod tests {
    use crate::{
        aggregate::{Aggregator, Tolerance},
        selector::{Nouns, Verbs},
        writer::{OutputFormat, TableWriter},
    };

    #[test]
    fn test_writer_text() {
        let mut forms = Aggregator::new();
        forms.add_form("книжка", "gen.sg", "книжки", Tolerance::Variants);
        forms.add_form("стіл", "pl", "столи", Tolerance::Variants);

        let selector = Nouns::new();
        let mut out = Vec::new();
        let rows = TableWriter::new(&selector, &forms)
            .write(&mut out, OutputFormat::Text)
            .unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "книжка | книжки | -\nстіл | - | столи\n"
        );
    }

    #[test]
    fn test_writer_skips_unformatted() {
        let mut forms = Aggregator::new();
        forms.add_form("робити", "past", "робив", Tolerance::Variants);
        forms.add_form("ходити", "imperf.inf", "ходити", Tolerance::Single);

        let selector = Verbs::new();
        let writer = TableWriter::new(&selector, &forms);

        assert_eq!(writer.lines().collect::<Vec<_>>(), vec!["ходити | - | -"]);
    }

    #[test]
    fn test_writer_json_lines() {
        let mut forms = Aggregator::new();
        forms.add_form("рік", "gen.sg", "року", Tolerance::Variants);
        forms.add_form("рік", "gen.sg", "рока", Tolerance::Variants);
        forms.add_form("рік", "pl", "роки", Tolerance::Variants);

        let selector = Nouns::new();
        let mut out = Vec::new();
        TableWriter::new(&selector, &forms)
            .write(&mut out, OutputFormat::JsonLines)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let row: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();

        assert_eq!(row["lemma"], "рік");
        assert_eq!(row["forms"]["gen.sg"], serde_json::json!(["рока", "року"]));
        assert_eq!(row["forms"]["pl"], "роки");
    }

    #[test]
    fn test_writer_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::JsonLines);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
