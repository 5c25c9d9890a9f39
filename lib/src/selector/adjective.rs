use crate::{
    aggregate::{Aggregator, Tolerance},
    entry::Entry,
    form::LemmaRecord,
    selector::FormSelector,
};

/// Masculine, neuter, feminine and plural; also used as slot names.
const GENDERS: [&str; 4] = ["m", "n", "f", "p"];

/// Comparative and superlative degrees.
const DEGREE_TAGS: [&str; 2] = ["compc", "comps"];

/// Long (formal) and short forms.
const LENGTH_TAGS: [&str; 2] = ["long", "short"];

/// Nominative base forms of adjectives, one per gender.
#[derive(Clone, Debug, Default)]
pub struct Adjectives;

impl Adjectives {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormSelector for Adjectives {
    fn add(&self, entry: &Entry, forms: &mut Aggregator) {
        let tags = entry.tags();

        if !tags.contains("adj")
            || tags.contains_any(&DEGREE_TAGS)
            || !tags.contains("v_naz")
            || tags.contains_any(&LENGTH_TAGS)
        {
            return;
        }

        GENDERS
            .iter()
            .filter(|gender| tags.contains(gender))
            .for_each(|gender| {
                forms.add_form(entry.lemma(), gender, entry.lexeme(), Tolerance::Single);
            });
    }

    // The forms identify the paradigm, so the lemma is not printed.
    fn format(&self, _lemma: &str, forms: &LemmaRecord) -> Option<String> {
        let cells = GENDERS
            .iter()
            .map(|gender| forms.cell(gender))
            .collect::<Vec<_>>();

        Some(cells.join(" | "))
    }
}
