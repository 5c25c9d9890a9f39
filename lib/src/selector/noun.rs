use crate::{
    aggregate::{Aggregator, Tolerance},
    entry::Entry,
    form::LemmaRecord,
    selector::FormSelector,
};

const GENITIVE_SINGULAR: &str = "gen.sg";
const PLURAL: &str = "pl";

/// Proper names, surnames and patronymics.
const NAME_TAGS: [&str; 3] = ["prop", "lname", "patr"];

/// Singular genitive and plural nominative of common nouns.
#[derive(Clone, Debug, Default)]
pub struct Nouns;

impl Nouns {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormSelector for Nouns {
    fn add(&self, entry: &Entry, forms: &mut Aggregator) {
        let tags = entry.tags();

        if !tags.contains("noun") || tags.contains_any(&NAME_TAGS) {
            return;
        }

        let plural = tags.contains("p");

        if !plural && tags.contains("v_rod") {
            forms.add_form(
                entry.lemma(),
                GENITIVE_SINGULAR,
                entry.lexeme(),
                Tolerance::Variants,
            );
        }

        if plural && tags.contains("v_naz") {
            forms.add_form(entry.lemma(), PLURAL, entry.lexeme(), Tolerance::Variants);
        }
    }

    fn format(&self, lemma: &str, forms: &LemmaRecord) -> Option<String> {
        Some(format!(
            "{lemma} | {} | {}",
            forms.cell(GENITIVE_SINGULAR),
            forms.cell(PLURAL)
        ))
    }
}
