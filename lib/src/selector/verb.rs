use crate::{
    aggregate::{Aggregator, Tolerance},
    entry::Entry,
    form::LemmaRecord,
    selector::FormSelector,
};

const IMPERFECTIVE_INFINITIVE: &str = "imperf.inf";
const PERFECTIVE_INFINITIVE: &str = "perf.inf";
const PRESENT: &str = "present.1p.sg";
const FUTURE: &str = "future.1p.sg";
const PAST: &str = "past";

struct Pattern {
    tags: &'static [&'static str],
    slot: &'static str,
    tolerance: Tolerance,
}

/// Tag sets are matched exactly, any other verb form is ignored.
static PATTERNS: [Pattern; 6] = [
    Pattern {
        tags: &["verb", "imperf", "inf"],
        slot: IMPERFECTIVE_INFINITIVE,
        tolerance: Tolerance::Single,
    },
    Pattern {
        tags: &["verb", "imperf", "pres", "s", "1"],
        slot: PRESENT,
        tolerance: Tolerance::Variants,
    },
    Pattern {
        tags: &["verb", "imperf", "past", "m"],
        slot: PAST,
        tolerance: Tolerance::Variants,
    },
    Pattern {
        tags: &["verb", "perf", "inf"],
        slot: PERFECTIVE_INFINITIVE,
        tolerance: Tolerance::Single,
    },
    Pattern {
        tags: &["verb", "perf", "futr", "s", "1"],
        slot: FUTURE,
        tolerance: Tolerance::Variants,
    },
    Pattern {
        tags: &["verb", "perf", "past", "m"],
        slot: PAST,
        tolerance: Tolerance::Variants,
    },
];

/// First person singular and masculine past of verbs, by aspect.
#[derive(Clone, Debug, Default)]
pub struct Verbs;

impl Verbs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormSelector for Verbs {
    fn add(&self, entry: &Entry, forms: &mut Aggregator) {
        let tags = entry.tags();

        if !tags.contains("verb") {
            return;
        }

        if let Some(pattern) = PATTERNS.iter().find(|pattern| tags.is_exactly(pattern.tags)) {
            forms.add_form(
                entry.lemma(),
                pattern.slot,
                entry.lexeme(),
                pattern.tolerance,
            );
        }
    }

    fn format(&self, lemma: &str, forms: &LemmaRecord) -> Option<String> {
        let slot = if forms.contains(IMPERFECTIVE_INFINITIVE) {
            PRESENT
        } else if forms.contains(PERFECTIVE_INFINITIVE) {
            FUTURE
        } else {
            return None;
        };

        Some(format!(
            "{lemma} | {} | {}",
            forms.cell(slot),
            forms.cell(PAST)
        ))
    }
}
