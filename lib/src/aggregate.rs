use indexmap::{map::Iter, IndexMap};

use crate::form::{Form, LemmaRecord};

/// Whether a slot may collect more than one distinct form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tolerance {
    Variants,
    Single,
}

/// Outcome of [`Aggregator::add_form`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Merge {
    /// The slot was empty.
    Inserted,

    /// The form was already recorded.
    Unchanged,

    /// The form was added as a new variant.
    Extended,

    /// The slot holds a different form and does not take variants.
    Conflict,
}

/// Per-lemma accumulator owned by a single conversion run.
///
/// Lemmas keep the order in which they first received a form.
#[derive(Debug, Default)]
pub struct Aggregator {
    inner: IndexMap<String, LemmaRecord>,
    conflicts: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity(capacity),
            conflicts: 0,
        }
    }

    /// Records `lexeme` under `slot` for `lemma`.
    pub fn add_form(
        &mut self,
        lemma: &str,
        slot: &str,
        lexeme: &str,
        tolerance: Tolerance,
    ) -> Merge {
        let record = match self.inner.get_index_of(lemma) {
            Some(index) => &mut self.inner[index],
            None => self.inner.entry(lemma.to_string()).or_default(),
        };

        let merge = match record.get_mut(slot) {
            None => {
                record.insert(slot, Form::from(lexeme));
                Merge::Inserted
            }
            Some(form) if form.contains(lexeme) => Merge::Unchanged,
            Some(form) if tolerance == Tolerance::Variants => {
                form.add_variant(lexeme);
                Merge::Extended
            }
            Some(form) => {
                tracing::warn!(
                    lemma,
                    slot,
                    kept = %form,
                    dropped = lexeme,
                    "conflicting form, keeping the first one"
                );
                Merge::Conflict
            }
        };

        if merge == Merge::Conflict {
            self.conflicts += 1;
        }

        merge
    }

    #[inline]
    pub fn get(&self, lemma: &str) -> Option<&LemmaRecord> {
        self.inner.get(lemma)
    }

    /// Number of dropped conflicting forms so far.
    #[inline]
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, LemmaRecord> {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for &'a Aggregator {
    type Item = (&'a String, &'a LemmaRecord);
    type IntoIter = Iter<'a, String, LemmaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
