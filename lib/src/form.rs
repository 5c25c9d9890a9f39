use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter},
};

use indexmap::{map::Iter, IndexMap};
use serde::Serialize;

const VARIANT_SEPARATOR: &str = " / ";

/// Surface form(s) recorded for one slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Form {
    Single(String),

    /// Two or more distinct forms, kept sorted.
    Variants(BTreeSet<String>),
}

impl Form {
    #[inline]
    pub fn contains(&self, lexeme: &str) -> bool {
        match self {
            Form::Single(form) => form == lexeme,
            Form::Variants(forms) => forms.contains(lexeme),
        }
    }

    /// Adds `lexeme` as a variant. Returns false if it was already present.
    pub fn add_variant(&mut self, lexeme: &str) -> bool {
        match self {
            Form::Single(form) if form == lexeme => false,
            Form::Single(form) => {
                let forms = BTreeSet::from([std::mem::take(form), lexeme.to_string()]);
                *self = Form::Variants(forms);
                true
            }
            Form::Variants(forms) => forms.insert(lexeme.to_string()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Form::Single(_) => 1,
            Form::Variants(forms) => forms.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Form {
    fn from(value: &str) -> Self {
        Form::Single(value.to_string())
    }
}

impl Display for Form {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::Single(form) => f.write_str(form),
            Form::Variants(forms) => {
                for (index, form) in forms.iter().enumerate() {
                    if index > 0 {
                        f.write_str(VARIANT_SEPARATOR)?;
                    }
                    f.write_str(form)?;
                }
                Ok(())
            }
        }
    }
}

/// Slots collected for one lemma, in the order they were first filled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LemmaRecord {
    slots: IndexMap<String, Form>,
}

impl LemmaRecord {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, slot: &str) -> Option<&Form> {
        self.slots.get(slot)
    }

    #[inline]
    pub fn get_mut(&mut self, slot: &str) -> Option<&mut Form> {
        self.slots.get_mut(slot)
    }

    #[inline]
    pub fn contains(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    #[inline]
    pub fn insert(&mut self, slot: &str, form: Form) {
        self.slots.insert(slot.to_string(), form);
    }

    /// Rendered slot value, `-` when the slot was never filled.
    #[inline]
    pub fn cell(&self, slot: &str) -> String {
        self.get(slot)
            .map(Form::to_string)
            .unwrap_or_else(|| String::from("-"))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, Form> {
        self.slots.iter()
    }
}
