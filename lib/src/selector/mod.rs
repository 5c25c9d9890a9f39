mod adjective;
mod noun;
mod verb;

pub use {adjective::Adjectives, noun::Nouns, verb::Verbs};

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::{aggregate::Aggregator, entry::Entry, error::Error, form::LemmaRecord};

pub trait FormSelector {
    /// Records the forms of `entry` this part of speech cares about.
    fn add(&self, entry: &Entry, forms: &mut Aggregator);

    /// Renders one output line, `None` if the lemma has nothing to print.
    fn format(&self, lemma: &str, forms: &LemmaRecord) -> Option<String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 3] = [Self::Adjective, Self::Noun, Self::Verb];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adj",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "noun" => Ok(Self::Noun),
            "verb" => Ok(Self::Verb),
            "adj" => Ok(Self::Adjective),
            _ => Err(Error::UnknownPartOfSpeech(name.to_string())),
        }
    }
}

impl Display for PartOfSpeech {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub enum Selector {
    Noun(Nouns),
    Adjective(Adjectives),
    Verb(Verbs),
}

impl Selector {
    pub fn new(part_of_speech: PartOfSpeech) -> Self {
        match part_of_speech {
            PartOfSpeech::Noun => Selector::Noun(Nouns::new()),
            PartOfSpeech::Adjective => Selector::Adjective(Adjectives::new()),
            PartOfSpeech::Verb => Selector::Verb(Verbs::new()),
        }
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        match self {
            Selector::Noun(_) => PartOfSpeech::Noun,
            Selector::Adjective(_) => PartOfSpeech::Adjective,
            Selector::Verb(_) => PartOfSpeech::Verb,
        }
    }
}

impl From<PartOfSpeech> for Selector {
    fn from(part_of_speech: PartOfSpeech) -> Self {
        Selector::new(part_of_speech)
    }
}

impl FormSelector for Selector {
    fn add(&self, entry: &Entry, forms: &mut Aggregator) {
        match self {
            Selector::Noun(selector) => selector.add(entry, forms),
            Selector::Adjective(selector) => selector.add(entry, forms),
            Selector::Verb(selector) => selector.add(entry, forms),
        }
    }

    fn format(&self, lemma: &str, forms: &LemmaRecord) -> Option<String> {
        match self {
            Selector::Noun(selector) => selector.format(lemma, forms),
            Selector::Adjective(selector) => selector.format(lemma, forms),
            Selector::Verb(selector) => selector.format(lemma, forms),
        }
    }
}
