//! Condenses a VESUM morphological dictionary into inflection tables.
//!
//! Each input line is `<lexeme> <lemma> <tag>:<tag>:...`. Entries pass the
//! quality [`filter`], a part-of-speech [`selector`] picks the forms worth
//! showing and [`writer`] renders one line per lemma.

pub mod aggregate;
pub mod convert;
pub mod entry;
pub mod error;
pub mod filter;
pub mod form;
pub mod reader;
pub mod selector;
pub mod writer;

pub use convert::Converter;
pub use error::{Error, Result};
pub use selector::PartOfSpeech;
