mod quality;

pub use quality::QualityFilter;

use std::fmt::Debug;

use crate::entry::Entry;

pub trait EntryFilter: Debug {
    fn accept(&self, entry: &Entry) -> bool;
}

/// Filters applied in insertion order, an entry has to pass all of them.
#[derive(Debug)]
pub struct FilterPipeline(Vec<Box<dyn EntryFilter>>);

impl Default for FilterPipeline {
    fn default() -> Self {
        let mut pipeline = Self::new();
        pipeline.insert(Box::new(QualityFilter::new()));
        pipeline
    }
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, filter: Box<dyn EntryFilter>) -> &mut Self {
        self.0.push(filter);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn accept(&self, entry: &Entry) -> bool {
        self.0.iter().all(|filter| filter.accept(entry))
    }
}
