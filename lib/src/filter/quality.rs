use crate::{entry::Entry, filter::EntryFilter};

/// Erroneous, rare, archaic, non-normative and substandard forms.
pub const EXCLUDED_TAGS: [&str; 5] = ["bad", "rare", "arch", "alt", "subst"];

#[derive(Clone, Debug)]
pub struct QualityFilter {
    excluded: &'static [&'static str],
}

impl Default for QualityFilter {
    fn default() -> Self {
        Self {
            excluded: &EXCLUDED_TAGS,
        }
    }
}

impl QualityFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryFilter for QualityFilter {
    #[inline]
    fn accept(&self, entry: &Entry) -> bool {
        !entry.tags().contains_any(self.excluded)
    }
}
