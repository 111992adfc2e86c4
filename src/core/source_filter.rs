//! Source suppression filters

use serde::{Deserialize, Serialize};

use crate::core::log_source::LogSource;

/// Polarity of a [`SourceFilter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Listed sources are suppressed; everything else passes.
    #[default]
    Blacklist,
    /// Listed sources pass; everything else is suppressed.
    Whitelist,
}

/// A mode plus a set of sources, answering "is this source suppressed?".
///
/// `include_source` and `exclude_source` are mode-aware: including a
/// source always makes it pass the filter and excluding always makes it
/// suppressed, whichever mode is active. Both are idempotent.
///
/// Filters are value objects: cloning deep-copies the entry set, and
/// equality compares mode plus entries as sets. Entry counts are
/// expected to be small, so containment checks are linear.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    mode: FilterMode,
    entries: Vec<LogSource>,
}

impl SourceFilter {
    #[must_use]
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    /// Empty blacklist: nothing is suppressed.
    #[must_use]
    pub fn blacklist() -> Self {
        Self::new(FilterMode::Blacklist)
    }

    /// Empty whitelist: everything is suppressed.
    #[must_use]
    pub fn whitelist() -> Self {
        Self::new(FilterMode::Whitelist)
    }

    /// A filter pre-populated with entries, deduplicated.
    #[must_use]
    pub fn of(mode: FilterMode, entries: impl IntoIterator<Item = LogSource>) -> Self {
        let mut filter = Self::new(mode);
        for source in entries {
            filter.add(&source);
        }
        filter
    }

    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Whether a log call tagged with `source` must be suppressed.
    #[must_use]
    pub fn is_filtered(&self, source: &LogSource) -> bool {
        match self.mode {
            FilterMode::Blacklist => self.contains(source),
            FilterMode::Whitelist => !self.contains(source),
        }
    }

    /// Makes `source` pass the filter. Returns whether the filter changed.
    pub fn include_source(&mut self, source: &LogSource) -> bool {
        match self.mode {
            FilterMode::Blacklist => self.drop_entry(source),
            FilterMode::Whitelist => self.add(source),
        }
    }

    /// Makes `source` suppressed. Returns whether the filter changed.
    pub fn exclude_source(&mut self, source: &LogSource) -> bool {
        match self.mode {
            FilterMode::Blacklist => self.add(source),
            FilterMode::Whitelist => self.drop_entry(source),
        }
    }

    #[must_use]
    pub fn contains(&self, source: &LogSource) -> bool {
        self.entries.contains(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, source: &LogSource) -> bool {
        if self.contains(source) {
            return false;
        }
        self.entries.push(source.clone());
        true
    }

    fn drop_entry(&mut self, source: &LogSource) -> bool {
        match self.entries.iter().position(|entry| entry == source) {
            Some(idx) => {
                self.entries.swap_remove(idx);
                true
            }
            None => false,
        }
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::blacklist()
    }
}

impl PartialEq for SourceFilter {
    /// Same mode and same entries, compared as sets.
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.len() == other.len()
            && self.entries.iter().all(|entry| other.contains(entry))
    }
}

impl Eq for SourceFilter {}
