//! Enabled-level sets owned by backends

use crate::core::log_level::LogLevel;

/// Small unordered set of enabled levels.
///
/// Backends hold one of these and emit a message only when its level is a
/// member. Level sets are expected to stay small (a handful of entries),
/// so membership checks are linear scans over a `Vec`.
#[derive(Debug, Clone)]
pub struct LevelSet {
    levels: Vec<LogLevel>,
}

impl LevelSet {
    #[must_use]
    pub fn empty() -> Self {
        Self { levels: Vec::new() }
    }

    /// All five predefined levels.
    #[must_use]
    pub fn all_builtin() -> Self {
        Self {
            levels: LogLevel::BUILTIN.to_vec(),
        }
    }

    #[must_use]
    pub fn of(levels: impl IntoIterator<Item = LogLevel>) -> Self {
        let mut set = Self::empty();
        for level in levels {
            set.insert(level);
        }
        set
    }

    /// Adds a level. Returns `false` if it was already present.
    pub fn insert(&mut self, level: LogLevel) -> bool {
        if self.contains(level) {
            return false;
        }
        self.levels.push(level);
        true
    }

    /// Removes a level. Returns `false` if it was absent.
    pub fn remove(&mut self, level: LogLevel) -> bool {
        match self.levels.iter().position(|l| *l == level) {
            Some(idx) => {
                self.levels.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, level: LogLevel) -> bool {
        self.levels.contains(&level)
    }

    /// Set union. Returns whether any level was actually added, so
    /// callers can skip work when the operation was a no-op.
    pub fn union_with(&mut self, other: &LevelSet) -> bool {
        let mut changed = false;
        for level in other.iter() {
            changed |= self.insert(level);
        }
        changed
    }

    /// Set difference. Returns whether any level was actually removed.
    pub fn subtract(&mut self, other: &LevelSet) -> bool {
        let mut changed = false;
        for level in other.iter() {
            changed |= self.remove(level);
        }
        changed
    }

    pub fn iter(&self) -> impl Iterator<Item = LogLevel> + '_ {
        self.levels.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// The default enabled set mirrors the usual production threshold:
/// errors, warnings, and informational messages.
impl Default for LevelSet {
    fn default() -> Self {
        Self::of([LogLevel::Error, LogLevel::Warn, LogLevel::Info])
    }
}

impl PartialEq for LevelSet {
    /// Set equality: insertion order is irrelevant.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|level| other.contains(level))
    }
}

impl Eq for LevelSet {}

impl FromIterator<LogLevel> for LevelSet {
    fn from_iter<I: IntoIterator<Item = LogLevel>>(iter: I) -> Self {
        Self::of(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove_report_change() {
        let mut set = LevelSet::empty();
        assert!(set.insert(LogLevel::Error));
        assert!(!set.insert(LogLevel::Error));
        assert!(set.remove(LogLevel::Error));
        assert!(!set.remove(LogLevel::Error));
    }

    #[test]
    fn test_union_and_subtract() {
        let mut set = LevelSet::of([LogLevel::Error, LogLevel::Warn]);
        let more = LevelSet::of([LogLevel::Warn, LogLevel::Debug]);

        assert!(set.union_with(&more));
        assert_eq!(set.len(), 3);
        assert!(!set.union_with(&more));

        assert!(set.subtract(&more));
        assert_eq!(set, LevelSet::of([LogLevel::Error]));
        assert!(!set.subtract(&more));
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a = LevelSet::of([LogLevel::Error, LogLevel::Trace]);
        let b = LevelSet::of([LogLevel::Trace, LogLevel::Error]);
        assert_eq!(a, b);
        assert_ne!(a, LevelSet::of([LogLevel::Error]));
    }

    #[test]
    fn test_custom_levels_are_members() {
        let audit = LogLevel::Custom("Audit");
        let mut set = LevelSet::default();
        assert!(!set.contains(audit));
        set.insert(audit);
        assert!(set.contains(audit));
        assert!(set.contains(LogLevel::Info));
    }
}
