//! Character-level formatting marks attached to text runs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A character-level formatting attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
}

/// A duplicate-free set of marks on a run
///
/// Order of insertion is irrelevant; two sets with the same members compare
/// equal and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkSet(BTreeSet<Mark>);

impl MarkSet {
    /// Create an empty mark set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mark; adding an already-present mark is a no-op
    pub fn insert(&mut self, mark: Mark) {
        self.0.insert(mark);
    }

    /// Remove a mark
    pub fn remove(&mut self, mark: Mark) {
        self.0.remove(&mark);
    }

    /// Check whether a mark is present
    pub fn contains(&self, mark: Mark) -> bool {
        self.0.contains(&mark)
    }

    /// Check whether no marks are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct marks
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the marks in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Mark> for MarkSet {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[Mark]> for MarkSet {
    fn from(marks: &[Mark]) -> Self {
        marks.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut set = MarkSet::new();
        set.insert(Mark::Bold);
        set.insert(Mark::Bold);
        set.insert(Mark::Italic);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Mark::Bold));
        assert!(set.contains(Mark::Italic));
        assert!(!set.contains(Mark::Underline));
    }

    #[test]
    fn test_order_irrelevant() {
        let a: MarkSet = [Mark::Bold, Mark::Underline].into_iter().collect();
        let b: MarkSet = [Mark::Underline, Mark::Bold].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_as_list() {
        let set: MarkSet = [Mark::Italic, Mark::Bold].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["bold","italic"]"#);

        let back: MarkSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
