//! Insertion-ordered frequency counting.

use indexmap::IndexMap;

/// Counts occurrences of keys, remembering the order keys were first seen.
///
/// Rankings sort by count descending with a stable sort, so keys with equal
/// counts keep their first-seen order.
///
/// # Example
///
/// ```rust
/// use chatstats::stats::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
/// for word in ["b", "a", "b", "c", "a"] {
///     table.add(word);
/// }
///
/// // "b" and "a" tie; "b" was seen first.
/// assert_eq!(table.ranked(), [("b", 2), ("a", 2), ("c", 1)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_owned(), 1);
        }
    }

    /// Returns the count for `key`, zero if unseen.
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns every key with its count, by count descending, ties in
    /// first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(key, &count)| (key.as_str(), count))
            .collect();
        // `sort_by` is stable; equal counts stay in insertion order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Returns the first `n` entries of [`ranked`](Self::ranked).
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries = self.ranked();
        entries.truncate(n);
        entries
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for key in iter {
            self.add(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let mut table = FrequencyTable::new();
        table.extend(["x", "y", "x", "x"]);
        assert_eq!(table.count("x"), 3);
        assert_eq!(table.count("y"), 1);
        assert_eq!(table.count("z"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        table.extend(["zeta", "alpha", "mid", "alpha", "zeta", "mid"]);
        assert_eq!(table.ranked(), [("zeta", 2), ("alpha", 2), ("mid", 2)]);
    }

    #[test]
    fn test_later_key_overtakes_with_higher_count() {
        let mut table = FrequencyTable::new();
        table.extend(["a", "b", "b"]);
        assert_eq!(table.ranked(), [("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_top_truncates() {
        let mut table = FrequencyTable::new();
        table.extend(["a", "b", "c", "d"]);
        assert_eq!(table.top(2), [("a", 1), ("b", 1)]);
        assert_eq!(table.top(10).len(), 4);
        assert!(table.top(0).is_empty());
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert!(table.ranked().is_empty());
        assert_eq!(table.total(), 0);
    }
}
