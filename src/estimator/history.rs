//! Append-only session history.

use super::types::HistoryEntry;

/// Ordered log of saved estimates.
///
/// Entries can only be appended; there is no removal or mutable access, so
/// an entry never changes position or contents after it is recorded.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry at the end of the log.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entry(day: u32, cost: f64) -> HistoryEntry {
        HistoryEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
            units: 10.0,
            cost,
        }
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut log = HistoryLog::new();
        log.push(entry(3, 1.0));
        log.push(entry(1, 2.0));
        log.push(entry(2, 3.0));
        let costs: Vec<f64> = log.iter().map(|e| e.cost).collect();
        assert_eq!(costs, vec![1.0, 2.0, 3.0]);
        assert_eq!(log.last().map(|e| e.cost), Some(3.0));
    }

    #[test]
    fn empty_log() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }
}
