use std::collections::BTreeSet;

use crate::date::CalendarDate;

/// The set of selected dates.
///
/// Unbounded across months and years, so a date stays selected while the
/// grid shows some other month. Toggling is idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    dates: BTreeSet<CalendarDate>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (`select = true`) or remove `date`.
    /// Returns whether membership changed.
    pub fn toggle(&mut self, date: CalendarDate, select: bool) -> bool {
        if select {
            self.dates.insert(date)
        } else {
            self.dates.remove(&date)
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    /// Selected dates in chronological order
    pub fn list(&self) -> Vec<CalendarDate> {
        self.dates.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(date("2024-03-15"), true));
        let once = selection.clone();

        assert!(!selection.toggle(date("2024-03-15"), true));
        assert_eq!(selection, once);
        assert_eq!(selection.list().len(), 1);
    }

    #[test]
    fn test_deselect_absent_is_noop() {
        let mut selection = SelectionSet::new();
        selection.toggle(date("2024-03-15"), true);

        assert!(!selection.toggle(date("2024-03-16"), false));
        assert_eq!(selection.list(), vec![date("2024-03-15")]);

        assert!(selection.toggle(date("2024-03-15"), false));
        assert!(selection.list().is_empty());
    }

    #[test]
    fn test_list_is_sorted() {
        let mut selection = SelectionSet::new();
        for s in ["2024-05-01", "2023-12-31", "2024-01-15"] {
            selection.toggle(date(s), true);
        }

        let listed: Vec<String> = selection.list().iter().map(|d| d.to_string()).collect();
        assert_eq!(listed, vec!["2023-12-31", "2024-01-15", "2024-05-01"]);
    }
}
