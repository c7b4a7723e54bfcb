//! Derives the visible subset of a snapshot from the user's criteria.

use super::model::{Category, Row};
use super::snapshot::Snapshot;

/// Category half of the criteria: everything, or a single asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// User-selected view criteria. The two fields are updated independently by
/// their controls and read together each time the filter runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub text: String,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, text: impl Into<String>) -> Self {
        FilterCriteria {
            category,
            text: text.into(),
        }
    }
}

/// Selects the rows of `snapshot` satisfying `criteria`.
///
/// Two order-preserving passes: the category pass keeps rows matching
/// `Only(..)` (`All` keeps everything), then the text pass keeps rows whose
/// name contains the trimmed criteria text case-insensitively. Total: any
/// criteria value yields a valid, possibly empty, result.
pub fn apply(snapshot: &Snapshot, criteria: &FilterCriteria) -> Vec<Row> {
    let mut rows = snapshot.rows.clone();

    if let CategoryFilter::Only(category) = criteria.category {
        rows.retain(|row| row.category == category);
    }

    let needle = criteria.text.trim().to_lowercase();
    if !needle.is_empty() {
        rows.retain(|row| row.name.to_lowercase().contains(&needle));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> Snapshot {
        Snapshot::new(vec![
            Row::new("USD", 1.0, Category::Currency),
            Row::new("BTC", 60000.0, Category::Crypto),
            Row::new("AAPL", 185.0, Category::Equity),
        ])
    }

    #[test]
    fn test_default_criteria_keeps_everything() {
        let snapshot = sample_snapshot();
        let visible = apply(&snapshot, &FilterCriteria::default());
        assert_eq!(visible, snapshot.rows);
    }

    #[test]
    fn test_category_selection() {
        let snapshot = sample_snapshot();
        let criteria = FilterCriteria::new(CategoryFilter::Only(Category::Crypto), "");
        let visible = apply(&snapshot, &criteria);
        assert_eq!(visible, vec![Row::new("BTC", 60000.0, Category::Crypto)]);
    }

    #[test]
    fn test_substring_is_case_insensitive_containment() {
        // "a" matches AAPL only; BTC has no "a" anywhere.
        let snapshot = sample_snapshot();
        let criteria = FilterCriteria::new(CategoryFilter::All, "a");
        let visible = apply(&snapshot, &criteria);
        assert_eq!(visible, vec![Row::new("AAPL", 185.0, Category::Equity)]);

        let criteria = FilterCriteria::new(CategoryFilter::All, "aPl");
        let visible = apply(&snapshot, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "AAPL");
    }

    #[test]
    fn test_text_is_trimmed_before_matching() {
        let snapshot = sample_snapshot();

        let criteria = FilterCriteria::new(CategoryFilter::All, "  btc  ");
        let visible = apply(&snapshot, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "BTC");

        // Whitespace-only text means no text filter at all.
        let criteria = FilterCriteria::new(CategoryFilter::All, "   ");
        assert_eq!(apply(&snapshot, &criteria), snapshot.rows);
    }

    #[test]
    fn test_both_passes_compose() {
        let snapshot = Snapshot::new(vec![
            Row::new("USD", 1.0, Category::Currency),
            Row::new("AUD", 1.5, Category::Currency),
            Row::new("Cardano", 0.45, Category::Crypto),
        ]);
        let criteria = FilterCriteria::new(CategoryFilter::Only(Category::Currency), "d");
        let visible = apply(&snapshot, &criteria);
        assert_eq!(
            visible.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["USD", "AUD"]
        );
    }

    #[test]
    fn test_empty_snapshot_yields_empty_result() {
        let snapshot = Snapshot::empty();
        assert!(apply(&snapshot, &FilterCriteria::default()).is_empty());
        let criteria = FilterCriteria::new(CategoryFilter::Only(Category::Equity), "x");
        assert!(apply(&snapshot, &criteria).is_empty());
    }

    #[test]
    fn test_no_match_is_valid() {
        let snapshot = sample_snapshot();
        let criteria = FilterCriteria::new(CategoryFilter::All, "does-not-exist");
        assert!(apply(&snapshot, &criteria).is_empty());
    }

    #[test]
    fn test_idempotence() {
        let snapshot = sample_snapshot();
        let criteria = FilterCriteria::new(CategoryFilter::All, "b");
        assert_eq!(apply(&snapshot, &criteria), apply(&snapshot, &criteria));
    }

    #[test]
    fn test_order_preservation() {
        // The visible set must be a subsequence of the snapshot.
        let snapshot = Snapshot::new(vec![
            Row::new("BTC", 60000.0, Category::Crypto),
            Row::new("USD", 1.0, Category::Currency),
            Row::new("Bitcoin Cash", 400.0, Category::Crypto),
            Row::new("AAPL", 185.0, Category::Equity),
        ]);
        let criteria = FilterCriteria::new(CategoryFilter::All, "b");
        let names: Vec<_> = apply(&snapshot, &criteria)
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, vec!["BTC", "Bitcoin Cash"]);
    }

    #[test]
    fn test_category_partition() {
        // Per-category selections partition the unfiltered view: same rows,
        // no duplicates, no omissions. Duplicate names across categories are
        // allowed and must survive.
        let snapshot = Snapshot::new(vec![
            Row::new("USD", 1.0, Category::Currency),
            Row::new("Gold", 2000.0, Category::Commodity),
            Row::new("Gold", 55.0, Category::Crypto),
            Row::new("AAPL", 185.0, Category::Equity),
            Row::new("EUR", 0.92, Category::Currency),
        ]);

        let all = apply(&snapshot, &FilterCriteria::default());

        let mut union = Vec::new();
        for category in Category::ALL {
            union.extend(apply(
                &snapshot,
                &FilterCriteria::new(CategoryFilter::Only(category), ""),
            ));
        }

        assert_eq!(union.len(), all.len());
        let mut union_names: Vec<_> = union.iter().map(|r| r.name.clone()).collect();
        let mut all_names: Vec<_> = all.iter().map(|r| r.name.clone()).collect();
        union_names.sort();
        all_names.sort();
        assert_eq!(union_names, all_names);
    }

    #[test]
    fn test_substring_containment_property() {
        let snapshot = sample_snapshot();
        let needle = "a";
        let visible = apply(&snapshot, &FilterCriteria::new(CategoryFilter::All, needle));

        for row in &visible {
            assert!(row.name.to_lowercase().contains(needle));
        }
        for row in &snapshot.rows {
            if row.name.to_lowercase().contains(needle) {
                assert!(visible.contains(row));
            }
        }
    }
}
