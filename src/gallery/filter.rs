//! Filter evaluator
//!
//! Visibility is a pure AND over the active filters: a record is visible when
//! it carries every active tag. The active filters themselves follow two
//! editing rules:
//!
//! - Toggling from the filter bar: year tags (all digits) are exclusive, so
//!   picking a new year replaces the previous one. Other tags stack.
//! - Selecting a tag chip inside a card replaces the whole selection.
//!
//! After every edit [`settle`] guards against an empty grid by falling back to
//! the most recently added filter alone.

use crate::catalog::ProjectRecord;

/// Ordered set of tags a record must carry to be visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    tags: Vec<String>,
}

/// Result of re-evaluating the filters against the working set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Number of visible records after settling
    pub visible: usize,
    /// Whether the zero-result fallback dropped earlier filters
    pub fell_back: bool,
}

/// Whether `tag` names a year (ASCII digits only)
#[must_use]
pub fn is_year_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `record` passes every active filter
#[must_use]
pub fn is_visible(record: &ProjectRecord, filters: &ActiveFilters) -> bool {
    filters.tags.iter().all(|tag| record.has_tag(tag))
}

/// Working-set indices of every visible record, in working-set order
#[must_use]
pub fn visible_indices(records: &[ProjectRecord], filters: &ActiveFilters) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| is_visible(record, filters))
        .map(|(index, _)| index)
        .collect()
}

/// Apply the zero-result fallback
///
/// When the filters leave nothing visible, only the most recently added filter
/// is kept and visibility is recomputed. Earlier selections are discarded.
pub fn settle(filters: &mut ActiveFilters, records: &[ProjectRecord]) -> FilterOutcome {
    let visible = count_visible(records, filters);
    if visible > 0 || filters.len() <= 1 {
        return FilterOutcome {
            visible,
            fell_back: false,
        };
    }

    filters.retain_last();
    tracing::debug!(kept = ?filters.as_slice(), "no project matched every filter, kept the latest");

    FilterOutcome {
        visible: count_visible(records, filters),
        fell_back: true,
    }
}

fn count_visible(records: &[ProjectRecord], filters: &ActiveFilters) -> usize {
    records.iter().filter(|r| is_visible(r, filters)).count()
}

impl ActiveFilters {
    /// No active filters ("all")
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Build by toggling each tag in turn, as successive filter-bar clicks would
    pub fn from_toggles<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filters = Self::new();
        for tag in tags {
            filters.toggle(tag.as_ref());
        }
        filters
    }

    /// Active tags, oldest first
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Most recently added tag
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.tags.last().map(String::as_str)
    }

    /// The currently selected year tag, if any
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.tags.iter().map(String::as_str).find(|t| is_year_tag(t))
    }

    /// Filter-bar click on `tag`
    ///
    /// Year tags replace any selected year, or deselect it when it is the one
    /// already selected. Other tags toggle membership.
    pub fn toggle(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }

        let had = self.contains(tag);
        if is_year_tag(tag) {
            self.tags.retain(|t| !is_year_tag(t));
            if !had {
                self.tags.push(tag.to_string());
            }
        } else if had {
            self.tags.retain(|t| t != tag);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Card chip click: `tag` becomes the only filter
    pub fn select_only(&mut self, tag: &str) {
        self.tags.clear();
        let tag = tag.trim();
        if !tag.is_empty() {
            self.tags.push(tag.to_string());
        }
    }

    /// "All": drop every filter
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Keep only the most recently added filter
    pub fn retain_last(&mut self) {
        if let Some(last) = self.tags.pop() {
            self.tags.clear();
            self.tags.push(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::project;

    fn abc() -> Vec<ProjectRecord> {
        vec![
            project("only a", &["a"]),
            project("a and b", &["a", "b"]),
            project("only b", &["b"]),
        ]
    }

    fn titles(records: &[ProjectRecord], filters: &ActiveFilters) -> Vec<String> {
        visible_indices(records, filters)
            .into_iter()
            .map(|i| records[i].title.clone())
            .collect()
    }

    #[test]
    fn test_empty_filters_show_everything() {
        let records = abc();
        assert_eq!(visible_indices(&records, &ActiveFilters::new()), vec![0, 1, 2]);
    }

    #[test]
    fn test_and_semantics() {
        let records = abc();
        let filters = ActiveFilters::from_toggles(["a", "b"]);
        assert_eq!(titles(&records, &filters), vec!["a and b"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = abc();
        let filters = ActiveFilters::from_toggles(["b"]);
        let first = visible_indices(&records, &filters);
        let second = visible_indices(&records, &filters);
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 2]);
    }

    #[test]
    fn test_toggle_twice_removes_tag() {
        let mut filters = ActiveFilters::new();
        filters.toggle("a");
        filters.toggle("b");
        filters.toggle("a");
        assert_eq!(filters.as_slice(), ["b"]);
    }

    #[test]
    fn test_year_exclusivity() {
        let mut filters = ActiveFilters::new();
        filters.toggle("illustration");
        filters.toggle("2024");
        filters.toggle("2023");
        assert_eq!(filters.as_slice(), ["illustration", "2023"]);
        assert_eq!(filters.year(), Some("2023"));
    }

    #[test]
    fn test_toggling_selected_year_deselects_it() {
        let mut filters = ActiveFilters::from_toggles(["2024", "poster"]);
        filters.toggle("2024");
        assert_eq!(filters.as_slice(), ["poster"]);
        assert_eq!(filters.year(), None);
    }

    #[test]
    fn test_year_tag_detection() {
        assert!(is_year_tag("2025"));
        assert!(is_year_tag("7"));
        assert!(!is_year_tag(""));
        assert!(!is_year_tag("2025s"));
        assert!(!is_year_tag("２０２５"));
    }

    #[test]
    fn test_select_only_replaces_selection() {
        let mut filters = ActiveFilters::from_toggles(["a", "2024", "b"]);
        filters.select_only("typography");
        assert_eq!(filters.as_slice(), ["typography"]);
    }

    #[test]
    fn test_zero_result_fallback_keeps_latest() {
        let records = vec![project("a", &["a"]), project("z", &["z"]), project("z2", &["z", "y"])];
        let mut filters = ActiveFilters::new();

        filters.toggle("a");
        assert!(!settle(&mut filters, &records).fell_back);
        filters.toggle("z");
        let outcome = settle(&mut filters, &records);

        assert!(outcome.fell_back);
        assert_eq!(filters.as_slice(), ["z"]);
        assert_eq!(outcome.visible, 2);
        assert_eq!(titles(&records, &filters), vec!["z", "z2"]);
    }

    #[test]
    fn test_fallback_discards_every_earlier_filter() {
        let records = vec![project("ab", &["a", "b"]), project("c", &["c"])];
        let mut filters = ActiveFilters::from_toggles(["a", "b"]);
        assert_eq!(settle(&mut filters, &records).visible, 1);

        filters.toggle("c");
        let outcome = settle(&mut filters, &records);
        assert!(outcome.fell_back);
        assert_eq!(filters.as_slice(), ["c"]);
    }

    #[test]
    fn test_settle_with_unknown_single_tag_stays_empty() {
        let records = abc();
        let mut filters = ActiveFilters::from_toggles(["nope"]);
        let outcome = settle(&mut filters, &records);
        assert_eq!(outcome, FilterOutcome { visible: 0, fell_back: false });
        assert_eq!(filters.as_slice(), ["nope"]);
    }

    #[test]
    fn test_blank_tags_are_ignored() {
        let mut filters = ActiveFilters::new();
        filters.toggle("  ");
        filters.select_only("");
        assert!(filters.is_empty());
    }
}
