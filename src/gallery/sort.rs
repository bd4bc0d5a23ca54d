//! Sort resolver
//!
//! Orders the working set for display. Sorting never mutates the catalog: it
//! returns [`Ranked`] entries that keep each record's working-set index so a
//! card can be identified independently of where it lands.

use crate::catalog::ProjectRecord;
use clap::ValueEnum;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Display order of the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum SortMode {
    /// Ascending display rank
    OrderAsc,
    /// Descending display rank
    #[default]
    OrderDesc,
    /// Title A–Z
    TitleAsc,
    /// Oldest first
    YearAsc,
    /// Newest first
    YearDesc,
    /// Fresh random permutation on every render
    Random,
}

/// A record together with its working-set index
#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a> {
    pub index: usize,
    pub record: &'a ProjectRecord,
}

impl SortMode {
    /// All modes in selector order
    pub const ALL: [Self; 6] = [
        Self::OrderDesc,
        Self::OrderAsc,
        Self::YearDesc,
        Self::YearAsc,
        Self::TitleAsc,
        Self::Random,
    ];

    /// Stable identifier used in config files and HTML
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderAsc => "order-asc",
            Self::OrderDesc => "order-desc",
            Self::TitleAsc => "title-asc",
            Self::YearAsc => "year-asc",
            Self::YearDesc => "year-desc",
            Self::Random => "random",
        }
    }

    /// Human-readable label for the sort selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrderAsc => "Featured last",
            Self::OrderDesc => "Featured",
            Self::TitleAsc => "Title A–Z",
            Self::YearAsc => "Earliest",
            Self::YearDesc => "Latest",
            Self::Random => "Random",
        }
    }

    /// Next mode in selector order, wrapping
    #[must_use]
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous mode in selector order, wrapping
    #[must_use]
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown sort mode '{s}'"))
    }
}

/// Locale-aware string comparison
///
/// Accents and case are ignored at the first level, then case-insensitive
/// text decides, and lowercase sorts before uppercase on exact ties.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn by_title(a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
    collate(&a.title, &b.title)
}

/// Sort the working set using the thread-local random generator for `Random`
#[must_use]
pub fn sort(records: &[ProjectRecord], mode: SortMode) -> Vec<Ranked<'_>> {
    sort_with_rng(records, mode, &mut rand::rng())
}

/// Sort the working set, drawing `Random` permutations from `rng`
pub fn sort_with_rng<'a, R>(records: &'a [ProjectRecord], mode: SortMode, rng: &mut R) -> Vec<Ranked<'a>>
where
    R: Rng + ?Sized,
{
    let mut ranked: Vec<Ranked<'a>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| Ranked { index, record })
        .collect();

    match mode {
        SortMode::OrderAsc => {
            ranked.sort_by(|a, b| a.record.order_value().total_cmp(&b.record.order_value()));
        }
        SortMode::OrderDesc => {
            ranked.sort_by(|a, b| b.record.order_value().total_cmp(&a.record.order_value()));
        }
        SortMode::TitleAsc => ranked.sort_by(|a, b| by_title(a.record, b.record)),
        SortMode::YearAsc => ranked.sort_by(|a, b| {
            a.record
                .year_value()
                .total_cmp(&b.record.year_value())
                .then_with(|| by_title(a.record, b.record))
        }),
        SortMode::YearDesc => ranked.sort_by(|a, b| {
            b.record
                .year_value()
                .total_cmp(&a.record.year_value())
                .then_with(|| by_title(a.record, b.record))
        }),
        SortMode::Random => ranked.shuffle(rng),
    }

    ranked
}

/// Working-set indices in sorted order
pub fn sorted_indices<R>(records: &[ProjectRecord], mode: SortMode, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    sort_with_rng(records, mode, rng)
        .into_iter()
        .map(|r| r.index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Numeric;
    use crate::testing::project;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn dated(title: &str, year: f64, order: f64) -> ProjectRecord {
        ProjectRecord {
            title: title.into(),
            year: Some(Numeric::Number(year)),
            order: Some(Numeric::Number(order)),
            ..ProjectRecord::default()
        }
    }

    fn titles(ranked: &[Ranked<'_>]) -> Vec<String> {
        ranked.iter().map(|r| r.record.title.clone()).collect()
    }

    #[test]
    fn test_order_desc_and_asc() {
        let records = vec![dated("a", 2020.0, 1.0), dated("b", 2021.0, 3.0), dated("c", 2022.0, 2.0)];

        assert_eq!(titles(&sort(&records, SortMode::OrderDesc)), vec!["b", "c", "a"]);
        assert_eq!(titles(&sort(&records, SortMode::OrderAsc)), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_missing_order_counts_as_zero() {
        let records = vec![dated("ranked", 2020.0, 1.0), project("unranked", &[])];
        assert_eq!(titles(&sort(&records, SortMode::OrderAsc)), vec!["unranked", "ranked"]);
    }

    #[test]
    fn test_year_sort_breaks_ties_by_title() {
        let records = vec![
            dated("Zine", 2024.0, 0.0),
            dated("Archive", 2023.0, 0.0),
            dated("Book", 2024.0, 0.0),
        ];

        assert_eq!(
            titles(&sort(&records, SortMode::YearDesc)),
            vec!["Book", "Zine", "Archive"]
        );
        assert_eq!(
            titles(&sort(&records, SortMode::YearAsc)),
            vec!["Archive", "Book", "Zine"]
        );
    }

    #[test]
    fn test_title_sort_is_locale_aware() {
        let records = vec![project("zebra", &[]), project("Éclair", &[]), project("apple", &[])];
        assert_eq!(
            titles(&sort(&records, SortMode::TitleAsc)),
            vec!["apple", "Éclair", "zebra"]
        );
    }

    #[test]
    fn test_collate_orders_lowercase_first_on_ties() {
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("B", "a"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_sort_keeps_original_index() {
        let records = vec![dated("a", 2020.0, 1.0), dated("b", 2021.0, 2.0)];
        let ranked = sort(&records, SortMode::OrderDesc);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].index, 0);
    }

    #[test]
    fn test_deterministic_modes_are_idempotent() {
        let records = vec![
            dated("c", 2021.0, 2.0),
            dated("a", 2021.0, 2.0),
            dated("b", 2019.0, 5.0),
            project("d", &[]),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        for mode in SortMode::ALL.into_iter().filter(|m| *m != SortMode::Random) {
            let first = sorted_indices(&records, mode, &mut rng);
            let second = sorted_indices(&records, mode, &mut rng);
            assert_eq!(first, second, "mode {mode} is not deterministic");
        }
    }

    #[test]
    fn test_random_sort_is_a_permutation() {
        let records: Vec<ProjectRecord> = (0..10).map(|i| project(&format!("p{i}"), &[])).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let mut order = sorted_indices(&records, SortMode::Random, &mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_sort_has_no_observable_bias() {
        let records: Vec<ProjectRecord> = (0..3).map(|i| project(&format!("p{i}"), &[])).collect();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let samples = 6000;

        let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
        for _ in 0..samples {
            *counts
                .entry(sorted_indices(&records, SortMode::Random, &mut rng))
                .or_default() += 1;
        }

        // All 3! permutations appear, each close to samples / 6
        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            assert!(
                (850..=1150).contains(&count),
                "permutation {perm:?} drawn {count} times"
            );
        }
    }

    #[test]
    fn test_sort_mode_round_trips_through_str() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
        }
        assert!("sideways".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_sort_mode_cycles() {
        assert_eq!(SortMode::Random.next(), SortMode::OrderDesc);
        assert_eq!(SortMode::OrderDesc.prev(), SortMode::Random);
        assert_eq!(SortMode::default(), SortMode::OrderDesc);
    }
}
