//! View-state controller
//!
//! [`GalleryState`] is the single authority for what the gallery shows: the
//! active filters, the sort mode and its resulting render order, the modal and
//! the viewport. Front ends feed it [`GalleryAction`]s and draw the pure
//! projections ([`GalleryState::grid`], [`GalleryState::filter_bar`],
//! [`GalleryState::modal_view`]); they never read state back from what they
//! drew.
//!
//! # Render cycle
//!
//! ```text
//! load / chip select / sort change / forced render
//!     └─▶ re-sort the whole working set ─┐
//! filter-bar toggle / "all"              │
//!     └─▶ keep order ────────────────────┴─▶ settle filters ─▶ projections
//! ```

use crate::catalog::{Catalog, ProjectRecord};
use crate::gallery::filter::{self, ActiveFilters, FilterOutcome};
use crate::gallery::modal::{self, ModalState, ModalView, SlideControl, Viewport};
use crate::gallery::sort::{self, SortMode};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Tunables of the gallery state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySettings {
    /// Media counts above this use a carousel
    pub carousel_threshold: usize,
    /// Viewport widths below this are narrow
    pub narrow_below: u16,
}

/// User intents understood by the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    /// Filter-bar click on a tag button
    ToggleFilter(String),
    /// Filter-bar click on "All"
    ShowAll,
    /// Click on a tag chip inside a card
    SelectTag(String),
    /// Sort selector change
    SetSort(SortMode),
    /// Re-render with the current sort (draws a new random order)
    Rerender,
    /// Card click
    Open(usize),
    /// Overlay click, close control or Escape
    Close,
    /// Modal prev/next over the visible cards
    Sibling(isize),
    /// Carousel control
    Slide(SlideControl),
    /// Viewport width changed
    Resize(u16),
}

/// What a dispatched action changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Unchanged,
    /// Visibility re-evaluated, order kept
    Filtered(FilterOutcome),
    /// Order recomputed and visibility re-evaluated
    Rendered(FilterOutcome),
    /// Modal shows the record at this working-set index
    ModalOpened(usize),
    /// Modal closed, viewport lock released
    ModalClosed,
    /// Carousel moved
    Slid { index: usize, offset: i64 },
    /// Viewport changed; the recorded carousel offset is re-applied as-is
    Reflowed { offset: Option<i64> },
}

/// One card of the grid projection
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    /// Working-set index
    pub index: usize,
    pub record: &'a ProjectRecord,
    /// Filtered out: kept in the grid, but not shown
    pub hidden: bool,
}

/// One button of the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton<'a> {
    /// `None` for the synthetic "All" button
    pub tag: Option<&'a str>,
    pub active: bool,
}

/// Filter bar projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarView<'a> {
    pub buttons: Vec<FilterButton<'a>>,
    pub sort_mode: SortMode,
}

/// Explicit gallery state
#[derive(Debug, Clone)]
pub struct GalleryState {
    filters: ActiveFilters,
    sort_mode: SortMode,
    order: Vec<usize>,
    modal: ModalState,
    viewport: Viewport,
    settings: GallerySettings,
    rng: StdRng,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            carousel_threshold: modal::DEFAULT_CAROUSEL_THRESHOLD,
            narrow_below: 100,
        }
    }
}

impl FilterButton<'_> {
    /// Button caption
    #[must_use]
    pub fn label(&self) -> &str {
        self.tag.unwrap_or("All")
    }
}

impl GalleryState {
    /// Initial state after load: no filters, first render done
    #[must_use]
    pub fn new(catalog: &Catalog, sort_mode: SortMode, settings: GallerySettings) -> Self {
        Self::with_rng(catalog, sort_mode, settings, StdRng::from_os_rng())
    }

    /// Like [`GalleryState::new`] with a caller-supplied random generator
    #[must_use]
    pub fn with_rng(
        catalog: &Catalog,
        sort_mode: SortMode,
        settings: GallerySettings,
        rng: StdRng,
    ) -> Self {
        let mut state = Self {
            filters: ActiveFilters::new(),
            sort_mode,
            order: Vec::new(),
            modal: ModalState::Closed,
            viewport: Viewport::new(u16::MAX, settings.narrow_below),
            settings,
            rng,
        };
        state.render(catalog);
        state
    }

    /// Apply an active filter selection as successive filter-bar clicks,
    /// settling after each one
    pub fn apply_toggles<I, S>(&mut self, catalog: &Catalog, tags: I) -> FilterOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = self.settle(catalog);
        for tag in tags {
            self.filters.toggle(tag.as_ref());
            outcome = self.settle(catalog);
        }
        outcome
    }

    /// Process one user action
    pub fn dispatch(&mut self, catalog: &Catalog, action: GalleryAction) -> Transition {
        tracing::debug!(?action, "gallery action");

        match action {
            GalleryAction::ToggleFilter(tag) => {
                self.filters.toggle(&tag);
                Transition::Filtered(self.settle(catalog))
            }
            GalleryAction::ShowAll => {
                self.filters.clear();
                Transition::Filtered(self.settle(catalog))
            }
            GalleryAction::SelectTag(tag) => {
                self.filters.select_only(&tag);
                Transition::Rendered(self.render(catalog))
            }
            GalleryAction::SetSort(mode) => {
                self.sort_mode = mode;
                Transition::Rendered(self.render(catalog))
            }
            GalleryAction::Rerender => Transition::Rendered(self.render(catalog)),
            GalleryAction::Open(index) => self.open(catalog, index),
            GalleryAction::Close => {
                if self.modal.is_open() {
                    self.modal.close();
                    Transition::ModalClosed
                } else {
                    Transition::Unchanged
                }
            }
            GalleryAction::Sibling(delta) => {
                let Some(current) = self.modal.current() else {
                    return Transition::Unchanged;
                };
                let visible = self.visible_order(catalog);
                match modal::sibling(&visible, current, delta) {
                    Some(next) => self.open(catalog, next),
                    None => Transition::Unchanged,
                }
            }
            GalleryAction::Slide(control) => {
                if self.modal.slide(control, self.viewport) {
                    self.modal
                        .carousel()
                        .map_or(Transition::Unchanged, |c| Transition::Slid {
                            index: c.index(),
                            offset: c.offset_percent(),
                        })
                } else {
                    Transition::Unchanged
                }
            }
            GalleryAction::Resize(width) => {
                self.viewport.width = width;
                Transition::Reflowed {
                    offset: self.modal.carousel().map(modal::Carousel::offset_percent),
                }
            }
        }
    }

    fn open(&mut self, catalog: &Catalog, index: usize) -> Transition {
        let Some(record) = catalog.get(index) else {
            return Transition::Unchanged;
        };
        self.modal = ModalState::open(index, record, self.settings.carousel_threshold);
        Transition::ModalOpened(index)
    }

    /// Recompute the order over the full working set, then re-filter
    fn render(&mut self, catalog: &Catalog) -> FilterOutcome {
        self.order = sort::sorted_indices(catalog.records(), self.sort_mode, &mut self.rng);
        self.settle(catalog)
    }

    fn settle(&mut self, catalog: &Catalog) -> FilterOutcome {
        filter::settle(&mut self.filters, catalog.records())
    }

    #[must_use]
    pub const fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    #[must_use]
    pub const fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Render order of the whole working set, hidden cards included
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub const fn settings(&self) -> GallerySettings {
        self.settings
    }

    /// Visible cards in render order
    #[must_use]
    pub fn visible_order(&self, catalog: &Catalog) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&i| {
                catalog
                    .get(i)
                    .is_some_and(|r| filter::is_visible(r, &self.filters))
            })
            .collect()
    }

    /// Grid projection: every working-set record in render order
    #[must_use]
    pub fn grid<'a>(&self, catalog: &'a Catalog) -> Vec<CardView<'a>> {
        self.order
            .iter()
            .filter_map(|&index| {
                catalog.get(index).map(|record| CardView {
                    index,
                    record,
                    hidden: !filter::is_visible(record, &self.filters),
                })
            })
            .collect()
    }

    /// Filter bar projection: "All" first, then every tag in display order
    #[must_use]
    pub fn filter_bar<'a>(&self, catalog: &'a Catalog) -> FilterBarView<'a> {
        let all = FilterButton {
            tag: None,
            active: self.filters.is_empty(),
        };
        let buttons = std::iter::once(all)
            .chain(catalog.tags().sorted().into_iter().map(|tag| FilterButton {
                tag: Some(tag),
                active: self.filters.contains(tag),
            }))
            .collect();

        FilterBarView {
            buttons,
            sort_mode: self.sort_mode,
        }
    }

    /// Modal projection, `None` while closed
    #[must_use]
    pub fn modal_view<'a>(&'a self, catalog: &'a Catalog) -> Option<ModalView<'a>> {
        match &self.modal {
            ModalState::Open(open) => catalog
                .get(open.index)
                .map(|record| ModalView::new(open.index, record, &open.media)),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Numeric;
    use crate::testing::project;

    fn ranked(title: &str, order: f64, tags: &[&str]) -> ProjectRecord {
        ProjectRecord {
            order: Some(Numeric::Number(order)),
            ..project(title, tags)
        }
    }

    fn five() -> Catalog {
        Catalog::new(
            vec![
                ranked("p0", 5.0, &["x"]),
                ranked("p1", 4.0, &["y"]),
                ranked("p2", 3.0, &["x"]),
                ranked("p3", 2.0, &["y"]),
                ranked("p4", 1.0, &["x"]),
            ],
            &[],
        )
    }

    fn state(catalog: &Catalog) -> GalleryState {
        GalleryState::with_rng(
            catalog,
            SortMode::OrderDesc,
            GallerySettings::default(),
            StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn test_initial_state() {
        let catalog = five();
        let state = state(&catalog);
        assert!(state.filters().is_empty());
        assert_eq!(state.sort_mode(), SortMode::OrderDesc);
        assert_eq!(state.order(), [0, 1, 2, 3, 4]);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn test_grid_keeps_hidden_cards_in_place() {
        let catalog = five();
        let mut state = state(&catalog);
        state.dispatch(&catalog, GalleryAction::ToggleFilter("x".into()));

        let grid = state.grid(&catalog);
        assert_eq!(grid.len(), 5);
        let hidden: Vec<bool> = grid.iter().map(|c| c.hidden).collect();
        assert_eq!(hidden, vec![false, true, false, true, false]);
    }

    #[test]
    fn test_sibling_navigation_skips_hidden_cards() {
        let catalog = five();
        let mut state = state(&catalog);
        state.dispatch(&catalog, GalleryAction::ToggleFilter("x".into()));
        state.dispatch(&catalog, GalleryAction::Open(0));

        let mut seen = Vec::new();
        for _ in 0..4 {
            let transition = state.dispatch(&catalog, GalleryAction::Sibling(1));
            if let Transition::ModalOpened(index) = transition {
                seen.push(index);
            }
        }
        assert_eq!(seen, vec![2, 4, 0, 2]);

        state.dispatch(&catalog, GalleryAction::Sibling(-1));
        assert_eq!(state.modal().current(), Some(0));
    }

    #[test]
    fn test_sibling_without_open_modal_is_noop() {
        let catalog = five();
        let mut state = state(&catalog);
        assert_eq!(
            state.dispatch(&catalog, GalleryAction::Sibling(1)),
            Transition::Unchanged
        );
    }

    #[test]
    fn test_sibling_with_nothing_visible_is_noop() {
        let catalog = Catalog::empty(&[]);
        let mut state = state(&catalog);
        assert_eq!(state.dispatch(&catalog, GalleryAction::Open(0)), Transition::Unchanged);
        assert_eq!(
            state.dispatch(&catalog, GalleryAction::Sibling(-1)),
            Transition::Unchanged
        );
    }

    #[test]
    fn test_sibling_from_filtered_out_item_is_noop() {
        let catalog = five();
        let mut state = state(&catalog);
        state.dispatch(&catalog, GalleryAction::Open(1));
        state.dispatch(&catalog, GalleryAction::ToggleFilter("x".into()));

        assert_eq!(
            state.dispatch(&catalog, GalleryAction::Sibling(1)),
            Transition::Unchanged
        );
        assert_eq!(state.modal().current(), Some(1));
    }

    #[test]
    fn test_sibling_resets_carousel() {
        let mut big = ranked("big", 2.0, &[]);
        big.images = (0..8).map(|i| format!("{i}.jpg")).collect();
        let catalog = Catalog::new(vec![big.clone(), ranked("other", 1.0, &[]), big], &[]);
        let mut state = state(&catalog);

        state.dispatch(&catalog, GalleryAction::Open(0));
        state.dispatch(&catalog, GalleryAction::Slide(SlideControl::Next));
        assert_eq!(state.modal().carousel().unwrap().index(), 1);

        state.dispatch(&catalog, GalleryAction::Sibling(1));
        assert_eq!(state.modal().current(), Some(2));
        assert_eq!(state.modal().carousel().unwrap().index(), 0);
    }

    #[test]
    fn test_chip_selection_is_exclusive() {
        let catalog = five();
        let mut state = state(&catalog);
        state.dispatch(&catalog, GalleryAction::ToggleFilter("2024".into()));
        state.dispatch(&catalog, GalleryAction::ToggleFilter("y".into()));

        let transition = state.dispatch(&catalog, GalleryAction::SelectTag("x".into()));
        assert!(matches!(transition, Transition::Rendered(_)));
        assert_eq!(state.filters().as_slice(), ["x"]);
    }

    #[test]
    fn test_filter_fallback_through_dispatch() {
        let catalog = five();
        let mut state = state(&catalog);
        state.dispatch(&catalog, GalleryAction::ToggleFilter("x".into()));
        let transition = state.dispatch(&catalog, GalleryAction::ToggleFilter("y".into()));

        assert_eq!(
            transition,
            Transition::Filtered(FilterOutcome { visible: 2, fell_back: true })
        );
        assert_eq!(state.filters().as_slice(), ["y"]);
    }

    #[test]
    fn test_filter_bar_active_states() {
        let catalog = five();
        let mut state = state(&catalog);

        let bar = state.filter_bar(&catalog);
        assert_eq!(bar.buttons[0], FilterButton { tag: None, active: true });
        assert!(bar.buttons[1..].iter().all(|b| !b.active));

        state.dispatch(&catalog, GalleryAction::ToggleFilter("y".into()));
        let bar = state.filter_bar(&catalog);
        assert!(!bar.buttons[0].active);
        let active: Vec<&str> = bar.buttons.iter().filter(|b| b.active).map(FilterButton::label).collect();
        assert_eq!(active, vec!["y"]);

        state.dispatch(&catalog, GalleryAction::ShowAll);
        assert!(state.filter_bar(&catalog).buttons[0].active);
    }

    #[test]
    fn test_sort_change_rerenders() {
        let catalog = five();
        let mut state = state(&catalog);
        state.dispatch(&catalog, GalleryAction::SetSort(SortMode::OrderAsc));
        assert_eq!(state.order(), [4, 3, 2, 1, 0]);
        assert_eq!(state.filter_bar(&catalog).sort_mode, SortMode::OrderAsc);
    }

    #[test]
    fn test_filter_toggle_keeps_random_order() {
        let catalog = Catalog::new((0..12).map(|i| project(&format!("p{i}"), &["t"])).collect(), &[]);
        let mut state = state(&catalog);
        state.dispatch(&catalog, GalleryAction::SetSort(SortMode::Random));
        let before = state.order().to_vec();

        state.dispatch(&catalog, GalleryAction::ToggleFilter("t".into()));
        assert_eq!(state.order(), before.as_slice());
    }

    #[test]
    fn test_resize_reapplies_offset_without_mutation() {
        let mut big = project("big", &[]);
        big.images = (0..8).map(|i| format!("{i}.jpg")).collect();
        let catalog = Catalog::new(vec![big], &[]);
        let mut state = state(&catalog);

        state.dispatch(&catalog, GalleryAction::Open(0));
        state.dispatch(&catalog, GalleryAction::Slide(SlideControl::Prev));
        let before = state.modal().clone();

        let transition = state.dispatch(&catalog, GalleryAction::Resize(40));
        assert_eq!(transition, Transition::Reflowed { offset: Some(-700) });
        assert_eq!(state.modal(), &before);
        assert!(state.viewport().is_narrow());
    }

    #[test]
    fn test_close_releases_lock() {
        let mut big = project("big", &[]);
        big.images = (0..8).map(|i| format!("{i}.jpg")).collect();
        let catalog = Catalog::new(vec![big], &[]);
        let mut state = state(&catalog);

        state.dispatch(&catalog, GalleryAction::Open(0));
        assert!(state.modal().locks_viewport());
        assert_eq!(state.dispatch(&catalog, GalleryAction::Close), Transition::ModalClosed);
        assert!(!state.modal().locks_viewport());
        assert_eq!(state.dispatch(&catalog, GalleryAction::Close), Transition::Unchanged);
    }

    #[test]
    fn test_modal_view_follows_current_item() {
        let catalog = five();
        let mut state = state(&catalog);
        assert!(state.modal_view(&catalog).is_none());

        state.dispatch(&catalog, GalleryAction::Open(3));
        assert_eq!(state.modal_view(&catalog).unwrap().title, "p3");
    }

    #[test]
    fn test_apply_toggles_settles_each_step() {
        let catalog = five();
        let mut state = state(&catalog);
        let outcome = state.apply_toggles(&catalog, ["x", "y"]);
        assert!(outcome.fell_back);
        assert_eq!(state.filters().as_slice(), ["y"]);
    }
}
