//! Modal controller
//!
//! The project modal is either closed or open on one working-set record. An
//! open modal owns its media layout, and a carousel owns its slide index: the
//! index is the single source of truth for the track offset, so a resize only
//! re-applies it.
//!
//! ```text
//!            open(i)                 open(j) / sibling(±1)
//!  Closed ───────────▶ Open(i) ─────────────────────────▶ Open(j)
//!    ▲                   │                                   │
//!    └──── close ────────┴───────────── close ───────────────┘
//! ```

use crate::catalog::{MediaItem, ProjectRecord};
use crate::gallery::markup::{Segment, parse_links};

/// Media counts above this switch from the two-column grid to a carousel
pub const DEFAULT_CAROUSEL_THRESHOLD: usize = 6;

/// Single-track carousel with one active slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<MediaItem>,
    index: usize,
}

/// How the media of an open project is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLayout {
    /// Static two-column grid, scrolled in place
    Grid(Vec<MediaItem>),
    /// Carousel with prev/next controls and tap zones
    Carousel(Carousel),
}

/// An open modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenProject {
    /// Working-set index of the shown record
    pub index: usize,
    /// Media of the shown record
    pub media: MediaLayout,
}

/// Modal state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(OpenProject),
}

/// Carousel controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideControl {
    /// Previous-slide button
    Prev,
    /// Next-slide button
    Next,
    /// Left tap zone (narrow viewports only)
    TapLeft,
    /// Right tap zone (narrow viewports only)
    TapRight,
}

/// Current viewport width and the breakpoint below which it counts as narrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub narrow_below: u16,
}

/// Everything the modal shows for one record
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView<'a> {
    pub index: usize,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub year: String,
    pub tags: &'a [String],
    pub desc_en: Vec<Segment>,
    pub desc_ko: Vec<Segment>,
    pub media: &'a MediaLayout,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u16, narrow_below: u16) -> Self {
        Self { width, narrow_below }
    }

    /// Narrow viewports get tap zones and a collapsed about panel
    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        self.width < self.narrow_below
    }
}

impl Carousel {
    /// A carousel showing the first slide
    #[must_use]
    pub const fn new(slides: Vec<MediaItem>) -> Self {
        Self { slides, index: 0 }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slides(&self) -> &[MediaItem] {
        &self.slides
    }

    /// The active slide
    #[must_use]
    pub fn current(&self) -> Option<&MediaItem> {
        self.slides.get(self.index)
    }

    /// Jump to slide `target`, wrapping in both directions
    pub fn go_to(&mut self, target: isize) {
        let len = self.slides.len();
        if len == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        {
            self.index = target.rem_euclid(len as isize) as usize;
        }
    }

    pub fn next(&mut self) {
        #[allow(clippy::cast_possible_wrap)]
        self.go_to(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        #[allow(clippy::cast_possible_wrap)]
        self.go_to(self.index as isize - 1);
    }

    /// Horizontal track offset in percent: `-100% * index`
    #[must_use]
    pub fn offset_percent(&self) -> i64 {
        -100 * i64::try_from(self.index).unwrap_or(i64::MAX / 100)
    }
}

impl MediaLayout {
    /// Grid for up to `threshold` items, carousel beyond
    #[must_use]
    pub fn for_media(media: Vec<MediaItem>, threshold: usize) -> Self {
        if media.len() > threshold {
            Self::Carousel(Carousel::new(media))
        } else {
            Self::Grid(media)
        }
    }

    /// Number of media items
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Grid(items) => items.len(),
            Self::Carousel(carousel) => carousel.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn carousel(&self) -> Option<&Carousel> {
        match self {
            Self::Carousel(carousel) => Some(carousel),
            Self::Grid(_) => None,
        }
    }

    pub fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        match self {
            Self::Carousel(carousel) => Some(carousel),
            Self::Grid(_) => None,
        }
    }

    /// All media items in order
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        match self {
            Self::Grid(items) => items,
            Self::Carousel(carousel) => carousel.slides(),
        }
    }
}

impl ModalState {
    /// Open on `record`, building its media layout from scratch
    #[must_use]
    pub fn open(index: usize, record: &ProjectRecord, threshold: usize) -> Self {
        Self::Open(OpenProject {
            index,
            media: MediaLayout::for_media(record.media(), threshold),
        })
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Working-set index of the open record
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        match self {
            Self::Open(open) => Some(open.index),
            Self::Closed => None,
        }
    }

    /// Carousel of the open record, if it has one
    #[must_use]
    pub const fn carousel(&self) -> Option<&Carousel> {
        match self {
            Self::Open(open) => open.media.carousel(),
            Self::Closed => None,
        }
    }

    /// An open carousel locks page scrolling; closing releases the lock
    #[must_use]
    pub const fn locks_viewport(&self) -> bool {
        self.carousel().is_some()
    }

    /// Drive the carousel. Tap zones only react on narrow viewports.
    ///
    /// Returns `false` when there is no carousel or the control is inert.
    pub fn slide(&mut self, control: SlideControl, viewport: Viewport) -> bool {
        let Self::Open(open) = self else {
            return false;
        };
        let Some(carousel) = open.media.carousel_mut() else {
            return false;
        };

        match control {
            SlideControl::Prev => carousel.prev(),
            SlideControl::Next => carousel.next(),
            SlideControl::TapLeft if viewport.is_narrow() => carousel.prev(),
            SlideControl::TapRight if viewport.is_narrow() => carousel.next(),
            SlideControl::TapLeft | SlideControl::TapRight => return false,
        }
        true
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// Sibling of `current` within the visible cards, `delta` steps away, wrapping
///
/// Returns `None` when nothing is visible or `current` is not among the
/// visible cards.
#[must_use]
pub fn sibling(visible: &[usize], current: usize, delta: isize) -> Option<usize> {
    if visible.is_empty() {
        return None;
    }
    let pos = visible.iter().position(|&i| i == current)?;
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let next = (pos as isize + delta).rem_euclid(visible.len() as isize) as usize;
    visible.get(next).copied()
}

impl<'a> ModalView<'a> {
    /// Build the detail view of `record` shown with `media`
    #[must_use]
    pub fn new(index: usize, record: &'a ProjectRecord, media: &'a MediaLayout) -> Self {
        Self {
            index,
            title: &record.title,
            subtitle: &record.desc_short,
            year: record.year_label(),
            tags: &record.tags,
            desc_en: parse_links(&record.desc_en),
            desc_ko: parse_links(&record.desc_ko),
            media,
        }
    }
}
