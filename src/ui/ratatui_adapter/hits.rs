//! Clickable regions recorded while drawing
//!
//! Every frame clears the map and the widgets' layout helpers push the rects
//! they drew. Later entries sit on top, so an open modal shadows the grid.

use ratatui::layout::{Position, Rect};

/// What a mouse click landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// Filter-bar button; 0 is "All"
    FilterButton(usize),
    /// Card by working-set index
    Card(usize),
    /// Tag chip inside a card
    Chip(String),
    /// Header of the about panel
    AboutToggle,
    /// Anywhere outside the open modal
    Backdrop,
    /// Close control of the modal
    CloseModal,
    /// Previous/next project controls
    SiblingPrev,
    SiblingNext,
    /// Carousel arrows
    SlidePrev,
    SlideNext,
    /// Carousel tap zones
    TapLeft,
    TapRight,
    /// Inert modal content
    ModalBody,
}

/// Regions of the last drawn frame
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, hit: Hit) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, hit));
        }
    }

    /// Topmost region containing the cell at `column`, `row`
    #[must_use]
    pub fn at(&self, column: u16, row: u16) -> Option<&Hit> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, hit)| hit)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_region_wins() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), Hit::Card(0));
        hits.push(Rect::new(0, 0, 80, 24), Hit::Backdrop);
        hits.push(Rect::new(5, 5, 10, 2), Hit::SlideNext);

        assert_eq!(hits.at(6, 6), Some(&Hit::SlideNext));
        assert_eq!(hits.at(1, 1), Some(&Hit::Backdrop));
        assert_eq!(hits.at(90, 1), None);
    }

    #[test]
    fn test_empty_rects_are_skipped() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(3, 3, 0, 4), Hit::AboutToggle);
        assert!(hits.is_empty());
    }
}
