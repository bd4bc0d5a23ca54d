//! Gallery - filter, sort and modal navigation over the catalog
//!
//! # Architecture
//!
//! Each concern is a small pure module; [`state`] ties them together:
//!
//! - [`sort`]: working set to render order
//! - [`filter`]: record visibility and the active-filter editing rules
//! - [`modal`]: open/closed modal, carousel and sibling lookup
//! - [`markup`]: inline link syntax in descriptions
//! - [`state`]: the explicit [`GalleryState`] driven by [`GalleryAction`]s
//!
//! Nothing here touches a terminal or a document; front ends only draw the
//! projections returned by [`GalleryState`].

pub mod filter;
pub mod markup;
pub mod modal;
pub mod sort;
pub mod state;

pub use filter::{ActiveFilters, FilterOutcome};
pub use modal::{MediaLayout, ModalState, ModalView, SlideControl, Viewport};
pub use sort::SortMode;
pub use state::{
    CardView, FilterBarView, FilterButton, GalleryAction, GallerySettings, GalleryState, Transition,
};
