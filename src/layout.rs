//! Screen-region tracking for position-aware mouse handling
//!
//! `LayoutRegions` records where the header, cards, and footer landed on
//! the last draw, and `region_at()` maps a screen position back to a
//! component for mouse handling.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
