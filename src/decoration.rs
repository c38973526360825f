//! Section decoration bounds.

use crate::geometry::Rect;
use crate::region::{Region, RegionKind};

/// Tight bounds of the cells in `section`, grown by `margin`.
///
/// Empty ([`Rect::ZERO`]) when the section has no placed cells.
pub(crate) fn bounds(section: &[Region], margin: f64) -> Rect {
    section
        .iter()
        .filter(|r| r.kind() == RegionKind::Cell)
        .map(|r| r.frame())
        .reduce(|a, b| a.union(&b))
        .map_or(Rect::ZERO, |r| r.inflate(margin))
}
