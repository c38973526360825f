//! Header and footer positioning.
//!
//! Supplementary views span from the cross-axis origin of the surface;
//! only their main-axis position depends on the layout.

use crate::axis::ScrollAxis;
use crate::region::{Region, RegionKind};

/// Main-axis origin of a section: where its header goes.
///
/// `previous` is everything committed for the previous section. The first
/// section starts at zero; later sections start at the previous section's
/// furthest main edge among its header, cells and footer.
pub(crate) fn section_origin(axis: ScrollAxis, previous: Option<&[Region]>) -> f64 {
    let Some(previous) = previous else {
        return 0.0;
    };
    previous
        .iter()
        .filter(|r| r.kind() != RegionKind::Decoration)
        .map(|r| axis.main_far(&r.frame()))
        .fold(0.0, f64::max)
}

/// Main-axis origin of a section's footer.
///
/// `section` holds the section's committed header and cells. With cells,
/// the footer sits one trailing inset past the furthest cell; without, it
/// follows the header directly.
pub(crate) fn footer_origin(axis: ScrollAxis, section: &[Region], main_trail: f64) -> f64 {
    let cells_far = section
        .iter()
        .filter(|r| r.kind() == RegionKind::Cell)
        .map(|r| axis.main_far(&r.frame()))
        .reduce(f64::max);
    match cells_far {
        Some(far) => far + main_trail,
        None => section
            .iter()
            .map(|r| axis.main_far(&r.frame()))
            .fold(0.0, f64::max),
    }
}
