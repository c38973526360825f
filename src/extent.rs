//! Content extent: the bounding size of everything placed.

use crate::axis::{FlowInsets, ScrollAxis};
use crate::geometry::Size;
use crate::region::{Region, RegionKind};

/// Running bounding extent of committed regions.
///
/// Cells contribute their far corner plus the trailing section insets, so
/// the scrollable surface ends one inset past the last cell. Other regions
/// contribute their far corner. Only ever grows.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ExtentTracker {
    cell_padding: Size,
    extent: Size,
}

impl ExtentTracker {
    pub fn new(axis: ScrollAxis, insets: FlowInsets) -> Self {
        Self {
            cell_padding: axis.size(insets.main_trail, insets.cross_trail),
            extent: Size::ZERO,
        }
    }

    pub fn include(&mut self, region: &Region) {
        let far = region.frame().far_corner();
        let (pad_w, pad_h) = match region.kind() {
            RegionKind::Cell => (self.cell_padding.width, self.cell_padding.height),
            RegionKind::Header | RegionKind::Footer | RegionKind::Decoration => (0.0, 0.0),
        };
        self.extent = self.extent.max(Size::new(far.x + pad_w, far.y + pad_h));
    }

    pub fn extent(&self) -> Size {
        self.extent
    }
}

/// Bounding extent of a region list, computed from scratch.
pub(crate) fn content_extent<'a>(
    axis: ScrollAxis,
    insets: FlowInsets,
    regions: impl IntoIterator<Item = &'a Region>,
) -> Size {
    let mut tracker = ExtentTracker::new(axis, insets);
    for region in regions {
        tracker.include(region);
    }
    tracker.extent()
}
