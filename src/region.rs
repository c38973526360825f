//! Placed regions: the output of a layout pass.

use alloc::vec::Vec;

use crate::axis::FlowRect;
use crate::geometry::{Point, Rect, Size};

/// What a region represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionKind {
    /// An item cell.
    Cell,
    /// Leading supplementary view of a section.
    Header,
    /// Trailing supplementary view of a section.
    Footer,
    /// Non-interactive background spanning a section's cells.
    Decoration,
}

impl RegionKind {
    /// Default stacking order. Decorations draw behind everything else.
    pub const fn z_order(self) -> i32 {
        match self {
            RegionKind::Decoration => -1,
            RegionKind::Cell | RegionKind::Header | RegionKind::Footer => 0,
        }
    }
}

/// Identity of a region within one pass.
///
/// Section-level kinds always carry `item == 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId {
    /// Section index.
    pub section: usize,
    /// Item index within the section; `0` for section-level kinds.
    pub item: usize,
    /// What the region represents.
    pub kind: RegionKind,
}

impl RegionId {
    /// Identity of an item cell.
    pub const fn cell(section: usize, item: usize) -> Self {
        Self {
            section,
            item,
            kind: RegionKind::Cell,
        }
    }

    /// Identity of a section header.
    pub const fn header(section: usize) -> Self {
        Self::section_level(section, RegionKind::Header)
    }

    /// Identity of a section footer.
    pub const fn footer(section: usize) -> Self {
        Self::section_level(section, RegionKind::Footer)
    }

    /// Identity of a section decoration.
    pub const fn decoration(section: usize) -> Self {
        Self::section_level(section, RegionKind::Decoration)
    }

    const fn section_level(section: usize, kind: RegionKind) -> Self {
        Self {
            section,
            item: 0,
            kind,
        }
    }
}

/// A placed region. Read-only once a pass has produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    id: RegionId,
    frame: Rect,
    z_order: i32,
}

impl Region {
    pub(crate) fn new(id: RegionId, frame: Rect) -> Self {
        Self {
            id,
            frame,
            z_order: id.kind.z_order(),
        }
    }

    /// Identity within the pass.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Section the region belongs to.
    pub fn section(&self) -> usize {
        self.id.section
    }

    /// Item index. Meaningless (zero) for section-level kinds.
    pub fn item(&self) -> usize {
        self.id.item
    }

    /// What the region represents.
    pub fn kind(&self) -> RegionKind {
        self.id.kind
    }

    /// Placed frame in surface coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Top-left corner of the frame.
    pub fn origin(&self) -> Point {
        self.frame.origin()
    }

    /// Size of the frame, as the provider reported it (sanitized).
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// Stacking order; lower draws first.
    pub fn z_order(&self) -> i32 {
        self.z_order
    }
}

/// A placement still being positioned, in flow coordinates.
///
/// Only the line accumulator and the skyline packer hold these; they become
/// [`Region`]s when committed to a [`RegionSink`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Staged {
    pub id: RegionId,
    pub rect: FlowRect,
}

/// Receiver of finished placements.
pub(crate) trait RegionSink {
    fn commit(&mut self, staged: Staged);
}

impl RegionSink for Vec<Staged> {
    fn commit(&mut self, staged: Staged) {
        self.push(staged);
    }
}
