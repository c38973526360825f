//! Scroll axis and the flow-coordinate transform.
//!
//! The placement algorithms are written once, in flow coordinates: `main`
//! runs along the unbounded scroll direction and `cross` along the fixed
//! viewport extent. [`ScrollAxis`] maps between flow coordinates and screen
//! coordinates.
//!
//! ```text
//!     Vertical                 Horizontal
//!     cross → x                main → x
//!     ┌───────────┐            ┌──────────────────┐
//!     │ ▢ ▢ ▢     │ main       │ ▢ ▢ ▢ ...        │ cross
//!     │ ▢ ▢       │  ↓         │ ▢ ▢              │  ↓
//!     │ ▢ ▢ ▢ ▢   │  y         │ ▢                │  y
//!     │ ...       │            └──────────────────┘
//! ```

use crate::geometry::{Insets, Rect, Size};

/// Direction of unbounded scrolling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Scrolls top to bottom; lines are rows, the cross axis is the width.
    #[default]
    Vertical,
    /// Scrolls left to right; lines are columns, the cross axis is the height.
    Horizontal,
}

impl ScrollAxis {
    /// Main-axis (scroll direction) length of a size.
    pub fn main(self, size: Size) -> f64 {
        match self {
            ScrollAxis::Vertical => size.height,
            ScrollAxis::Horizontal => size.width,
        }
    }

    /// Cross-axis (viewport direction) length of a size.
    pub fn cross(self, size: Size) -> f64 {
        match self {
            ScrollAxis::Vertical => size.width,
            ScrollAxis::Horizontal => size.height,
        }
    }

    /// Build a screen size from main and cross lengths.
    pub fn size(self, main: f64, cross: f64) -> Size {
        match self {
            ScrollAxis::Vertical => Size::new(cross, main),
            ScrollAxis::Horizontal => Size::new(main, cross),
        }
    }

    /// Far main-axis edge of a screen rect.
    pub fn main_far(self, rect: &Rect) -> f64 {
        match self {
            ScrollAxis::Vertical => rect.max_y(),
            ScrollAxis::Horizontal => rect.max_x(),
        }
    }

    /// Split section insets into flow insets for this axis.
    pub(crate) fn flow_insets(self, insets: Insets) -> FlowInsets {
        match self {
            ScrollAxis::Vertical => FlowInsets {
                main_lead: insets.top,
                main_trail: insets.bottom,
                cross_lead: insets.left,
                cross_trail: insets.right,
            },
            ScrollAxis::Horizontal => FlowInsets {
                main_lead: insets.left,
                main_trail: insets.right,
                cross_lead: insets.top,
                cross_trail: insets.bottom,
            },
        }
    }

    /// Convert a flow rect to screen coordinates.
    pub(crate) fn to_rect(self, f: FlowRect) -> Rect {
        match self {
            ScrollAxis::Vertical => Rect::new(f.cross, f.main, f.cross_len, f.main_len),
            ScrollAxis::Horizontal => Rect::new(f.main, f.cross, f.main_len, f.cross_len),
        }
    }
}

/// Section insets resolved onto the flow axes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct FlowInsets {
    pub main_lead: f64,
    pub main_trail: f64,
    pub cross_lead: f64,
    pub cross_trail: f64,
}

/// A rect in flow coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct FlowRect {
    pub main: f64,
    pub cross: f64,
    pub main_len: f64,
    pub cross_len: f64,
}

impl FlowRect {
    pub const fn new(main: f64, cross: f64, main_len: f64, cross_len: f64) -> Self {
        Self {
            main,
            cross,
            main_len,
            cross_len,
        }
    }

    pub fn main_far(&self) -> f64 {
        self.main + self.main_len
    }

    pub fn cross_far(&self) -> f64 {
        self.cross + self.cross_len
    }

    /// Whether the cross intervals `[cross, cross_far)` overlap.
    pub fn overlaps_cross(&self, cross: f64, cross_len: f64) -> bool {
        self.cross < cross + cross_len && cross < self.cross_far()
    }
}
