//! Line accumulator: row (or column) packing with alignment.
//!
//! Items are appended to the open line while they fit. When an item does
//! not fit, the open line is finalized (shifted along the cross axis for
//! [`End`](Alignment::End) and [`Center`](Alignment::Center)) and committed
//! before the item opens the next line. Completeness of a line is only
//! known on overflow or at the end of a section, so the shift is applied
//! exactly once, at that point.
//!
//! The fit test compares against the viewport edge, not the inset edge:
//! an item may run into the trailing inset (or, for
//! [`DataEnd`](Alignment::DataEnd), the leading inset) but never past the
//! viewport.

use alloc::vec::Vec;

use crate::axis::FlowRect;
use crate::config::{Alignment, Resolved};
use crate::geometry::EPSILON;
use crate::region::{RegionId, RegionSink, Staged};

pub(crate) struct LineAccumulator {
    alignment: Alignment,
    cross_extent: Option<f64>,
    item_spacing: f64,
    line_spacing: f64,
    cross_lead: f64,
    cross_trail: f64,
    /// The open line, in placement order.
    buffer: Vec<Staged>,
    line_main: f64,
    /// Furthest main edge of the open line.
    line_far: f64,
    overflowed: bool,
}

impl LineAccumulator {
    pub fn new(config: &Resolved) -> Self {
        Self {
            alignment: config.alignment,
            cross_extent: config.cross_extent,
            item_spacing: config.item_spacing,
            line_spacing: config.line_spacing,
            cross_lead: config.insets.cross_lead,
            cross_trail: config.insets.cross_trail,
            buffer: Vec::new(),
            line_main: 0.0,
            line_far: 0.0,
            overflowed: false,
        }
    }

    /// Reset for a new section whose first line starts at `content_start`.
    pub fn begin_section(&mut self, content_start: f64) {
        debug_assert!(self.buffer.is_empty(), "previous section not finalized");
        self.line_main = content_start;
        self.line_far = content_start;
    }

    /// Place an item, finalizing the open line first if the item wraps.
    pub fn place(
        &mut self,
        id: RegionId,
        main_len: f64,
        cross_len: f64,
        sink: &mut impl RegionSink,
    ) -> FlowRect {
        let cross = match self.buffer.last().map(|s| s.rect) {
            None => self.line_start(cross_len),
            Some(prev) => match self.next_on_line(&prev, cross_len) {
                Some(cross) => cross,
                None => {
                    self.overflowed = true;
                    self.finalize(sink);
                    self.line_main = self.line_far + self.line_spacing;
                    self.line_far = self.line_main;
                    self.line_start(cross_len)
                }
            },
        };

        let rect = FlowRect::new(self.line_main, cross, main_len, cross_len);
        self.line_far = self.line_far.max(rect.main_far());
        self.buffer.push(Staged { id, rect });
        rect
    }

    /// Apply the alignment shift to the open line and commit it.
    pub fn finalize(&mut self, sink: &mut impl RegionSink) {
        let Some(last) = self.buffer.last() else {
            return;
        };

        let scale = match self.alignment {
            Alignment::End => 1.0,
            Alignment::Center => 0.5,
            Alignment::Start | Alignment::DataEnd | Alignment::Auto => 0.0,
        };
        let space = match self.cross_extent {
            Some(extent) if scale > 0.0 => {
                (extent - last.rect.cross_far() - self.cross_trail).max(0.0) * scale
            }
            _ => 0.0,
        };

        if space > 0.0 {
            tracing::trace!(
                items = self.buffer.len(),
                main = self.line_main,
                shift = space,
                "line shifted"
            );
        }

        for mut staged in self.buffer.drain(..) {
            staged.rect.cross += space;
            sink.commit(staged);
        }
    }

    /// Whether any line has wrapped during this pass.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Alignment actually in effect, with `Auto` settled once a line wrapped.
    pub fn resolved_alignment(&self) -> Alignment {
        match self.alignment {
            Alignment::Auto if self.overflowed() => Alignment::Start,
            other => other,
        }
    }

    /// Cross origin of the first item of a line.
    fn line_start(&self, cross_len: f64) -> f64 {
        match (self.alignment, self.cross_extent) {
            (Alignment::DataEnd, Some(extent)) => {
                (extent - self.cross_trail - cross_len).max(self.cross_lead)
            }
            _ => self.cross_lead,
        }
    }

    /// Cross origin next to `prev` on the open line, or `None` on overflow.
    fn next_on_line(&self, prev: &FlowRect, cross_len: f64) -> Option<f64> {
        if self.alignment == Alignment::DataEnd {
            let cross = prev.cross - self.item_spacing - cross_len;
            return (cross >= -EPSILON).then_some(cross);
        }
        let cross = prev.cross_far() + self.item_spacing;
        match self.cross_extent {
            Some(extent) if cross + cross_len > extent + EPSILON => None,
            _ => Some(cross),
        }
    }
}
