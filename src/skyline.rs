//! Skyline ("follow") packing.
//!
//! Each distinct cross-axis origin used by a cell is a slot; the packer
//! remembers, per slot, the furthest main edge reached (the slot's
//! frontier). Slots are kept in discovery order for the whole pass, across
//! sections.
//!
//! Placement is locally greedy: the next item goes right after the last
//! cell placed in the section. Only when that would run past the viewport
//! does the packer fall back to the slot with the lowest frontier, first
//! discovered winning ties. Either way the item then drops to the first
//! main position that clears every placed cell overlapping it on the cross
//! axis.

use alloc::vec::Vec;

use crate::axis::FlowRect;
use crate::config::Resolved;
use crate::geometry::{EPSILON, approx_eq};
use crate::region::{RegionId, RegionSink, Staged};

#[derive(Copy, Clone, Debug, PartialEq)]
struct Slot {
    cross: f64,
    frontier: f64,
}

pub(crate) struct SkylinePacker {
    cross_extent: Option<f64>,
    item_spacing: f64,
    line_spacing: f64,
    cross_lead: f64,
    slots: Vec<Slot>,
    /// Every cell placed this pass.
    placed: Vec<FlowRect>,
    /// Last cell placed in the current section.
    last: Option<FlowRect>,
    /// Main position no cell of the current section may start before.
    floor: f64,
}

impl SkylinePacker {
    pub fn new(config: &Resolved) -> Self {
        Self {
            cross_extent: config.cross_extent,
            item_spacing: config.item_spacing,
            line_spacing: config.line_spacing,
            cross_lead: config.insets.cross_lead,
            slots: Vec::new(),
            placed: Vec::new(),
            last: None,
            floor: 0.0,
        }
    }

    /// Start a section whose cells begin at `content_start`.
    pub fn begin_section(&mut self, content_start: f64) {
        self.floor = content_start;
        self.last = None;
    }

    /// Place an item and commit it immediately; follow mode has no line shift.
    pub fn place(
        &mut self,
        id: RegionId,
        main_len: f64,
        cross_len: f64,
        sink: &mut impl RegionSink,
    ) -> FlowRect {
        let (cross, min_main) = match self.last {
            None => (self.cross_lead, self.floor),
            Some(last) => {
                let cross = last.cross_far() + self.item_spacing;
                if self.fits(cross, cross_len) {
                    (cross, last.main)
                } else {
                    let cross = self.shortest_slot(cross_len);
                    tracing::trace!(cross, "skyline fallback to shortest slot");
                    (cross, self.floor)
                }
            }
        };

        let main = self.drop_main(cross, cross_len, min_main.max(self.floor));
        let rect = FlowRect::new(main, cross, main_len, cross_len);
        self.record(rect);
        sink.commit(Staged { id, rect });
        rect
    }

    fn fits(&self, cross: f64, cross_len: f64) -> bool {
        match self.cross_extent {
            Some(extent) => cross + cross_len <= extent + EPSILON,
            None => true,
        }
    }

    /// Cross origin of the lowest-frontier slot the item fits in.
    fn shortest_slot(&self, cross_len: f64) -> f64 {
        let mut best: Option<Slot> = None;
        for slot in &self.slots {
            if !self.fits(slot.cross, cross_len) {
                continue;
            }
            // Strict `<` keeps the first discovered slot on ties.
            if best.is_none_or(|b| slot.frontier < b.frontier) {
                best = Some(*slot);
            }
        }
        best.map_or(self.cross_lead, |s| s.cross)
    }

    /// Lowest main origin at or after `min_main` that clears placed cells.
    fn drop_main(&self, cross: f64, cross_len: f64, min_main: f64) -> f64 {
        self.placed
            .iter()
            .filter(|p| p.overlaps_cross(cross, cross_len))
            .map(|p| p.main_far() + self.line_spacing)
            .fold(min_main, f64::max)
    }

    fn record(&mut self, rect: FlowRect) {
        match self.slots.iter_mut().find(|s| approx_eq(s.cross, rect.cross)) {
            Some(slot) => slot.frontier = slot.frontier.max(rect.main_far()),
            None => self.slots.push(Slot {
                cross: rect.cross,
                frontier: rect.main_far(),
            }),
        }
        self.placed.push(rect);
        self.last = Some(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowConfig;

    fn packer(extent: f64) -> SkylinePacker {
        let config = FlowConfig::new(extent)
            .follow(true)
            .item_spacing(0.0)
            .line_spacing(0.0)
            .resolve();
        let mut p = SkylinePacker::new(&config);
        p.begin_section(0.0);
        p
    }

    fn place_all(p: &mut SkylinePacker, sizes: &[(f64, f64)]) -> Vec<(f64, f64)> {
        let mut sink = Vec::new();
        for (i, &(w, h)) in sizes.iter().enumerate() {
            p.place(RegionId::cell(0, i), h, w, &mut sink);
        }
        sink.iter().map(|s| (s.rect.cross, s.rect.main)).collect()
    }

    #[test]
    fn two_equal_columns_tie_break_first_slot() {
        let mut p = packer(100.0);
        let out = place_all(&mut p, &[(50.0, 30.0); 4]);
        assert_eq!(out, [(0.0, 0.0), (50.0, 0.0), (0.0, 30.0), (50.0, 30.0)]);
    }

    #[test]
    fn fallback_picks_shortest_slot() {
        let mut p = packer(100.0);
        // Left column tall, right column short.
        let out = place_all(&mut p, &[(50.0, 80.0), (50.0, 20.0), (50.0, 10.0)]);
        assert_eq!(out[2], (50.0, 20.0));
    }

    #[test]
    fn greedy_attach_drops_below_taller_neighbour() {
        let mut p = packer(100.0);
        // 0: left tall, 1: right short, 2: falls back to right (shorter),
        // 3: greedy next-to-2 overflows, falls back to the right again.
        let out = place_all(
            &mut p,
            &[(50.0, 80.0), (50.0, 20.0), (50.0, 20.0), (50.0, 20.0)],
        );
        assert_eq!(out[2], (50.0, 20.0));
        assert_eq!(out[3], (50.0, 40.0));
    }

    #[test]
    fn greedy_attach_never_overlaps() {
        let mut p = packer(150.0);
        // Item 2 is tall; item 3 overflows and falls back, item 4 attaches
        // greedily beside item 3.
        let out = place_all(
            &mut p,
            &[(50.0, 10.0), (50.0, 10.0), (50.0, 90.0), (50.0, 10.0), (50.0, 10.0)],
        );
        assert_eq!(out[..3], [(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
        // Fallback: slots 0 and 50 both at 10 → first discovered.
        assert_eq!(out[3], (0.0, 10.0));
        // Greedy next to item 3 at x=50, clears item 1.
        assert_eq!(out[4], (50.0, 10.0));
    }

    #[test]
    fn unbounded_extent_keeps_one_line() {
        let mut p = packer(0.0);
        let out = place_all(&mut p, &[(50.0, 30.0); 3]);
        assert_eq!(out, [(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
    }

    #[test]
    fn section_floor_applies_to_old_slots() {
        let mut p = packer(100.0);
        let mut sink = Vec::new();
        p.place(RegionId::cell(0, 0), 30.0, 50.0, &mut sink);
        p.begin_section(100.0);
        let r = p.place(RegionId::cell(1, 0), 30.0, 50.0, &mut sink);
        assert_eq!((r.cross, r.main), (0.0, 100.0));
        let r = p.place(RegionId::cell(1, 1), 30.0, 50.0, &mut sink);
        assert_eq!((r.cross, r.main), (50.0, 100.0));
        let r = p.place(RegionId::cell(1, 2), 30.0, 50.0, &mut sink);
        assert_eq!((r.cross, r.main), (0.0, 130.0));
    }

    #[test]
    fn wide_item_falls_back_to_leading_slot() {
        let mut p = packer(100.0);
        let out = place_all(&mut p, &[(60.0, 10.0), (30.0, 40.0), (90.0, 10.0)]);
        // Greedy after item 1 overflows; slot at 60 cannot hold 90 → slot 0.
        assert_eq!(out[2], (0.0, 40.0));
    }
}
