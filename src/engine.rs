//! The placement engine: one ordered pass over sections and items.
//!
//! For every section the pass emits, in order: the header, the cells (line
//! by line, or one by one in follow mode), the footer and the decoration.
//! The output is a pure function of the configuration and the providers.
//!
//! # Example
//!
//! ```
//! use zenflow::{Alignment, FlowConfig, FlowData, FlowLayout, Insets, RegionId, SectionData, Size};
//!
//! let data = FlowData::new().section(SectionData::new([
//!     Size::new(40.0, 30.0),
//!     Size::new(60.0, 30.0),
//!     Size::new(50.0, 30.0),
//! ]));
//! let config = FlowConfig::new(120.0)
//!     .alignment(Alignment::Start)
//!     .section_inset(Insets::uniform(10.0));
//!
//! let result = FlowLayout::new(config, &data, &data).compute();
//!
//! let third = result.region(RegionId::cell(0, 2)).unwrap();
//! assert_eq!(third.origin().x, 10.0); // wrapped to the second line
//! assert_eq!(third.origin().y, 50.0);
//! assert_eq!(result.content_extent(), Size::new(130.0, 90.0));
//! ```

use alloc::vec::Vec;

use crate::axis::{FlowRect, ScrollAxis};
use crate::config::{Alignment, FlowConfig};
use crate::decoration;
use crate::extent::{ExtentTracker, content_extent};
use crate::geometry::{Rect, Size};
use crate::line::LineAccumulator;
use crate::region::{Region, RegionId, RegionKind, RegionSink, Staged};
use crate::skyline::SkylinePacker;
use crate::source::{CountProvider, SizeProvider};
use crate::supplementary;

/// Layout engine bound to its configuration and providers.
///
/// Holds no state between passes: [`compute`](Self::compute) derives
/// everything fresh.
#[derive(Clone, Debug)]
pub struct FlowLayout<C, S> {
    config: FlowConfig,
    counts: C,
    sizes: S,
}

impl<C: CountProvider, S: SizeProvider> FlowLayout<C, S> {
    /// Bind a configuration to a count provider and a size provider.
    pub fn new(config: FlowConfig, counts: C, sizes: S) -> Self {
        Self {
            config,
            counts,
            sizes,
        }
    }

    /// The configuration as given, before sanitizing.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Run one layout pass.
    pub fn compute(&self) -> FlowResult {
        let cfg = self.config.resolve();
        let axis = cfg.axis;
        let insets = cfg.insets;

        let mut pass = Pass {
            axis,
            regions: Vec::new(),
            extent: ExtentTracker::new(axis, insets),
        };
        let mut lines = LineAccumulator::new(&cfg);
        let mut skyline = SkylinePacker::new(&cfg);
        let mut previous: Option<(usize, usize)> = None;

        let sections = self.counts.section_count();
        for section in 0..sections {
            let start = pass.regions.len();

            let origin =
                supplementary::section_origin(axis, previous.map(|(a, b)| &pass.regions[a..b]));
            let header = self.size(section, 0, RegionKind::Header);
            pass.commit(Staged {
                id: RegionId::header(section),
                rect: FlowRect::new(origin, 0.0, axis.main(header), axis.cross(header)),
            });

            let content_start = origin + axis.main(header) + insets.main_lead;
            if cfg.follow {
                skyline.begin_section(content_start);
            } else {
                lines.begin_section(content_start);
            }

            for item in 0..self.counts.item_count(section) {
                let size = self.size(section, item, RegionKind::Cell);
                let id = RegionId::cell(section, item);
                if cfg.follow {
                    skyline.place(id, axis.main(size), axis.cross(size), &mut pass);
                } else {
                    lines.place(id, axis.main(size), axis.cross(size), &mut pass);
                }
            }
            lines.finalize(&mut pass);

            let footer_main =
                supplementary::footer_origin(axis, &pass.regions[start..], insets.main_trail);
            let footer = self.size(section, 0, RegionKind::Footer);
            pass.commit(Staged {
                id: RegionId::footer(section),
                rect: FlowRect::new(footer_main, 0.0, axis.main(footer), axis.cross(footer)),
            });

            let bounds = decoration::bounds(&pass.regions[start..], cfg.decoration_margin);
            pass.push(Region::new(RegionId::decoration(section), bounds));

            tracing::trace!(section, regions = pass.regions.len() - start, "section placed");
            previous = Some((start, pass.regions.len()));
        }

        let extent = pass.extent.extent();
        debug_assert_eq!(extent, content_extent(axis, insets, &pass.regions));
        tracing::debug!(
            sections,
            regions = pass.regions.len(),
            width = extent.width,
            height = extent.height,
            follow = cfg.follow,
            "flow pass complete"
        );

        FlowResult {
            axis,
            cross_extent: cfg.cross_extent,
            alignment: if cfg.follow {
                Alignment::Start
            } else {
                lines.resolved_alignment()
            },
            regions: pass.regions,
            content_extent: extent,
        }
    }

    fn size(&self, section: usize, item: usize, kind: RegionKind) -> Size {
        self.sizes
            .size(section, item, kind)
            .map_or(Size::ZERO, Size::sanitized)
    }
}

/// Run one pass with a source that provides both counts and sizes.
pub fn layout<P: CountProvider + SizeProvider>(config: &FlowConfig, source: &P) -> FlowResult {
    FlowLayout::new(*config, source, source).compute()
}

/// Per-pass output under construction.
struct Pass {
    axis: ScrollAxis,
    regions: Vec<Region>,
    extent: ExtentTracker,
}

impl Pass {
    fn push(&mut self, region: Region) {
        self.extent.include(&region);
        self.regions.push(region);
    }
}

impl RegionSink for Pass {
    fn commit(&mut self, staged: Staged) {
        let frame = self.axis.to_rect(staged.rect);
        self.push(Region::new(staged.id, frame));
    }
}

/// Everything one pass produced.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowResult {
    axis: ScrollAxis,
    cross_extent: Option<f64>,
    alignment: Alignment,
    regions: Vec<Region>,
    content_extent: Size,
}

impl FlowResult {
    /// All regions, in placement order: per section the header, the cells,
    /// the footer, then the decoration.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Take ownership of the region list.
    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    /// Number of regions, supplementary and decoration regions included.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True when the pass saw no sections.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Scroll axis the pass was laid out along.
    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    /// Bounding extent of all placed regions (cells padded by the trailing
    /// section insets).
    pub fn content_extent(&self) -> Size {
        self.content_extent
    }

    /// Size for the host's scrollable surface: the content extent, never
    /// narrower than the viewport on the cross axis.
    pub fn scrollable_size(&self) -> Size {
        let Some(viewport) = self.cross_extent else {
            return self.content_extent;
        };
        let main = self.axis.main(self.content_extent);
        let cross = self.axis.cross(self.content_extent).max(viewport);
        self.axis.size(main, cross)
    }

    /// Alignment the pass ended up using.
    ///
    /// An unknown cross extent turns `End`, `Center` and `DataEnd` into
    /// `Start`; `Auto` becomes `Start` once a line wraps. Follow mode always
    /// reports `Start`: cells are packed from the leading edge and no line
    /// shift is applied.
    pub fn resolved_alignment(&self) -> Alignment {
        self.alignment
    }

    /// Regions with positive-area overlap with `rect`, in placement order.
    ///
    /// A linear filter; region counts are expected to be modest.
    pub fn regions_in(&self, rect: Rect) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(move |r| r.frame().intersects(&rect))
    }

    /// Look up one region by identity.
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id() == id)
    }

    /// Cells of `section`, in item order.
    pub fn cells(&self, section: usize) -> impl Iterator<Item = &Region> + '_ {
        self.regions
            .iter()
            .filter(move |r| r.section() == section && r.kind() == RegionKind::Cell)
    }

    /// Header region of `section` (zero-sized when the provider has none).
    pub fn header(&self, section: usize) -> Option<&Region> {
        self.region(RegionId::header(section))
    }

    /// Footer region of `section` (zero-sized when the provider has none).
    pub fn footer(&self, section: usize) -> Option<&Region> {
        self.region(RegionId::footer(section))
    }

    /// Background region of `section`; [`Rect::ZERO`] when it has no cells.
    pub fn decoration(&self, section: usize) -> Option<&Region> {
        self.region(RegionId::decoration(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Insets, Point};
    use crate::source::{FlowData, SectionData};

    fn cells(sizes: &[(f64, f64)]) -> SectionData {
        SectionData::new(sizes.iter().map(|&(w, h)| Size::new(w, h)))
    }

    fn base() -> FlowConfig {
        FlowConfig::new(120.0).section_inset(Insets::uniform(10.0))
    }

    // ── ordering and identity ───────────────────────────────────────────

    #[test]
    fn emits_header_cells_footer_decoration_per_section() {
        let data = FlowData::new()
            .section(cells(&[(40.0, 30.0), (60.0, 30.0), (50.0, 30.0)]))
            .section(cells(&[(40.0, 30.0)]));
        let result = layout(&base().alignment(Alignment::Center), &data);
        let kinds: Vec<_> = result.regions().iter().map(|r| (r.section(), r.kind())).collect();
        use RegionKind::*;
        assert_eq!(
            kinds,
            [
                (0, Header),
                (0, Cell),
                (0, Cell),
                (0, Cell),
                (0, Footer),
                (0, Decoration),
                (1, Header),
                (1, Cell),
                (1, Footer),
                (1, Decoration),
            ]
        );
        let items: Vec<_> = result.cells(0).map(|r| r.item()).collect();
        assert_eq!(items, [0, 1, 2]);
    }

    #[test]
    fn no_sections_no_regions() {
        let result = layout(&base(), &FlowData::new());
        assert!(result.is_empty());
        assert_eq!(result.content_extent(), Size::ZERO);
        assert_eq!(result.scrollable_size(), Size::new(120.0, 0.0));
    }

    // ── sections and supplementary views ────────────────────────────────

    #[test]
    fn header_pushes_cells_down() {
        let data = FlowData::new().section(cells(&[(40.0, 30.0)]).header(Size::new(120.0, 44.0)));
        let result = layout(&base(), &data);
        assert_eq!(result.header(0).unwrap().frame(), Rect::new(0.0, 0.0, 120.0, 44.0));
        assert_eq!(result.region(RegionId::cell(0, 0)).unwrap().origin(), Point::new(10.0, 54.0));
    }

    #[test]
    fn footer_follows_cells_and_next_section_follows_footer() {
        let data = FlowData::new()
            .section(cells(&[(40.0, 30.0)]).footer(Size::new(120.0, 20.0)))
            .section(cells(&[(40.0, 30.0)]).header(Size::new(120.0, 44.0)));
        let result = layout(&base(), &data);
        // Cell 10..40, bottom inset 10.
        assert_eq!(result.footer(0).unwrap().frame(), Rect::new(0.0, 50.0, 120.0, 20.0));
        assert_eq!(result.header(1).unwrap().origin(), Point::new(0.0, 70.0));
        assert_eq!(result.region(RegionId::cell(1, 0)).unwrap().origin(), Point::new(10.0, 124.0));
    }

    #[test]
    fn missing_footer_still_reserves_trailing_inset() {
        let data = FlowData::new()
            .section(cells(&[(40.0, 30.0)]))
            .section(cells(&[(40.0, 30.0)]));
        let result = layout(&base(), &data);
        let footer = result.footer(0).unwrap();
        assert_eq!(footer.frame(), Rect::new(0.0, 50.0, 0.0, 0.0));
        // Section 1: origin 50, top inset 10.
        assert_eq!(result.region(RegionId::cell(1, 0)).unwrap().origin(), Point::new(10.0, 60.0));
    }

    #[test]
    fn decoration_wraps_cells_behind_them() {
        let data = FlowData::new().section(cells(&[(40.0, 30.0), (60.0, 30.0), (50.0, 30.0)]));
        let result = layout(&base(), &data);
        let d = result.decoration(0).unwrap();
        assert_eq!(d.frame(), Rect::new(5.0, 5.0, 120.0, 80.0));
        assert_eq!(d.z_order(), -1);
    }

    // ── content extent ──────────────────────────────────────────────────

    #[test]
    fn decoration_margin_grows_trailing_extent_only() {
        let data = FlowData::new().section(cells(&[(40.0, 30.0)]));
        let result = layout(&FlowConfig::new(120.0), &data);
        assert_eq!(result.decoration(0).unwrap().frame(), Rect::new(-5.0, -5.0, 50.0, 40.0));
        // Leading overhang is clipped at the origin; trailing overhang counts.
        assert_eq!(result.content_extent(), Size::new(45.0, 35.0));
    }

    #[test]
    fn footer_extent_is_not_padded_by_insets() {
        let data = FlowData::new()
            .section(cells(&[(40.0, 30.0)]).footer(Size::new(120.0, 20.0)));
        let result = layout(&base().decoration_margin(0.0), &data);
        assert_eq!(result.footer(0).unwrap().frame(), Rect::new(0.0, 50.0, 120.0, 20.0));
        assert_eq!(result.content_extent(), Size::new(120.0, 70.0));
    }

    // ── fallbacks ───────────────────────────────────────────────────────

    #[test]
    fn missing_item_size_is_zero_sized() {
        struct Sparse;
        impl CountProvider for Sparse {
            fn section_count(&self) -> usize {
                1
            }
            fn item_count(&self, _: usize) -> usize {
                3
            }
        }
        impl SizeProvider for Sparse {
            fn size(&self, _: usize, item: usize, kind: RegionKind) -> Option<Size> {
                (kind == RegionKind::Cell && item != 1).then_some(Size::new(40.0, 30.0))
            }
        }
        let result = FlowLayout::new(base(), Sparse, Sparse).compute();
        assert_eq!(result.cells(0).count(), 3);
        let middle = result.region(RegionId::cell(0, 1)).unwrap();
        assert_eq!(middle.size(), Size::ZERO);
        assert_eq!(middle.origin(), Point::new(60.0, 10.0));
    }

    #[test]
    fn unknown_extent_lays_out_one_line() {
        let data = FlowData::new().section(cells(&[(400.0, 30.0); 5]));
        let result = layout(&base().cross_extent(0.0).alignment(Alignment::Center), &data);
        assert!(result.cells(0).all(|r| r.origin().y == 10.0));
        assert_eq!(result.resolved_alignment(), Alignment::Start);
        assert_eq!(result.scrollable_size(), result.content_extent());
    }

    // ── horizontal ──────────────────────────────────────────────────────

    #[test]
    fn horizontal_is_the_transpose() {
        let vertical = FlowData::new().section(cells(&[(40.0, 30.0), (60.0, 30.0), (50.0, 30.0)]));
        let horizontal =
            FlowData::new().section(cells(&[(30.0, 40.0), (30.0, 60.0), (30.0, 50.0)]));
        let v = layout(&base(), &vertical);
        let h = layout(&base().axis(ScrollAxis::Horizontal), &horizontal);
        for (a, b) in v.regions().iter().zip(h.regions()) {
            let fa = a.frame();
            let fb = b.frame();
            assert_eq!((fa.x, fa.y, fa.width, fa.height), (fb.y, fb.x, fb.height, fb.width));
        }
        assert_eq!(h.content_extent(), Size::new(90.0, 130.0));
    }

    // ── queries ─────────────────────────────────────────────────────────

    #[test]
    fn regions_in_filters_by_intersection() {
        let data = FlowData::new().section(cells(&[(40.0, 30.0), (60.0, 30.0), (50.0, 30.0)]));
        let result = layout(&base(), &data);
        let visible: Vec<_> = result
            .regions_in(Rect::new(0.0, 45.0, 120.0, 20.0))
            .map(|r| r.id())
            .collect();
        // Second line (y 50..80) and the decoration (5..85).
        assert_eq!(visible, [RegionId::cell(0, 2), RegionId::decoration(0)]);
    }

    #[test]
    fn follow_mode_packs_skyline() {
        let data = FlowData::new().section(cells(&[(50.0, 80.0), (50.0, 20.0), (50.0, 20.0)]));
        let config = FlowConfig::new(100.0)
            .follow(true)
            .item_spacing(0.0)
            .line_spacing(0.0);
        let result = layout(&config, &data);
        assert_eq!(result.region(RegionId::cell(0, 2)).unwrap().origin(), Point::new(50.0, 20.0));
    }

    #[test]
    fn follow_mode_reports_start_alignment() {
        let data = FlowData::new().section(cells(&[(50.0, 80.0), (50.0, 20.0), (50.0, 20.0)]));
        let result = layout(&base().follow(true).alignment(Alignment::Center), &data);
        assert_eq!(result.resolved_alignment(), Alignment::Start);
    }
}
