//! What the engine asks of the host: counts and sizes.

use alloc::vec::Vec;

use crate::geometry::Size;
use crate::region::RegionKind;

/// Section and item counts.
pub trait CountProvider {
    /// Number of sections.
    fn section_count(&self) -> usize;
    /// Number of items in `section`.
    fn item_count(&self, section: usize) -> usize;
}

/// Region sizes.
///
/// Returning `None` means the region is absent; it is still placed, with
/// zero size. For section-level kinds `item` is always `0`.
pub trait SizeProvider {
    /// Size of one region, or `None` when the host has nothing to show.
    fn size(&self, section: usize, item: usize, kind: RegionKind) -> Option<Size>;
}

impl<T: CountProvider + ?Sized> CountProvider for &T {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        (**self).item_count(section)
    }
}

impl<T: SizeProvider + ?Sized> SizeProvider for &T {
    fn size(&self, section: usize, item: usize, kind: RegionKind) -> Option<Size> {
        (**self).size(section, item, kind)
    }
}

/// Sizes of one section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionData {
    pub header: Option<Size>,
    pub items: Vec<Size>,
    pub footer: Option<Size>,
}

impl SectionData {
    /// A section with items and no supplementary views.
    pub fn new(items: impl IntoIterator<Item = Size>) -> Self {
        Self {
            header: None,
            items: items.into_iter().collect(),
            footer: None,
        }
    }

    /// Set the header size.
    pub fn header(mut self, size: Size) -> Self {
        self.header = Some(size);
        self
    }

    /// Set the footer size.
    pub fn footer(mut self, size: Size) -> Self {
        self.footer = Some(size);
        self
    }
}

/// Precomputed counts and sizes, usable as both providers.
///
/// ```
/// use zenflow::{FlowData, SectionData, Size};
///
/// let data = FlowData::new()
///     .section(SectionData::new([Size::new(40.0, 30.0), Size::new(60.0, 30.0)]))
///     .section(SectionData::new([]).header(Size::new(320.0, 44.0)));
/// assert_eq!(data.sections.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowData {
    pub sections: Vec<SectionData>,
}

impl FlowData {
    /// No sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    pub fn section(mut self, section: SectionData) -> Self {
        self.sections.push(section);
        self
    }
}

impl CountProvider for FlowData {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.items.len())
    }
}

impl SizeProvider for FlowData {
    fn size(&self, section: usize, item: usize, kind: RegionKind) -> Option<Size> {
        let s = self.sections.get(section)?;
        match kind {
            RegionKind::Cell => s.items.get(item).copied(),
            RegionKind::Header => s.header,
            RegionKind::Footer => s.footer,
            RegionKind::Decoration => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_queries_are_absent() {
        let data = FlowData::new().section(SectionData::new([Size::new(1.0, 2.0)]));
        assert_eq!(data.item_count(5), 0);
        assert_eq!(data.size(0, 1, RegionKind::Cell), None);
        assert_eq!(data.size(3, 0, RegionKind::Header), None);
        assert_eq!(data.size(0, 0, RegionKind::Cell), Some(Size::new(1.0, 2.0)));
    }

    #[test]
    fn references_are_providers() {
        fn count<C: CountProvider>(c: C) -> usize {
            c.section_count()
        }
        let data = FlowData::new().section(SectionData::default());
        assert_eq!(count(&data), 1);
        assert_eq!(count(&&data), 1);
    }
}
