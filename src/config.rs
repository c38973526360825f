//! Layout configuration.
//!
//! # Example
//!
//! ```
//! use zenflow::{Alignment, FlowConfig, Insets, ScrollAxis};
//!
//! let config = FlowConfig::new(320.0)
//!     .alignment(Alignment::Center)
//!     .item_spacing(8.0)
//!     .line_spacing(12.0)
//!     .section_inset(Insets::uniform(10.0));
//!
//! assert_eq!(config.axis, ScrollAxis::Vertical);
//! assert!(config.validate().is_ok());
//! ```

use core::fmt;

use crate::axis::{FlowInsets, ScrollAxis};
use crate::geometry::{Insets, non_negative};

/// How cells are arranged along each line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Lines fill from the leading edge.
    #[default]
    Start,
    /// Lines fill from the leading edge, then each finished line is shifted
    /// flush against the trailing inset.
    End,
    /// Lines fill from the leading edge, then each finished line is shifted
    /// so its leading and trailing slack are equal.
    Center,
    /// Items are laid out from the trailing edge backwards, so the first item
    /// of each line sits at the trailing edge.
    DataEnd,
    /// Single line until the first natural overflow, then [`Start`](Self::Start).
    Auto,
}

/// Configuration for one layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlowConfig {
    /// Scroll direction.
    pub axis: ScrollAxis,
    /// Line alignment. Ignored in follow mode, which packs from the
    /// leading edge.
    pub alignment: Alignment,
    /// Skyline ("follow") packing instead of line packing.
    pub follow: bool,
    /// Gap between neighbouring items of a line.
    pub item_spacing: f64,
    /// Gap between consecutive lines.
    pub line_spacing: f64,
    /// Inset of each section's cells.
    pub section_inset: Insets,
    /// Viewport extent on the cross axis. Zero, negative or non-finite means
    /// unknown; the pass then never wraps.
    pub cross_extent: f64,
    /// How far decorations extend past their section's cells.
    pub decoration_margin: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl FlowConfig {
    /// Default decoration margin.
    pub const DEFAULT_DECORATION_MARGIN: f64 = 5.0;

    /// Vertical, start-aligned layout with 10-unit spacing and no insets.
    pub fn new(cross_extent: f64) -> Self {
        Self {
            axis: ScrollAxis::Vertical,
            alignment: Alignment::Start,
            follow: false,
            item_spacing: 10.0,
            line_spacing: 10.0,
            section_inset: Insets::ZERO,
            cross_extent,
            decoration_margin: Self::DEFAULT_DECORATION_MARGIN,
        }
    }

    /// Set the scroll axis.
    pub fn axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Set line alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Enable or disable skyline packing.
    pub fn follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    /// Set the gap between items of a line.
    pub fn item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Set the gap between lines.
    pub fn line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the section inset.
    pub fn section_inset(mut self, inset: Insets) -> Self {
        self.section_inset = inset;
        self
    }

    /// Set the viewport cross extent.
    pub fn cross_extent(mut self, extent: f64) -> Self {
        self.cross_extent = extent;
        self
    }

    /// Set the decoration margin.
    pub fn decoration_margin(mut self, margin: f64) -> Self {
        self.decoration_margin = margin;
        self
    }

    /// Whether the cross extent is known, i.e. lines can wrap.
    pub fn is_bounded(&self) -> bool {
        self.cross_extent.is_finite() && self.cross_extent > 0.0
    }

    /// Strict check for callers that want bad values reported.
    ///
    /// [`FlowLayout::compute`](crate::FlowLayout::compute) never fails: it
    /// treats the same values as zero. An unknown cross extent is not an
    /// error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("item_spacing", self.item_spacing),
            ("line_spacing", self.line_spacing),
            ("section_inset.top", self.section_inset.top),
            ("section_inset.left", self.section_inset.left),
            ("section_inset.bottom", self.section_inset.bottom),
            ("section_inset.right", self.section_inset.right),
            ("decoration_margin", self.decoration_margin),
        ];
        for (field, value) in checks {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(field));
            }
            if value < 0.0 {
                return Err(ConfigError::Negative(field));
            }
        }
        Ok(())
    }

    /// Sanitized values used by a pass.
    pub(crate) fn resolve(&self) -> Resolved {
        let insets = self.axis.flow_insets(self.section_inset.sanitized());
        let bounded = self.is_bounded();
        let alignment = match self.alignment {
            // No far edge to align against.
            Alignment::End | Alignment::Center | Alignment::DataEnd if !bounded => Alignment::Start,
            other => other,
        };
        Resolved {
            axis: self.axis,
            alignment,
            follow: self.follow,
            item_spacing: non_negative(self.item_spacing),
            line_spacing: non_negative(self.line_spacing),
            insets,
            cross_extent: bounded.then_some(self.cross_extent),
            decoration_margin: non_negative(self.decoration_margin),
        }
    }
}

/// Configuration after sanitizing, in flow terms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Resolved {
    pub axis: ScrollAxis,
    pub alignment: Alignment,
    pub follow: bool,
    pub item_spacing: f64,
    pub line_spacing: f64,
    pub insets: FlowInsets,
    /// `None` = unbounded.
    pub cross_extent: Option<f64>,
    pub decoration_margin: f64,
}

/// A configuration value rejected by [`FlowConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The named field is NaN or infinite.
    NonFinite(&'static str),
    /// The named field is negative.
    Negative(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite(field) => write!(f, "{field} must be finite"),
            ConfigError::Negative(field) => write!(f, "{field} must not be negative"),
        }
    }
}

impl core::error::Error for ConfigError {}
