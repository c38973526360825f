//! Sectioned flow layout: place cells, headers, footers and section
//! backgrounds for a scrolling surface.
//!
//! Pure geometry: the host supplies counts and sizes, the engine returns
//! positioned regions and the content extent. No rendering, no view
//! recycling, `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`geometry`]: points, sizes, rectangles, insets
//! - [`axis`]: vertical and horizontal scrolling as one flow algorithm
//! - [`config`]: alignment modes, spacing, insets, viewport extent
//! - [`source`]: count and size providers, plus an in-memory data source
//! - [`engine`]: the layout pass and its [`FlowResult`]
//! - [`controller`]: stateful host driver with extent change notification
//!
//! # Example
//!
//! ```
//! use zenflow::{Alignment, FlowConfig, FlowData, Insets, RegionKind, SectionData, Size, layout};
//!
//! let data = FlowData::new()
//!     .section(
//!         SectionData::new([Size::new(40.0, 30.0), Size::new(60.0, 30.0), Size::new(50.0, 30.0)])
//!             .header(Size::new(120.0, 24.0)),
//!     )
//!     .section(SectionData::new([Size::new(120.0, 40.0)]));
//!
//! let config = FlowConfig::new(120.0)
//!     .alignment(Alignment::Center)
//!     .section_inset(Insets::uniform(10.0));
//! let result = layout(&config, &data);
//!
//! assert_eq!(result.cells(0).count(), 3);
//! assert_eq!(result.header(0).unwrap().size(), Size::new(120.0, 24.0));
//! assert!(result.regions().iter().any(|r| r.kind() == RegionKind::Decoration));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod axis;
pub mod config;
pub mod controller;
pub mod engine;
pub mod geometry;
pub mod region;
pub mod source;

mod decoration;
mod extent;
mod line;
mod skyline;
mod supplementary;

pub use axis::ScrollAxis;
pub use config::{Alignment, ConfigError, FlowConfig};
pub use controller::{ExtentObserver, FlowController};
pub use engine::{FlowLayout, FlowResult, layout};
pub use geometry::{Insets, Point, Rect, Size};
pub use region::{Region, RegionId, RegionKind};
pub use source::{CountProvider, FlowData, SectionData, SizeProvider};
