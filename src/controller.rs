//! Host-side driver: owns the configuration, keeps the last pass and reports
//! content extent changes.
//!
//! # Example
//!
//! ```
//! use zenflow::{FlowConfig, FlowController, FlowData, SectionData, Size};
//!
//! let data = FlowData::new().section(SectionData::new([Size::new(100.0, 40.0); 4]));
//!
//! let mut changes = Vec::new();
//! let mut controller =
//!     FlowController::with_observer(FlowConfig::new(320.0), |old: Size, new: Size| {
//!         changes.push((old, new))
//!     });
//!
//! controller.layout(&data);
//! controller.set_cross_extent(200.0);
//! assert!(controller.needs_layout());
//! controller.layout(&data);
//! drop(controller);
//!
//! assert_eq!(changes.len(), 2);
//! assert_eq!(changes[0].0, Size::ZERO);
//! ```

use crate::config::FlowConfig;
use crate::engine::{FlowLayout, FlowResult};
use crate::geometry::Size;
use crate::source::{CountProvider, SizeProvider};

/// Receives content extent changes.
pub trait ExtentObserver {
    /// Called after a pass whose content extent differs from the previous
    /// pass's (zero before the first pass).
    fn extent_changed(&mut self, previous: Size, current: Size);
}

impl ExtentObserver for () {
    fn extent_changed(&mut self, _previous: Size, _current: Size) {}
}

impl<F: FnMut(Size, Size)> ExtentObserver for F {
    fn extent_changed(&mut self, previous: Size, current: Size) {
        self(previous, current)
    }
}

/// Stateful wrapper around [`FlowLayout`] for hosts.
///
/// Every [`layout`](Self::layout) runs a fresh, complete pass; nothing from
/// earlier passes feeds into it. The needs-layout flag is only a hint for
/// hosts that schedule their own redraws.
#[derive(Debug)]
pub struct FlowController<O = ()> {
    config: FlowConfig,
    observer: O,
    result: Option<FlowResult>,
    dirty: bool,
}

impl FlowController<()> {
    /// Controller without an extent observer.
    pub fn new(config: FlowConfig) -> Self {
        Self::with_observer(config, ())
    }
}

impl<O: ExtentObserver> FlowController<O> {
    /// Controller that reports extent changes to `observer`.
    pub fn with_observer(config: FlowConfig, observer: O) -> Self {
        Self {
            config,
            observer,
            result: None,
            dirty: true,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Replace the configuration; marks the layout stale when it changed.
    pub fn set_config(&mut self, config: FlowConfig) {
        if config != self.config {
            self.config = config;
            self.invalidate();
        }
    }

    /// Update the viewport cross extent (e.g. on resize or rotation).
    pub fn set_cross_extent(&mut self, extent: f64) {
        self.set_config(self.config.cross_extent(extent));
    }

    /// Mark the current layout stale, e.g. after the data changed.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the configuration or data changed since the last pass.
    pub fn needs_layout(&self) -> bool {
        self.dirty
    }

    /// Run a pass over `source` and keep its result.
    pub fn layout<P: CountProvider + SizeProvider>(&mut self, source: &P) -> &FlowResult {
        self.layout_with(source, source)
    }

    /// Run a pass with separate count and size providers.
    pub fn layout_with<C: CountProvider, S: SizeProvider>(
        &mut self,
        counts: C,
        sizes: S,
    ) -> &FlowResult {
        let result = FlowLayout::new(self.config, counts, sizes).compute();
        let previous = self.content_extent();
        let current = result.content_extent();
        if previous != current {
            tracing::debug!(
                previous_width = previous.width,
                previous_height = previous.height,
                width = current.width,
                height = current.height,
                "content extent changed"
            );
            self.observer.extent_changed(previous, current);
        }
        self.dirty = false;
        self.result.insert(result)
    }

    /// Result of the last pass, if any.
    pub fn result(&self) -> Option<&FlowResult> {
        self.result.as_ref()
    }

    /// Content extent of the last pass; zero before the first.
    pub fn content_extent(&self) -> Size {
        self.result
            .as_ref()
            .map_or(Size::ZERO, FlowResult::content_extent)
    }

    /// The extent observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The extent observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the controller and return its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
