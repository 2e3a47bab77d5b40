//! Principal-axes representation.
//!
//! Draws the three principal axes of the selection as capsules: a sphere cap
//! at each segment endpoint joined by a capped cylinder.

use super::{BufferSink, LifecycleState, RebuildRequirement, Representation};
use crate::error::AxesError;
use crate::geometry::{compute_full, AttributeMask, RenderGeometry};
use crate::options::{AxesOptions, Options, Tessellation};
use crate::source::PointSource;
use crate::util::timing::{timed, TimingHook};

/// Renders the principal axes of a selection.
pub struct AxesRepresentation {
    options: AxesOptions,
    state: LifecycleState,
    timing_hook: Option<TimingHook>,
}

impl AxesRepresentation {
    /// Registry name.
    pub const KIND: &'static str = "axes";

    /// Representation with sanitized copies of `options`.
    #[must_use]
    pub fn new(options: &AxesOptions) -> Self {
        Self {
            options: options.sanitized(),
            state: LifecycleState::Uninitialized,
            timing_hook: None,
        }
    }

    /// Report every extraction's duration to `hook`.
    #[must_use]
    pub fn with_timing_hook(mut self, hook: TimingHook) -> Self {
        self.timing_hook = Some(hook);
        self
    }

    /// Options currently in effect.
    pub fn options(&self) -> &AxesOptions {
        &self.options
    }

    /// Tessellation passed to the sink on full builds.
    pub fn tessellation(&self) -> Tessellation {
        self.options.tessellation()
    }

    fn axes_data(&self, points: &dyn PointSource) -> RenderGeometry {
        log::debug!("axes: extracting from {} points", points.point_count());
        timed("axes_data", self.timing_hook.as_ref(), || {
            compute_full(points, self.options.color, self.options.radius)
        })
    }
}

impl Representation for AxesRepresentation {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn state(&self) -> LifecycleState {
        self.state
    }

    fn create(&mut self, points: &dyn PointSource, sink: &mut dyn BufferSink) {
        let geometry = self.axes_data(points);
        sink.create_buffers(&geometry, &self.tessellation());
        self.state = LifecycleState::Built;
    }

    fn update_data(
        &mut self,
        what: AttributeMask,
        points: &dyn PointSource,
        sink: &mut dyn BufferSink,
    ) -> Result<(), AxesError> {
        if self.state == LifecycleState::Uninitialized {
            return Err(AxesError::NotBuilt);
        }
        let patch = self.axes_data(points).select(what);
        if patch.is_empty() {
            log::trace!("axes: empty attribute mask, buffers untouched");
        } else {
            sink.set_attributes(&patch);
        }
        self.state = LifecycleState::Updated;
        Ok(())
    }

    fn set_options(&mut self, options: &Options) -> RebuildRequirement {
        let next = options.axes.sanitized();
        if next.tessellation() != self.options.tessellation() {
            self.options = next;
            return RebuildRequirement::Rebuild;
        }

        let mut changed = AttributeMask::NONE;
        changed.color = next.color != self.options.color;
        changed.radius = next.radius != self.options.radius;
        self.options = next;

        if changed.is_empty() {
            RebuildRequirement::None
        } else {
            RebuildRequirement::Update(changed)
        }
    }
}
