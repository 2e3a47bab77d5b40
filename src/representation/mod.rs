//! Representation lifecycle and registry.
//!
//! A [`Representation`] turns the current selection into attribute arrays and
//! hands them to a [`BufferSink`], which stands for the host's sphere and
//! cylinder buffer objects. The representation never owns those buffers: it
//! asks the sink to create them once, then patches their attributes as the
//! selection or appearance changes.
//!
//! Representations are looked up by name through a
//! [`RepresentationRegistry`] that the host builds explicitly at startup.

mod axes;
mod registry;

pub use axes::AxesRepresentation;
pub use registry::{RepresentationFactory, RepresentationRegistry};

use crate::error::AxesError;
use crate::geometry::{AttributeMask, PartialGeometry, RenderGeometry};
use crate::options::{Options, Tessellation};
use crate::source::PointSource;

/// Where a representation is in its buffer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// No buffers yet; only `create` is valid.
    #[default]
    Uninitialized,
    /// Buffers were just created from a full build.
    Built,
    /// Buffers have been patched in place at least once since the last build.
    Updated,
}

/// What the host must do after an options change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildRequirement {
    /// Nothing visible changed.
    None,
    /// Patch the listed attributes via `update_data`.
    Update(AttributeMask),
    /// Tessellation changed: drop the buffers and `create` again.
    Rebuild,
}

/// Host-side sphere + cylinder buffer pair.
///
/// Sphere buffers take the `vertex_*` arrays, cylinder buffers the `edge_*`
/// arrays (with `edge_color` used for both cylinder ends).
pub trait BufferSink {
    /// Allocate buffers from a full geometry build.
    fn create_buffers(
        &mut self,
        geometry: &RenderGeometry,
        tessellation: &Tessellation,
    );

    /// Overwrite the attribute groups present in `patch` without resizing.
    fn set_attributes(&mut self, patch: &PartialGeometry);
}

/// A named geometry kind that can render a selection.
pub trait Representation: Send {
    /// Registry name of this representation kind.
    fn kind(&self) -> &'static str;

    /// Current lifecycle state.
    fn state(&self) -> LifecycleState;

    /// Full build: compute all arrays and have `sink` create its buffers.
    fn create(&mut self, points: &dyn PointSource, sink: &mut dyn BufferSink);

    /// Recompute from `points` and write only the attributes in `what`.
    ///
    /// Fails with [`AxesError::NotBuilt`] if `create` has not run yet.
    fn update_data(
        &mut self,
        what: AttributeMask,
        points: &dyn PointSource,
        sink: &mut dyn BufferSink,
    ) -> Result<(), AxesError>;

    /// Adopt new options and report what the host has to redo.
    fn set_options(&mut self, options: &Options) -> RebuildRequirement;
}
