// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test modules unwrap freely
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! Principal-axes geometry for molecular selections.
//!
//! Computes the three orthogonal principal axes of a selection's atom
//! coordinates and lays them out as capsule geometry (sphere caps joined by
//! cylinders) ready for a host renderer's sphere and cylinder buffers.
//!
//! # Key entry points
//!
//! - [`axes::extract`] - principal axes of a [`source::PointSource`]
//! - [`geometry::build`] - flat attribute arrays from an
//!   [`axes::AxesResult`]
//! - [`geometry::compute_full`] / [`geometry::compute_partial`] - both steps
//!   at once, optionally trimmed to an [`geometry::AttributeMask`]
//! - [`representation::AxesRepresentation`] - create/update lifecycle
//!   against host buffers, looked up through a
//!   [`representation::RepresentationRegistry`]
//! - [`options::Options`] - TOML-backed appearance settings
//!
//! # Architecture
//!
//! Extraction and geometry building are pure and synchronous: every call
//! reads the current selection, allocates nothing on the heap, and returns a
//! fresh value. The representation layer decides whether the host should
//! recreate its buffers or patch only the attributes that changed.

pub mod axes;
pub mod error;
pub mod geometry;
pub mod options;
pub mod representation;
pub mod source;
pub mod util;
