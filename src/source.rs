//! Point sources feeding the axis extractor.
//!
//! A [`PointSource`] is whatever enumerates the coordinates of the current
//! selection: a plain slice of atom positions, a flat `[x, y, z]` buffer, or a
//! [`Selection`] over either. Extraction visits the source several times per
//! call, so implementations must yield the same points in the same order on
//! every visit.

use glam::Vec3;

/// Read-only enumeration of selected atom coordinates.
pub trait PointSource {
    /// Number of points [`for_each_point`](Self::for_each_point) will yield.
    fn point_count(&self) -> usize;

    /// Visit every selected point in a stable order.
    fn for_each_point(&self, visit: &mut dyn FnMut(Vec3));
}

impl PointSource for [Vec3] {
    fn point_count(&self) -> usize {
        self.len()
    }

    fn for_each_point(&self, visit: &mut dyn FnMut(Vec3)) {
        for &p in self {
            visit(p);
        }
    }
}

impl PointSource for Vec<Vec3> {
    fn point_count(&self) -> usize {
        self.len()
    }

    fn for_each_point(&self, visit: &mut dyn FnMut(Vec3)) {
        self.as_slice().for_each_point(visit);
    }
}

impl PointSource for [[f32; 3]] {
    fn point_count(&self) -> usize {
        self.len()
    }

    fn for_each_point(&self, visit: &mut dyn FnMut(Vec3)) {
        for p in self {
            visit(Vec3::from_array(*p));
        }
    }
}

impl<S: PointSource + ?Sized> PointSource for &S {
    fn point_count(&self) -> usize {
        (**self).point_count()
    }

    fn for_each_point(&self, visit: &mut dyn FnMut(Vec3)) {
        (**self).for_each_point(visit);
    }
}

/// A subset of an atom-position array picked out by atom index.
///
/// Indices past the end of `atoms` are skipped rather than treated as
/// errors, matching how a stale selection behaves after atoms are removed.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    atoms: &'a [Vec3],
    indices: &'a [u32],
}

impl<'a> Selection<'a> {
    /// Select `indices` out of `atoms`.
    #[must_use]
    pub fn new(atoms: &'a [Vec3], indices: &'a [u32]) -> Self {
        Self { atoms, indices }
    }

    fn selected(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.indices
            .iter()
            .filter_map(|&i| self.atoms.get(i as usize).copied())
    }
}

impl PointSource for Selection<'_> {
    fn point_count(&self) -> usize {
        self.selected().count()
    }

    fn for_each_point(&self, visit: &mut dyn FnMut(Vec3)) {
        for p in self.selected() {
            visit(p);
        }
    }
}
