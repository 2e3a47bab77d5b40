//! Principal-axis extraction.
//!
//! Given the coordinates of a selection, [`extract`] finds the three
//! orthogonal directions of greatest to least spread (eigenvectors of the
//! covariance matrix) and returns, for each, the segment through the centroid
//! that spans the full extent of the cloud along that direction.
//!
//! Accumulation runs in `f64`; only the final endpoints are narrowed to
//! [`Vec3`]. Empty, single-point, and coincident clouds are not errors: they
//! yield zero-length segments sitting on the centroid.

mod eigen;

use glam::{DMat3, DVec3, Vec3};

use crate::source::PointSource;

/// One principal direction's extent through the centroid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisSegment {
    /// Endpoint at the minimum signed projection.
    pub start: Vec3,
    /// Endpoint at the maximum signed projection.
    pub end: Vec3,
}

impl AxisSegment {
    /// Segment length (zero for a collapsed axis).
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Midpoint of the two endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }
}

/// The three principal axes of a point cloud, greatest variance first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxesResult {
    /// Arithmetic mean of the input points (origin when empty).
    pub centroid: Vec3,
    /// Unit eigenvectors, orthonormal even when the cloud is degenerate.
    pub directions: [Vec3; 3],
    /// Covariance eigenvalues matching `directions`, clamped to `>= 0`.
    pub variances: [f32; 3],
    /// Axis segments matching `directions`.
    pub segments: [AxisSegment; 3],
}

/// Compute the principal axes of every point in `source`.
///
/// Never fails for finite input. Non-finite coordinates are not screened and
/// propagate into the result.
pub fn extract<S: PointSource + ?Sized>(source: &S) -> AxesResult {
    let (centroid, count) = centroid(source);
    let covariance = covariance(source, centroid, count);
    let eig = eigen::symmetric_eigen(&covariance);

    let mut t_min = [0.0_f64; 3];
    let mut t_max = [0.0_f64; 3];
    source.for_each_point(&mut |p| {
        let d = p.as_dvec3() - centroid;
        for (i, axis) in eig.vectors.iter().enumerate() {
            let t = d.dot(*axis);
            t_min[i] = t_min[i].min(t);
            t_max[i] = t_max[i].max(t);
        }
    });

    let segments = [0, 1, 2].map(|i| AxisSegment {
        start: (centroid + eig.vectors[i] * t_min[i]).as_vec3(),
        end: (centroid + eig.vectors[i] * t_max[i]).as_vec3(),
    });

    AxesResult {
        centroid: centroid.as_vec3(),
        directions: eig.vectors.map(|v| v.as_vec3()),
        variances: eig.values.map(|v| v.max(0.0) as f32),
        segments,
    }
}

fn centroid<S: PointSource + ?Sized>(source: &S) -> (DVec3, usize) {
    let mut sum = DVec3::ZERO;
    let mut count = 0_usize;
    source.for_each_point(&mut |p| {
        sum += p.as_dvec3();
        count += 1;
    });
    if count == 0 {
        (DVec3::ZERO, 0)
    } else {
        (sum / count as f64, count)
    }
}

fn covariance<S: PointSource + ?Sized>(
    source: &S,
    centroid: DVec3,
    count: usize,
) -> DMat3 {
    if count == 0 {
        return DMat3::ZERO;
    }
    let mut m = DMat3::ZERO;
    source.for_each_point(&mut |p| {
        let d = p.as_dvec3() - centroid;
        m += DMat3::from_cols(d * d.x, d * d.y, d * d.z);
    });
    m * (1.0 / count as f64)
}
