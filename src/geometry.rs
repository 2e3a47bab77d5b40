//! Axes geometry: flat attribute arrays for sphere caps and capsule edges.
//!
//! Each principal axis becomes one capsule: a cylinder between the segment
//! endpoints plus a sphere cap on each end. Caps and cylinders share one
//! color and one radius so each axis reads as a single continuous shape.
//!
//! Array sizes are fixed (6 caps, 3 edges), so buffers built from a
//! [`RenderGeometry`] never need resizing. [`PartialGeometry`] carries only
//! the attribute classes named by an [`AttributeMask`], for patching buffers
//! in place.

use std::ops::BitOr;

use crate::axes::{extract, AxesResult};
use crate::source::PointSource;

/// Sphere caps: two per axis.
pub const VERTEX_COUNT: usize = 6;

/// Connecting cylinders: one per axis.
pub const EDGE_COUNT: usize = 3;

/// Flat per-vertex and per-edge attribute arrays for the three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderGeometry {
    /// Cap centers, xyz interleaved. Axis `i` owns vertices `2i` and `2i+1`.
    pub vertex_position: [f32; VERTEX_COUNT * 3],
    /// Cap colors, rgb interleaved.
    pub vertex_color: [f32; VERTEX_COUNT * 3],
    /// Cap radii.
    pub vertex_radius: [f32; VERTEX_COUNT],
    /// Cylinder start points, xyz interleaved.
    pub edge_position1: [f32; EDGE_COUNT * 3],
    /// Cylinder end points, xyz interleaved.
    pub edge_position2: [f32; EDGE_COUNT * 3],
    /// Cylinder colors, rgb interleaved.
    pub edge_color: [f32; EDGE_COUNT * 3],
    /// Cylinder radii.
    pub edge_radius: [f32; EDGE_COUNT],
}

/// Lay out `axes` as capsule geometry with a uniform color and radius.
///
/// Pure: identical inputs always produce bit-identical arrays.
#[must_use]
pub fn build(axes: &AxesResult, color: [f32; 3], radius: f32) -> RenderGeometry {
    let mut vertex_position = [0.0; VERTEX_COUNT * 3];
    let mut edge_position1 = [0.0; EDGE_COUNT * 3];
    let mut edge_position2 = [0.0; EDGE_COUNT * 3];

    for (i, seg) in axes.segments.iter().enumerate() {
        let start = seg.start.to_array();
        let end = seg.end.to_array();
        vertex_position[i * 6..i * 6 + 3].copy_from_slice(&start);
        vertex_position[i * 6 + 3..i * 6 + 6].copy_from_slice(&end);
        edge_position1[i * 3..i * 3 + 3].copy_from_slice(&start);
        edge_position2[i * 3..i * 3 + 3].copy_from_slice(&end);
    }

    RenderGeometry {
        vertex_position,
        vertex_color: uniform_rgb(color),
        vertex_radius: [radius; VERTEX_COUNT],
        edge_position1,
        edge_position2,
        edge_color: uniform_rgb(color),
        edge_radius: [radius; EDGE_COUNT],
    }
}

fn uniform_rgb<const N: usize>(color: [f32; 3]) -> [f32; N] {
    let mut out = [0.0; N];
    for rgb in out.chunks_exact_mut(3) {
        rgb.copy_from_slice(&color);
    }
    out
}

/// Which attribute classes changed since buffers were last written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttributeMask {
    /// Cap centers and cylinder endpoints.
    pub position: bool,
    /// Cap and cylinder colors.
    pub color: bool,
    /// Cap and cylinder radii.
    pub radius: bool,
}

impl AttributeMask {
    /// Nothing changed.
    pub const NONE: Self = Self {
        position: false,
        color: false,
        radius: false,
    };
    /// Everything changed.
    pub const ALL: Self = Self {
        position: true,
        color: true,
        radius: true,
    };
    /// Positions only.
    pub const POSITION: Self = Self {
        position: true,
        ..Self::NONE
    };
    /// Colors only.
    pub const COLOR: Self = Self {
        color: true,
        ..Self::NONE
    };
    /// Radii only.
    pub const RADIUS: Self = Self {
        radius: true,
        ..Self::NONE
    };

    /// Whether no attribute class is selected.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

impl BitOr for AttributeMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            position: self.position || rhs.position,
            color: self.color || rhs.color,
            radius: self.radius || rhs.radius,
        }
    }
}

/// Position arrays for a partial update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionAttributes {
    /// Cap centers.
    pub vertex_position: [f32; VERTEX_COUNT * 3],
    /// Cylinder start points.
    pub edge_position1: [f32; EDGE_COUNT * 3],
    /// Cylinder end points.
    pub edge_position2: [f32; EDGE_COUNT * 3],
}

/// Color arrays for a partial update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAttributes {
    /// Cap colors.
    pub vertex_color: [f32; VERTEX_COUNT * 3],
    /// Cylinder colors (used for both cylinder ends).
    pub edge_color: [f32; EDGE_COUNT * 3],
}

/// Radius arrays for a partial update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusAttributes {
    /// Cap radii.
    pub vertex_radius: [f32; VERTEX_COUNT],
    /// Cylinder radii.
    pub edge_radius: [f32; EDGE_COUNT],
}

/// The subset of a [`RenderGeometry`] selected by an [`AttributeMask`].
/// `None` groups are left untouched in existing buffers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialGeometry {
    /// Present when positions changed.
    pub position: Option<PositionAttributes>,
    /// Present when colors changed.
    pub color: Option<ColorAttributes>,
    /// Present when radii changed.
    pub radius: Option<RadiusAttributes>,
}

impl PartialGeometry {
    /// Whether the update carries no arrays at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.color.is_none() && self.radius.is_none()
    }
}

impl RenderGeometry {
    /// Pick out the attribute groups named by `mask`.
    #[must_use]
    pub fn select(&self, mask: AttributeMask) -> PartialGeometry {
        PartialGeometry {
            position: mask.position.then_some(PositionAttributes {
                vertex_position: self.vertex_position,
                edge_position1: self.edge_position1,
                edge_position2: self.edge_position2,
            }),
            color: mask.color.then_some(ColorAttributes {
                vertex_color: self.vertex_color,
                edge_color: self.edge_color,
            }),
            radius: mask.radius.then_some(RadiusAttributes {
                vertex_radius: self.vertex_radius,
                edge_radius: self.edge_radius,
            }),
        }
    }

    /// Overwrite the groups present in `patch`, leaving the rest alone.
    pub fn apply(&mut self, patch: &PartialGeometry) {
        if let Some(p) = &patch.position {
            self.vertex_position = p.vertex_position;
            self.edge_position1 = p.edge_position1;
            self.edge_position2 = p.edge_position2;
        }
        if let Some(c) = &patch.color {
            self.vertex_color = c.vertex_color;
            self.edge_color = c.edge_color;
        }
        if let Some(r) = &patch.radius {
            self.vertex_radius = r.vertex_radius;
            self.edge_radius = r.edge_radius;
        }
    }
}

/// Extract axes from `source` and build every attribute array.
pub fn compute_full<S: PointSource + ?Sized>(
    source: &S,
    color: [f32; 3],
    radius: f32,
) -> RenderGeometry {
    build(&extract(source), color, radius)
}

/// Extract axes from `source` and return only the arrays named by `mask`.
///
/// Extraction always runs in full; the mask only trims what is handed back.
pub fn compute_partial<S: PointSource + ?Sized>(
    source: &S,
    color: [f32; 3],
    radius: f32,
    mask: AttributeMask,
) -> PartialGeometry {
    compute_full(source, color, radius).select(mask)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::axes::AxisSegment;

    const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

    fn sample_axes() -> AxesResult {
        let seg = |a: Vec3, b: Vec3| AxisSegment { start: a, end: b };
        AxesResult {
            centroid: Vec3::ZERO,
            directions: [Vec3::X, Vec3::Y, Vec3::Z],
            variances: [3.0, 2.0, 1.0],
            segments: [
                seg(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)),
                seg(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 2.0, 0.0)),
                seg(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0)),
            ],
        }
    }

    fn cloud() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 1.0, 0.0),
            Vec3::new(2.0, -1.0, 0.5),
            Vec3::new(1.0, 0.5, -0.5),
        ]
    }

    #[test]
    fn positions_follow_segment_order() {
        let axes = sample_axes();
        let geo = build(&axes, GREEN, 0.5);
        for (i, seg) in axes.segments.iter().enumerate() {
            assert_eq!(geo.vertex_position[i * 6..i * 6 + 3], seg.start.to_array());
            assert_eq!(geo.vertex_position[i * 6 + 3..i * 6 + 6], seg.end.to_array());
            assert_eq!(geo.edge_position1[i * 3..i * 3 + 3], seg.start.to_array());
            assert_eq!(geo.edge_position2[i * 3..i * 3 + 3], seg.end.to_array());
        }
    }

    #[test]
    fn color_and_radius_are_uniform() {
        let geo = build(&sample_axes(), GREEN, 0.5);
        assert!(geo.vertex_radius.iter().all(|&r| r == 0.5));
        assert!(geo.edge_radius.iter().all(|&r| r == 0.5));
        for rgb in geo
            .vertex_color
            .chunks_exact(3)
            .chain(geo.edge_color.chunks_exact(3))
        {
            assert_eq!(rgb, GREEN);
        }
    }

    #[test]
    fn build_is_bit_identical() {
        let axes = sample_axes();
        let a = build(&axes, [0.3, 0.6, 0.9], 0.25);
        let b = build(&axes, [0.3, 0.6, 0.9], 0.25);
        let bits = |g: &RenderGeometry| -> Vec<u32> {
            g.vertex_position
                .iter()
                .chain(&g.vertex_color)
                .chain(&g.vertex_radius)
                .chain(&g.edge_position1)
                .chain(&g.edge_position2)
                .chain(&g.edge_color)
                .chain(&g.edge_radius)
                .map(|f| f.to_bits())
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn color_mask_matches_full_colors() {
        let points = cloud();
        let full = compute_full(&points, GREEN, 0.5);
        let partial =
            compute_partial(&points, GREEN, 0.5, AttributeMask::COLOR);
        let colors = partial.color.expect("color requested");
        assert_eq!(colors.vertex_color, full.vertex_color);
        assert_eq!(colors.edge_color, full.edge_color);
        assert!(partial.position.is_none());
        assert!(partial.radius.is_none());
    }

    #[test]
    fn applying_a_color_patch_keeps_positions_and_radii() {
        let points = cloud();
        let mut buffers = compute_full(&points, GREEN, 0.5);
        let before = buffers;
        let patch = compute_partial(
            &points,
            [1.0, 0.0, 0.0],
            2.0,
            AttributeMask::COLOR,
        );
        buffers.apply(&patch);
        assert_eq!(buffers.vertex_position, before.vertex_position);
        assert_eq!(buffers.edge_position1, before.edge_position1);
        assert_eq!(buffers.vertex_radius, before.vertex_radius);
        assert_eq!(buffers.edge_radius, before.edge_radius);
        assert_eq!(&buffers.vertex_color[..3], &[1.0_f32, 0.0, 0.0]);
    }

    #[test]
    fn mask_combinations() {
        let geo = build(&sample_axes(), GREEN, 0.5);
        assert!(geo.select(AttributeMask::NONE).is_empty());
        let both = geo.select(AttributeMask::POSITION | AttributeMask::RADIUS);
        assert!(both.position.is_some());
        assert!(both.radius.is_some());
        assert!(both.color.is_none());
        assert_eq!(
            AttributeMask::POSITION | AttributeMask::COLOR | AttributeMask::RADIUS,
            AttributeMask::ALL
        );
    }

    #[test]
    fn full_select_round_trips_through_apply() {
        let geo = build(&sample_axes(), GREEN, 0.5);
        let mut blank = build(&AxesResult::default(), [0.0; 3], 0.0);
        blank.apply(&geo.select(AttributeMask::ALL));
        assert_eq!(blank, geo);
    }

    #[test]
    fn empty_cloud_still_builds() {
        let geo = compute_full(&Vec::<Vec3>::new(), GREEN, 0.5);
        assert!(geo.vertex_position.iter().all(|&v| v == 0.0));
        assert!(geo.edge_radius.iter().all(|&r| r == 0.5));
    }
}
