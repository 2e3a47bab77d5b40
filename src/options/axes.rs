use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest accepted axis radius in angstroms.
pub const MIN_RADIUS: f32 = 0.001;
/// Largest accepted axis radius in angstroms.
pub const MAX_RADIUS: f32 = 10.0;

const MAX_SPHERE_DETAIL: u32 = 3;
const MIN_RADIUS_SEGMENTS: u32 = 5;
const MAX_RADIUS_SEGMENTS: u32 = 25;

/// CSS "lightgreen" (#90EE90).
const LIGHT_GREEN: [f32; 3] = [144.0 / 255.0, 238.0 / 255.0, 144.0 / 255.0];

/// Tessellation preset. Anything but `Custom` overrides the explicit detail
/// fields.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    /// Coarsest spheres, 5-sided cylinders.
    Low,
    /// Moderate detail.
    Medium,
    /// Finest detail.
    High,
    /// Use `sphere_detail` and `radius_segments` as given.
    #[default]
    Custom,
}

/// Resolved tessellation detail handed to the buffer layer on full builds.
/// Never affects axis geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tessellation {
    /// Icosphere subdivision level for the caps.
    pub sphere_detail: u32,
    /// Sides around each cylinder.
    pub radius_segments: u32,
    /// Draw real meshes instead of ray-cast impostors.
    pub disable_impostor: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Axes", inline)]
#[serde(default)]
/// Appearance of the principal-axes representation.
pub struct AxesOptions {
    /// Shared radius of caps and cylinders in angstroms.
    #[schemars(
        title = "Radius",
        range(min = 0.001, max = 10.0),
        extend("step" = 0.05)
    )]
    pub radius: f32,
    /// RGB color shared by caps and cylinders.
    #[schemars(skip)]
    pub color: [f32; 3],
    /// Tessellation preset.
    #[schemars(title = "Quality")]
    pub quality: Quality,
    /// Cap subdivision level when `quality` is custom.
    #[schemars(title = "Sphere Detail", range(max = 3))]
    pub sphere_detail: u32,
    /// Cylinder sides when `quality` is custom.
    #[schemars(title = "Radius Segments", range(min = 5, max = 25))]
    pub radius_segments: u32,
    /// Render meshes instead of impostors.
    #[schemars(title = "Disable Impostor")]
    pub disable_impostor: bool,
}

impl Default for AxesOptions {
    fn default() -> Self {
        Self {
            radius: 0.5,
            color: LIGHT_GREEN,
            quality: Quality::Custom,
            sphere_detail: 1,
            radius_segments: 10,
            disable_impostor: false,
        }
    }
}

impl AxesOptions {
    /// Detail levels after applying the quality preset.
    #[must_use]
    pub fn tessellation(&self) -> Tessellation {
        let (sphere_detail, radius_segments) = match self.quality {
            Quality::Low => (0, 5),
            Quality::Medium => (1, 10),
            Quality::High => (2, 20),
            Quality::Custom => (self.sphere_detail, self.radius_segments),
        };
        Tessellation {
            sphere_detail,
            radius_segments,
            disable_impostor: self.disable_impostor,
        }
    }

    /// Copy with every numeric field pulled into its valid range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();

        out.radius = if self.radius.is_finite() {
            self.radius.clamp(MIN_RADIUS, MAX_RADIUS)
        } else {
            Self::default().radius
        };
        if out.radius != self.radius {
            log::warn!(
                "axes radius {} out of range, using {}",
                self.radius,
                out.radius
            );
        }

        out.color = self.color.map(|c| {
            if c.is_finite() {
                c.clamp(0.0, 1.0)
            } else {
                0.0
            }
        });
        out.sphere_detail = self.sphere_detail.min(MAX_SPHERE_DETAIL);
        out.radius_segments = self
            .radius_segments
            .clamp(MIN_RADIUS_SEGMENTS, MAX_RADIUS_SEGMENTS);
        if out.sphere_detail != self.sphere_detail
            || out.radius_segments != self.radius_segments
        {
            log::warn!(
                "axes tessellation ({}, {}) clamped to ({}, {})",
                self.sphere_detail,
                self.radius_segments,
                out.sphere_detail,
                out.radius_segments
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_presets_override_detail() {
        let mut opts = AxesOptions {
            sphere_detail: 3,
            radius_segments: 25,
            ..AxesOptions::default()
        };
        assert_eq!(opts.tessellation().sphere_detail, 3);

        opts.quality = Quality::Low;
        let t = opts.tessellation();
        assert_eq!((t.sphere_detail, t.radius_segments), (0, 5));

        opts.quality = Quality::High;
        let t = opts.tessellation();
        assert_eq!((t.sphere_detail, t.radius_segments), (2, 20));
    }

    #[test]
    fn sanitize_clamps_out_of_range_values() {
        let opts = AxesOptions {
            radius: 50.0,
            color: [1.5, -0.5, f32::NAN],
            sphere_detail: 9,
            radius_segments: 2,
            ..AxesOptions::default()
        }
        .sanitized();
        assert_eq!(opts.radius, MAX_RADIUS);
        assert_eq!(opts.color, [1.0, 0.0, 0.0]);
        assert_eq!(opts.sphere_detail, 3);
        assert_eq!(opts.radius_segments, 5);
    }

    #[test]
    fn sanitize_replaces_non_finite_radius() {
        let opts = AxesOptions {
            radius: f32::INFINITY,
            ..AxesOptions::default()
        };
        assert_eq!(opts.sanitized().radius, 0.5);
    }

    #[test]
    fn defaults_are_already_sane() {
        let opts = AxesOptions::default();
        assert_eq!(opts.sanitized(), opts);
    }
}
