//! Polyhedron descriptor and the immutable edge set derived from it.

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::math::Point3;
use crate::operations::extract::ExtractEdges;
use crate::topology::EdgeSet;

/// Descriptor of a right pyramid with a regular polygonal base.
///
/// The shape is centred on its local origin: the apex sits at `+height / 2`
/// on the Y axis and the base plane at `-height / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidParams {
    /// Circumradius of the base polygon.
    pub radius: f64,
    /// Distance from the base plane to the apex.
    pub height: f64,
    /// Number of base polygon sides.
    pub radial_segments: u32,
    /// Minimum dihedral angle, in degrees, for a mesh edge to count as a
    /// visible crease.
    pub crease_angle_deg: f64,
}

impl Default for PyramidParams {
    fn default() -> Self {
        Self {
            radius: 1.2,
            height: 2.2,
            radial_segments: 4,
            crease_angle_deg: 15.0,
        }
    }
}

impl PyramidParams {
    /// Creates a descriptor with the default crease angle.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter fails [`PyramidParams::validate`].
    pub fn new(radius: f64, height: f64, radial_segments: u32) -> Result<Self> {
        let params = Self {
            radius,
            height,
            radial_segments,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks that the descriptor describes a well-formed pyramid.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not a positive finite
    /// number, there are fewer than 3 radial segments, or the crease angle is
    /// outside `(0, 180)` degrees.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidParameter(format!(
                "radius must be positive and finite, got {}",
                self.radius
            ))
            .into());
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ConfigError::InvalidParameter(format!(
                "height must be positive and finite, got {}",
                self.height
            ))
            .into());
        }
        if self.radial_segments < 3 {
            return Err(ConfigError::ParameterOutOfRange {
                parameter: "radial_segments",
                value: f64::from(self.radial_segments),
                min: 3.0,
                max: f64::from(u32::MAX),
            }
            .into());
        }
        if !(self.crease_angle_deg > 0.0 && self.crease_angle_deg < 180.0) {
            return Err(ConfigError::ParameterOutOfRange {
                parameter: "crease_angle_deg",
                value: self.crease_angle_deg,
                min: 0.0,
                max: 180.0,
            }
            .into());
        }
        Ok(())
    }

    /// Local Y coordinate of the base plane.
    #[must_use]
    pub fn base_y(&self) -> f64 {
        -self.height * 0.5
    }

    /// Local position of the apex.
    #[must_use]
    pub fn apex(&self) -> Point3 {
        Point3::new(0.0, self.height * 0.5, 0.0)
    }

    /// Local positions of the base polygon corners.
    ///
    /// Corner `k` sits at angle `2πk / n` measured from +Z towards +X.
    #[must_use]
    pub fn base_vertices(&self) -> Vec<Point3> {
        let n = self.radial_segments;
        let step = std::f64::consts::TAU / f64::from(n);
        (0..n)
            .map(|k| {
                let theta = step * f64::from(k);
                Point3::new(
                    self.radius * theta.sin(),
                    self.base_y(),
                    self.radius * theta.cos(),
                )
            })
            .collect()
    }
}

/// A pyramid together with its categorised, immutable edge set.
#[derive(Debug, Clone)]
pub struct Shape {
    params: PyramidParams,
    edges: EdgeSet,
}

impl Shape {
    /// Validates the descriptor and extracts the shape's edges.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the descriptor is malformed.
    pub fn new(params: PyramidParams) -> Result<Self> {
        params.validate()?;
        let edges = ExtractEdges::new(params).execute()?;
        debug!(
            radial_segments = params.radial_segments,
            base = edges.base_count(),
            lateral = edges.lateral_count(),
            "extracted shape edges"
        );
        Ok(Self { params, edges })
    }

    /// The descriptor this shape was built from.
    #[must_use]
    pub fn params(&self) -> &PyramidParams {
        &self.params
    }

    /// The shape's edges in local space.
    #[must_use]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_matches_reference_pyramid() {
        let params = PyramidParams::default();
        assert_relative_eq!(params.radius, 1.2);
        assert_relative_eq!(params.height, 2.2);
        assert_eq!(params.radial_segments, 4);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn base_vertices_lie_on_base_circle() {
        let params = PyramidParams::new(1.2, 2.2, 4).unwrap();
        let verts = params.base_vertices();
        assert_eq!(verts.len(), 4);
        assert_relative_eq!(verts[0], Point3::new(0.0, -1.1, 1.2), epsilon = 1e-12);
        assert_relative_eq!(verts[1], Point3::new(1.2, -1.1, 0.0), epsilon = 1e-12);
        for v in &verts {
            assert_relative_eq!(v.x.hypot(v.z), 1.2, epsilon = 1e-12);
        }
    }

    #[test]
    fn too_few_segments_fails() {
        assert!(PyramidParams::new(1.0, 1.0, 2).is_err());
        assert!(Shape::new(PyramidParams {
            radial_segments: 0,
            ..PyramidParams::default()
        })
        .is_err());
    }

    #[test]
    fn non_positive_dimensions_fail() {
        assert!(PyramidParams::new(0.0, 1.0, 4).is_err());
        assert!(PyramidParams::new(1.0, -2.0, 4).is_err());
        assert!(PyramidParams::new(f64::NAN, 1.0, 4).is_err());
        assert!(PyramidParams::new(1.0, f64::INFINITY, 4).is_err());
    }

    #[test]
    fn crease_angle_out_of_range_fails() {
        let params = PyramidParams {
            crease_angle_deg: 0.0,
            ..PyramidParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn shape_keeps_descriptor_and_edges() {
        let shape = Shape::new(PyramidParams::default()).unwrap();
        assert_eq!(*shape.params(), PyramidParams::default());
        assert_eq!(shape.edges().len(), 8);
    }
}
