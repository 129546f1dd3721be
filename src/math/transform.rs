use nalgebra::{Rotation3, Vector4};

use crate::error::{GeometryError, Result};

use super::{Matrix4, Point3, Vector3};

/// Local-to-world transform of a shape, with its inverse cached.
///
/// The inverse is computed once at construction, so per-frame callers can map
/// the camera into the shape's local frame without re-inverting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    matrix: Matrix4,
    inverse: Matrix4,
}

impl WorldTransform {
    /// Creates a transform from an arbitrary 4x4 matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix has non-finite entries or is singular.
    pub fn new(matrix: Matrix4) -> Result<Self> {
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite("world transform").into());
        }
        let inverse = matrix
            .try_inverse()
            .ok_or(GeometryError::NonInvertibleTransform)?;
        Ok(Self { matrix, inverse })
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
            inverse: Matrix4::identity(),
        }
    }

    /// A rotation of `angle` radians about the world Y axis.
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
        Self {
            matrix: rotation.to_homogeneous(),
            inverse: rotation.inverse().to_homogeneous(),
        }
    }

    /// A pure translation.
    #[must_use]
    pub fn translation(offset: &Vector3) -> Self {
        Self {
            matrix: Matrix4::new_translation(offset),
            inverse: Matrix4::new_translation(&-offset),
        }
    }

    /// Returns the transform that applies `self` first, then `outer`.
    #[must_use]
    pub fn then(&self, outer: &WorldTransform) -> Self {
        Self {
            matrix: outer.matrix * self.matrix,
            inverse: self.inverse * outer.inverse,
        }
    }

    /// The local-to-world matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// The world-to-local matrix.
    #[must_use]
    pub fn inverse(&self) -> &Matrix4 {
        &self.inverse
    }

    /// Maps a local-space point into world space.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        apply(&self.matrix, point)
    }

    /// Maps a world-space point into the shape's local space.
    #[must_use]
    pub fn inverse_transform_point(&self, point: &Point3) -> Point3 {
        apply(&self.inverse, point)
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
fn apply(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * Vector4::new(point.x, point.y, point.z, 1.0);
    if (v.w - 1.0).abs() > f64::EPSILON && v.w.abs() > f64::EPSILON {
        Point3::new(v.x / v.w, v.y / v.w, v.z / v.w)
    } else {
        Point3::new(v.x, v.y, v.z)
    }
}
