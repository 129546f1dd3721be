mod transform;

pub use transform::WorldTransform;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `v / |v|`, or `None` when `v` is too short to normalize.
#[must_use]
pub fn try_normalize(v: &Vector3) -> Option<Vector3> {
    let len = v.norm();
    if len < TOLERANCE {
        None
    } else {
        Some(v / len)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_unit_length() {
        let n = try_normalize(&Vector3::new(3.0, 0.0, 4.0)).unwrap();
        assert_relative_eq!(n.norm(), 1.0);
        assert_relative_eq!(n.x, 0.6);
    }

    #[test]
    fn normalize_zero_is_none() {
        assert!(try_normalize(&Vector3::zeros()).is_none());
    }
}
