use crate::math::{try_normalize, Point3, WorldTransform};

/// Cheap silhouette proxy for an edge midpoint.
///
/// Returns the dot product of the direction from the world origin to the
/// edge midpoint and the direction from the midpoint to the camera, both in
/// world space. `1` means the midpoint faces the camera head-on, `-1` means
/// it faces directly away. Only meaningful while the shape stays
/// star-convex around the world origin, i.e. it is placed near it.
///
/// Returns `None` when either direction is degenerate (camera sitting on the
/// midpoint, or midpoint at the world origin).
#[must_use]
pub fn facing_value(center: &Point3, transform: &WorldTransform, camera: &Point3) -> Option<f64> {
    let world_center = transform.transform_point(center);
    let dir_from_center = try_normalize(&world_center.coords)?;
    let dir_to_camera = try_normalize(&(camera - world_center))?;
    Some(dir_from_center.dot(&dir_to_camera))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::operations::classify::VisibilityThresholds;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn midpoint_facing_camera_is_one() {
        let f = facing_value(
            &Point3::new(0.0, 0.0, 0.6),
            &WorldTransform::identity(),
            &Point3::new(0.0, 0.0, 5.0),
        )
        .unwrap();
        assert_relative_eq!(f, 1.0);
    }

    #[test]
    fn half_turn_flips_to_minus_one() {
        let f = facing_value(
            &Point3::new(0.0, 0.0, 0.6),
            &WorldTransform::rotation_y(PI),
            &Point3::new(0.0, 0.0, 5.0),
        )
        .unwrap();
        assert_relative_eq!(f, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn translated_shape_measures_from_world_origin() {
        // Midpoint lands at (0.9, -1.1, 0) in world space.
        let transform = WorldTransform::translation(&Vector3::new(1.5, -1.1, 0.0));
        let f = facing_value(
            &Point3::new(-0.6, 0.0, 0.0),
            &transform,
            &Point3::new(0.0, 1.0, 5.0),
        )
        .unwrap();
        // (0.9, -1.1, 0) . (-0.9, 2.1, 5) = -3.12
        let expected = -3.12 / (2.02_f64.sqrt() * 30.22_f64.sqrt());
        assert_relative_eq!(f, expected, epsilon = 1e-12);
        assert!(f < VisibilityThresholds::default().base);
    }

    #[test]
    fn translated_midpoint_on_world_origin_is_degenerate() {
        let transform = WorldTransform::translation(&Vector3::new(0.6, 0.0, 0.0));
        assert!(facing_value(
            &Point3::new(-0.6, 0.0, 0.0),
            &transform,
            &Point3::new(0.0, 0.0, 5.0)
        )
        .is_none());
    }

    #[test]
    fn camera_on_midpoint_is_degenerate() {
        let center = Point3::new(0.3, -1.1, 0.3);
        assert!(facing_value(&center, &WorldTransform::identity(), &center).is_none());
    }

    #[test]
    fn midpoint_at_origin_is_degenerate() {
        assert!(facing_value(
            &Point3::origin(),
            &WorldTransform::identity(),
            &Point3::new(0.0, 0.0, 5.0)
        )
        .is_none());
    }
}
