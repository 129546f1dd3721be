use slotmap::SecondaryMap;

use crate::math::{Point3, WorldTransform};
use crate::topology::{EdgeCategory, EdgeId, EdgeSet};

use super::{facing_value, BaseEdgePolicy, VisibilityThresholds};

/// Per-frame front/back flag for every edge of a shape.
#[derive(Debug, Clone, Default)]
pub struct VisibilityResult {
    flags: SecondaryMap<EdgeId, bool>,
}

impl VisibilityResult {
    /// Returns whether the edge is front-facing, or `None` for an unknown edge.
    #[must_use]
    pub fn is_front(&self, id: EdgeId) -> Option<bool> {
        self.flags.get(id).copied()
    }

    /// Iterates over `(edge, is_front)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, bool)> + '_ {
        self.flags.iter().map(|(id, &front)| (id, front))
    }

    /// Number of classified edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if no edge was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of front-facing edges.
    #[must_use]
    pub fn front_count(&self) -> usize {
        self.flags.values().filter(|&&front| front).count()
    }
}

/// Classifies every edge of a shape as front- or back-facing for one frame.
pub struct ClassifyEdges<'a> {
    edges: &'a EdgeSet,
    transform: &'a WorldTransform,
    camera: Point3,
    policy: BaseEdgePolicy,
    thresholds: VisibilityThresholds,
}

impl<'a> ClassifyEdges<'a> {
    /// Creates a new `ClassifyEdges` operation.
    #[must_use]
    pub fn new(
        edges: &'a EdgeSet,
        transform: &'a WorldTransform,
        camera: Point3,
        policy: BaseEdgePolicy,
        thresholds: VisibilityThresholds,
    ) -> Self {
        Self {
            edges,
            transform,
            camera,
            policy,
            thresholds,
        }
    }

    /// Executes the classification. Never fails: degenerate facing values
    /// classify as front-facing.
    #[must_use]
    pub fn execute(&self) -> VisibilityResult {
        let local_camera_y = if self.policy.uses_elevation() {
            self.transform.inverse_transform_point(&self.camera).y
        } else {
            0.0
        };

        let mut flags = SecondaryMap::with_capacity(self.edges.len());
        for (id, edge) in self.edges.iter() {
            let front = match edge.category {
                EdgeCategory::Lateral => {
                    facing_value(&edge.center, self.transform, &self.camera)
                        .is_none_or(|f| f > self.thresholds.lateral)
                }
                EdgeCategory::Base(side) => {
                    let facing = if self.policy == BaseEdgePolicy::FrontBackSplit {
                        None
                    } else {
                        facing_value(&edge.center, self.transform, &self.camera)
                    };
                    self.policy
                        .is_front(side, facing, local_camera_y, &self.thresholds)
                }
            };
            flags.insert(id, front);
        }
        VisibilityResult { flags }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use crate::shape::{PyramidParams, Shape};
    use crate::topology::BaseSide;
    use std::f64::consts::PI;

    fn pyramid() -> Shape {
        Shape::new(PyramidParams::new(1.2, 2.2, 4).unwrap()).unwrap()
    }

    fn classify(
        shape: &Shape,
        transform: &WorldTransform,
        camera: Point3,
        policy: BaseEdgePolicy,
    ) -> VisibilityResult {
        ClassifyEdges::new(
            shape.edges(),
            transform,
            camera,
            policy,
            VisibilityThresholds::default(),
        )
        .execute()
    }

    /// The lateral edge whose local midpoint has positive Z.
    fn front_lateral(shape: &Shape) -> EdgeId {
        shape
            .edges()
            .iter()
            .find(|(_, e)| e.category == EdgeCategory::Lateral && e.center.z > 1e-9)
            .map(|(id, _)| id)
            .unwrap()
    }

    #[test]
    fn every_edge_is_classified_once() {
        let shape = pyramid();
        let result = classify(
            &shape,
            &WorldTransform::rotation_y(0.4),
            Point3::new(1.0, 2.0, 5.0),
            BaseEdgePolicy::DotProduct,
        );
        assert_eq!(result.len(), shape.edges().len());
        for (id, _) in shape.edges().iter() {
            assert!(result.is_front(id).is_some());
        }
    }

    #[test]
    fn front_lateral_edge_flips_after_half_turn() {
        let shape = pyramid();
        let camera = Point3::new(0.0, 0.0, 5.0);
        let id = front_lateral(&shape);

        let facing = classify(&shape, &WorldTransform::identity(), camera, BaseEdgePolicy::default());
        assert_eq!(facing.is_front(id), Some(true));

        let turned = classify(
            &shape,
            &WorldTransform::rotation_y(PI),
            camera,
            BaseEdgePolicy::default(),
        );
        assert_eq!(turned.is_front(id), Some(false));
    }

    #[test]
    fn side_lateral_edges_stay_front_from_the_front() {
        let shape = pyramid();
        let result = classify(
            &shape,
            &WorldTransform::identity(),
            Point3::new(0.0, 0.0, 5.0),
            BaseEdgePolicy::DotProduct,
        );
        // Three lateral edges face the camera or sit side-on; only the one
        // pointing straight away is hidden.
        let hidden: Vec<_> = shape
            .edges()
            .iter()
            .filter(|(id, e)| e.category == EdgeCategory::Lateral && result.is_front(*id) == Some(false))
            .collect();
        assert_eq!(hidden.len(), 1);
        assert!(hidden[0].1.center.z < 0.0);
    }

    #[test]
    fn monotonic_as_camera_moves_behind() {
        let shape = pyramid();
        let id = front_lateral(&shape);
        let transform = WorldTransform::identity();
        let mut was_front = true;
        // Orbit the camera from directly in front of the edge to directly
        // behind it; once hidden the edge must stay hidden.
        for step in 0..=36 {
            let angle = PI * f64::from(step) / 36.0;
            let camera = Point3::new(5.0 * angle.sin(), 0.0, 5.0 * angle.cos());
            let front = classify(&shape, &transform, camera, BaseEdgePolicy::DotProduct)
                .is_front(id)
                .unwrap();
            assert!(was_front || !front, "edge reappeared at step {step}");
            was_front = front;
        }
        assert!(!was_front);
    }

    #[test]
    fn front_back_split_ignores_camera() {
        let shape = pyramid();
        let transform = WorldTransform::rotation_y(1.1);
        let cameras = [
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(0.0, 0.0, -5.0),
            Point3::new(4.0, -6.0, 1.0),
            Point3::new(-3.0, 8.0, -2.0),
        ];
        for camera in cameras {
            let result = classify(&shape, &transform, camera, BaseEdgePolicy::FrontBackSplit);
            for (id, edge) in shape.edges().iter() {
                if let EdgeCategory::Base(side) = edge.category {
                    assert_eq!(result.is_front(id), Some(side == BaseSide::Front));
                    assert_eq!(side == BaseSide::Front, edge.center.z > 0.0);
                }
            }
        }
    }

    #[test]
    fn elevation_aware_depends_on_local_camera_height() {
        let shape = pyramid();
        let transform = WorldTransform::identity();
        // A rear base edge seen from in front, slightly above versus far below.
        let rear = shape
            .edges()
            .iter()
            .find(|(_, e)| e.category == EdgeCategory::Base(BaseSide::Rear))
            .map(|(id, _)| id)
            .unwrap();
        let center = shape.edges().edge(rear).unwrap().center;

        let above = Point3::new(0.0, 0.0, 5.0);
        let below = Point3::new(0.0, -4.0, 5.0);
        let f_above = facing_value(&center, &transform, &above).unwrap();
        let f_below = facing_value(&center, &transform, &below).unwrap();
        let t = VisibilityThresholds::default();

        let r_above = classify(&shape, &transform, above, BaseEdgePolicy::ElevationAware);
        let r_below = classify(&shape, &transform, below, BaseEdgePolicy::ElevationAware);
        assert_eq!(r_above.is_front(rear), Some(f_above > t.lateral));
        assert_eq!(r_below.is_front(rear), Some(f_below > t.base));
    }

    #[test]
    fn elevation_uses_local_frame() {
        let shape = pyramid();
        // Shape lifted high above the camera: the camera is "below" in local
        // space even though its world Y is positive.
        let transform = WorldTransform::translation(&Vector3::new(0.0, 10.0, 0.0));
        let camera = Point3::new(0.0, 1.0, 5.0);
        let result = classify(&shape, &transform, camera, BaseEdgePolicy::ElevationAware);
        let t = VisibilityThresholds::default();
        for (id, edge) in shape.edges().iter().filter(|(_, e)| e.category.is_base()) {
            let f = facing_value(&edge.center, &transform, &camera).unwrap();
            assert_eq!(result.is_front(id), Some(f > t.base));
        }
    }

    #[test]
    fn camera_at_edge_midpoint_is_visible() {
        let shape = pyramid();
        let transform = WorldTransform::rotation_y(0.3);
        for policy in [BaseEdgePolicy::DotProduct, BaseEdgePolicy::ElevationAware] {
            for (id, edge) in shape.edges().iter() {
                let camera = transform.transform_point(&edge.center);
                let result = classify(&shape, &transform, camera, policy);
                assert_eq!(result.is_front(id), Some(true));
            }
        }
    }
}
