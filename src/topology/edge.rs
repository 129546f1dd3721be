use nalgebra::center;

use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for an edge in an [`EdgeSet`](super::EdgeSet).
    pub struct EdgeId;
}

/// Which side of the local XY plane a base edge lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseSide {
    /// Midpoint has positive local Z.
    Front,
    /// Midpoint has zero or negative local Z.
    Rear,
}

/// Topological category of an edge, fixed at extraction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeCategory {
    /// Both endpoints lie on the base plane.
    Base(BaseSide),
    /// Any edge that is not on the base plane.
    Lateral,
}

impl EdgeCategory {
    /// Returns `true` for base edges on either side.
    #[must_use]
    pub fn is_base(self) -> bool {
        matches!(self, Self::Base(_))
    }
}

/// An immutable, unordered edge of a shape in its local space.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// First endpoint.
    pub start: Point3,
    /// Second endpoint.
    pub end: Point3,
    /// Midpoint of the two endpoints.
    pub center: Point3,
    /// Category assigned when the edge was extracted.
    pub category: EdgeCategory,
}

impl Edge {
    /// Creates an edge and derives its midpoint.
    #[must_use]
    pub fn new(start: Point3, end: Point3, category: EdgeCategory) -> Self {
        Self {
            start,
            end,
            center: center(&start, &end),
            category,
        }
    }

    /// Length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}
