use crate::math::{Point3, Vector3, TOLERANCE};
use crate::shape::PyramidParams;

/// A closed triangle mesh with shared (welded) vertices.
#[derive(Debug, Clone, Default)]
pub struct PolyMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices, wound counter-clockwise seen from outside.
    pub indices: Vec<[u32; 3]>,
}

impl PolyMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Unit outward normal of triangle `tri`, or `None` if it has no area.
    #[must_use]
    pub fn face_normal(&self, tri: usize) -> Option<Vector3> {
        let [a, b, c] = self.indices[tri].map(|i| self.vertices[i as usize]);
        let n = (b - a).cross(&(c - a));
        let len = n.norm();
        if len < TOLERANCE {
            None
        } else {
            Some(n / len)
        }
    }
}

/// Meshes a pyramid as a lateral fan around the apex plus a flat base cap.
///
/// Vertex layout: apex at index 0, base corners at `1..=n`, base centre at
/// `n + 1`.
pub struct BuildConeMesh {
    params: PyramidParams,
}

impl BuildConeMesh {
    /// Creates a new `BuildConeMesh` operation.
    #[must_use]
    pub fn new(params: PyramidParams) -> Self {
        Self { params }
    }

    /// Executes the operation. The descriptor is assumed to be validated.
    #[must_use]
    pub fn execute(&self) -> PolyMesh {
        let ring = self.params.base_vertices();
        let n = self.params.radial_segments;

        let mut vertices = Vec::with_capacity(ring.len() + 2);
        vertices.push(self.params.apex());
        vertices.extend_from_slice(&ring);
        vertices.push(Point3::new(0.0, self.params.base_y(), 0.0));

        let apex = 0;
        let center = n + 1;
        let mut indices = Vec::with_capacity(ring.len() * 2);
        for k in 0..n {
            let a = 1 + k;
            let b = 1 + (k + 1) % n;
            indices.push([a, b, apex]);
            indices.push([center, b, a]);
        }

        PolyMesh { vertices, indices }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn square_pyramid_has_eight_triangles() {
        let mesh = BuildConeMesh::new(PyramidParams::default()).execute();
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn normals_point_outward() {
        let mesh = BuildConeMesh::new(PyramidParams::default()).execute();
        // Centroid of a convex solid centred on the origin: every outward
        // normal points away from it.
        let inside = Point3::new(0.0, -0.5, 0.0);
        for (tri, idx) in mesh.indices.iter().enumerate() {
            let normal = mesh.face_normal(tri).unwrap();
            let on_face = mesh.vertices[idx[0] as usize];
            assert!(normal.dot(&(on_face - inside)) > 0.0, "triangle {tri} faces inward");
        }
    }

    #[test]
    fn cap_triangles_face_down() {
        let mesh = BuildConeMesh::new(PyramidParams::default()).execute();
        let normal = mesh.face_normal(1).unwrap();
        assert!((normal.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_triangle_has_no_normal() {
        let mesh = PolyMesh {
            vertices: vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)],
            indices: vec![[0, 1, 2]],
        };
        assert!(mesh.face_normal(0).is_none());
    }
}
