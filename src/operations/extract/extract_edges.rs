use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use nalgebra::center;

use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::shape::PyramidParams;
use crate::topology::{BaseSide, Edge, EdgeCategory, EdgeSet};

use super::{BuildConeMesh, PolyMesh};

/// Distance from the base plane within which an endpoint counts as a base
/// vertex, in shape units.
pub const BASE_PLANE_EPSILON: f64 = 1e-2;

/// Grid size used to weld coincident edge endpoints.
pub const WELD_EPSILON: f64 = 1e-4;

type PointKey = (i64, i64, i64);

/// Mesh edge together with the normals of every face that uses it.
struct EdgeFaces {
    start: Point3,
    end: Point3,
    normals: Vec<Vector3>,
}

/// Derives the unique, categorised feature edges of a pyramid.
///
/// The pyramid is meshed, mesh edges shared by several triangles collapse
/// into one, and only creases (edges whose adjacent faces meet at an angle of
/// at least the configured crease angle) survive. Each surviving edge is
/// `Base` iff both endpoints lie on the base plane, otherwise `Lateral`.
pub struct ExtractEdges {
    params: PyramidParams,
}

impl ExtractEdges {
    /// Creates a new `ExtractEdges` operation.
    #[must_use]
    pub fn new(params: PyramidParams) -> Self {
        Self { params }
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the descriptor is malformed.
    pub fn execute(&self) -> Result<EdgeSet> {
        self.params.validate()?;
        let mesh = BuildConeMesh::new(self.params).execute();
        let base_y = self.params.base_y();

        let mut set = EdgeSet::new();
        for (start, end) in crease_edges(&mesh, self.params.crease_angle_deg) {
            let category = categorize(&start, &end, base_y);
            set.add_edge(Edge::new(start, end, category));
        }
        Ok(set)
    }
}

/// Returns the deduplicated edges of `mesh` whose dihedral angle reaches
/// `crease_angle_deg`, in first-seen order.
fn crease_edges(mesh: &PolyMesh, crease_angle_deg: f64) -> Vec<(Point3, Point3)> {
    let threshold_dot = crease_angle_deg.to_radians().cos();
    let mut seen: Vec<EdgeFaces> = Vec::new();
    let mut lookup: BTreeMap<(PointKey, PointKey), usize> = BTreeMap::new();

    for tri in 0..mesh.triangle_count() {
        let Some(normal) = mesh.face_normal(tri) else {
            continue;
        };
        let idx = mesh.indices[tri];
        for j in 0..3 {
            let a = mesh.vertices[idx[j] as usize];
            let b = mesh.vertices[idx[(j + 1) % 3] as usize];
            let (ka, kb) = (quantize(&a), quantize(&b));
            if ka == kb {
                continue;
            }
            let key = if ka < kb { (ka, kb) } else { (kb, ka) };
            match lookup.entry(key) {
                Entry::Occupied(entry) => seen[*entry.get()].normals.push(normal),
                Entry::Vacant(entry) => {
                    entry.insert(seen.len());
                    seen.push(EdgeFaces {
                        start: a,
                        end: b,
                        normals: vec![normal],
                    });
                }
            }
        }
    }

    seen.into_iter()
        .filter(|e| is_crease(&e.normals, threshold_dot))
        .map(|e| (e.start, e.end))
        .collect()
}

fn is_crease(normals: &[Vector3], threshold_dot: f64) -> bool {
    match normals {
        [a, b] => a.dot(b) <= threshold_dot,
        // Open boundary or non-manifold edge.
        _ => true,
    }
}

fn categorize(start: &Point3, end: &Point3, base_y: f64) -> EdgeCategory {
    let on_base = |p: &Point3| (p.y - base_y).abs() < BASE_PLANE_EPSILON;
    if on_base(start) && on_base(end) {
        // Edges whose midpoint lies on z = 0 up to rounding (the side edges
        // of a hexagon, say) land on either side arbitrarily.
        let side = if center(start, end).z > 0.0 {
            BaseSide::Front
        } else {
            BaseSide::Rear
        };
        EdgeCategory::Base(side)
    } else {
        EdgeCategory::Lateral
    }
}

#[allow(clippy::cast_possible_truncation)]
fn quantize(p: &Point3) -> PointKey {
    let q = |v: f64| (v / WELD_EPSILON).round() as i64;
    (q(p.x), q(p.y), q(p.z))
}
