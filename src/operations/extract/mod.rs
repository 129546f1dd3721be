mod cone_mesh;
mod extract_edges;

pub use cone_mesh::{BuildConeMesh, PolyMesh};
pub use extract_edges::{ExtractEdges, BASE_PLANE_EPSILON, WELD_EPSILON};
