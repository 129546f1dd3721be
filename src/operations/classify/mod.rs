mod classify_edges;
mod facing;
mod policy;

pub use classify_edges::{ClassifyEdges, VisibilityResult};
pub use facing::facing_value;
pub use policy::{BaseEdgePolicy, VisibilityThresholds};
