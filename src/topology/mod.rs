pub mod edge;

pub use edge::{BaseSide, Edge, EdgeCategory, EdgeId};

use slotmap::SlotMap;

/// Arena owning the immutable edges of one shape.
///
/// Edges are only ever inserted during extraction, so iteration order is
/// insertion order and stays stable for the lifetime of the set.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: SlotMap<EdgeId, Edge>,
}

impl EdgeSet {
    /// Creates a new, empty edge set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an edge and returns its ID.
    pub(crate) fn add_edge(&mut self, edge: Edge) -> EdgeId {
        self.edges.insert(edge)
    }

    /// Returns the edge with the given ID, if it belongs to this set.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Iterates over all edges in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter()
    }

    /// Total number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the set holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of base edges (both sides).
    #[must_use]
    pub fn base_count(&self) -> usize {
        self.edges.values().filter(|e| e.category.is_base()).count()
    }

    /// Number of lateral edges.
    #[must_use]
    pub fn lateral_count(&self) -> usize {
        self.len() - self.base_count()
    }
}
