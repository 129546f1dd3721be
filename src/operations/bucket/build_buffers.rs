use tracing::trace;

use crate::operations::classify::VisibilityResult;
use crate::topology::{EdgeCategory, EdgeSet};

use super::{BucketKey, EdgeGroup, LineSegments, Stroke};

/// How edges are grouped into render buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketLayout {
    /// Four buffers: solid/dashed for base edges and for lateral edges.
    #[default]
    ByCategory,
    /// Two buffers: all solid edges and all dashed edges.
    Merged,
}

impl BucketLayout {
    /// Bucket keys produced by this layout, in buffer order.
    #[must_use]
    pub fn keys(self) -> &'static [BucketKey] {
        const BY_CATEGORY: [BucketKey; 4] = [
            BucketKey {
                group: EdgeGroup::Base,
                stroke: Stroke::Solid,
            },
            BucketKey {
                group: EdgeGroup::Base,
                stroke: Stroke::Dashed,
            },
            BucketKey {
                group: EdgeGroup::Lateral,
                stroke: Stroke::Solid,
            },
            BucketKey {
                group: EdgeGroup::Lateral,
                stroke: Stroke::Dashed,
            },
        ];
        const MERGED: [BucketKey; 2] = [
            BucketKey {
                group: EdgeGroup::All,
                stroke: Stroke::Solid,
            },
            BucketKey {
                group: EdgeGroup::All,
                stroke: Stroke::Dashed,
            },
        ];
        match self {
            Self::ByCategory => &BY_CATEGORY,
            Self::Merged => &MERGED,
        }
    }

    /// Index of the bucket an edge goes to.
    fn slot(self, category: EdgeCategory, stroke: Stroke) -> usize {
        let stroke_offset = match stroke {
            Stroke::Solid => 0,
            Stroke::Dashed => 1,
        };
        match (self, category) {
            (Self::Merged, _) | (Self::ByCategory, EdgeCategory::Base(_)) => stroke_offset,
            (Self::ByCategory, EdgeCategory::Lateral) => 2 + stroke_offset,
        }
    }
}

/// One frame's worth of line-segment buffers.
///
/// A fresh value is built every frame and replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBuffers {
    layout: BucketLayout,
    buckets: Vec<LineSegments>,
}

impl RenderBuffers {
    /// Empty buffers for the given layout, used before the first classified
    /// frame.
    #[must_use]
    pub fn empty(layout: BucketLayout) -> Self {
        Self {
            layout,
            buckets: layout.keys().iter().map(|&k| LineSegments::new(k)).collect(),
        }
    }

    /// The layout these buffers were built with.
    #[must_use]
    pub fn layout(&self) -> BucketLayout {
        self.layout
    }

    /// All buckets, including empty ones, in layout order.
    #[must_use]
    pub fn buckets(&self) -> &[LineSegments] {
        &self.buckets
    }

    /// Looks up a bucket. Returns `None` if the layout has no such bucket.
    #[must_use]
    pub fn get(&self, group: EdgeGroup, stroke: Stroke) -> Option<&LineSegments> {
        let key = BucketKey::new(group, stroke);
        self.buckets.iter().find(|b| b.key() == key)
    }

    /// Total segments drawn with the given stroke across all buckets.
    #[must_use]
    pub fn segment_count(&self, stroke: Stroke) -> usize {
        self.buckets
            .iter()
            .filter(|b| b.key().stroke == stroke)
            .map(LineSegments::segment_count)
            .sum()
    }

    /// Returns `true` if every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(LineSegments::is_empty)
    }
}

/// Groups edges by category and visibility into render buffers.
pub struct BuildRenderBuffers<'a> {
    edges: &'a EdgeSet,
    visibility: &'a VisibilityResult,
    layout: BucketLayout,
}

impl<'a> BuildRenderBuffers<'a> {
    /// Creates a new `BuildRenderBuffers` operation.
    #[must_use]
    pub fn new(edges: &'a EdgeSet, visibility: &'a VisibilityResult, layout: BucketLayout) -> Self {
        Self {
            edges,
            visibility,
            layout,
        }
    }

    /// Executes the bucketing. Every edge lands in exactly one bucket; an
    /// edge missing from `visibility` is treated as front-facing.
    #[must_use]
    pub fn execute(&self) -> RenderBuffers {
        let mut buffers = RenderBuffers::empty(self.layout);
        for (id, edge) in self.edges.iter() {
            let stroke = if self.visibility.is_front(id).unwrap_or(true) {
                Stroke::Solid
            } else {
                Stroke::Dashed
            };
            let slot = self.layout.slot(edge.category, stroke);
            buffers.buckets[slot].push_segment(&edge.start, &edge.end);
        }
        trace!(
            solid = buffers.segment_count(Stroke::Solid),
            dashed = buffers.segment_count(Stroke::Dashed),
            "rebuilt render buffers"
        );
        buffers
    }
}
