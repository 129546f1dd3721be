use crate::math::Point3;

/// Stroke a bucket is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// Front-facing edges.
    Solid,
    /// Back-facing edges.
    Dashed,
}

/// Which edges a bucket collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeGroup {
    /// Base edges only.
    Base,
    /// Lateral edges only.
    Lateral,
    /// Every edge, regardless of category.
    All,
}

/// Identifies one render bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketKey {
    /// Edge category the bucket collects.
    pub group: EdgeGroup,
    /// Stroke the bucket is drawn with.
    pub stroke: Stroke,
}

impl BucketKey {
    /// Creates a bucket key.
    #[must_use]
    pub fn new(group: EdgeGroup, stroke: Stroke) -> Self {
        Self { group, stroke }
    }
}

/// Flat line-segment list: every consecutive pair of vertices is one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegments {
    key: BucketKey,
    positions: Vec<f32>,
}

impl LineSegments {
    /// Creates an empty buffer for the given bucket.
    #[must_use]
    pub fn new(key: BucketKey) -> Self {
        Self {
            key,
            positions: Vec::new(),
        }
    }

    /// Appends one segment.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push_segment(&mut self, start: &Point3, end: &Point3) {
        for p in [start, end] {
            self.positions
                .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        }
    }

    /// The bucket this buffer belongs to.
    #[must_use]
    pub fn key(&self) -> BucketKey {
        self.key
    }

    /// Flat `x, y, z` position triples.
    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Number of vertices (twice the number of segments).
    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.count() / 2
    }

    /// Returns `true` if the buffer holds no segments. Empty buffers must not
    /// be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether the renderer must recompute dash distances after this buffer
    /// replaces the previous one.
    #[must_use]
    pub fn needs_line_distances(&self) -> bool {
        self.key.stroke == Stroke::Dashed && !self.is_empty()
    }

    /// Cumulative arc length at every vertex, accumulated across the whole
    /// buffer. Segment `i` starts where segment `i - 1` ended.
    #[must_use]
    pub fn line_distances(&self) -> Vec<f32> {
        let mut distances = Vec::with_capacity(self.count());
        let mut total = 0.0_f32;
        for seg in self.positions.chunks_exact(6) {
            let (a, b) = seg.split_at(3);
            let length = a
                .iter()
                .zip(b)
                .map(|(p, q)| (q - p) * (q - p))
                .sum::<f32>()
                .sqrt();
            distances.push(total);
            total += length;
            distances.push(total);
        }
        distances
    }
}
