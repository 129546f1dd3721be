use crate::operations::bucket::{LineSegments, RenderBuffers, Stroke};

use super::LineMaterial;

/// One line-segment draw for the external renderer.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    /// Segments to draw.
    pub buffer: &'a LineSegments,
    /// Material matching the buffer's stroke.
    pub material: &'a LineMaterial,
}

impl DrawCall<'_> {
    /// Whether dash distances must be recomputed before drawing.
    #[must_use]
    pub fn needs_line_distances(&self) -> bool {
        self.buffer.needs_line_distances()
    }
}

/// Draw calls for the non-empty buckets of one frame, in render order.
#[derive(Debug, Clone, Default)]
pub struct DrawList<'a> {
    calls: Vec<DrawCall<'a>>,
}

impl<'a> DrawList<'a> {
    /// Pairs every non-empty bucket with its material. Empty buckets issue no
    /// draw call.
    #[must_use]
    pub fn new(buffers: &'a RenderBuffers, solid: &'a LineMaterial, dashed: &'a LineMaterial) -> Self {
        let mut calls: Vec<DrawCall<'a>> = buffers
            .buckets()
            .iter()
            .filter(|b| !b.is_empty())
            .map(|buffer| DrawCall {
                buffer,
                material: match buffer.key().stroke {
                    Stroke::Solid => solid,
                    Stroke::Dashed => dashed,
                },
            })
            .collect();
        calls.sort_by_key(|c| c.material.render_order);
        Self { calls }
    }

    /// Draw calls, lowest render order first.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall<'a>] {
        &self.calls
    }

    /// Number of draw calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns `true` if nothing needs drawing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
