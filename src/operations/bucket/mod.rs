mod build_buffers;
mod line_segments;

pub use build_buffers::{BucketLayout, BuildRenderBuffers, RenderBuffers};
pub use line_segments::{BucketKey, EdgeGroup, LineSegments, Stroke};
