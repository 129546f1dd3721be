//! Approximate hidden-line classification for wireframe polyhedra.
//!
//! A shape's feature edges are extracted once; every frame each edge is
//! classified as front- or back-facing against the camera position, and the
//! edges are grouped into solid and dashed line-segment buffers.

pub mod error;
pub mod figure;
pub mod math;
pub mod operations;
pub mod render;
pub mod shape;
pub mod topology;

pub use error::{HiddenLineError, Result};
pub use figure::{FigureContext, FrameInput, WireframeConfig, WireframeFigure};
