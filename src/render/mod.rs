//! Materials and draw ordering for the external line renderer.

mod draw_list;
mod stroke_style;

pub use draw_list::{DrawCall, DrawList};
pub use stroke_style::{Color, DashPattern, LineMaterial, StrokeStyle};
