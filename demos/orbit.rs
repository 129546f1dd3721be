//! Orbits a camera around the reference pyramid and logs which edges each
//! frame would draw solid or dashed.
//!
//! ```text
//! cargo run --example orbit
//! RUST_LOG=hiddenline=trace cargo run --example orbit -- front-back-split
//! cargo run --example orbit -- dot-product '#4a7db5'
//! ```

use std::f64::consts::TAU;

use hiddenline::math::{Point3, Vector3, WorldTransform};
use hiddenline::operations::bucket::Stroke;
use hiddenline::operations::classify::BaseEdgePolicy;
use hiddenline::render::{Color, DashPattern, LineMaterial};
use hiddenline::{FigureContext, FrameInput, HiddenLineError, WireframeConfig, WireframeFigure};
use tracing::info;

const FRAMES: u32 = 12;

fn main() -> Result<(), HiddenLineError> {
    // Default: WARN for everything, INFO for the demo and the library.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("orbit=info".parse().unwrap_or_default())
        .add_directive("hiddenline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().collect();
    let policy = match args.get(1).map(String::as_str) {
        Some("dot-product") => BaseEdgePolicy::DotProduct,
        Some("front-back-split") => BaseEdgePolicy::FrontBackSplit,
        _ => BaseEdgePolicy::ElevationAware,
    };

    let dashed_color = match args.get(2) {
        Some(hex) => Color::from_hex(hex)?,
        None => LineMaterial::default_dashed().color,
    };

    let mut config = WireframeConfig {
        base_policy: policy,
        ..WireframeConfig::default()
    };
    config.dashed_material.color = dashed_color;
    let ctx = FigureContext::new(config)?;
    let mut figure = WireframeFigure::new(&ctx)?;

    // Scene-graph placement of the figure: nested group offsets.
    let placement = WorldTransform::translation(&Vector3::new(1.5, -1.1, 0.0));

    for frame in 0..FRAMES {
        let angle = TAU * f64::from(frame) / f64::from(FRAMES);
        let input = FrameInput {
            camera_position: Point3::new(0.0, 1.0, 5.0),
            world_transform: Some(WorldTransform::rotation_y(angle).then(&placement)),
        };
        let buffers = figure.update(&ctx, &input)?;
        info!(
            frame,
            angle_deg = angle.to_degrees(),
            solid = buffers.segment_count(Stroke::Solid),
            dashed = buffers.segment_count(Stroke::Dashed),
            "classified"
        );
        for call in figure.draw_list(&ctx).calls() {
            info!(
                bucket = ?call.buffer.key(),
                vertices = call.buffer.count(),
                render_order = call.material.render_order,
                color = ?call.material.color.to_f32(),
                dash_period = call.material.stroke.dash().map(DashPattern::period),
                dash_distances = call.needs_line_distances(),
                "draw"
            );
        }
    }
    Ok(())
}
