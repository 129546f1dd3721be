//! Per-frame driver tying extraction, classification and bucketing together.

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::math::{Point3, WorldTransform};
use crate::operations::bucket::{BucketLayout, BuildRenderBuffers, RenderBuffers};
use crate::operations::classify::{BaseEdgePolicy, ClassifyEdges, VisibilityThresholds};
use crate::render::{DrawList, LineMaterial};
use crate::shape::{PyramidParams, Shape};

/// Every tunable of a wireframe figure.
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeConfig {
    /// Polyhedron descriptor.
    pub shape: PyramidParams,
    /// Per-category facing thresholds.
    pub thresholds: VisibilityThresholds,
    /// Active base-edge policy.
    pub base_policy: BaseEdgePolicy,
    /// Four category buckets or two merged ones.
    pub layout: BucketLayout,
    /// Material for front-facing edges.
    pub solid_material: LineMaterial,
    /// Material for back-facing edges.
    pub dashed_material: LineMaterial,
}

impl Default for WireframeConfig {
    fn default() -> Self {
        Self {
            shape: PyramidParams::default(),
            thresholds: VisibilityThresholds::default(),
            base_policy: BaseEdgePolicy::default(),
            layout: BucketLayout::default(),
            solid_material: LineMaterial::default_solid(),
            dashed_material: LineMaterial::default_dashed(),
        }
    }
}

impl WireframeConfig {
    /// Validates every part of the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the shape or thresholds are invalid,
    /// the materials have the wrong stroke kind, or dashed lines would not
    /// render behind solid ones.
    pub fn validate(&self) -> Result<()> {
        self.shape.validate()?;
        self.thresholds.validate()?;
        if self.solid_material.stroke.is_dashed() {
            return Err(
                ConfigError::InvalidParameter("solid material must not be dashed".into()).into(),
            );
        }
        if !self.dashed_material.stroke.is_dashed() {
            return Err(
                ConfigError::InvalidParameter("dashed material needs a dash pattern".into()).into(),
            );
        }
        if self.dashed_material.render_order >= self.solid_material.render_order {
            return Err(ConfigError::InvalidParameter(
                "dashed lines must render before solid lines".into(),
            )
            .into());
        }
        Ok(())
    }
}

/// Explicitly passed, versioned figure state.
///
/// The version bumps on every effective change, which lets consumers cache
/// derived data and refresh it only when needed.
#[derive(Debug, Clone)]
pub struct FigureContext {
    config: WireframeConfig,
    version: u64,
}

impl FigureContext {
    /// Creates a context at version 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: WireframeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, version: 0 })
    }

    /// The current, validated configuration.
    #[must_use]
    pub fn config(&self) -> &WireframeConfig {
        &self.config
    }

    /// Number of effective configuration changes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies `edit` to a copy of the configuration and commits it if it is
    /// valid. Returns the resulting version.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the context untouched, if the edited
    /// configuration is invalid.
    pub fn update(&mut self, edit: impl FnOnce(&mut WireframeConfig)) -> Result<u64> {
        let mut next = self.config.clone();
        edit(&mut next);
        next.validate()?;
        if next != self.config {
            self.config = next;
            self.version += 1;
            debug!(version = self.version, "figure configuration changed");
        }
        Ok(self.version)
    }

    /// Switches the active base-edge policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn set_base_policy(&mut self, policy: BaseEdgePolicy) -> Result<u64> {
        self.update(|c| c.base_policy = policy)
    }
}

/// External inputs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Camera position in world space.
    pub camera_position: Point3,
    /// Shape's local-to-world transform; `None` until the scene node exists.
    pub world_transform: Option<WorldTransform>,
}

/// A rendered figure: its shape plus the latest frame's buffers.
#[derive(Debug, Clone)]
pub struct WireframeFigure {
    shape: Shape,
    synced_version: u64,
    buffers: RenderBuffers,
    generation: u64,
}

impl WireframeFigure {
    /// Builds the shape described by the context. Buffers start empty.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the shape descriptor is malformed.
    pub fn new(ctx: &FigureContext) -> Result<Self> {
        let config = ctx.config();
        Ok(Self {
            shape: Shape::new(config.shape)?,
            synced_version: ctx.version(),
            buffers: RenderBuffers::empty(config.layout),
            generation: 0,
        })
    }

    /// Runs one frame: classifies every edge and replaces the buffers.
    ///
    /// Without a world transform (or with a non-finite camera) the frame is
    /// skipped and the previous buffers are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the context changed the shape descriptor and
    /// re-extraction fails.
    pub fn update(&mut self, ctx: &FigureContext, frame: &FrameInput) -> Result<&RenderBuffers> {
        self.sync(ctx)?;

        let Some(transform) = frame.world_transform else {
            debug!("no world transform yet, reusing previous buffers");
            return Ok(&self.buffers);
        };
        if frame.camera_position.coords.iter().any(|v| !v.is_finite()) {
            debug!("non-finite camera position, reusing previous buffers");
            return Ok(&self.buffers);
        }

        let config = ctx.config();
        let edges = self.shape.edges();
        let visibility = ClassifyEdges::new(
            edges,
            &transform,
            frame.camera_position,
            config.base_policy,
            config.thresholds,
        )
        .execute();
        self.buffers = BuildRenderBuffers::new(edges, &visibility, config.layout).execute();
        self.generation += 1;
        Ok(&self.buffers)
    }

    /// Picks up configuration changes, re-extracting edges only when the
    /// shape descriptor itself changed.
    fn sync(&mut self, ctx: &FigureContext) -> Result<()> {
        if ctx.version() == self.synced_version {
            return Ok(());
        }
        let config = ctx.config();
        if config.shape != *self.shape.params() {
            self.shape = Shape::new(config.shape)?;
            self.buffers = RenderBuffers::empty(config.layout);
            self.generation += 1;
        } else if config.layout != self.buffers.layout() {
            self.buffers = RenderBuffers::empty(config.layout);
            self.generation += 1;
        }
        self.synced_version = ctx.version();
        Ok(())
    }

    /// The shape currently being classified.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The most recent buffers.
    #[must_use]
    pub fn buffers(&self) -> &RenderBuffers {
        &self.buffers
    }

    /// Counts buffer replacements, both classified frames and resets after a
    /// shape or layout change, so consumers can detect stale GPU uploads.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Draw calls for the current buffers using the context's materials.
    #[must_use]
    pub fn draw_list<'a>(&'a self, ctx: &'a FigureContext) -> DrawList<'a> {
        let config = ctx.config();
        DrawList::new(&self.buffers, &config.solid_material, &config.dashed_material)
    }
}
