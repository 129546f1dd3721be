use crate::error::{ConfigError, Result};
use crate::topology::BaseSide;

/// Facing thresholds used by the classifier.
///
/// An edge is front-facing when its facing value is strictly greater than the
/// threshold for its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityThresholds {
    /// Threshold for lateral edges. Lenient: only strongly back-facing
    /// lateral edges are dashed.
    pub lateral: f64,
    /// Threshold for base edges under the dot-product policies.
    pub base: f64,
    /// Local camera height below which the elevation-aware policy switches
    /// base edges to the `base` threshold.
    pub low_camera_y: f64,
}

impl Default for VisibilityThresholds {
    fn default() -> Self {
        Self {
            lateral: -0.7,
            base: -0.2,
            low_camera_y: -0.5,
        }
    }
}

impl VisibilityThresholds {
    /// Checks that facing thresholds lie in `[-1, 1]` and the camera height
    /// threshold is finite.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("lateral", self.lateral), ("base", self.base)] {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: -1.0,
                    max: 1.0,
                }
                .into());
            }
        }
        if !self.low_camera_y.is_finite() {
            return Err(ConfigError::InvalidParameter(
                "low_camera_y must be finite".to_owned(),
            )
            .into());
        }
        Ok(())
    }
}

/// How base edges are classified. Exactly one policy is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseEdgePolicy {
    /// Facing test against the `base` threshold.
    DotProduct,
    /// Facing test whose threshold depends on the camera height in the
    /// shape's local frame: `base` when the camera is below `low_camera_y`,
    /// `lateral` otherwise.
    #[default]
    ElevationAware,
    /// No facing test: front-side base edges are always solid and rear-side
    /// base edges are always dashed.
    FrontBackSplit,
}

impl BaseEdgePolicy {
    /// Classifies one base edge.
    ///
    /// `facing` is the edge's facing value, or `None` if it was degenerate.
    /// `local_camera_y` is the camera height in the shape's local frame.
    #[must_use]
    pub fn is_front(
        self,
        side: BaseSide,
        facing: Option<f64>,
        local_camera_y: f64,
        thresholds: &VisibilityThresholds,
    ) -> bool {
        let threshold = match self {
            Self::FrontBackSplit => return side == BaseSide::Front,
            Self::DotProduct => thresholds.base,
            Self::ElevationAware => {
                if local_camera_y < thresholds.low_camera_y {
                    thresholds.base
                } else {
                    thresholds.lateral
                }
            }
        };
        facing.is_none_or(|f| f > threshold)
    }

    /// Whether this policy needs the camera position in local space.
    #[must_use]
    pub fn uses_elevation(self) -> bool {
        matches!(self, Self::ElevationAware)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_valid() {
        assert!(VisibilityThresholds::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_fails() {
        let t = VisibilityThresholds {
            lateral: -1.5,
            ..VisibilityThresholds::default()
        };
        assert!(t.validate().is_err());
        let t = VisibilityThresholds {
            low_camera_y: f64::NAN,
            ..VisibilityThresholds::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn dot_product_uses_base_threshold() {
        let t = VisibilityThresholds::default();
        let p = BaseEdgePolicy::DotProduct;
        assert!(p.is_front(BaseSide::Rear, Some(-0.1), 0.0, &t));
        assert!(!p.is_front(BaseSide::Front, Some(-0.3), 0.0, &t));
    }

    #[test]
    fn elevation_aware_tightens_below_low_camera() {
        let t = VisibilityThresholds::default();
        let p = BaseEdgePolicy::ElevationAware;
        // -0.5 passes the lenient threshold but not the strict one.
        assert!(p.is_front(BaseSide::Rear, Some(-0.5), 2.0, &t));
        assert!(!p.is_front(BaseSide::Rear, Some(-0.5), -3.0, &t));
    }

    #[test]
    fn front_back_split_ignores_facing() {
        let t = VisibilityThresholds::default();
        let p = BaseEdgePolicy::FrontBackSplit;
        assert!(p.is_front(BaseSide::Front, Some(-1.0), 0.0, &t));
        assert!(!p.is_front(BaseSide::Rear, Some(1.0), 0.0, &t));
        assert!(!p.is_front(BaseSide::Rear, None, 0.0, &t));
    }

    #[test]
    fn degenerate_facing_is_visible() {
        let t = VisibilityThresholds::default();
        assert!(BaseEdgePolicy::DotProduct.is_front(BaseSide::Rear, None, 0.0, &t));
        assert!(BaseEdgePolicy::ElevationAware.is_front(BaseSide::Rear, None, -9.0, &t));
    }
}
