use crate::error::{ConfigError, Result};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a colour from its components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a `#` followed by six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ConfigError::InvalidParameter(format!("invalid hex colour {hex:?}"));
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid().into());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear `[0, 1]` components.
    #[must_use]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| f32::from(c) / 255.0)
    }
}

/// Dash and gap lengths of a dashed stroke, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    dash_size: f64,
    gap_size: f64,
}

impl DashPattern {
    /// Creates a dash pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if either length is not positive.
    pub fn new(dash_size: f64, gap_size: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(dash_size) && valid(gap_size)) {
            return Err(ConfigError::InvalidParameter(
                "dash and gap sizes must be positive and finite".to_owned(),
            )
            .into());
        }
        Ok(Self {
            dash_size,
            gap_size,
        })
    }

    /// Length of each dash.
    #[must_use]
    pub fn dash_size(&self) -> f64 {
        self.dash_size
    }

    /// Length of each gap.
    #[must_use]
    pub fn gap_size(&self) -> f64 {
        self.gap_size
    }

    /// Length of one dash plus one gap.
    #[must_use]
    pub fn period(&self) -> f64 {
        self.dash_size + self.gap_size
    }
}

/// Style parameters for a line stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    width: f64,
    dash: Option<DashPattern>,
}

impl StrokeStyle {
    /// Creates a solid stroke style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn solid(width: f64) -> Result<Self> {
        Self::validate_width(width)?;
        Ok(Self { width, dash: None })
    }

    /// Creates a dashed stroke style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn dashed(width: f64, dash: DashPattern) -> Result<Self> {
        Self::validate_width(width)?;
        Ok(Self {
            width,
            dash: Some(dash),
        })
    }

    fn validate_width(width: f64) -> Result<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "stroke width must be positive and finite".to_owned(),
            )
            .into());
        }
        Ok(())
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the dash pattern, or `None` for a solid stroke.
    #[must_use]
    pub fn dash(&self) -> Option<&DashPattern> {
        self.dash.as_ref()
    }

    /// Returns `true` for a dashed stroke.
    #[must_use]
    pub fn is_dashed(&self) -> bool {
        self.dash.is_some()
    }
}

/// A line material: colour, stroke and draw order.
///
/// Lower `render_order` draws first, so dashed lines sit behind solid ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMaterial {
    /// Stroke colour.
    pub color: Color,
    /// Width and optional dash pattern.
    pub stroke: StrokeStyle,
    /// Draw order hint; lower draws first.
    pub render_order: i32,
}

impl LineMaterial {
    /// Black solid stroke, 4 units wide, drawn on top.
    #[must_use]
    pub fn default_solid() -> Self {
        Self {
            color: Color::rgb(0x00, 0x00, 0x00),
            stroke: StrokeStyle {
                width: 4.0,
                dash: None,
            },
            render_order: 2,
        }
    }

    /// Grey dashed stroke at 80% of the solid width, drawn underneath.
    #[must_use]
    pub fn default_dashed() -> Self {
        Self {
            color: Color::rgb(0x88, 0x88, 0x88),
            stroke: StrokeStyle {
                width: 4.0 * 0.8,
                dash: Some(DashPattern {
                    dash_size: 0.08,
                    gap_size: 0.06,
                }),
            },
            render_order: 1,
        }
    }
}
