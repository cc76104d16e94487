use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// Proportions of the French National Assembly chart, measured on a 343px wide
// reference drawing.
const REFERENCE_WIDTH: f64 = 343.0;
const REFERENCE_ROW_SPACING: f64 = 8.57;
const REFERENCE_DIAMETER: f64 = 4.7;
const DEFAULT_ROWS: usize = 10;
const DEFAULT_SEATS_PER_ROW: usize = 58;
const DEFAULT_INSET_DEGREES: f64 = 1.5;

/// Chamber geometry as written in a settings file. The inset is in degrees
/// here; [`ChamberConfig`] keeps radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChamberParams {
    pub width: u32,
    pub rows: usize,
    pub seats_per_row: usize,
    pub diameter: f64,
    pub row_spacing: f64,
    pub inset_degrees: f64,
}

/// Validated, immutable chamber geometry.
///
/// The canvas is `width` x `width / 2` pixels and the arcs are centered on the
/// middle of the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChamberParams", into = "ChamberParams")]
pub struct ChamberConfig {
    width: u32,
    rows: usize,
    seats_per_row: usize,
    diameter: f64,
    row_spacing: f64,
    inset: f64,
}

impl ChamberConfig {
    /// `inset` is the angle in radians left empty at both ends of every row.
    pub fn new(
        width: u32,
        rows: usize,
        seats_per_row: usize,
        diameter: f64,
        row_spacing: f64,
        inset: f64,
    ) -> Result<Self> {
        let config = Self {
            width,
            rows,
            seats_per_row,
            diameter,
            row_spacing,
            inset,
        };
        config.validate()?;
        Ok(config)
    }

    /// Ten rows of 58 seats, scaled to `width`.
    pub fn for_width(width: u32) -> Result<Self> {
        let scale = width as f64 / REFERENCE_WIDTH;
        Self::new(
            width,
            DEFAULT_ROWS,
            DEFAULT_SEATS_PER_ROW,
            REFERENCE_DIAMETER * scale,
            REFERENCE_ROW_SPACING * scale,
            DEFAULT_INSET_DEGREES.to_radians(),
        )
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(Error::InvalidConfig(reason));

        if self.width == 0 || self.width % 2 != 0 {
            return invalid(format!("width must be even and positive, got {}", self.width));
        }
        if self.rows == 0 {
            return invalid("at least one row is required".to_string());
        }
        if self.seats_per_row < 2 {
            return invalid(format!(
                "at least two seats per row are required, got {}",
                self.seats_per_row
            ));
        }
        if !(self.diameter.is_finite() && self.diameter > 0.0) {
            return invalid(format!("diameter must be positive, got {}", self.diameter));
        }
        if !(self.row_spacing.is_finite() && self.row_spacing > 0.0) {
            return invalid(format!(
                "row spacing must be positive, got {}",
                self.row_spacing
            ));
        }
        if !(0.0..FRAC_PI_2).contains(&self.inset) {
            return invalid(format!(
                "inset must be in [0, pi/2) radians, got {}",
                self.inset
            ));
        }
        let innermost = self.row_radius(0);
        if innermost <= 0.0 {
            return invalid(format!(
                "{} rows spaced {} apart do not fit in a {}px wide canvas",
                self.rows, self.row_spacing, self.width
            ));
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.width / 2
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn row_spacing(&self) -> f64 {
        self.row_spacing
    }

    pub fn inset(&self) -> f64 {
        self.inset
    }

    pub fn seat_count(&self) -> usize {
        self.rows * self.seats_per_row
    }

    /// Center shared by every arc: middle of the bottom edge.
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height() as f64)
    }

    /// Radius of row `r`, counting from the innermost row. The outermost row
    /// touches the top edge of the canvas.
    pub fn row_radius(&self, r: usize) -> f64 {
        let base_radius = self.height() as f64 - self.diameter / 2.0;
        let from_outside = self.rows - 1 - r;
        base_radius - from_outside as f64 * self.row_spacing
    }

    pub fn start_angle(&self) -> f64 {
        PI - self.inset
    }

    pub fn angle_step(&self) -> f64 {
        (PI - 2.0 * self.inset) / (self.seats_per_row - 1) as f64
    }
}

impl TryFrom<ChamberParams> for ChamberConfig {
    type Error = Error;

    fn try_from(p: ChamberParams) -> Result<Self> {
        Self::new(
            p.width,
            p.rows,
            p.seats_per_row,
            p.diameter,
            p.row_spacing,
            p.inset_degrees.to_radians(),
        )
    }
}

impl From<ChamberConfig> for ChamberParams {
    fn from(c: ChamberConfig) -> Self {
        Self {
            width: c.width,
            rows: c.rows,
            seats_per_row: c.seats_per_row,
            diameter: c.diameter,
            row_spacing: c.row_spacing,
            inset_degrees: c.inset.to_degrees(),
        }
    }
}
