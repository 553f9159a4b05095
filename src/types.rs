//! Value types shared by the canvas helpers.
//!
//! Points are plain `glam::DVec2`. The two box shapes mirror what the drawing
//! engine passes around: `BBox` is what a rendered shape reports, `CornerBox`
//! is what annotations are stored as.

use std::fmt;

use glam::{DVec2, dvec2};

/// A point in either canvas or client space.
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub(crate) fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities and negatives.
#[inline]
pub(crate) fn non_negative(val: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val < 0.0 { Err(NumericError::Negative) } else { Ok(val) }
}

/// Axis-aligned box in origin + size form, as reported by a rendered shape.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        BBox { x, y, width, height }
    }

    /// Create a BBox with validation (finite origin, non-negative size)
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(BBox {
            x: finite(x)?,
            y: finite(y)?,
            width: non_negative(width)?,
            height: non_negative(height)?,
        })
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        dvec2(self.x, self.y)
    }

    pub fn size(&self) -> DVec2 {
        dvec2(self.width, self.height)
    }
}

/// Axis-aligned box in corner form: top-left (`xtl`, `ytl`) and
/// bottom-right (`xbr`, `ybr`).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CornerBox {
    pub xtl: f64,
    pub ytl: f64,
    pub xbr: f64,
    pub ybr: f64,
}

impl CornerBox {
    pub const fn new(xtl: f64, ytl: f64, xbr: f64, ybr: f64) -> Self {
        CornerBox { xtl, ytl, xbr, ybr }
    }

    pub fn width(&self) -> f64 {
        self.xbr - self.xtl
    }

    pub fn height(&self) -> f64 {
        self.ybr - self.ytl
    }
}

impl From<BBox> for CornerBox {
    fn from(b: BBox) -> Self {
        CornerBox {
            xtl: b.x,
            ytl: b.y,
            xbr: b.x + b.width,
            ybr: b.y + b.height,
        }
    }
}

/// Swapped corners are normalised so the size is never negative.
impl From<CornerBox> for BBox {
    fn from(c: CornerBox) -> Self {
        let x = c.xtl.min(c.xbr);
        let y = c.ytl.min(c.ybr);
        BBox {
            x,
            y,
            width: c.xtl.max(c.xbr) - x,
            height: c.ytl.max(c.ybr) - y,
        }
    }
}
