//! Strongly-typed numeric primitives for rosette.
//!
//! Angles travel through the layout pipeline as [`Angle`] (degrees) so they
//! can't be confused with radii. Angles are deliberately NOT normalized on
//! construction: spans may run past 360° or below 0°, and only display
//! decisions (label orientation, text direction) fold them into `[0, 360)`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Angle in degrees.
///
/// 0° points along +x (right) and 90° along +y, which is *down* in image
/// coordinates. Increasing angles therefore run clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const FULL_TURN: Angle = Angle(360.0);
    pub const HALF_TURN: Angle = Angle(180.0);
    pub const QUARTER_TURN: Angle = Angle(90.0);

    /// Create an angle from degrees.
    #[inline]
    pub const fn degrees(val: f64) -> Angle {
        Angle(val)
    }

    /// Get the raw value in degrees (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Convert to radians for trigonometry.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Fold into the half-open range `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> Angle {
        let folded = self.0.rem_euclid(360.0);
        // rem_euclid rounds tiny negatives up to exactly 360
        if folded >= 360.0 { Angle::ZERO } else { Angle(folded) }
    }

    /// Get the absolute value
    #[inline]
    pub fn abs(self) -> Angle {
        Angle(self.0.abs())
    }

    /// Midpoint between two angles, without wraparound.
    #[inline]
    pub fn midpoint(self, other: Angle) -> Angle {
        Angle((self.0 + other.0) / 2.0)
    }

    /// Check if this angle is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}
impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle { Angle(self.0 * rhs) }
}
impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle { Angle(self.0 / rhs) }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle { Angle(-self.0) }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// An angular interval with its precomputed midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSpan {
    pub start: Angle,
    pub end: Angle,
    pub mid: Angle,
}

impl AngleSpan {
    pub fn new(start: Angle, end: Angle) -> Self {
        Self { start, end, mid: start.midpoint(end) }
    }

    /// Signed sweep from start to end.
    pub fn sweep(&self) -> Angle {
        self.end - self.start
    }
}

/// Format a coordinate for path data: three decimals, trailing zeros and
/// negative zero stripped.
pub fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}
