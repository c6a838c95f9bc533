//! Label placement: orientation, text direction and font fitting.
//!
//! These are heuristics tuned for radial labels, not a text layout engine.
//! Text extents are estimated from character counts.

use glam::DVec2;

use super::defaults::{ANCHOR_BAND, CCW_TEXT_BAND, CHAR_WIDTH_FACTOR, GOLDEN_RATIO};
use super::path_builder::PathData;
use super::shapes::arc_path;
use crate::types::{Angle, AngleSpan};

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical text alignment. Radial labels are always centered on their point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Baseline {
    #[default]
    Middle,
}

/// How to draw a label at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOrientation {
    pub anchor: TextAnchor,
    /// Rotation applied around the label position.
    pub rotation: Angle,
    pub baseline: Baseline,
}

impl LabelOrientation {
    /// Unrotated, centered text.
    pub const UPRIGHT: LabelOrientation = LabelOrientation {
        anchor: TextAnchor::Middle,
        rotation: Angle::ZERO,
        baseline: Baseline::Middle,
    };
}

/// Orientation for a label placed on the ray at `angle`.
///
/// Text runs along the tangent (angle + 90°) and is flipped by a half turn
/// in the lower half of the circle (strictly between 90° and 270°) so it never
/// reads upside down. Labels near 0° anchor at their start and labels near
/// 180° at their end; everything else is centered.
pub fn orientation(angle: Angle) -> LabelOrientation {
    let normalized = angle.normalized();

    let mut rotation = normalized + Angle::QUARTER_TURN;
    if normalized > Angle(90.0) && normalized < Angle(270.0) {
        rotation += Angle::HALF_TURN;
    }

    let anchor = if normalized >= Angle::FULL_TURN - ANCHOR_BAND || normalized <= ANCHOR_BAND {
        TextAnchor::Start
    } else if normalized >= Angle::HALF_TURN - ANCHOR_BAND
        && normalized <= Angle::HALF_TURN + ANCHOR_BAND
    {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    };

    LabelOrientation {
        anchor,
        rotation,
        baseline: Baseline::Middle,
    }
}

/// Direction text follows along an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Clockwise,
    CounterClockwise,
}

/// Direction for text on an arc whose midpoint is `mid`.
///
/// Arcs centered in the lower part of the wheel read counter-clockwise,
/// everything else clockwise, so arc text is never upside down.
pub fn text_direction(mid: Angle) -> TextDirection {
    let normalized = mid.normalized();
    let (low, high) = CCW_TEXT_BAND;
    if normalized > low && normalized < high {
        TextDirection::CounterClockwise
    } else {
        TextDirection::Clockwise
    }
}

/// Arc for text to follow across `span` at `radius`, traced in `direction`.
pub fn text_path(center: DVec2, radius: f64, span: AngleSpan, direction: TextDirection) -> PathData {
    match direction {
        TextDirection::Clockwise => arc_path(center, radius, span.start, span.end),
        TextDirection::CounterClockwise => arc_path(center, radius, span.end, span.start),
    }
}

/// Estimated width of `char_count` glyphs at `font_size`.
pub fn estimated_text_width(char_count: usize, font_size: f64) -> f64 {
    char_count as f64 * CHAR_WIDTH_FACTOR * font_size
}

/// Largest font size not above `base` at which `char_count` glyphs fit in `width`.
///
/// Only ever shrinks. Empty text and non-positive widths leave `base` alone.
pub fn fit_font_to_width(base: f64, char_count: usize, width: f64) -> f64 {
    if char_count == 0 || width <= 0.0 {
        return base;
    }
    if estimated_text_width(char_count, base) <= width {
        return base;
    }
    width / (char_count as f64 * CHAR_WIDTH_FACTOR)
}

/// Shrink-only font fit against the arc length of `sweep` at `radius`.
pub fn fit_font_to_arc(base: f64, char_count: usize, sweep: Angle, radius: f64) -> f64 {
    let arc_length = sweep.abs().to_radians() * radius;
    fit_font_to_width(base, char_count, arc_length)
}

/// Radial thickness of the segment label band for a font size.
pub fn band_thickness(font_size: f64) -> f64 {
    font_size * GOLDEN_RATIO + font_size
}
