//! Fixed layout constants

use crate::types::Angle;

/// Outer radius of the scoring area as a fraction of half the diagram size.
/// The remaining margin holds the segment label band.
pub const OUTER_RADIUS_FACTOR: f64 = 0.9;
/// Golden ratio used for the segment label band thickness.
pub const GOLDEN_RATIO: f64 = 1.618;
/// Estimated glyph advance as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f64 = 0.6;
/// Usable hub label width as a multiple of the hub radius.
pub const HUB_LABEL_WIDTH_FACTOR: f64 = 1.6;
/// Hub label font size when the configuration doesn't set one.
pub const HUB_FONT_SIZE: f64 = 16.0;
/// Line height as a multiple of the font size for multi-line hub labels.
pub const LINE_HEIGHT: f64 = 1.2;
/// Subtitle font size relative to the hub label font.
pub const SUBTITLE_SCALE: f64 = 0.6;
/// Separator for multi-line labels.
pub const LINE_SEPARATOR: char = '&';

/// Mid-angles strictly inside this band get counter-clockwise segment text.
pub const CCW_TEXT_BAND: (Angle, Angle) = (Angle::degrees(15.0), Angle::degrees(165.0));
/// Half-width of the bands around 0° and 180° that switch label anchors.
pub const ANCHOR_BAND: Angle = Angle::degrees(10.0);

/// Sweep removed from full-turn spans so arc endpoints stay distinct.
pub const FULL_CIRCLE_EPSILON: Angle = Angle::degrees(0.01);
