//! Error types with rich diagnostics using miette
//!
//! Two classes of failure exist. [`DomainError`]s are raised immediately by a
//! geometry function called with mathematically invalid parameters.
//! [`ConfigError`]s are collected by the validator so every problem in a
//! configuration can be reported at once.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Domain Errors
// ============================================================================

/// Contract violations detected by the geometry functions.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{what} must be greater than zero, got {count}")]
    #[diagnostic(code(rosette::geometry::non_positive_count))]
    NonPositiveCount { what: &'static str, count: usize },

    #[error("scale minimum {min} is greater than maximum {max}")]
    #[diagnostic(code(rosette::geometry::inverted_scale))]
    InvertedScale { min: f64, max: f64 },

    #[error("inner radius {inner} must be less than outer radius {outer}")]
    #[diagnostic(code(rosette::geometry::inverted_radii))]
    InvertedRadii { inner: f64, outer: f64 },

    #[error("radius must not be negative, got {radius}")]
    #[diagnostic(code(rosette::geometry::negative_radius))]
    NegativeRadius { radius: f64 },

    #[error("{what} is NaN or infinite")]
    #[diagnostic(code(rosette::geometry::non_finite))]
    NonFinite { what: &'static str },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// A single invariant violation found in a diagram configuration.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("size must be a finite number greater than 0, got {size}")]
    #[diagnostic(code(rosette::config::non_positive_size))]
    NonPositiveSize { size: f64 },

    #[error("center radius must be greater than 0, got {radius}")]
    #[diagnostic(code(rosette::config::non_positive_center_radius))]
    NonPositiveCenterRadius { radius: f64 },

    #[error("center radius {radius} must be less than {limit} (90% of half the size)")]
    #[diagnostic(
        code(rosette::config::center_radius_too_large),
        help("the outer 10% of the diagram is reserved for segment labels")
    )]
    CenterRadiusTooLarge { radius: f64, limit: f64 },

    #[error("scale min {min} must not exceed scale max {max}")]
    #[diagnostic(code(rosette::config::inverted_scale))]
    InvertedScale { min: f64, max: f64 },

    #[error("scale bounds must be finite, got {min}..={max}")]
    #[diagnostic(code(rosette::config::non_finite_scale))]
    NonFiniteScale { min: f64, max: f64 },

    #[error("scale must have at least one ring")]
    #[diagnostic(code(rosette::config::no_rings))]
    NoRings,

    #[error("at least one segment is required")]
    #[diagnostic(code(rosette::config::no_segments))]
    NoSegments,

    #[error("segment {index} ({name:?}) must have at least one facet")]
    #[diagnostic(code(rosette::config::empty_segment))]
    EmptySegment { index: usize, name: String },

    #[error(
        "score {score} of facet {facet} ({name:?}) in segment {segment} is outside the scale range [{min}, {max}]"
    )]
    #[diagnostic(code(rosette::config::score_out_of_range))]
    ScoreOutOfRange {
        segment: usize,
        facet: usize,
        name: String,
        score: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be greater than 0, got {size}")]
    #[diagnostic(
        code(rosette::config::non_positive_font_size),
        help("font sizes also set the thickness of the segment label band")
    )]
    NonPositiveFontSize { field: &'static str, size: f64 },
}

impl ConfigError {
    /// Path of the offending field inside the configuration.
    pub fn path(&self) -> String {
        match self {
            ConfigError::NonPositiveSize { .. } => "size".to_string(),
            ConfigError::NonPositiveCenterRadius { .. }
            | ConfigError::CenterRadiusTooLarge { .. } => "center.radius".to_string(),
            ConfigError::InvertedScale { .. } | ConfigError::NonFiniteScale { .. } => {
                "scale.min".to_string()
            }
            ConfigError::NoRings => "scale.rings".to_string(),
            ConfigError::NoSegments => "segments".to_string(),
            ConfigError::EmptySegment { index, .. } => format!("segments[{index}].facets"),
            ConfigError::ScoreOutOfRange { segment, facet, .. } => {
                format!("segments[{segment}].facets[{facet}].score")
            }
            ConfigError::NonPositiveFontSize { field, .. } => field.to_string(),
        }
    }
}

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors that stop a layout from being composed.
#[derive(Error, Diagnostic, Debug)]
pub enum ComposeError {
    #[error("invalid diagram configuration ({} problem(s))", .errors.len())]
    #[diagnostic(
        code(rosette::layout::invalid_config),
        help("fix every listed problem; no partial layout is produced")
    )]
    InvalidConfig {
        #[related]
        errors: Vec<ConfigError>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),
}
