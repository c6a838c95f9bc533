//! Geometry and layout for radial diagrams.
//!
//! A diagram is a disc split into equal angular segments, each split again
//! into facets. Every facet is scored on a bounded scale and drawn as a
//! slice whose radius grows with the score, around an optional central hub
//! and inside a band carrying the segment names.
//!
//! [`layout`] turns a [`DiagramConfig`] into a [`LayoutPlan`]: shapes and
//! labels in drawing order, with path data ready for a presentation
//! adapter. [`validate`] reports every problem in a configuration at once.
//!
//! ```
//! use rosette::{DiagramConfig, Facet, Segment};
//!
//! let config = DiagramConfig::new(vec![
//!     Segment::new("People", "#1f77b4", vec![Facet::new("Skills").with_score(3.0)]),
//!     Segment::new("Process", "#ff7f0e", vec![Facet::new("Planning").with_score(4.0)]),
//! ]);
//!
//! let plan = rosette::layout(&config).unwrap();
//! assert_eq!(plan.outer_radius, 360.0);
//! ```

pub mod config;
pub mod errors;
pub mod layout;
pub(crate) mod log;
pub mod text;
pub mod types;

pub use config::{CenterConfig, DiagramConfig, Facet, ScaleConfig, Segment, StyleConfig, StyleOverrides};
pub use errors::{ComposeError, ConfigError, DomainError};
pub use layout::{
    Layer, LabelDescriptor, LabelKind, LayoutPlan, PlanItem, ShapeDescriptor, ShapeSource,
    ShapeStyle, ValidationResult,
};
pub use types::{Angle, AngleSpan};

/// Lay out a diagram.
///
/// The configuration is validated first; if it has any problems, all of
/// them are returned in [`ComposeError::InvalidConfig`] and nothing is laid
/// out.
pub fn layout(config: &DiagramConfig) -> Result<LayoutPlan, ComposeError> {
    layout::compose(config)
}

/// Check a configuration without laying it out.
pub fn validate(config: &DiagramConfig) -> ValidationResult {
    layout::validate(config)
}
