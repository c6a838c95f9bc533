//! Configuration validation.
//!
//! Every invariant is checked and every violation collected, so callers can
//! show all problems at once instead of fixing them one by one.

use super::defaults::OUTER_RADIUS_FACTOR;
use crate::config::DiagramConfig;
use crate::errors::{ComposeError, ConfigError};

/// Outcome of validating a configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ConfigError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ConfigError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Human-readable messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_result(self) -> Result<(), ComposeError> {
        if self.valid {
            Ok(())
        } else {
            Err(ComposeError::InvalidConfig { errors: self.errors })
        }
    }
}

/// Check a configuration against the invariants layout relies on.
///
/// Comparisons are written so NaN values fail them.
pub fn validate(config: &DiagramConfig) -> ValidationResult {
    let mut errors = Vec::new();

    check_size(config, &mut errors);
    check_center(config, &mut errors);
    check_scale(config, &mut errors);
    check_segments(config, &mut errors);
    check_scores(config, &mut errors);
    check_fonts(config, &mut errors);

    ValidationResult::from_errors(errors)
}

fn check_size(config: &DiagramConfig, errors: &mut Vec<ConfigError>) {
    if !(config.size > 0.0 && config.size.is_finite()) {
        errors.push(ConfigError::NonPositiveSize { size: config.size });
    }
}

fn check_center(config: &DiagramConfig, errors: &mut Vec<ConfigError>) {
    let radius = config.center.radius;
    let limit = config.size / 2.0 * OUTER_RADIUS_FACTOR;
    if !(radius > 0.0) {
        errors.push(ConfigError::NonPositiveCenterRadius { radius });
    } else if !(radius < limit) {
        errors.push(ConfigError::CenterRadiusTooLarge { radius, limit });
    }
}

fn check_scale(config: &DiagramConfig, errors: &mut Vec<ConfigError>) {
    let scale = &config.scale;
    if scale.min.is_infinite() || scale.max.is_infinite() {
        errors.push(ConfigError::NonFiniteScale {
            min: scale.min,
            max: scale.max,
        });
    } else if !(scale.min <= scale.max) {
        errors.push(ConfigError::InvertedScale {
            min: scale.min,
            max: scale.max,
        });
    }
    if scale.rings == 0 {
        errors.push(ConfigError::NoRings);
    }
}

fn check_segments(config: &DiagramConfig, errors: &mut Vec<ConfigError>) {
    if config.segments.is_empty() {
        errors.push(ConfigError::NoSegments);
        return;
    }
    for (index, segment) in config.segments.iter().enumerate() {
        if segment.facets.is_empty() {
            errors.push(ConfigError::EmptySegment {
                index,
                name: segment.name.clone(),
            });
        }
    }
}

fn check_scores(config: &DiagramConfig, errors: &mut Vec<ConfigError>) {
    let (min, max) = (config.scale.min, config.scale.max);
    for (segment, seg) in config.segments.iter().enumerate() {
        for (facet, f) in seg.facets.iter().enumerate() {
            let Some(score) = f.score else { continue };
            if !(score >= min && score <= max) {
                errors.push(ConfigError::ScoreOutOfRange {
                    segment,
                    facet,
                    name: f.name.clone(),
                    score,
                    min,
                    max,
                });
            }
        }
    }
}

/// Font sizes feed the label band thickness, so zero or negative sizes would
/// collapse geometry.
fn check_fonts(config: &DiagramConfig, errors: &mut Vec<ConfigError>) {
    let style = &config.style;
    let fonts = [
        ("center.fontSize", config.center.font_size),
        ("style.segmentFontSize", Some(style.segment_font_size)),
        ("style.facetFontSize", Some(style.facet_font_size)),
        ("style.ringFontSize", Some(style.ring_font_size)),
    ];
    for (field, size) in fonts {
        let Some(size) = size else { continue };
        if !(size > 0.0 && size.is_finite()) {
            errors.push(ConfigError::NonPositiveFontSize { field, size });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CenterConfig, Facet, ScaleConfig, Segment};

    fn sample() -> DiagramConfig {
        DiagramConfig::new(vec![
            Segment::new("People", "#1f77b4", vec![Facet::new("Skills").with_score(3.0)]),
            Segment::new(
                "Process",
                "#ff7f0e",
                vec![Facet::new("Planning"), Facet::new("Review").with_score(5.0)],
            ),
        ])
    }

    #[test]
    fn valid_config_passes() {
        let result = validate(&sample());
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn accumulates_independent_violations() {
        let config = DiagramConfig::new(vec![]).with_size(0.0);
        let result = validate(&config);
        assert!(!result.valid);
        assert!(result.errors.contains(&ConfigError::NonPositiveSize { size: 0.0 }));
        assert!(result.errors.contains(&ConfigError::NoSegments));
    }

    #[test]
    fn errors_come_in_invariant_order() {
        let mut config = sample()
            .with_size(-10.0)
            .with_scale(ScaleConfig::new(5.0, 1.0, 0));
        config.segments[1].facets.clear();
        let paths: Vec<String> = validate(&config).errors.iter().map(|e| e.path()).collect();
        assert_eq!(
            paths,
            vec![
                "size",
                "center.radius",
                "scale.min",
                "scale.rings",
                "segments[1].facets",
                "segments[0].facets[0].score",
            ]
        );
    }

    #[test]
    fn center_radius_limits() {
        // limit is 400 * 0.9 = 360
        let config = sample().with_center(CenterConfig::new("Hub", 360.0));
        assert_eq!(
            validate(&config).errors,
            vec![ConfigError::CenterRadiusTooLarge { radius: 360.0, limit: 360.0 }]
        );

        let config = sample().with_center(CenterConfig::new("Hub", 359.9));
        assert!(validate(&config).valid);

        let config = sample().with_center(CenterConfig::new("Hub", 0.0));
        assert_eq!(
            validate(&config).errors,
            vec![ConfigError::NonPositiveCenterRadius { radius: 0.0 }]
        );
    }

    #[test]
    fn equal_min_and_max_is_allowed() {
        let mut config = sample().with_scale(ScaleConfig::new(3.0, 3.0, 1));
        config.segments[1].facets[1].score = Some(3.0);
        assert!(validate(&config).valid);
    }

    #[test]
    fn scores_are_inclusive_and_checked_per_facet() {
        let mut config = sample();
        config.segments[0].facets[0].score = Some(1.0);
        config.segments[1].facets[0].score = Some(5.5);
        config.segments[1].facets[1].score = Some(0.0);
        let result = validate(&config);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].path(), "segments[1].facets[0].score");
        assert_eq!(result.errors[1].path(), "segments[1].facets[1].score");
    }

    #[test]
    fn nan_values_are_rejected() {
        let mut config = sample().with_size(f64::NAN);
        config.segments[0].facets[0].score = Some(f64::NAN);
        let result = validate(&config);
        assert!(result.errors.iter().any(|e| e.path() == "size"));
        assert!(result.errors.iter().any(|e| e.path() == "segments[0].facets[0].score"));
    }

    #[test]
    fn font_sizes_must_be_positive() {
        let mut config = sample();
        config.style.segment_font_size = 0.0;
        config.style.ring_font_size = -2.0;
        config.center.font_size = Some(f64::NAN);
        let result = validate(&config);
        let paths: Vec<String> = result.errors.iter().map(|e| e.path()).collect();
        assert_eq!(
            paths,
            vec!["center.fontSize", "style.segmentFontSize", "style.ringFontSize"]
        );
        assert_eq!(
            result.errors[1].to_string(),
            "style.segmentFontSize must be greater than 0, got 0"
        );
    }

    #[test]
    fn infinite_bounds_are_rejected() {
        let config = sample().with_size(f64::INFINITY);
        assert!(validate(&config).errors.iter().any(|e| e.path() == "size"));

        let config = sample().with_scale(ScaleConfig::new(f64::NEG_INFINITY, f64::INFINITY, 5));
        assert_eq!(
            validate(&config).errors,
            vec![ConfigError::NonFiniteScale {
                min: f64::NEG_INFINITY,
                max: f64::INFINITY
            }]
        );
    }

    #[test]
    fn messages_are_human_readable() {
        let config = DiagramConfig::new(vec![]).with_size(0.0);
        let messages = validate(&config).messages();
        assert!(messages.iter().any(|m| m == "size must be a finite number greater than 0, got 0"));
        assert!(messages.iter().any(|m| m == "at least one segment is required"));
    }

    #[test]
    fn invalid_result_converts_to_compose_error() {
        let config = DiagramConfig::new(vec![]);
        match validate(&config).into_result() {
            Err(ComposeError::InvalidConfig { errors }) => {
                assert_eq!(errors, vec![ConfigError::NoSegments]);
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }
}
