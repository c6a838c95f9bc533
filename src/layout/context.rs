//! Layout context - derived metrics shared by every layout step

use glam::{DVec2, dvec2};

use super::angles::segment_span;
use super::defaults::{HUB_FONT_SIZE, HUB_LABEL_WIDTH_FACTOR, OUTER_RADIUS_FACTOR};
use super::geometry::ring_radii;
use super::labels::{band_thickness, fit_font_to_arc, fit_font_to_width};
use crate::config::DiagramConfig;
use crate::errors::DomainError;
use crate::text::{longest_line_len, split_label_lines};
use crate::types::Angle;

/// Ring outside the scoring area that carries the segment names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBand {
    pub inner: f64,
    pub outer: f64,
    pub font_size: f64,
}

impl LabelBand {
    /// Radius the segment names are written along.
    pub fn mid(&self) -> f64 {
        (self.inner + self.outer) / 2.0
    }
}

/// Metrics derived once from a validated configuration.
#[derive(Debug, Clone)]
pub struct LayoutContext<'a> {
    pub config: &'a DiagramConfig,
    pub center: DVec2,
    /// Hub radius, or 0 when the hub is hidden.
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: Angle,
    pub segment_span: Angle,
    pub band: LabelBand,
    /// Ring radii from `inner_radius` to `outer_radius`, index 0 included.
    pub rings: Vec<f64>,
    pub hub_lines: Vec<String>,
    pub hub_font_size: f64,
}

impl<'a> LayoutContext<'a> {
    pub fn new(config: &'a DiagramConfig) -> Result<Self, DomainError> {
        let half = config.size / 2.0;
        let center = dvec2(half, half);
        let outer_radius = half * OUTER_RADIUS_FACTOR;
        let inner_radius = if config.center.visible { config.center.radius } else { 0.0 };
        let segment_span = segment_span(config.segments.len())?;
        let rings = ring_radii(config.scale.rings, inner_radius, outer_radius)?;

        let band = label_band(config, outer_radius, segment_span);

        let hub_lines = if config.center.visible {
            split_label_lines(&config.center.label)
        } else {
            Vec::new()
        };
        let hub_base = config.center.font_size.unwrap_or(HUB_FONT_SIZE);
        let hub_font_size = fit_font_to_width(
            hub_base,
            longest_line_len(&hub_lines),
            HUB_LABEL_WIDTH_FACTOR * config.center.radius,
        );

        crate::log::debug!(
            outer_radius,
            inner_radius,
            segment_span = segment_span.raw(),
            band_font = band.font_size,
            hub_font = hub_font_size,
            "derived layout metrics"
        );

        Ok(Self {
            config,
            center,
            inner_radius,
            outer_radius,
            start_angle: Angle(config.start_angle),
            segment_span,
            band,
            rings,
            hub_lines,
            hub_font_size,
        })
    }
}

/// Size the segment label band.
///
/// The font is fitted against the arc at the band's mid radius as it would
/// be with the configured font; the band thickness then follows the fitted
/// font.
fn label_band(config: &DiagramConfig, outer_radius: f64, span: Angle) -> LabelBand {
    let base = config.style.segment_font_size;
    let longest = config
        .segments
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let probe_radius = outer_radius + band_thickness(base) / 2.0;
    let font_size = fit_font_to_arc(base, longest, span, probe_radius);
    if font_size < base {
        crate::log::debug!(from = base, to = font_size, "segment label font shrunk to fit arc");
    }

    LabelBand {
        inner: outer_radius,
        outer: outer_radius + band_thickness(font_size),
        font_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CenterConfig, Facet, Segment};

    fn config(names: &[&str]) -> DiagramConfig {
        DiagramConfig::new(
            names
                .iter()
                .map(|n| Segment::new(*n, "#888888", vec![Facet::new("f")]))
                .collect(),
        )
    }

    #[test]
    fn outer_radius_is_ninety_percent_of_half_size() {
        let cfg = config(&["A"]);
        let ctx = LayoutContext::new(&cfg).unwrap();
        assert_eq!(ctx.center, dvec2(400.0, 400.0));
        assert_eq!(ctx.outer_radius, 360.0);
        assert_eq!(ctx.inner_radius, 60.0);
        assert_eq!(ctx.rings.len(), 6);
    }

    #[test]
    fn short_names_keep_configured_font() {
        let cfg = config(&["A", "B", "C", "D"]);
        let ctx = LayoutContext::new(&cfg).unwrap();
        assert_eq!(ctx.band.font_size, 14.0);
        assert_eq!(ctx.band.inner, 360.0);
        assert!((ctx.band.outer - (360.0 + 14.0 * 2.618)).abs() < 1e-9);
    }

    #[test]
    fn long_names_shrink_font() {
        let long = "An Exceptionally Long Segment Name For Testing";
        let names: Vec<&str> = std::iter::repeat_n(long, 12).collect();
        let cfg = config(&names);
        let ctx = LayoutContext::new(&cfg).unwrap();
        assert!(ctx.band.font_size < 14.0);
        assert!(ctx.band.outer - ctx.band.inner < 14.0 * 2.618);
    }

    #[test]
    fn hub_font_fits_longest_line() {
        let mut cfg = config(&["A"]);
        cfg.center = CenterConfig::new("Digital & Transformation Maturity", 40.0);
        let ctx = LayoutContext::new(&cfg).unwrap();
        assert_eq!(ctx.hub_lines, vec!["Digital", "Transformation Maturity"]);
        // 23 chars must fit in 64 units
        let expected = 64.0 / (23.0 * 0.6);
        assert!((ctx.hub_font_size - expected).abs() < 1e-9);
    }

    #[test]
    fn hidden_hub_collapses_inner_radius() {
        let mut cfg = config(&["A", "B"]);
        cfg.center.visible = false;
        cfg.center.label = "Hidden".into();
        let ctx = LayoutContext::new(&cfg).unwrap();
        assert_eq!(ctx.inner_radius, 0.0);
        assert_eq!(ctx.rings[0], 0.0);
        assert!(ctx.hub_lines.is_empty());
    }
}
