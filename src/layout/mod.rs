//! Layout of radial diagrams
//!
//! This module is organized into submodules:
//! - `defaults`: Fixed layout constants
//! - `angles`: Angular partitioning into segments and facets
//! - `geometry`: Polar mapping, score-to-radius mapping and ring radii
//! - `path_builder`: Path data for shape boundaries
//! - `shapes`: Wedges, annuli, lines, circles and points
//! - `labels`: Label orientation, text direction and font fitting
//! - `validate`: Configuration validation
//! - `context`: Metrics derived once per layout
//! - `types`: The layout plan handed to presentation adapters
//!
//! [`compose`] ties these together in a single pass and emits the plan in
//! back-to-front drawing order: backgrounds, fills, dividers, hub, labels,
//! grid.

pub mod angles;
pub mod context;
pub mod defaults;
pub mod geometry;
pub mod labels;
pub mod path_builder;
pub mod shapes;
pub mod types;
pub mod validate;

pub use context::LayoutContext;
pub use types::*;
pub use validate::{ValidationResult, validate};

use crate::config::{DiagramConfig, Segment};
use crate::errors::{ComposeError, DomainError};
use crate::types::{Angle, AngleSpan, fmt_number};
use angles::{facet_spans, segment_window};
use defaults::{LINE_HEIGHT, SUBTITLE_SCALE};
use geometry::{score_to_radius, to_cartesian};
use labels::{LabelOrientation, fit_font_to_arc, orientation, text_direction, text_path};
use shapes::{CircleShape, LineShape, PointShape, sector};

/// A segment together with its angular window and facet spans.
struct SegmentLayout<'a> {
    index: usize,
    segment: &'a Segment,
    window: AngleSpan,
    facets: Vec<AngleSpan>,
}

/// Compose the layout plan for a configuration.
///
/// The configuration is validated first; an invalid one yields every
/// violation and no plan.
pub fn compose(config: &DiagramConfig) -> Result<LayoutPlan, ComposeError> {
    let validation = validate(config);
    if !validation.valid {
        crate::log::warn!(
            problems = validation.errors.len(),
            "refusing to lay out invalid configuration"
        );
    }
    validation.into_result()?;

    let ctx = LayoutContext::new(config)?;
    let segments = config
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let window = segment_window(ctx.start_angle, ctx.segment_span, index);
            let facets = facet_spans(window.start, window.end, segment.facets.len())?;
            Ok(SegmentLayout { index, segment, window, facets })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let mut plan = LayoutPlan::new(config.size, ctx.center, ctx.inner_radius, ctx.outer_radius);

    emit_backgrounds(&ctx, &segments, &mut plan)?;
    emit_fills(&ctx, &segments, &mut plan)?;
    emit_dividers(&ctx, &segments, &mut plan);
    emit_hub(&ctx, &mut plan);
    emit_labels(&ctx, &segments, &mut plan);
    emit_grid(&ctx, &mut plan);

    crate::log::debug!(items = plan.items.len(), "layout composed");
    Ok(plan)
}

fn emit_backgrounds(
    ctx: &LayoutContext,
    segments: &[SegmentLayout],
    plan: &mut LayoutPlan,
) -> Result<(), DomainError> {
    let style = &ctx.config.style;
    for seg in segments {
        plan.push_shape(ShapeDescriptor {
            layer: Layer::Background,
            shape: sector(ctx.center, ctx.inner_radius, ctx.outer_radius, seg.window)?,
            style: ShapeStyle::filled(&seg.segment.color, style.background_opacity),
            source: ShapeSource::Segment { segment: seg.index },
            title: None,
        });
        plan.push_shape(ShapeDescriptor {
            layer: Layer::Background,
            shape: sector(ctx.center, ctx.band.inner, ctx.band.outer, seg.window)?,
            style: ShapeStyle::filled(&seg.segment.color, 1.0),
            source: ShapeSource::LabelBand { segment: seg.index },
            title: None,
        });
    }
    Ok(())
}

fn emit_fills(
    ctx: &LayoutContext,
    segments: &[SegmentLayout],
    plan: &mut LayoutPlan,
) -> Result<(), DomainError> {
    let style = &ctx.config.style;
    let scale = &ctx.config.scale;
    let mut markers = Vec::new();

    for seg in segments {
        for (facet_index, (facet, span)) in seg.segment.facets.iter().zip(&seg.facets).enumerate() {
            let Some(score) = facet.score else { continue };
            let radius = score_to_radius(score, scale.min, scale.max, ctx.inner_radius, ctx.outer_radius)?;

            plan.push_shape(ShapeDescriptor {
                layer: Layer::Fill,
                shape: sector(ctx.center, ctx.inner_radius, radius, *span)?,
                style: ShapeStyle::filled(&seg.segment.color, style.fill_opacity),
                source: ShapeSource::Facet { segment: seg.index, facet: facet_index },
                title: facet.description.clone(),
            });

            if style.score_markers {
                markers.push(ShapeDescriptor {
                    layer: Layer::Fill,
                    shape: PointShape {
                        position: to_cartesian(ctx.center, radius, span.mid),
                        radius: style.marker_radius,
                    }
                    .into(),
                    style: ShapeStyle::filled(&seg.segment.color, 1.0),
                    source: ShapeSource::ScoreMarker { segment: seg.index, facet: facet_index },
                    title: facet.description.clone(),
                });
            }
        }
    }

    // Markers sit on top of every fill.
    for marker in markers {
        plan.push_shape(marker);
    }
    Ok(())
}

fn emit_dividers(ctx: &LayoutContext, segments: &[SegmentLayout], plan: &mut LayoutPlan) {
    let style = &ctx.config.style;

    for seg in segments {
        for (facet_index, span) in seg.facets.iter().enumerate().skip(1) {
            plan.push_shape(ShapeDescriptor {
                layer: Layer::Divider,
                shape: LineShape::radial(ctx.center, span.start, ctx.inner_radius, ctx.outer_radius).into(),
                style: ShapeStyle::stroked(&style.divider_color, style.facet_divider_width),
                source: ShapeSource::FacetDivider { segment: seg.index, facet: facet_index },
                title: None,
            });
        }
    }

    // Segment boundaries run through the label band and are drawn over facet dividers.
    for seg in segments {
        plan.push_shape(ShapeDescriptor {
            layer: Layer::Divider,
            shape: LineShape::radial(ctx.center, seg.window.start, ctx.inner_radius, ctx.band.outer).into(),
            style: ShapeStyle::stroked(&style.divider_color, style.segment_divider_width),
            source: ShapeSource::SegmentDivider { segment: seg.index },
            title: None,
        });
    }
}

fn emit_hub(ctx: &LayoutContext, plan: &mut LayoutPlan) {
    let center = &ctx.config.center;
    if !center.visible {
        return;
    }

    let mut style = ShapeStyle::filled(&center.color, 1.0);
    if center.border_width > 0.0 {
        style.stroke = Some(center.border_color.clone());
        style.stroke_width = center.border_width;
    }

    plan.push_shape(ShapeDescriptor {
        layer: Layer::Hub,
        shape: CircleShape { center: ctx.center, radius: center.radius }.into(),
        style,
        source: ShapeSource::Hub,
        title: None,
    });
}

fn emit_labels(ctx: &LayoutContext, segments: &[SegmentLayout], plan: &mut LayoutPlan) {
    emit_hub_labels(ctx, plan);
    emit_segment_labels(ctx, segments, plan);
    if ctx.config.style.show_facet_labels {
        emit_facet_labels(ctx, segments, plan);
    }
    if ctx.config.style.show_ring_labels {
        emit_ring_labels(ctx, plan);
    }
}

/// Hub lines stacked and centered vertically, with the subtitle underneath.
fn emit_hub_labels(ctx: &LayoutContext, plan: &mut LayoutPlan) {
    let center = &ctx.config.center;
    if !center.visible {
        return;
    }

    let font = ctx.hub_font_size;
    let line_height = font * LINE_HEIGHT;
    let subtitle = center.subtitle.as_deref().filter(|s| !s.trim().is_empty());
    let sub_font = font * SUBTITLE_SCALE;
    let sub_height = if subtitle.is_some() { sub_font * LINE_HEIGHT } else { 0.0 };

    let block_height = ctx.hub_lines.len() as f64 * line_height + sub_height;
    let top = -block_height / 2.0;

    // Vertical offsets are mapped along the 90° (downward) ray.
    let down = Angle::QUARTER_TURN;

    for (i, line) in ctx.hub_lines.iter().enumerate() {
        let offset = top + line_height * (i as f64 + 0.5);
        plan.push_label(LabelDescriptor {
            layer: Layer::Label,
            kind: LabelKind::Hub,
            text: line.clone(),
            position: to_cartesian(ctx.center, offset, down),
            orientation: LabelOrientation::UPRIGHT,
            font_size: font,
            font_family: ctx.config.style.font_family.clone(),
            color: center.font_color.clone(),
            text_path: None,
        });
    }

    if let Some(subtitle) = subtitle {
        let offset = top + ctx.hub_lines.len() as f64 * line_height + sub_height / 2.0;
        plan.push_label(LabelDescriptor {
            layer: Layer::Label,
            kind: LabelKind::Subtitle,
            text: subtitle.trim().to_string(),
            position: to_cartesian(ctx.center, offset, down),
            orientation: LabelOrientation::UPRIGHT,
            font_size: sub_font,
            font_family: ctx.config.style.font_family.clone(),
            color: center.font_color.clone(),
            text_path: None,
        });
    }
}

fn emit_segment_labels(ctx: &LayoutContext, segments: &[SegmentLayout], plan: &mut LayoutPlan) {
    let style = &ctx.config.style;
    let radius = ctx.band.mid();

    for seg in segments {
        let direction = text_direction(seg.window.mid);
        plan.push_label(LabelDescriptor {
            layer: Layer::Label,
            kind: LabelKind::Segment,
            text: seg.segment.name.clone(),
            position: to_cartesian(ctx.center, radius, seg.window.mid),
            orientation: orientation(seg.window.mid),
            font_size: ctx.band.font_size,
            font_family: style.font_family.clone(),
            color: style.segment_font_color.clone(),
            text_path: Some(TextPath {
                path: text_path(ctx.center, radius, seg.window, direction),
                direction,
            }),
        });
    }
}

fn emit_facet_labels(ctx: &LayoutContext, segments: &[SegmentLayout], plan: &mut LayoutPlan) {
    let style = &ctx.config.style;
    let radius = (ctx.inner_radius + ctx.outer_radius) / 2.0;

    for seg in segments {
        for (facet, span) in seg.segment.facets.iter().zip(&seg.facets) {
            let chars = facet.name.chars().count();
            plan.push_label(LabelDescriptor {
                layer: Layer::Label,
                kind: LabelKind::Facet,
                text: facet.name.clone(),
                position: to_cartesian(ctx.center, radius, span.mid),
                orientation: orientation(span.mid),
                font_size: fit_font_to_arc(style.facet_font_size, chars, span.sweep(), radius),
                font_family: style.font_family.clone(),
                color: style.facet_font_color.clone(),
                text_path: None,
            });
        }
    }
}

/// Ring labels run along the start ray, one per drawn ring.
fn emit_ring_labels(ctx: &LayoutContext, plan: &mut LayoutPlan) {
    let style = &ctx.config.style;
    let scale = &ctx.config.scale;
    let ring_count = ctx.rings.len() - 1;

    for (ring, radius) in ctx.rings.iter().enumerate().skip(1) {
        let text = scale
            .ring_labels
            .as_ref()
            .and_then(|labels| labels.get(ring - 1).cloned())
            .unwrap_or_else(|| {
                fmt_number(scale.min + (scale.max - scale.min) * ring as f64 / ring_count as f64)
            });
        plan.push_label(LabelDescriptor {
            layer: Layer::Label,
            kind: LabelKind::Ring,
            text,
            position: to_cartesian(ctx.center, *radius, ctx.start_angle),
            orientation: orientation(ctx.start_angle),
            font_size: style.ring_font_size,
            font_family: style.font_family.clone(),
            color: style.ring_font_color.clone(),
            text_path: None,
        });
    }
}

/// Reference rings; index 0 is the hub boundary and isn't drawn.
fn emit_grid(ctx: &LayoutContext, plan: &mut LayoutPlan) {
    let style = &ctx.config.style;
    for (ring, radius) in ctx.rings.iter().enumerate().skip(1) {
        plan.push_shape(ShapeDescriptor {
            layer: Layer::Grid,
            shape: CircleShape { center: ctx.center, radius: *radius }.into(),
            style: ShapeStyle::stroked(&style.grid_color, style.grid_width).with_dash(style.grid_dash.clone()),
            source: ShapeSource::Ring { ring },
            title: None,
        });
    }
}
