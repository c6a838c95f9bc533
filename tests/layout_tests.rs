//! End-to-end layout scenarios.

use insta::assert_snapshot;
use rosette::layout::shapes::{LayoutShape, Shape, ShapeKind};
use rosette::{
    CenterConfig, ComposeError, ConfigError, DiagramConfig, Facet, LabelKind, Layer, LayoutPlan,
    PlanItem, ScaleConfig, Segment, ShapeDescriptor, ShapeSource,
};

fn wheel(scores: [f64; 4]) -> DiagramConfig {
    let names = ["Strategy", "People", "Process", "Technology"];
    let colors = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];
    let segments = names
        .iter()
        .zip(colors)
        .zip(scores)
        .map(|((name, color), score)| {
            Segment::new(*name, color, vec![Facet::new(format!("{name} maturity")).with_score(score)])
        })
        .collect();
    DiagramConfig::new(segments)
        .with_center(CenterConfig::new("Maturity", 60.0))
        .with_scale(ScaleConfig::new(1.0, 5.0, 5))
}

fn shape(plan: &LayoutPlan, source: ShapeSource) -> &ShapeDescriptor {
    plan.shapes()
        .find(|s| s.source == source)
        .unwrap_or_else(|| panic!("no shape for {source:?}"))
}

#[test]
fn fill_reaches_score_level() {
    let plan = rosette::layout(&wheel([3.0, 1.0, 4.0, 5.0])).unwrap();
    assert_eq!(plan.outer_radius, 360.0);
    assert_eq!(plan.inner_radius, 60.0);

    let fill = shape(&plan, ShapeSource::Facet { segment: 0, facet: 0 });
    let LayoutShape::Annulus(annulus) = &fill.shape else {
        panic!("expected annulus, got {:?}", fill.shape);
    };
    assert!((annulus.outer_radius - 240.0).abs() < 1e-9);
    assert_snapshot!(
        fill.shape.outline().to_string(),
        @"M400,160A240,240 0 0 1 640,400L460,400A60,60 0 0 0 400,340Z"
    );
}

#[test]
fn single_scored_facet_around_a_hub() {
    let config = DiagramConfig::new(vec![Segment::new(
        "Capability",
        "#1f77b4",
        vec![Facet::new("Delivery").with_score(3.0)],
    )])
    .with_center(CenterConfig::new("Core", 60.0))
    .with_scale(ScaleConfig::new(1.0, 5.0, 5));
    assert_eq!(config.size, 800.0);
    assert!(rosette::validate(&config).valid);

    let plan = rosette::layout(&config).unwrap();
    assert_eq!(plan.outer_radius, 360.0);

    let fill = shape(&plan, ShapeSource::Facet { segment: 0, facet: 0 });
    let LayoutShape::Annulus(annulus) = &fill.shape else {
        panic!("expected annulus, got {:?}", fill.shape);
    };
    assert_eq!(annulus.inner_radius, 60.0);
    assert!((annulus.outer_radius - 240.0).abs() < 1e-9);

    let outline = fill.shape.outline();
    assert_eq!(outline.arc_count(), 2);
    assert!(outline.is_closed());
    // the full turn is pulled back by 0.01° so both arcs keep distinct endpoints
    assert_snapshot!(
        outline.to_string(),
        @"M400,160A240,240 0 1 1 399.958,160L399.99,340A60,60 0 1 0 400,340Z"
    );
}

#[test]
fn label_band_sits_outside_scoring_area() {
    let plan = rosette::layout(&wheel([3.0, 3.0, 3.0, 3.0])).unwrap();
    let band = shape(&plan, ShapeSource::LabelBand { segment: 0 });
    assert_snapshot!(
        band.shape.outline().to_string(),
        @"M400,3.348A396.652,396.652 0 0 1 796.652,400L760,400A360,360 0 0 0 400,40Z"
    );
    assert_eq!(band.layer, Layer::Background);
}

#[test]
fn segment_labels_follow_arcs() {
    let plan = rosette::layout(&wheel([3.0, 3.0, 3.0, 3.0])).unwrap();
    let paths: Vec<String> = plan
        .labels()
        .filter(|l| l.kind == LabelKind::Segment)
        .map(|l| l.text_path.as_ref().unwrap().path.to_string())
        .collect();
    assert_snapshot!(&paths[0], @"M400,21.674A378.326,378.326 0 0 1 778.326,400");
    // lower right quadrant reads counter-clockwise
    assert_snapshot!(&paths[1], @"M400,778.326A378.326,378.326 0 0 0 778.326,400");
}

#[test]
fn hub_is_a_bordered_circle() {
    let plan = rosette::layout(&wheel([3.0, 3.0, 3.0, 3.0])).unwrap();
    let hub = shape(&plan, ShapeSource::Hub);
    assert_eq!(hub.layer, Layer::Hub);
    assert_eq!(hub.style.fill.as_deref(), Some("#ffffff"));
    assert_eq!(hub.style.stroke.as_deref(), Some("#333333"));
    assert_eq!(hub.style.stroke_width, 2.0);
    assert_snapshot!(
        hub.shape.outline().to_string(),
        @"M460,400A60,60 0 0 1 340,400A60,60 0 0 1 460,400Z"
    );
}

#[test]
fn layers_never_interleave() {
    let plan = rosette::layout(&wheel([1.0, 2.0, 3.0, 4.0])).unwrap();
    let mut seen = Vec::new();
    for item in &plan.items {
        let layer = item.layer();
        if seen.last() != Some(&layer) {
            assert!(!seen.contains(&layer), "{layer:?} appears twice");
            seen.push(layer);
        }
    }
    assert_eq!(
        seen,
        vec![
            Layer::Background,
            Layer::Fill,
            Layer::Divider,
            Layer::Hub,
            Layer::Label,
            Layer::Grid,
        ]
    );
}

#[test]
fn unscored_facets_leave_background_only() {
    let mut config = wheel([3.0, 3.0, 3.0, 3.0]);
    config.segments[2].facets[0].score = None;
    let plan = rosette::layout(&config).unwrap();
    assert!(
        plan.shapes()
            .all(|s| s.source != ShapeSource::Facet { segment: 2, facet: 0 })
    );
    assert_eq!(plan.layer(Layer::Fill).count(), 3);
    shape(&plan, ShapeSource::Segment { segment: 2 });
}

#[test]
fn hidden_hub_draws_wedges_from_center() {
    let mut config = wheel([3.0, 3.0, 3.0, 3.0]);
    config.center.visible = false;
    let plan = rosette::layout(&config).unwrap();

    assert_eq!(plan.inner_radius, 0.0);
    assert!(plan.layer(Layer::Hub).next().is_none());
    let fill = shape(&plan, ShapeSource::Facet { segment: 0, facet: 0 });
    assert_eq!(fill.shape.kind(), ShapeKind::Wedge);
    assert_snapshot!(
        fill.shape.outline().to_string(),
        @"M400,400L400,184A216,216 0 0 1 616,400Z"
    );
}

#[test]
fn single_segment_full_turn_stays_open() {
    let mut config = DiagramConfig::new(vec![Segment::new(
        "Everything",
        "#444444",
        vec![Facet::new("All").with_score(5.0)],
    )]);
    config.center.visible = false;
    let plan = rosette::layout(&config).unwrap();
    let fill = shape(&plan, ShapeSource::Facet { segment: 0, facet: 0 });
    assert_snapshot!(
        fill.shape.outline().to_string(),
        @"M400,400L400,40A360,360 0 1 1 399.937,40Z"
    );
}

#[test]
fn json_configuration() {
    let json = r##"{
        "size": 600,
        "startAngle": 0,
        "center": { "label": "Team & Health", "radius": 50, "subtitle": "Q3" },
        "scale": { "min": 0, "max": 3, "rings": 3, "ringLabels": ["Weak", "Fair", "Strong"] },
        "segments": [
            { "name": "Delivery", "color": "#0b6e4f", "facets": [
                { "name": "Cadence", "score": 2 },
                { "name": "Quality", "score": 3, "description": "Few escaped defects" }
            ]},
            { "name": "Culture", "color": "#c84c09", "facets": [
                { "name": "Trust" }
            ]}
        ],
        "style": { "scoreMarkers": true, "showFacetLabels": false }
    }"##;
    let config: DiagramConfig = serde_json::from_str(json).unwrap();
    assert!(rosette::validate(&config).valid);
    assert_eq!(config.style.fill_opacity, 0.85);

    let plan = rosette::layout(&config).unwrap();
    assert_eq!(plan.center, glam::dvec2(300.0, 300.0));
    assert_eq!(plan.outer_radius, 270.0);

    let hub: Vec<&str> = plan
        .labels()
        .filter(|l| matches!(l.kind, LabelKind::Hub | LabelKind::Subtitle))
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(hub, vec!["Team", "Health", "Q3"]);

    let rings: Vec<&str> = plan
        .labels()
        .filter(|l| l.kind == LabelKind::Ring)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(rings, vec!["Weak", "Fair", "Strong"]);
    assert!(plan.labels().all(|l| l.kind != LabelKind::Facet));

    let markers = plan
        .shapes()
        .filter(|s| matches!(s.source, ShapeSource::ScoreMarker { .. }))
        .count();
    assert_eq!(markers, 2);

    let quality = shape(&plan, ShapeSource::Facet { segment: 0, facet: 1 });
    assert_eq!(quality.title.as_deref(), Some("Few escaped defects"));
}

#[test]
fn invalid_configuration_reports_every_problem() {
    let config = DiagramConfig::new(vec![
        Segment::new("Empty", "#000000", vec![]),
        Segment::new("Scored", "#000000", vec![Facet::new("Too high").with_score(9.0)]),
    ])
    .with_scale(ScaleConfig::new(1.0, 5.0, 0));

    let result = rosette::validate(&config);
    assert!(!result.valid);
    assert_eq!(
        result.messages(),
        vec![
            "scale must have at least one ring".to_string(),
            "segment 0 (\"Empty\") must have at least one facet".to_string(),
            "score 9 of facet 0 (\"Too high\") in segment 1 is outside the scale range [1, 5]"
                .to_string(),
        ]
    );

    match rosette::layout(&config) {
        Err(ComposeError::InvalidConfig { errors }) => {
            assert_eq!(errors.len(), 3);
            assert!(errors.contains(&ConfigError::NoRings));
        }
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn plan_items_carry_drawable_outlines() {
    let plan = rosette::layout(&wheel([2.0, 3.0, 4.0, 5.0])).unwrap();
    for item in &plan.items {
        if let PlanItem::Shape(s) = item {
            let outline = s.shape.outline();
            assert!(!outline.is_empty(), "{:?} has no outline", s.source);
            if s.shape.kind() != ShapeKind::Line {
                assert!(outline.is_closed(), "{:?} is open", s.source);
            }
        }
    }
}
