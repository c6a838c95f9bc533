//! Core types for the layout plan handed to presentation adapters

use glam::DVec2;

use super::labels::{LabelOrientation, TextDirection};
use super::path_builder::PathData;
use super::shapes::LayoutShape;

/// Drawing layer, back to front. Later layers occlude earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Fill,
    Divider,
    Hub,
    Label,
    Grid,
}

/// Paint attributes for a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<String>,
    pub fill_opacity: f64,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    /// Dash pattern, e.g. `"4 4"`. None = solid.
    pub dash: Option<String>,
}

impl ShapeStyle {
    /// Filled, no outline.
    pub fn filled(color: &str, opacity: f64) -> Self {
        Self {
            fill: Some(color.to_string()),
            fill_opacity: opacity,
            ..Self::default()
        }
    }

    /// Outline only.
    pub fn stroked(color: &str, width: f64) -> Self {
        Self {
            stroke: Some(color.to_string()),
            stroke_width: width,
            ..Self::default()
        }
    }

    pub fn with_dash(mut self, dash: Option<String>) -> Self {
        self.dash = dash;
        self
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: None,
            fill_opacity: 1.0,
            stroke: None,
            stroke_width: 0.0,
            dash: None,
        }
    }
}

/// Which part of the configuration produced a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeSource {
    /// Background of a segment's scoring area
    Segment { segment: usize },
    /// Band behind a segment's name
    LabelBand { segment: usize },
    /// Score fill of a facet
    Facet { segment: usize, facet: usize },
    ScoreMarker { segment: usize, facet: usize },
    SegmentDivider { segment: usize },
    FacetDivider { segment: usize, facet: usize },
    Hub,
    /// Grid ring, 1-based like the scale levels
    Ring { ring: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub layer: Layer,
    pub shape: LayoutShape,
    pub style: ShapeStyle,
    pub source: ShapeSource,
    /// Tooltip text, e.g. a facet's description.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Hub,
    Subtitle,
    Segment,
    Facet,
    Ring,
}

/// Arc that a label's text flows along.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPath {
    pub path: PathData,
    pub direction: TextDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelDescriptor {
    pub layer: Layer,
    pub kind: LabelKind,
    pub text: String,
    pub position: DVec2,
    pub orientation: LabelOrientation,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub text_path: Option<TextPath>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanItem {
    Shape(ShapeDescriptor),
    Label(LabelDescriptor),
}

impl PlanItem {
    pub fn layer(&self) -> Layer {
        match self {
            PlanItem::Shape(s) => s.layer,
            PlanItem::Label(l) => l.layer,
        }
    }
}

/// Everything a presentation adapter needs to draw a diagram, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub size: f64,
    pub center: DVec2,
    /// Inner edge of the scoring area: the hub radius, or 0 with a hidden hub.
    pub inner_radius: f64,
    /// Outer edge of the scoring area.
    pub outer_radius: f64,
    pub items: Vec<PlanItem>,
}

impl LayoutPlan {
    pub fn new(size: f64, center: DVec2, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            size,
            center,
            inner_radius,
            outer_radius,
            items: Vec::new(),
        }
    }

    pub fn push_shape(&mut self, shape: ShapeDescriptor) {
        self.items.push(PlanItem::Shape(shape));
    }

    pub fn push_label(&mut self, label: LabelDescriptor) {
        self.items.push(PlanItem::Label(label));
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapeDescriptor> {
        self.items.iter().filter_map(|item| match item {
            PlanItem::Shape(s) => Some(s),
            PlanItem::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelDescriptor> {
        self.items.iter().filter_map(|item| match item {
            PlanItem::Label(l) => Some(l),
            PlanItem::Shape(_) => None,
        })
    }

    /// Items on one layer, in drawing order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &PlanItem> {
        self.items.iter().filter(move |item| item.layer() == layer)
    }
}
