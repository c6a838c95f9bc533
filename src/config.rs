//! Diagram configuration: the declarative input to layout.
//!
//! Field names serialize in camelCase so configurations can be written as
//! JSON documents (`startAngle`, `ringLabels`, `borderWidth`, ...). A
//! configuration is validated once per layout and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Root of a diagram description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramConfig {
    /// Width and height of the square diagram, in length units.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Offset of the first segment's start, in degrees.
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,
    #[serde(default)]
    pub center: CenterConfig,
    #[serde(default)]
    pub scale: ScaleConfig,
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub style: StyleConfig,
}

fn default_size() -> f64 {
    800.0
}

fn default_start_angle() -> f64 {
    -90.0
}

impl DiagramConfig {
    /// Build a configuration with default size, hub, scale and style.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            size: default_size(),
            start_angle: default_start_angle(),
            center: CenterConfig::default(),
            scale: ScaleConfig::default(),
            segments,
            style: StyleConfig::default(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_start_angle(mut self, start_angle: f64) -> Self {
        self.start_angle = start_angle;
        self
    }

    pub fn with_center(mut self, center: CenterConfig) -> Self {
        self.center = center;
        self
    }

    pub fn with_scale(mut self, scale: ScaleConfig) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }
}

/// The central hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CenterConfig {
    /// Hub text; `&` separates lines.
    pub label: String,
    pub radius: f64,
    pub color: String,
    pub subtitle: Option<String>,
    pub border_width: f64,
    pub border_color: String,
    pub visible: bool,
    /// Upper bound for the hub label font; it shrinks to fit the hub.
    pub font_size: Option<f64>,
    pub font_color: String,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            radius: 60.0,
            color: "#ffffff".to_string(),
            subtitle: None,
            border_width: 2.0,
            border_color: "#333333".to_string(),
            visible: true,
            font_size: None,
            font_color: "#333333".to_string(),
        }
    }
}

impl CenterConfig {
    pub fn new(label: impl Into<String>, radius: f64) -> Self {
        Self {
            label: label.into(),
            radius,
            ..Self::default()
        }
    }
}

/// The scoring scale shared by every facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleConfig {
    pub min: f64,
    pub max: f64,
    /// Number of concentric reference rings.
    pub rings: u32,
    /// Text for rings 1..=rings; missing entries fall back to the level's score.
    pub ring_labels: Option<Vec<String>>,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 5.0,
            rings: 5,
            ring_labels: None,
        }
    }
}

impl ScaleConfig {
    pub fn new(min: f64, max: f64, rings: u32) -> Self {
        Self {
            min,
            max,
            rings,
            ring_labels: None,
        }
    }
}

/// One angular slice of the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub color: String,
    pub facets: Vec<Facet>,
}

impl Segment {
    pub fn new(name: impl Into<String>, color: impl Into<String>, facets: Vec<Facet>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            facets,
        }
    }
}

/// A sub-slice of a segment, optionally scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    /// Absent means unscored: the facet gets no fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Facet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: None,
            description: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ============================================================================
// Style
// ============================================================================

/// Fully populated presentation attributes.
///
/// Deserializing goes through [`StyleOverrides`] layered onto
/// [`StyleConfig::default`], so a document only names what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StyleOverrides")]
pub struct StyleConfig {
    pub background_opacity: f64,
    pub fill_opacity: f64,
    pub segment_divider_width: f64,
    pub facet_divider_width: f64,
    pub divider_color: String,
    pub grid_color: String,
    pub grid_width: f64,
    /// Dash pattern for grid rings, e.g. `"4 4"`.
    pub grid_dash: Option<String>,
    pub font_family: String,
    pub segment_font_size: f64,
    pub segment_font_color: String,
    pub facet_font_size: f64,
    pub facet_font_color: String,
    pub ring_font_size: f64,
    pub ring_font_color: String,
    pub show_facet_labels: bool,
    pub show_ring_labels: bool,
    pub score_markers: bool,
    pub marker_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_opacity: 0.25,
            fill_opacity: 0.85,
            segment_divider_width: 2.0,
            facet_divider_width: 1.0,
            divider_color: "#ffffff".to_string(),
            grid_color: "#999999".to_string(),
            grid_width: 0.5,
            grid_dash: Some("4 4".to_string()),
            font_family: "sans-serif".to_string(),
            segment_font_size: 14.0,
            segment_font_color: "#ffffff".to_string(),
            facet_font_size: 11.0,
            facet_font_color: "#333333".to_string(),
            ring_font_size: 10.0,
            ring_font_color: "#666666".to_string(),
            show_facet_labels: true,
            show_ring_labels: true,
            score_markers: false,
            marker_radius: 3.0,
        }
    }
}

/// Sparse style input: every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOverrides {
    pub background_opacity: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub segment_divider_width: Option<f64>,
    pub facet_divider_width: Option<f64>,
    pub divider_color: Option<String>,
    pub grid_color: Option<String>,
    pub grid_width: Option<f64>,
    pub grid_dash: Option<String>,
    pub font_family: Option<String>,
    pub segment_font_size: Option<f64>,
    pub segment_font_color: Option<String>,
    pub facet_font_size: Option<f64>,
    pub facet_font_color: Option<String>,
    pub ring_font_size: Option<f64>,
    pub ring_font_color: Option<String>,
    pub show_facet_labels: Option<bool>,
    pub show_ring_labels: Option<bool>,
    pub score_markers: Option<bool>,
    pub marker_radius: Option<f64>,
}

impl StyleConfig {
    /// Take each field from `overrides` when present, otherwise from `defaults`.
    pub fn layered(overrides: &StyleOverrides, defaults: &StyleConfig) -> StyleConfig {
        macro_rules! pick {
            ($field:ident) => {
                overrides
                    .$field
                    .clone()
                    .unwrap_or_else(|| defaults.$field.clone())
            };
        }

        StyleConfig {
            background_opacity: pick!(background_opacity),
            fill_opacity: pick!(fill_opacity),
            segment_divider_width: pick!(segment_divider_width),
            facet_divider_width: pick!(facet_divider_width),
            divider_color: pick!(divider_color),
            grid_color: pick!(grid_color),
            grid_width: pick!(grid_width),
            grid_dash: overrides.grid_dash.clone().or_else(|| defaults.grid_dash.clone()),
            font_family: pick!(font_family),
            segment_font_size: pick!(segment_font_size),
            segment_font_color: pick!(segment_font_color),
            facet_font_size: pick!(facet_font_size),
            facet_font_color: pick!(facet_font_color),
            ring_font_size: pick!(ring_font_size),
            ring_font_color: pick!(ring_font_color),
            show_facet_labels: pick!(show_facet_labels),
            show_ring_labels: pick!(show_ring_labels),
            score_markers: pick!(score_markers),
            marker_radius: pick!(marker_radius),
        }
    }
}

impl From<StyleOverrides> for StyleConfig {
    fn from(overrides: StyleOverrides) -> Self {
        StyleConfig::layered(&overrides, &StyleConfig::default())
    }
}
