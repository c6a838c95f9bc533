//! Shape types for diagram layout
//!
//! Each shape knows its kind, an anchor point and how to describe its
//! boundary as [`PathData`]. Sector shapes (wedges and annuli) are built from
//! two radii and an angular span; the sweep and large-arc flags follow the
//! downward-positive angle convention of [`to_cartesian`].

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::defaults::FULL_CIRCLE_EPSILON;
use super::geometry::to_cartesian;
use super::path_builder::PathData;
use crate::errors::DomainError;
use crate::types::{Angle, AngleSpan};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// What kind of shape this is
    fn kind(&self) -> ShapeKind;

    /// Boundary of the shape
    fn outline(&self) -> PathData;

    /// Reference point: the center for round shapes, the start for lines
    fn anchor(&self) -> DVec2;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Wedge,
    Annulus,
    Line,
    Circle,
    Point,
}

/// Any shape that can appear in a layout plan.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutShape {
    Wedge(WedgeShape),
    Annulus(AnnulusShape),
    Line(LineShape),
    Circle(CircleShape),
    Point(PointShape),
}

// ============================================================================
// Arc construction
// ============================================================================

/// Large-arc and sweep flags for an arc running from `start` to `end`.
///
/// Sweep is set when the arc runs toward increasing angles, which is
/// clockwise on screen.
pub fn arc_flags(start: Angle, end: Angle) -> (bool, bool) {
    let large_arc = (end - start).abs() > Angle::HALF_TURN;
    let sweep = end > start;
    (large_arc, sweep)
}

/// Pull `end` back toward `start` when the span covers a full turn, so the
/// arc's endpoints don't coincide.
fn clamp_full_turn(start: Angle, end: Angle) -> Angle {
    let sweep = end - start;
    if sweep.abs() < Angle::FULL_TURN {
        return end;
    }
    let reduced = Angle::FULL_TURN - FULL_CIRCLE_EPSILON;
    if sweep > Angle::ZERO { start + reduced } else { start - reduced }
}

/// Open arc at constant `radius` from `start` to `end`.
pub fn arc_path(center: DVec2, radius: f64, start: Angle, end: Angle) -> PathData {
    let end = clamp_full_turn(start, end);
    let (large_arc, sweep) = arc_flags(start, end);
    PathData::new()
        .m(to_cartesian(center, radius, start))
        .a(radius, large_arc, sweep, to_cartesian(center, radius, end))
}

fn check_sector(inner: f64, outer: f64) -> Result<(), DomainError> {
    if !inner.is_finite() || !outer.is_finite() {
        return Err(DomainError::NonFinite { what: "radius" });
    }
    if inner < 0.0 {
        return Err(DomainError::NegativeRadius { radius: inner });
    }
    if inner >= outer {
        return Err(DomainError::InvertedRadii { inner, outer });
    }
    Ok(())
}

/// Closed boundary of the sector between two radii over `[start, end]`.
///
/// With `inner == 0` this is a pie wedge: center, out to the outer start
/// point, one arc, then closed back to the center. Otherwise it is an annular
/// slice: outer arc from start to end, line inward, inner arc back from end
/// to start with the opposite sweep, closed.
pub fn ring_segment(
    center: DVec2,
    inner: f64,
    outer: f64,
    start: Angle,
    end: Angle,
) -> Result<PathData, DomainError> {
    check_sector(inner, outer)?;
    Ok(sector_path(center, inner, outer, start, end))
}

fn sector_path(center: DVec2, inner: f64, outer: f64, start: Angle, end: Angle) -> PathData {
    let end = clamp_full_turn(start, end);
    let (large_arc, sweep) = arc_flags(start, end);
    let outer_start = to_cartesian(center, outer, start);
    let outer_end = to_cartesian(center, outer, end);

    if inner == 0.0 {
        return PathData::new()
            .m(center)
            .l(outer_start)
            .a(outer, large_arc, sweep, outer_end)
            .z();
    }

    let (inner_large, inner_sweep) = arc_flags(end, start);
    PathData::new()
        .m(outer_start)
        .a(outer, large_arc, sweep, outer_end)
        .l(to_cartesian(center, inner, end))
        .a(inner, inner_large, inner_sweep, to_cartesian(center, inner, start))
        .z()
}

/// Build the sector shape for a span: a wedge when `inner` is zero, an
/// annulus otherwise.
pub fn sector(center: DVec2, inner: f64, outer: f64, span: AngleSpan) -> Result<LayoutShape, DomainError> {
    check_sector(inner, outer)?;
    if inner == 0.0 {
        Ok(WedgeShape { center, radius: outer, span }.into())
    } else {
        Ok(AnnulusShape { center, inner_radius: inner, outer_radius: outer, span }.into())
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// A pie slice from the center outward.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeShape {
    pub center: DVec2,
    pub radius: f64,
    pub span: AngleSpan,
}

impl Shape for WedgeShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Wedge
    }

    fn outline(&self) -> PathData {
        sector_path(self.center, 0.0, self.radius, self.span.start, self.span.end)
    }

    fn anchor(&self) -> DVec2 {
        self.center
    }
}

/// A donut slice bounded by two radii.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnulusShape {
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub span: AngleSpan,
}

impl Shape for AnnulusShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Annulus
    }

    fn outline(&self) -> PathData {
        sector_path(
            self.center,
            self.inner_radius,
            self.outer_radius,
            self.span.start,
            self.span.end,
        )
    }

    fn anchor(&self) -> DVec2 {
        self.center
    }
}

/// A straight segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub from: DVec2,
    pub to: DVec2,
}

impl LineShape {
    /// Radial line along `angle` between two radii.
    pub fn radial(center: DVec2, angle: Angle, from_radius: f64, to_radius: f64) -> Self {
        Self {
            from: to_cartesian(center, from_radius, angle),
            to: to_cartesian(center, to_radius, angle),
        }
    }
}

impl Shape for LineShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn outline(&self) -> PathData {
        PathData::new().m(self.from).l(self.to)
    }

    fn anchor(&self) -> DVec2 {
        self.from
    }
}

/// A full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: DVec2,
    pub radius: f64,
}

impl Shape for CircleShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    /// Two half-turn arcs, since a single arc can't close on itself.
    fn outline(&self) -> PathData {
        let r = self.radius;
        let east = self.center + dvec2(r, 0.0);
        let west = self.center - dvec2(r, 0.0);
        PathData::new()
            .m(east)
            .a(r, false, true, west)
            .a(r, false, true, east)
            .z()
    }

    fn anchor(&self) -> DVec2 {
        self.center
    }
}

/// A marker dot.
#[derive(Debug, Clone, PartialEq)]
pub struct PointShape {
    pub position: DVec2,
    /// Display radius of the marker
    pub radius: f64,
}

impl Shape for PointShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn outline(&self) -> PathData {
        CircleShape { center: self.position, radius: self.radius }.outline()
    }

    fn anchor(&self) -> DVec2 {
        self.position
    }
}
