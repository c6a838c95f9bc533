//! Path data for shape boundaries.
//!
//! A [`PathData`] is an ordered list of drawing commands in absolute
//! coordinates. It is built with a fluent API mirroring SVG path syntax:
//!
//! ```
//! use glam::dvec2;
//! use rosette::layout::path_builder::PathData;
//!
//! let path = PathData::new()
//!     .m(dvec2(0.0, 0.0))
//!     .l(dvec2(10.0, 0.0))
//!     .a(10.0, false, true, dvec2(0.0, 10.0))
//!     .z();
//! assert_eq!(path.to_string(), "M0,0L10,0A10,10 0 0 1 0,10Z");
//! ```
//!
//! Formatting the commands into markup is left to presentation adapters; the
//! `Display` impl exists as a convenience and for snapshot tests.

use std::fmt;

use glam::DVec2;

use crate::types::fmt_number;

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Circular arc from the current point to `to`.
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    /// Straight line back to the start of the current subpath.
    Close,
}

/// An ordered sequence of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a point, starting a new subpath.
    pub fn m(mut self, to: DVec2) -> Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    /// Straight line to a point.
    pub fn l(mut self, to: DVec2) -> Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Circular arc to a point.
    pub fn a(mut self, radius: f64, large_arc: bool, sweep: bool, to: DVec2) -> Self {
        self.commands.push(PathCommand::Arc {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    /// Close the current subpath.
    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of arc commands.
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Arc { .. }))
            .count()
    }

    /// True if the last command closes the path.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// First point of the path.
    pub fn start_point(&self) -> Option<DVec2> {
        match self.commands.first()? {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        }
    }

    /// Pen position after every command has run.
    pub fn end_point(&self) -> Option<DVec2> {
        let mut subpath_start: Option<DVec2> = None;
        let mut current: Option<DVec2> = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(p);
                    current = Some(p);
                }
                PathCommand::LineTo(p) | PathCommand::Arc { to: p, .. } => current = Some(p),
                PathCommand::Close => current = subpath_start,
            }
        }
        current
    }
}

fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_number(p.x), fmt_number(p.y))
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M{}", fmt_point(p))?,
                PathCommand::LineTo(p) => write!(f, "L{}", fmt_point(p))?,
                PathCommand::Arc {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let r = fmt_number(radius);
                    write!(
                        f,
                        "A{r},{r} 0 {} {} {}",
                        u8::from(large_arc),
                        u8::from(sweep),
                        fmt_point(to)
                    )?
                }
                PathCommand::Close => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn empty_path() {
        let path = PathData::new();
        assert!(path.is_empty());
        assert!(!path.is_closed());
        assert_eq!(path.start_point(), None);
        assert_eq!(path.end_point(), None);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn close_returns_to_subpath_start() {
        let path = PathData::new()
            .m(dvec2(1.0, 1.0))
            .l(dvec2(5.0, 1.0))
            .l(dvec2(5.0, 4.0))
            .z();
        assert!(path.is_closed());
        assert_eq!(path.len(), 4);
        assert_eq!(path.end_point(), path.start_point());
        assert_eq!(path.arc_count(), 0);
    }

    #[test]
    fn open_path_ends_at_last_point() {
        let path = PathData::new()
            .m(dvec2(0.0, 0.0))
            .a(5.0, true, false, dvec2(3.0, 4.0));
        assert!(!path.is_closed());
        assert_eq!(path.end_point(), Some(dvec2(3.0, 4.0)));
        assert_eq!(path.arc_count(), 1);
    }

    #[test]
    fn display_flags_and_rounding() {
        let path = PathData::new()
            .m(dvec2(0.5, -0.0))
            .a(2.0 / 3.0, true, false, dvec2(1.0, 2.0004));
        assert_eq!(path.to_string(), "M0.5,0A0.667,0.667 0 1 0 1,2");
    }
}
