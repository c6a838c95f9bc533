//! Angular partitioning of the wheel into segments and facets.
//!
//! Spans are never normalized here: a segment starting at 350° ends past
//! 360°, and a negative start angle stays negative. Consumers that need a
//! display angle normalize at their own boundary.

use crate::errors::DomainError;
use crate::types::{Angle, AngleSpan};

/// Angular share of one segment when `segment_count` segments tile the circle.
pub fn segment_span(segment_count: usize) -> Result<Angle, DomainError> {
    if segment_count == 0 {
        return Err(DomainError::NonPositiveCount {
            what: "segment count",
            count: segment_count,
        });
    }
    Ok(Angle::FULL_TURN / segment_count as f64)
}

/// Window of the segment at `index`, starting from `start_angle`.
pub fn segment_window(start_angle: Angle, span: Angle, index: usize) -> AngleSpan {
    AngleSpan::new(
        start_angle + span * index as f64,
        start_angle + span * (index + 1) as f64,
    )
}

/// Divide `[segment_start, segment_end]` into `facet_count` equal spans, in order.
///
/// Adjacent spans share their boundary exactly, the first span starts at
/// `segment_start` and the last ends at `segment_end`.
pub fn facet_spans(
    segment_start: Angle,
    segment_end: Angle,
    facet_count: usize,
) -> Result<Vec<AngleSpan>, DomainError> {
    if facet_count == 0 {
        return Err(DomainError::NonPositiveCount {
            what: "facet count",
            count: facet_count,
        });
    }

    let width = segment_end - segment_start;
    let boundary = |i: usize| {
        if i == facet_count {
            segment_end
        } else {
            segment_start + width * (i as f64 / facet_count as f64)
        }
    };

    Ok((0..facet_count)
        .map(|i| AngleSpan::new(boundary(i), boundary(i + 1)))
        .collect())
}
