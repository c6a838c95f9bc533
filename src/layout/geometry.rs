//! Geometry functions: polar mapping, score bucketing and the ring grid

use glam::{DVec2, dvec2};

use crate::errors::DomainError;
use crate::types::Angle;

/// Convert polar coordinates around `center` to a planar point.
///
/// 0° maps to +x and 90° to +y (downward), so increasing angles run
/// clockwise on screen. Every other angle in the crate follows this convention.
#[inline]
pub fn to_cartesian(center: DVec2, radius: f64, angle: Angle) -> DVec2 {
    let theta = angle.to_radians();
    center + dvec2(radius * theta.cos(), radius * theta.sin())
}

fn check_radii(inner: f64, outer: f64) -> Result<(), DomainError> {
    if !inner.is_finite() || !outer.is_finite() {
        return Err(DomainError::NonFinite { what: "radius" });
    }
    if inner >= outer {
        return Err(DomainError::InvertedRadii { inner, outer });
    }
    Ok(())
}

/// Map a score onto a radius between `inner` and `outer` by discrete level.
///
/// A scale from `min` to `max` has `max - min + 1` levels and level `k`
/// (1-based) reaches `k / levels` of the radial range, so the minimum score
/// still fills the first band instead of collapsing onto `inner`. Scores
/// outside the scale are clamped. A single-level scale maps to `outer`.
/// NaN or infinite scores and scale bounds are rejected.
pub fn score_to_radius(
    score: f64,
    min: f64,
    max: f64,
    inner: f64,
    outer: f64,
) -> Result<f64, DomainError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(DomainError::NonFinite { what: "scale bound" });
    }
    if !score.is_finite() {
        return Err(DomainError::NonFinite { what: "score" });
    }
    if min > max {
        return Err(DomainError::InvertedScale { min, max });
    }
    check_radii(inner, outer)?;

    if min == max {
        return Ok(outer);
    }

    let clamped = score.clamp(min, max);
    let levels = max - min + 1.0;
    let normalized = (clamped - min + 1.0) / levels;
    Ok(inner + normalized * (outer - inner))
}

/// Evenly spaced radii for `ring_count` reference rings.
///
/// Returns `ring_count + 1` radii from `inner` (index 0) to `outer`
/// (index `ring_count`) inclusive. Index 0 coincides with the hub boundary
/// and is usually not drawn.
pub fn ring_radii(ring_count: u32, inner: f64, outer: f64) -> Result<Vec<f64>, DomainError> {
    if ring_count == 0 {
        return Err(DomainError::NonPositiveCount {
            what: "ring count",
            count: 0,
        });
    }
    check_radii(inner, outer)?;

    let step = (outer - inner) / ring_count as f64;
    Ok((0..=ring_count)
        .map(|i| if i == ring_count { outer } else { inner + step * i as f64 })
        .collect())
}
