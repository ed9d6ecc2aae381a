// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers shared by the gesture and transform code.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`/`ceil`
use kurbo::Point;

/// Euclidean distance between two points.
#[must_use]
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Clamps `value` to at most `limit`, when a limit is present.
///
/// There is no lower bound; continuous pinch tracking only caps the upper end
/// of the scale.
#[must_use]
#[inline]
pub fn clamp_to_limit(value: f64, limit: Option<f64>) -> f64 {
    match limit {
        Some(limit) => value.min(limit),
        None => value,
    }
}

/// Rounds `value` to the nearest step of `1 / factor`.
///
/// With `factor` set to the device pixel ratio this snaps a length to the
/// nearest physical pixel. Non-finite or non-positive factors behave as `1.0`.
#[must_use]
pub fn round_to_resolution(value: f64, factor: f64) -> f64 {
    let factor = sanitize_round_factor(factor);
    (value * factor).round() / factor
}

/// Returns a usable rounding factor, falling back to `1.0`.
#[must_use]
#[inline]
pub fn sanitize_round_factor(factor: f64) -> f64 {
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

/// Half of the space left over when `content` is smaller than `container`.
///
/// Returns `0.0` when the content fills or overflows the container.
#[must_use]
#[inline]
pub fn centering_slack(container: f64, content: f64) -> f64 {
    if container > content {
        (container - content) / 2.0
    } else {
        0.0
    }
}

/// Rounds an extent up to a whole pixel.
#[must_use]
#[inline]
pub(crate) fn ceil_extent(value: f64) -> f64 {
    value.ceil()
}
