// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS values the binding reads from the container and writes on the image.

use kurbo::Insets;

/// Inline styles set on the image when the engine attaches.
///
/// The image is taken out of flow at the container's top left at its natural
/// size, so the engine's transform alone decides where it appears.
pub const BASE_STYLES: [(&str, &str); 10] = [
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "auto"),
    ("height", "auto"),
    ("max-width", "none"),
    ("max-height", "none"),
    ("transform-origin", "0 0"),
    ("transition-property", "transform"),
    ("transition-timing-function", "ease-out"),
];

/// Property toggled to turn easing off while a gesture is tracked.
pub const TRANSITION_DURATION: &str = "transition-duration";

/// Duration written while easing is off.
pub const NO_TRANSITION: &str = "0s";

/// Parses the leading number of a computed CSS length such as `"12.5px"`.
///
/// Anything without a leading number (`""`, `"auto"`) reads as `0.0`.
#[must_use]
pub fn parse_px(value: &str) -> f64 {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().unwrap_or(0.0)
}

/// Builds insets from the four computed side values, in CSS order.
#[must_use]
pub fn insets_from_sides(top: &str, right: &str, bottom: &str, left: &str) -> Insets {
    Insets::new(
        parse_px(left),
        parse_px(top),
        parse_px(right),
        parse_px(bottom),
    )
}
