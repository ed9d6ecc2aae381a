// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Zoom limits for a [`PinchZoom`](crate::PinchZoom) engine.
///
/// With the `serde` feature enabled this deserializes from the camelCase
/// keys `maxScale` and `hardScaleLimit`; missing keys take their defaults and
/// unknown keys are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PinchZoomConfig {
    /// Largest zoom factor, relative to the image's natural size.
    pub max_scale: f64,
    /// Whether [`max_scale`](Self::max_scale) also caps the scale while a
    /// pinch is in progress.
    ///
    /// When `false` the pinch may overshoot `max_scale`, and the image rests
    /// at the overshoot when the gesture ends.
    pub hard_scale_limit: bool,
}

impl PinchZoomConfig {
    /// Default maximum scale.
    pub const DEFAULT_MAX_SCALE: f64 = 5.0;

    /// Creates the default configuration: `max_scale = 5`, hard limit on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_scale: Self::DEFAULT_MAX_SCALE,
            hard_scale_limit: true,
        }
    }

    /// Sets the maximum scale.
    #[must_use]
    pub const fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Sets whether the maximum scale is enforced during tracking.
    #[must_use]
    pub const fn with_hard_scale_limit(mut self, hard: bool) -> Self {
        self.hard_scale_limit = hard;
        self
    }

    /// Returns a copy with an unusable `max_scale` replaced by the default.
    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        if self.max_scale.is_finite() && self.max_scale > 0.0 {
            self
        } else {
            Self {
                max_scale: Self::DEFAULT_MAX_SCALE,
                ..self
            }
        }
    }

    /// The cap applied while tracking, if any.
    #[must_use]
    pub(crate) fn tracking_limit(&self) -> Option<f64> {
        self.hard_scale_limit.then_some(self.max_scale)
    }
}

impl Default for PinchZoomConfig {
    fn default() -> Self {
        Self::new()
    }
}
