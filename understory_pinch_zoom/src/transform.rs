// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale and offset of the image relative to its container.
//!
//! [`ZoomTransform`] is pure state plus math: it never talks to a host. The
//! engine feeds it the tracked inputs on every move ([`ZoomTransform::track`]),
//! commits baselines at gesture boundaries, and asks it to
//! [`snap`](ZoomTransform::snap) back into bounds when the gesture ends.
//!
//! Offsets are logical: they exclude container padding and the centering
//! applied to an image smaller than its container. Both are added when the
//! transform is rendered, see [`ZoomTransform::element_transform`].

use kurbo::{Insets, Point, Size, Vec2};

use crate::geometry::{
    centering_slack, ceil_extent, clamp_to_limit, distance, round_to_resolution,
};
use crate::input::ActiveInputs;
use crate::render::ElementTransform;

/// Inter-touch distances at or below this are treated as coincident.
pub const MIN_PINCH_DISTANCE: f64 = 1e-6;

/// Measured box of the container element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerMetrics {
    /// Outer size, including padding and border.
    pub size: Size,
    /// Padding on each side.
    pub padding: Insets,
    /// Border width on each side.
    pub border: Insets,
}

impl ContainerMetrics {
    /// Metrics for a container with no padding or border.
    #[must_use]
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            padding: Insets::ZERO,
            border: Insets::ZERO,
        }
    }

    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: impl Into<Insets>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the border widths.
    #[must_use]
    pub fn with_border(mut self, border: impl Into<Insets>) -> Self {
        self.border = border.into();
        self
    }

    /// Size available to the image: outer size minus padding and border.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(
            self.size.width - self.padding.x_value() - self.border.x_value(),
            self.size.height - self.padding.y_value() - self.border.y_value(),
        )
    }
}

/// Container and image sizes, measured on attach and on re-measure.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dimensions {
    /// The container the image is constrained to.
    pub container: ContainerMetrics,
    /// The image's natural (untransformed) size.
    pub natural: Size,
}

impl Dimensions {
    /// Creates dimensions from container metrics and the image's natural size.
    #[must_use]
    pub fn new(container: ContainerMetrics, natural: impl Into<Size>) -> Self {
        Self {
            container,
            natural: natural.into(),
        }
    }

    /// Content size of the container.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container.content_size()
    }

    /// Scale at which the image width matches the container width.
    #[must_use]
    pub fn best_fit_scale(&self) -> f64 {
        self.container_size().width / self.natural.width
    }

    /// Smallest scale the image may rest at: whole image visible, never
    /// upscaled beyond natural size.
    #[must_use]
    pub fn rest_scale_floor(&self) -> f64 {
        let container = self.container_size();
        1.0_f64
            .min(container.width / self.natural.width)
            .min(container.height / self.natural.height)
    }

    /// Image size at `scale`.
    #[must_use]
    pub fn scaled(&self, scale: f64) -> Size {
        self.natural * scale
    }
}

/// Current translation and the baseline it is measured from.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offset {
    /// Translation currently applied.
    pub current: Vec2,
    /// Baseline snapshot that gesture deltas accumulate onto.
    pub saved: Vec2,
}

/// The point on the image that stays under the fingers while pinching.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinchAnchor {
    /// Midpoint of the two touch origins when the anchor was taken.
    pub center: Point,
    /// Anchor position as a fraction of the scaled image size, per axis.
    ///
    /// An axis along which the image did not fill the container uses `0.5`.
    pub fraction: Vec2,
}

/// What a single [`ZoomTransform::track`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Offset (and, for two touches, scale) updated.
    Updated,
    /// Offset updated; the scale update was skipped because the touches
    /// coincide.
    DegeneratePinch,
}

/// Scale and offset of the image, with their gesture baselines.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomTransform {
    dimensions: Dimensions,
    scale: f64,
    scale_saved: f64,
    offset: Offset,
    anchor: Option<PinchAnchor>,
}

impl ZoomTransform {
    /// Creates a transform at best-fit scale with a zero offset.
    ///
    /// Rendering centers the image in any axis where it is smaller than the
    /// container.
    #[must_use]
    pub fn fit(dimensions: Dimensions) -> Self {
        let scale = dimensions.best_fit_scale();
        Self {
            dimensions,
            scale,
            scale_saved: scale,
            offset: Offset::default(),
            anchor: None,
        }
    }

    /// Measured dimensions.
    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Zoom factor at the start of the current gesture segment.
    #[must_use]
    pub fn saved_scale(&self) -> f64 {
        self.scale_saved
    }

    /// Current and saved translation.
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Pinch anchor, once a two-finger move has established one.
    #[must_use]
    pub fn anchor(&self) -> Option<PinchAnchor> {
        self.anchor
    }

    /// Takes the current scale and offset as the new baseline.
    pub fn commit(&mut self) {
        self.offset.saved = self.offset.current;
        self.scale_saved = self.scale;
    }

    /// Returns to the last committed baseline.
    pub fn revert(&mut self) {
        self.offset.current = self.offset.saved;
        self.scale = self.scale_saved;
    }

    /// Forgets the pinch anchor so the next pinch computes a fresh one.
    pub fn reset_anchor(&mut self) {
        self.anchor = None;
    }

    /// Recomputes the transform from the tracked inputs.
    ///
    /// With two inputs the scale follows the ratio of their current to
    /// original distance, capped at `limit` when one is given. The offset is
    /// the saved offset plus the mean input displacement, corrected so the
    /// pinch anchor stays under the fingers.
    pub fn track(&mut self, inputs: &ActiveInputs, limit: Option<f64>) -> TrackOutcome {
        let mut outcome = TrackOutcome::Updated;

        if let Some((a, b)) = inputs.pair() {
            if self.anchor.is_none() {
                self.anchor = Some(self.anchor_at(a.origin.midpoint(b.origin)));
            }

            let original = distance(a.origin, b.origin);
            let current = distance(a.position(), b.position());
            let scale = clamp_to_limit(self.scale_saved * (current / original), limit);
            if original > MIN_PINCH_DISTANCE
                && current > MIN_PINCH_DISTANCE
                && scale.is_finite()
                && scale > 0.0
            {
                self.scale = scale;
            } else {
                #[cfg(feature = "tracing")]
                tracing::debug!(original, current, "coincident touches, scale left unchanged");
                outcome = TrackOutcome::DegeneratePinch;
            }
        }

        let mut offset = self.offset.saved + inputs.average_displacement();
        if let Some(anchor) = self.anchor {
            let growth = self.dimensions.scaled(self.scale - self.scale_saved);
            offset -= Vec2::new(
                growth.width * anchor.fraction.x,
                growth.height * anchor.fraction.y,
            );
        }
        self.offset.current = offset;
        outcome
    }

    /// Moves the transform back into bounds and commits it as the baseline.
    ///
    /// The scale is raised to at least [`Dimensions::rest_scale_floor`] and
    /// is never lowered, so a pinch past the soft limit rests where it was
    /// released. Along each axis where the image overflows the container, a gap at the near
    /// edge or the far edge is closed; along an axis where it fits, the
    /// offset returns to zero.
    ///
    /// Returns `true` if the scale or offset changed.
    pub fn snap(&mut self) -> bool {
        let target = self.scale.max(self.dimensions.rest_scale_floor());

        let image = self.dimensions.scaled(target);
        let container = self.dimensions.container_size();
        let current = self.offset.current;
        let snapped = Vec2::new(
            snap_axis(ceil_extent(image.width), container.width, current.x),
            snap_axis(ceil_extent(image.height), container.height, current.y),
        );

        let changed = target != self.scale || snapped != current;
        self.scale = target;
        self.offset.current = snapped;
        self.commit();
        changed
    }

    /// The transform to render, rounded at `round_factor` resolution.
    ///
    /// The translation is expressed in unscaled image units, so it applies
    /// after the scale: a point `p` of the image lands at
    /// `scale * (p + translation)` in the container.
    #[must_use]
    pub fn element_transform(&self, round_factor: f64) -> ElementTransform {
        let scale = self.scale;
        let origin = self.image_origin();
        ElementTransform {
            scale,
            translation: Vec2::new(
                round_to_resolution(origin.x / scale, round_factor),
                round_to_resolution(origin.y / scale, round_factor),
            ),
        }
    }

    /// Top left of the scaled image in container coordinates, unrounded.
    ///
    /// Container coordinates start at the inner edge of the container's
    /// border, the frame touch positions are reported in.
    #[must_use]
    pub fn image_origin(&self) -> Point {
        let image = self.dimensions.scaled(self.scale);
        let container = self.dimensions.container_size();
        let padding = self.dimensions.container.padding;
        Point::new(
            self.offset.current.x + padding.x0 + centering_slack(container.width, image.width),
            self.offset.current.y + padding.y0 + centering_slack(container.height, image.height),
        )
    }

    fn anchor_at(&self, center: Point) -> PinchAnchor {
        let image = self.dimensions.scaled(self.scale);
        let container = self.dimensions.container_size();
        let origin = self.image_origin();
        let fraction_x = if image.width >= container.width {
            (center.x - origin.x) / image.width
        } else {
            0.5
        };
        let fraction_y = if image.height >= container.height {
            (center.y - origin.y) / image.height
        } else {
            0.5
        };
        PinchAnchor {
            center,
            fraction: Vec2::new(fraction_x, fraction_y),
        }
    }
}

/// Snaps one axis of the offset; `image` is already rounded up.
fn snap_axis(image: f64, container: f64, offset: f64) -> f64 {
    let container_ceil = ceil_extent(container);
    let offset_ceil = ceil_extent(offset);
    if image <= container {
        0.0
    } else if image > container_ceil && offset_ceil > 0.0 {
        0.0
    } else if container_ceil > offset_ceil + image {
        container_ceil - image
    } else {
        offset
    }
}
