// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying the computed transform to the image.

use alloc::string::String;
use core::fmt::{self, Write as _};

use kurbo::{Affine, Vec2};

/// Scale followed by a translation in unscaled image units.
///
/// Matches the CSS transform `scale(s) translate3d(x, y, 0)` with a
/// `0 0` transform origin: an image point `p` is drawn at
/// `scale * (p + translation)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementTransform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Translation applied before scaling.
    pub translation: Vec2,
}

impl ElementTransform {
    /// The same transform as an affine map from image to container space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::scale(self.scale) * Affine::translate(self.translation)
    }

    /// Translation after scaling, i.e. where the image origin lands.
    #[must_use]
    pub fn screen_offset(&self) -> Vec2 {
        self.translation * self.scale
    }
}

impl fmt::Display for ElementTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero turns `-0.0` into `0.0`.
        write!(
            f,
            "scale({}) translate3d({}px, {}px, 0)",
            self.scale + 0.0,
            self.translation.x + 0.0,
            self.translation.y + 0.0
        )
    }
}

/// Something that displays the image and can be transformed.
pub trait RenderTarget {
    /// One-time setup at attach: absolute position at the container's top
    /// left, natural size, `0 0` transform origin, eased transitions.
    fn prepare(&mut self) {}

    /// Enables or disables transition easing on the target.
    ///
    /// The engine disables easing when a gesture starts so the image follows
    /// the fingers without lag, and enables it again for the snap into
    /// bounds when the gesture ends.
    fn set_transitions(&mut self, _enabled: bool) {}

    /// Applies `transform` to the target.
    fn apply_transform(&mut self, transform: &ElementTransform);
}

impl RenderTarget for Affine {
    fn apply_transform(&mut self, transform: &ElementTransform) {
        *self = transform.to_affine();
    }
}

/// Keeps the CSS `transform` value.
impl RenderTarget for String {
    fn apply_transform(&mut self, transform: &ElementTransform) {
        self.clear();
        let _ = write!(self, "{transform}");
    }
}
