// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Why a target element was rejected at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidTarget {
    /// The element is not mounted inside a container.
    Detached,
    /// The element is not an image.
    NotAnImage,
    /// The image has no natural size yet (for example, it has not loaded).
    EmptyImage,
    /// The container has no room inside its padding and border.
    EmptyContainer,
}

impl fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Detached => "element is not inserted in a container",
            Self::NotAnImage => "element is not an image",
            Self::EmptyImage => "image has no natural size",
            Self::EmptyContainer => "container has no content area",
        })
    }
}

/// Errors returned by [`PinchZoom`](crate::PinchZoom) operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PinchZoomError {
    /// The target element cannot host a pinch/zoom engine.
    InvalidTarget(InvalidTarget),
    /// The platform does not report multi-touch support.
    UnsupportedPlatform,
    /// The engine was used after [`PinchZoom::destroy`](crate::PinchZoom::destroy).
    UseAfterDestroy,
}

impl fmt::Display for PinchZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(reason) => write!(f, "invalid pinch-zoom target: {reason}"),
            Self::UnsupportedPlatform => f.write_str("platform does not support multi-touch"),
            Self::UseAfterDestroy => f.write_str("pinch-zoom engine used after destroy"),
        }
    }
}

impl core::error::Error for PinchZoomError {}

impl From<InvalidTarget> for PinchZoomError {
    fn from(reason: InvalidTarget) -> Self {
        Self::InvalidTarget(reason)
    }
}
