// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The platform seam: what the engine needs to know about the image and its
//! container.

use alloc::vec::Vec;

use kurbo::Size;

use crate::event::TouchId;
use crate::render::{ElementTransform, RenderTarget};
use crate::transform::ContainerMetrics;

/// A mounted image element and its container, as seen by the engine.
///
/// Measurements are read at attach and on every re-measure; nothing is
/// cached on the host side.
pub trait ImageHost: RenderTarget {
    /// Whether the platform delivers more than one concurrent touch.
    fn supports_multitouch(&self) -> bool;

    /// Whether the element is inserted in a container.
    fn is_mounted(&self) -> bool;

    /// Whether the element is an image.
    fn is_image(&self) -> bool;

    /// The image's natural size in pixels.
    fn natural_size(&self) -> Size;

    /// Current metrics of the container.
    fn container_metrics(&self) -> ContainerMetrics;

    /// Device pixels per layout pixel.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Routes further events for `id` to the container.
    fn capture_input(&mut self, _id: TouchId) {}

    /// Undoes [`capture_input`](Self::capture_input).
    fn release_input(&mut self, _id: TouchId) {}
}

/// An in-memory [`ImageHost`] with fixed measurements.
///
/// Records everything the engine asks of it, which makes it suitable for
/// tests, benchmarks, and driving the engine without a UI toolkit.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    /// Natural image size.
    pub natural: Size,
    /// Container metrics.
    pub container: ContainerMetrics,
    /// Device pixel ratio.
    pub device_pixel_ratio: f64,
    /// Reported multi-touch support.
    pub multitouch: bool,
    /// Whether the image is reported as mounted.
    pub mounted: bool,
    /// Whether the element is reported as an image.
    pub image: bool,
    /// Last applied transform.
    pub transform: Option<ElementTransform>,
    /// Number of transforms applied.
    pub renders: usize,
    /// Whether `prepare` has run.
    pub prepared: bool,
    /// Last transition state.
    pub transitions: bool,
    /// Touches currently captured.
    pub captured: Vec<TouchId>,
}

impl HeadlessHost {
    /// A mounted, multi-touch capable host.
    #[must_use]
    pub fn new(container: ContainerMetrics, natural: impl Into<Size>) -> Self {
        Self {
            natural: natural.into(),
            container,
            device_pixel_ratio: 1.0,
            multitouch: true,
            mounted: true,
            image: true,
            transform: None,
            renders: 0,
            prepared: false,
            transitions: true,
            captured: Vec::new(),
        }
    }

    /// Sets the device pixel ratio.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }
}

impl RenderTarget for HeadlessHost {
    fn prepare(&mut self) {
        self.prepared = true;
        self.transitions = true;
    }

    fn set_transitions(&mut self, enabled: bool) {
        self.transitions = enabled;
    }

    fn apply_transform(&mut self, transform: &ElementTransform) {
        self.transform = Some(*transform);
        self.renders += 1;
    }
}

impl ImageHost for HeadlessHost {
    fn supports_multitouch(&self) -> bool {
        self.multitouch
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn is_image(&self) -> bool {
        self.image
    }

    fn natural_size(&self) -> Size {
        self.natural
    }

    fn container_metrics(&self) -> ContainerMetrics {
        self.container
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn capture_input(&mut self, id: TouchId) {
        self.captured.push(id);
    }

    fn release_input(&mut self, id: TouchId) {
        self.captured.retain(|captured| *captured != id);
    }
}
