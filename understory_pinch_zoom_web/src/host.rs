// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;

use kurbo::Size;
use understory_pinch_zoom::{ContainerMetrics, ElementTransform, ImageHost, RenderTarget};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Element, HtmlElement, HtmlImageElement, Window};

use crate::css::{self, BASE_STYLES, NO_TRANSITION, TRANSITION_DURATION};

/// [`ImageHost`] for an element in the DOM, contained by its parent element.
///
/// The element is not required to be an image or to be mounted; the engine
/// rejects such targets when it attaches.
#[derive(Clone, Debug)]
pub struct WebImageHost {
    window: Window,
    element: Element,
    image: Option<HtmlImageElement>,
    container: Option<HtmlElement>,
}

impl WebImageHost {
    /// Wraps `element`, using its parent element as the container.
    #[must_use]
    pub fn new(window: Window, element: &Element) -> Self {
        Self {
            image: element.dyn_ref::<HtmlImageElement>().cloned(),
            container: element
                .parent_element()
                .and_then(|parent| parent.dyn_into::<HtmlElement>().ok()),
            element: element.clone(),
            window,
        }
    }

    /// The image element, when the target is one.
    #[must_use]
    pub fn image(&self) -> Option<&HtmlImageElement> {
        self.image.as_ref()
    }

    /// The container element listeners are bound to.
    #[must_use]
    pub fn container(&self) -> Option<&HtmlElement> {
        self.container.as_ref()
    }

    fn image_style(&self) -> Option<CssStyleDeclaration> {
        self.image.as_ref().map(|image| image.style())
    }

    fn computed_container_style(&self) -> Option<CssStyleDeclaration> {
        let container = self.container.as_ref()?;
        self.window.get_computed_style(container).ok().flatten()
    }
}

impl RenderTarget for WebImageHost {
    fn prepare(&mut self) {
        if let Some(style) = self.image_style() {
            for (property, value) in BASE_STYLES {
                let _ = style.set_property(property, value);
            }
        }
    }

    fn set_transitions(&mut self, enabled: bool) {
        if let Some(style) = self.image_style() {
            if enabled {
                let _ = style.remove_property(TRANSITION_DURATION);
            } else {
                let _ = style.set_property(TRANSITION_DURATION, NO_TRANSITION);
            }
        }
    }

    fn apply_transform(&mut self, transform: &ElementTransform) {
        if let Some(style) = self.image_style() {
            let _ = style.set_property("transform", &transform.to_string());
        }
    }
}

impl ImageHost for WebImageHost {
    fn supports_multitouch(&self) -> bool {
        self.window.navigator().max_touch_points() > 1
            || js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart"))
                .unwrap_or(false)
    }

    fn is_mounted(&self) -> bool {
        self.container.is_some() && self.element.is_connected()
    }

    fn is_image(&self) -> bool {
        self.image.is_some()
    }

    fn natural_size(&self) -> Size {
        self.image.as_ref().map_or(Size::ZERO, |image| {
            Size::new(
                f64::from(image.natural_width()),
                f64::from(image.natural_height()),
            )
        })
    }

    fn container_metrics(&self) -> ContainerMetrics {
        let Some(container) = &self.container else {
            return ContainerMetrics::new(Size::ZERO);
        };
        let size = Size::new(
            f64::from(container.offset_width()),
            f64::from(container.offset_height()),
        );
        let Some(style) = self.computed_container_style() else {
            return ContainerMetrics::new(size);
        };
        let side = |property: &str| style.get_property_value(property).unwrap_or_default();
        ContainerMetrics::new(size)
            .with_padding(css::insets_from_sides(
                &side("padding-top"),
                &side("padding-right"),
                &side("padding-bottom"),
                &side("padding-left"),
            ))
            .with_border(css::insets_from_sides(
                &side("border-top-width"),
                &side("border-right-width"),
                &side("border-bottom-width"),
                &side("border-left-width"),
            ))
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }
}
