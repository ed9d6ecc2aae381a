// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser binding for `understory_pinch_zoom`.
//!
//! This crate attaches a [`PinchZoom`](understory_pinch_zoom::PinchZoom)
//! engine to an `HtmlImageElement` when targeting `wasm32`: it measures the
//! image and its parent container, listens for touch events on the
//! container, and writes the resulting CSS `transform` on the image.
//!
//! # Usage
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn zoomable(
//!     image: &web_sys::Element,
//! ) -> Result<understory_pinch_zoom_web::WebPinchZoom, wasm_bindgen::JsValue> {
//!     let config = understory_pinch_zoom::PinchZoomConfig::new().with_max_scale(4.0);
//!     understory_pinch_zoom_web::WebPinchZoom::attach(image, config)
//! }
//! ```
//!
//! Notes:
//! - The image must be loaded (non-zero natural size) and inserted in a
//!   container; otherwise `WebPinchZoom::attach` fails with a `TypeError`.
//! - Call `WebPinchZoom::update` after the container is resized.
//! - The container's padding and borders are read from its computed style.
//! - Touch positions are taken relative to the container's padding edge, so
//!   the container may sit anywhere on the page.
//!
//! The [`css`] helpers are platform-neutral and available on every target.

#![no_std]

extern crate alloc;

pub mod css;

#[cfg(target_arch = "wasm32")]
mod binding;
#[cfg(target_arch = "wasm32")]
mod host;

#[cfg(target_arch = "wasm32")]
pub use binding::WebPinchZoom;
#[cfg(target_arch = "wasm32")]
pub use host::WebImageHost;
