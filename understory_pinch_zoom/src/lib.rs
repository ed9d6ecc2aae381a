// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pinch Zoom: pinch-to-zoom and pan for an image in a container.
//!
//! This crate turns raw touch input into a scale + translation for a single
//! image displayed inside a bounding container. One or two touches are
//! tracked at a time: one touch pans, two touches pinch around the point
//! under the fingers. When the last touch lifts the image snaps back into
//! bounds, never resting smaller than the size at which it is fully visible
//! and never leaving a gap at an edge it overflows.
//!
//! It does **not** own any DOM or windowing code. Callers are expected to:
//! - Implement [`ImageHost`] for their image element (measurements, capture)
//!   and [`RenderTarget`] for applying the transform.
//! - Translate platform touch events into [`TouchEvent`] and feed them to
//!   [`PinchZoom::handle`].
//! - Apply the returned [`EventResponse`] (`preventDefault`,
//!   `stopPropagation`) to the platform event.
//!
//! `understory_pinch_zoom_web` does all three for an `HtmlImageElement`.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_pinch_zoom::{
//!     ContainerMetrics, HeadlessHost, PinchZoom, PinchZoomConfig, TouchEvent, TouchEventKind,
//!     TouchPoint,
//! };
//!
//! // A 600x400 image in a 300x300 container starts at half size, centered.
//! let host = HeadlessHost::new(ContainerMetrics::new((300.0, 300.0)), (600.0, 400.0));
//! let mut zoom = PinchZoom::new(host, PinchZoomConfig::default()).unwrap();
//! assert_eq!(
//!     zoom.host().transform.unwrap().to_string(),
//!     "scale(0.5) translate3d(0px, 100px, 0)"
//! );
//!
//! // Drag one finger 40px to the right.
//! let down = TouchEvent::start(0.0, &[], &[TouchPoint::new(7, (100.0, 100.0))]);
//! let drag = TouchEvent::moved(16.0, &[TouchPoint::new(7, (140.0, 100.0))]);
//! zoom.handle(TouchEventKind::Start, &down).unwrap();
//! let response = zoom.handle(TouchEventKind::Move, &drag).unwrap();
//! assert!(response.prevent_default);
//! assert_eq!(zoom.debug_info().unwrap().offset.current.x, 40.0);
//!
//! // Lifting the finger snaps the image back: it already fills the width.
//! let up = TouchEvent::end(32.0, &[TouchPoint::new(7, (140.0, 100.0))], &[]);
//! zoom.handle(TouchEventKind::End, &up).unwrap();
//! assert_eq!(zoom.debug_info().unwrap().offset.current.x, 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to Kurbo. Disable it and enable `libm` for
//!   `no_std` builds.
//! - `serde`: (de)serialize [`PinchZoomConfig`] with camelCase keys.
//! - `tracing`: emit `tracing` events at gesture transitions.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod error;
mod event;
pub mod geometry;
mod gesture;
mod host;
mod input;
mod render;
mod transform;

pub use config::PinchZoomConfig;
pub use engine::{Lifecycle, PinchZoom, PinchZoomDebugInfo};
pub use error::{InvalidTarget, PinchZoomError};
pub use event::{
    EventResponse, ListenerTable, TouchEvent, TouchEventKind, TouchId, TouchList, TouchPoint,
};
pub use gesture::{GesturePhase, GestureStep, GestureTracker, TouchIds};
pub use host::{HeadlessHost, ImageHost};
pub use input::{ActiveInput, ActiveInputs, CapturedInputs, MAX_ACTIVE_INPUTS};
pub use render::{ElementTransform, RenderTarget};
pub use transform::{
    ContainerMetrics, Dimensions, MIN_PINCH_DISTANCE, Offset, PinchAnchor, TrackOutcome,
    ZoomTransform,
};
