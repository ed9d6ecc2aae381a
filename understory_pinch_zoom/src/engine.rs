// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pinch/zoom engine: one instance per image.

use crate::config::PinchZoomConfig;
use crate::error::{InvalidTarget, PinchZoomError};
use crate::event::{EventResponse, TouchEvent, TouchEventKind, TouchId};
use crate::geometry::sanitize_round_factor;
use crate::gesture::{GesturePhase, GestureStep, GestureTracker};
use crate::host::ImageHost;
use crate::render::ElementTransform;
use crate::transform::{Dimensions, Offset, PinchAnchor, ZoomTransform};

/// Whether an engine may still be used.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Listening and rendering.
    Attached,
    /// Torn down; every operation fails with [`PinchZoomError::UseAfterDestroy`].
    Destroyed,
}

/// Pinch-to-zoom and pan for one image inside its container.
///
/// The engine owns all gesture state. Bindings forward platform touch events
/// to [`handle`](Self::handle) (or the per-kind handlers) and apply the
/// returned [`EventResponse`]; the engine renders through the host.
///
/// ```
/// use understory_pinch_zoom::{
///     ContainerMetrics, HeadlessHost, PinchZoom, PinchZoomConfig, TouchEvent, TouchPoint,
/// };
///
/// let host = HeadlessHost::new(ContainerMetrics::new((300.0, 300.0)), (600.0, 400.0));
/// let mut zoom = PinchZoom::new(host, PinchZoomConfig::default()).unwrap();
/// assert_eq!(zoom.debug_info().unwrap().scale, 0.5);
///
/// // Spread two fingers from 100px to 200px apart.
/// let (a, b) = (TouchPoint::new(1, (100.0, 150.0)), TouchPoint::new(2, (200.0, 150.0)));
/// zoom.on_touch_start(&TouchEvent::start(0.0, &[], &[a, b])).unwrap();
/// let (a, b) = (TouchPoint::new(1, (50.0, 150.0)), TouchPoint::new(2, (250.0, 150.0)));
/// zoom.on_touch_move(&TouchEvent::moved(16.0, &[a, b])).unwrap();
/// assert!((zoom.debug_info().unwrap().scale - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct PinchZoom<H: ImageHost> {
    host: H,
    config: PinchZoomConfig,
    transform: ZoomTransform,
    tracker: GestureTracker,
    round_factor: f64,
    lifecycle: Lifecycle,
}

impl<H: ImageHost> PinchZoom<H> {
    /// Attaches an engine to `host`.
    ///
    /// Validates the target, prepares it, and renders the best-fit transform:
    /// the image width matches the container's content width and the image
    /// is centered along any axis where it is smaller than the container.
    pub fn new(mut host: H, config: PinchZoomConfig) -> Result<Self, PinchZoomError> {
        let (dimensions, round_factor) = measure(&host)?;
        if !host.supports_multitouch() {
            return Err(PinchZoomError::UnsupportedPlatform);
        }

        host.prepare();
        let mut engine = Self {
            host,
            config: config.sanitized(),
            transform: ZoomTransform::fit(dimensions),
            tracker: GestureTracker::new(),
            round_factor,
            lifecycle: Lifecycle::Attached,
        };
        engine.render();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            scale = engine.transform.scale(),
            container_width = dimensions.container_size().width,
            container_height = dimensions.container_size().height,
            "pinch-zoom attached"
        );
        Ok(engine)
    }

    /// The host this engine renders to.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to change what it reports before a
    /// re-measure.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Effective configuration.
    #[must_use]
    pub fn config(&self) -> &PinchZoomConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Dispatches `event` to the handler for `kind`.
    pub fn handle(
        &mut self,
        kind: TouchEventKind,
        event: &TouchEvent,
    ) -> Result<EventResponse, PinchZoomError> {
        match kind {
            TouchEventKind::Start => self.on_touch_start(event),
            TouchEventKind::Move => self.on_touch_move(event),
            TouchEventKind::End => self.on_touch_end(event),
            TouchEventKind::Cancel => self.on_touch_cancel(event),
        }
    }

    /// Registers touches that began on the target.
    pub fn on_touch_start(&mut self, event: &TouchEvent) -> Result<EventResponse, PinchZoomError> {
        self.ensure_attached()?;
        match self.tracker.start(event) {
            GestureStep::Began(added) => {
                self.host.set_transitions(false);
                self.capture(&added);
                #[cfg(feature = "tracing")]
                tracing::debug!(touches = added.len(), "gesture began");
            }
            GestureStep::Joined(added) => {
                self.transform.commit();
                self.transform.reset_anchor();
                self.capture(&added);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    touches = self.tracker.inputs().len(),
                    "touch joined gesture"
                );
            }
            _ => {}
        }
        Ok(if self.tracker.is_tracking() {
            EventResponse::STOP
        } else {
            EventResponse::IGNORED
        })
    }

    /// Follows tracked touches and re-renders.
    pub fn on_touch_move(&mut self, event: &TouchEvent) -> Result<EventResponse, PinchZoomError> {
        self.ensure_attached()?;
        if !self.tracker.is_tracking() {
            return Ok(EventResponse::IGNORED);
        }
        if self.tracker.moved(event) == GestureStep::Moved {
            self.transform
                .track(self.tracker.inputs(), self.config.tracking_limit());
            self.render();
        }
        Ok(EventResponse::CONSUME)
    }

    /// Stops tracking lifted touches; snaps into bounds once none remain.
    pub fn on_touch_end(&mut self, event: &TouchEvent) -> Result<EventResponse, PinchZoomError> {
        self.ensure_attached()?;
        if event.touches.is_empty() {
            self.transform.reset_anchor();
        }
        match self.tracker.end(event) {
            GestureStep::Lifted(removed) => {
                self.release(&removed);
                // Remaining touches were re-anchored; the baseline follows.
                self.transform.commit();
            }
            GestureStep::Ended(removed) => {
                self.release(&removed);
                self.finish_gesture(false);
            }
            _ => {}
        }
        Ok(EventResponse::IGNORED)
    }

    /// Handles a platform cancel; see [`cancel`](Self::cancel).
    pub fn on_touch_cancel(
        &mut self,
        _event: &TouchEvent,
    ) -> Result<EventResponse, PinchZoomError> {
        self.cancel()?;
        Ok(EventResponse::IGNORED)
    }

    /// Abandons the gesture in progress.
    ///
    /// Every tracked touch is dropped, the transform returns to the last
    /// committed baseline, and the boundary snap runs. Hosts that detect a
    /// lost touch sequence call this directly.
    pub fn cancel(&mut self) -> Result<(), PinchZoomError> {
        self.ensure_attached()?;
        if let GestureStep::Ended(removed) = self.tracker.cancel() {
            self.release(&removed);
            self.transform.revert();
            self.finish_gesture(true);
            #[cfg(feature = "tracing")]
            tracing::debug!(touches = removed.len(), "gesture cancelled");
        }
        Ok(())
    }

    /// Re-measures the image and container and resets to the best-fit,
    /// centered transform.
    ///
    /// Call after the container is resized or the image source changes. If
    /// the new measurements are unusable the previous state is kept and the
    /// reason is returned.
    pub fn update(&mut self) -> Result<(), PinchZoomError> {
        self.ensure_attached()?;
        let (dimensions, round_factor) = measure(&self.host)?;
        self.transform = ZoomTransform::fit(dimensions);
        self.round_factor = round_factor;
        // A gesture in progress continues from the new baseline.
        self.tracker.reanchor();
        self.render();
        #[cfg(feature = "tracing")]
        tracing::debug!(scale = self.transform.scale(), "pinch-zoom re-measured");
        Ok(())
    }

    /// Tears the engine down. Captured touches are released and every later
    /// call fails with [`PinchZoomError::UseAfterDestroy`].
    pub fn destroy(&mut self) -> Result<(), PinchZoomError> {
        self.ensure_attached()?;
        self.tracker.cancel();
        self.release_all();
        self.lifecycle = Lifecycle::Destroyed;
        #[cfg(feature = "tracing")]
        tracing::debug!("pinch-zoom destroyed");
        Ok(())
    }

    /// The transform currently applied to the image.
    pub fn element_transform(&self) -> Result<ElementTransform, PinchZoomError> {
        self.ensure_attached()?;
        Ok(self.transform.element_transform(self.round_factor))
    }

    /// Snapshot of the engine state for debugging and inspection.
    pub fn debug_info(&self) -> Result<PinchZoomDebugInfo, PinchZoomError> {
        self.ensure_attached()?;
        Ok(PinchZoomDebugInfo {
            phase: self.tracker.phase(),
            active_inputs: self.tracker.inputs().len(),
            captured_inputs: self.tracker.captured().len(),
            scale: self.transform.scale(),
            saved_scale: self.transform.saved_scale(),
            offset: self.transform.offset(),
            anchor: self.transform.anchor(),
            dimensions: *self.transform.dimensions(),
            round_factor: self.round_factor,
            element_transform: self.transform.element_transform(self.round_factor),
        })
    }

    fn ensure_attached(&self) -> Result<(), PinchZoomError> {
        match self.lifecycle {
            Lifecycle::Attached => Ok(()),
            Lifecycle::Destroyed => Err(PinchZoomError::UseAfterDestroy),
        }
    }

    fn finish_gesture(&mut self, force_render: bool) {
        self.transform.reset_anchor();
        // The settle into bounds is eased.
        self.host.set_transitions(true);
        let changed = self.transform.snap();
        if changed || force_render {
            self.render();
        }
        self.release_all();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            scale = self.transform.scale(),
            x = self.transform.offset().current.x,
            y = self.transform.offset().current.y,
            snapped = changed,
            "gesture ended"
        );
    }

    fn render(&mut self) {
        let transform = self.transform.element_transform(self.round_factor);
        self.host.apply_transform(&transform);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            scale = transform.scale,
            x = transform.translation.x,
            y = transform.translation.y,
            "rendered"
        );
    }

    fn capture(&mut self, ids: &[TouchId]) {
        for &id in ids {
            if self.tracker.captured_mut().capture(id) {
                self.host.capture_input(id);
            }
        }
    }

    fn release(&mut self, ids: &[TouchId]) {
        for &id in ids {
            if self.tracker.captured_mut().release(id) {
                self.host.release_input(id);
            }
        }
    }

    fn release_all(&mut self) {
        for id in self.tracker.captured_mut().drain() {
            self.host.release_input(id);
        }
    }
}

/// Reads and validates the host's measurements.
fn measure<H: ImageHost>(host: &H) -> Result<(Dimensions, f64), InvalidTarget> {
    if !host.is_mounted() {
        return Err(InvalidTarget::Detached);
    }
    if !host.is_image() {
        return Err(InvalidTarget::NotAnImage);
    }
    let natural = host.natural_size();
    if !(natural.is_finite() && natural.width > 0.0 && natural.height > 0.0) {
        return Err(InvalidTarget::EmptyImage);
    }
    let container = host.container_metrics();
    let content = container.content_size();
    if !(content.is_finite() && content.width > 0.0 && content.height > 0.0) {
        return Err(InvalidTarget::EmptyContainer);
    }
    let round_factor = sanitize_round_factor(host.device_pixel_ratio());
    Ok((Dimensions::new(container, natural), round_factor))
}

/// Debug snapshot of a [`PinchZoom`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchZoomDebugInfo {
    /// Gesture phase.
    pub phase: GesturePhase,
    /// Number of tracked touches.
    pub active_inputs: usize,
    /// Number of touches captured on the host.
    pub captured_inputs: usize,
    /// Current zoom factor.
    pub scale: f64,
    /// Zoom factor the current gesture segment started from.
    pub saved_scale: f64,
    /// Logical offset and its baseline.
    pub offset: Offset,
    /// Pinch anchor, if one is established.
    pub anchor: Option<PinchAnchor>,
    /// Measured container and image sizes.
    pub dimensions: Dimensions,
    /// Resolution the rendered translation is rounded to.
    pub round_factor: f64,
    /// Transform currently applied to the image.
    pub element_transform: ElementTransform,
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Insets, Vec2};

    use super::*;
    use crate::event::TouchPoint;
    use crate::host::HeadlessHost;
    use crate::transform::ContainerMetrics;

    fn touch(id: i64, x: f64, y: f64) -> TouchPoint {
        TouchPoint::new(id, (x, y))
    }

    fn host() -> HeadlessHost {
        HeadlessHost::new(ContainerMetrics::new((300.0, 300.0)), (600.0, 400.0))
    }

    fn attach() -> PinchZoom<HeadlessHost> {
        PinchZoom::new(host(), PinchZoomConfig::default()).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn attach_fits_width_and_centers() {
        let zoom = attach();
        let info = zoom.debug_info().unwrap();
        assert_eq!(info.scale, 0.5);
        assert_eq!(info.phase, GesturePhase::Idle);
        assert!(zoom.host().prepared);
        assert_eq!(zoom.host().renders, 1);
        assert_eq!(
            zoom.host().transform,
            Some(ElementTransform {
                scale: 0.5,
                translation: Vec2::new(0.0, 100.0),
            })
        );
    }

    #[test]
    fn attach_rejects_bad_targets() {
        let mut detached = host();
        detached.mounted = false;
        let mut not_image = host();
        not_image.image = false;
        let mut empty = host();
        empty.natural = kurbo::Size::ZERO;
        let mut no_room = host();
        no_room.container = ContainerMetrics::new((20.0, 20.0)).with_padding(Insets::uniform(10.0));
        let mut single_touch = host();
        single_touch.multitouch = false;

        let config = PinchZoomConfig::default();
        let err = |host| PinchZoom::new(host, config).unwrap_err();
        assert_eq!(err(detached), PinchZoomError::from(InvalidTarget::Detached));
        assert_eq!(err(not_image), PinchZoomError::from(InvalidTarget::NotAnImage));
        assert_eq!(err(empty), PinchZoomError::from(InvalidTarget::EmptyImage));
        assert_eq!(err(no_room), PinchZoomError::from(InvalidTarget::EmptyContainer));
        assert_eq!(err(single_touch), PinchZoomError::UnsupportedPlatform);
    }

    #[test]
    fn invalid_max_scale_falls_back_to_default() {
        let config = PinchZoomConfig::new().with_max_scale(f64::NAN);
        let zoom = PinchZoom::new(host(), config).unwrap();
        assert_eq!(zoom.config().max_scale, PinchZoomConfig::DEFAULT_MAX_SCALE);
    }

    #[test]
    fn single_finger_drag_pans() {
        let mut zoom = attach();
        let start = zoom
            .on_touch_start(&TouchEvent::start(0.0, &[], &[touch(1, 100.0, 100.0)]))
            .unwrap();
        assert_eq!(start, EventResponse::STOP);
        assert!(!zoom.host().transitions);

        let moved = zoom
            .on_touch_move(&TouchEvent::moved(16.0, &[touch(1, 130.0, 90.0)]))
            .unwrap();
        assert_eq!(moved, EventResponse::CONSUME);

        let info = zoom.debug_info().unwrap();
        assert_eq!(info.scale, 0.5);
        assert_eq!(info.offset.current, Vec2::new(30.0, -10.0));
        assert_eq!(info.element_transform.translation, Vec2::new(60.0, 80.0));
    }

    #[test]
    fn pinch_doubles_distance_doubles_scale() {
        let mut zoom = attach();
        zoom.on_touch_start(&TouchEvent::start(
            0.0,
            &[],
            &[touch(1, 100.0, 150.0), touch(2, 200.0, 150.0)],
        ))
        .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(
            16.0,
            &[touch(1, 50.0, 150.0), touch(2, 250.0, 150.0)],
        ))
        .unwrap();
        assert!(close(zoom.debug_info().unwrap().scale, 1.0));
    }

    fn spread_fifteen_fold(zoom: &mut PinchZoom<HeadlessHost>) {
        zoom.on_touch_start(&TouchEvent::start(
            0.0,
            &[],
            &[touch(1, 140.0, 150.0), touch(2, 160.0, 150.0)],
        ))
        .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(
            16.0,
            &[touch(1, 0.0, 150.0), touch(2, 300.0, 150.0)],
        ))
        .unwrap();
    }

    #[test]
    fn hard_limit_caps_while_pinching() {
        let mut zoom = attach();
        spread_fifteen_fold(&mut zoom);
        assert_eq!(zoom.debug_info().unwrap().scale, 5.0);
    }

    #[test]
    fn soft_limit_overshoot_rests_where_released() {
        let config = PinchZoomConfig::new().with_hard_scale_limit(false);
        let mut zoom = PinchZoom::new(host(), config).unwrap();
        spread_fifteen_fold(&mut zoom);
        assert!(close(zoom.debug_info().unwrap().scale, 7.5));

        zoom.on_touch_end(&TouchEvent::end(
            32.0,
            &[touch(1, 0.0, 150.0), touch(2, 300.0, 150.0)],
            &[],
        ))
        .unwrap();
        let info = zoom.debug_info().unwrap();
        assert!(close(info.scale, 7.5), "scale was {}", info.scale);
        assert_eq!(info.saved_scale, info.scale);
    }

    #[test]
    fn release_snaps_near_edge_gap() {
        let mut zoom = attach();
        // Pinch from 40px to 160px apart: 0.5 -> 2.0.
        zoom.on_touch_start(&TouchEvent::start(
            0.0,
            &[],
            &[touch(1, 100.0, 150.0), touch(2, 140.0, 150.0)],
        ))
        .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(
            16.0,
            &[touch(1, 40.0, 150.0), touch(2, 200.0, 150.0)],
        ))
        .unwrap();
        assert!(close(zoom.debug_info().unwrap().scale, 2.0));

        // Lift one finger and drag the other far right, opening a gap on the left.
        zoom.on_touch_end(&TouchEvent::end(
            32.0,
            &[touch(1, 40.0, 150.0)],
            &[touch(2, 200.0, 150.0)],
        ))
        .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(48.0, &[touch(2, 1200.0, 150.0)]))
            .unwrap();
        assert!(zoom.debug_info().unwrap().offset.current.x > 0.0);

        zoom.on_touch_end(&TouchEvent::end(64.0, &[touch(2, 1200.0, 150.0)], &[]))
            .unwrap();
        let info = zoom.debug_info().unwrap();
        assert_eq!(info.phase, GesturePhase::Idle);
        assert!(close(info.scale, 2.0));
        assert_eq!(info.offset.current, Vec2::new(0.0, -300.0));
        assert_eq!(info.offset.saved, info.offset.current);
    }

    #[test]
    fn end_without_remaining_touches_resets_anchor_only() {
        let mut zoom = attach();
        let (a, b) = (touch(1, 100.0, 150.0), touch(2, 200.0, 150.0));
        zoom.on_touch_start(&TouchEvent::start(0.0, &[], &[a, b]))
            .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(
            16.0,
            &[touch(1, 80.0, 150.0), touch(2, 220.0, 150.0)],
        ))
        .unwrap();
        assert!(zoom.debug_info().unwrap().anchor.is_some());

        // Touch 2 lifts, but the platform lists no remaining touches even
        // though touch 1 is still tracked.
        zoom.on_touch_end(&TouchEvent::end(32.0, &[], &[b])).unwrap();
        let info = zoom.debug_info().unwrap();
        assert_eq!(info.anchor, None);
        assert_eq!(info.phase, GesturePhase::Tracking);
        assert_eq!(info.active_inputs, 1);
        assert_eq!(zoom.host().captured, vec![TouchId(1)]);
        assert!(!zoom.host().transitions);
    }

    #[test]
    fn easing_returns_when_the_gesture_ends() {
        let mut zoom = attach();
        let a = touch(1, 100.0, 100.0);
        zoom.on_touch_start(&TouchEvent::start(0.0, &[], &[a])).unwrap();
        assert!(!zoom.host().transitions);
        zoom.on_touch_end(&TouchEvent::end(16.0, &[], &[a])).unwrap();
        assert!(zoom.host().transitions);
    }

    #[test]
    fn second_finger_joining_does_not_jump() {
        let mut zoom = attach();
        zoom.on_touch_start(&TouchEvent::start(0.0, &[], &[touch(1, 100.0, 100.0)]))
            .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(16.0, &[touch(1, 150.0, 120.0)]))
            .unwrap();
        let before = zoom.host().transform;

        zoom.on_touch_start(&TouchEvent::start(
            32.0,
            &[touch(1, 150.0, 120.0)],
            &[touch(2, 200.0, 200.0)],
        ))
        .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(
            48.0,
            &[touch(1, 150.0, 120.0), touch(2, 200.0, 200.0)],
        ))
        .unwrap();

        assert_eq!(zoom.host().transform, before);
        assert!(zoom.debug_info().unwrap().anchor.is_some());
    }

    #[test]
    fn lifting_one_finger_does_not_jump() {
        let mut zoom = attach();
        zoom.on_touch_start(&TouchEvent::start(
            0.0,
            &[],
            &[touch(1, 100.0, 150.0), touch(2, 200.0, 150.0)],
        ))
        .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(
            16.0,
            &[touch(1, 60.0, 140.0), touch(2, 240.0, 170.0)],
        ))
        .unwrap();
        let before = zoom.host().transform;

        zoom.on_touch_end(&TouchEvent::end(
            32.0,
            &[touch(1, 60.0, 140.0)],
            &[touch(2, 240.0, 170.0)],
        ))
        .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(48.0, &[touch(2, 240.0, 170.0)]))
            .unwrap();
        assert_eq!(zoom.host().transform, before);
    }

    #[test]
    fn captures_follow_tracked_touches() {
        let mut zoom = attach();
        let (a, b) = (touch(1, 0.0, 0.0), touch(2, 50.0, 0.0));
        zoom.on_touch_start(&TouchEvent::start(0.0, &[], &[a])).unwrap();
        zoom.on_touch_start(&TouchEvent::start(1.0, &[a], &[b])).unwrap();
        assert_eq!(zoom.host().captured, vec![TouchId(1), TouchId(2)]);

        zoom.on_touch_end(&TouchEvent::end(2.0, &[a], &[b])).unwrap();
        assert_eq!(zoom.host().captured, vec![TouchId(2)]);
        assert_eq!(zoom.debug_info().unwrap().captured_inputs, 1);

        zoom.on_touch_end(&TouchEvent::end(3.0, &[b], &[])).unwrap();
        assert!(zoom.host().captured.is_empty());
    }

    #[test]
    fn cancel_reverts_to_committed_baseline() {
        let mut zoom = attach();
        let initial = zoom.host().transform;
        zoom.handle(
            TouchEventKind::Start,
            &TouchEvent::start(0.0, &[], &[touch(1, 100.0, 100.0)]),
        )
        .unwrap();
        zoom.handle(
            TouchEventKind::Move,
            &TouchEvent::moved(16.0, &[touch(1, 180.0, 40.0)]),
        )
        .unwrap();
        assert_ne!(zoom.host().transform, initial);

        let response = zoom
            .handle(TouchEventKind::Cancel, &TouchEvent::new(32.0))
            .unwrap();
        assert_eq!(response, EventResponse::IGNORED);
        assert_eq!(zoom.host().transform, initial);
        assert_eq!(zoom.debug_info().unwrap().phase, GesturePhase::Idle);
        assert!(zoom.host().captured.is_empty());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut zoom = attach();
        let response = zoom
            .on_touch_move(&TouchEvent::moved(0.0, &[touch(1, 10.0, 10.0)]))
            .unwrap();
        assert_eq!(response, EventResponse::IGNORED);
        assert_eq!(zoom.host().renders, 1);
    }

    #[test]
    fn update_refits_to_new_container() {
        let mut zoom = attach();
        zoom.host_mut().container = ContainerMetrics::new((600.0, 600.0));
        zoom.host_mut().device_pixel_ratio = 2.0;
        zoom.update().unwrap();

        let info = zoom.debug_info().unwrap();
        assert_eq!(info.scale, 1.0);
        assert_eq!(info.round_factor, 2.0);
        assert_eq!(info.element_transform.translation, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn update_keeps_state_on_bad_measurements() {
        let mut zoom = attach();
        zoom.host_mut().natural = kurbo::Size::ZERO;
        assert_eq!(
            zoom.update(),
            Err(PinchZoomError::InvalidTarget(InvalidTarget::EmptyImage))
        );
        assert_eq!(zoom.debug_info().unwrap().scale, 0.5);
    }

    #[test]
    fn translation_rounds_at_device_pixel_ratio() {
        let host = host().with_device_pixel_ratio(2.0);
        let mut zoom = PinchZoom::new(host, PinchZoomConfig::default()).unwrap();
        zoom.on_touch_start(&TouchEvent::start(0.0, &[], &[touch(1, 0.0, 0.0)]))
            .unwrap();
        zoom.on_touch_move(&TouchEvent::moved(16.0, &[touch(1, 10.3, 0.0)]))
            .unwrap();
        let translation = zoom.element_transform().unwrap().translation;
        assert_eq!(translation.x, 20.5);
    }

    #[test]
    fn unusable_device_pixel_ratio_reads_as_one() {
        for ratio in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let host = host().with_device_pixel_ratio(ratio);
            let zoom = PinchZoom::new(host, PinchZoomConfig::default()).unwrap();
            assert_eq!(zoom.debug_info().unwrap().round_factor, 1.0);
        }
    }

    #[test]
    fn destroyed_engine_rejects_every_operation() {
        let mut zoom = attach();
        zoom.on_touch_start(&TouchEvent::start(0.0, &[], &[touch(1, 0.0, 0.0)]))
            .unwrap();
        zoom.destroy().unwrap();
        assert_eq!(zoom.lifecycle(), Lifecycle::Destroyed);
        assert!(zoom.host().captured.is_empty());

        let event = TouchEvent::new(1.0);
        for kind in TouchEventKind::ALL {
            assert_eq!(
                zoom.handle(kind, &event),
                Err(PinchZoomError::UseAfterDestroy)
            );
        }
        assert_eq!(zoom.cancel(), Err(PinchZoomError::UseAfterDestroy));
        assert_eq!(zoom.update(), Err(PinchZoomError::UseAfterDestroy));
        assert_eq!(zoom.destroy(), Err(PinchZoomError::UseAfterDestroy));
        assert!(zoom.debug_info().is_err());
        assert!(zoom.element_transform().is_err());
    }
}
