// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session state: which touches are tracked and which are captured.
//!
//! The tracker is idle while no touch is tracked and tracking otherwise; the
//! phase is derived from the tracked set rather than stored beside it.

use smallvec::SmallVec;

use crate::event::{TouchEvent, TouchId};
use crate::input::{ActiveInputs, CapturedInputs, MAX_ACTIVE_INPUTS};

/// Touch ids affected by one event.
pub type TouchIds = SmallVec<[TouchId; MAX_ACTIVE_INPUTS]>;

/// Whether a gesture is in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// No touch is tracked.
    Idle,
    /// At least one touch is tracked.
    Tracking,
}

/// The transition an event caused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureStep {
    /// Nothing relevant changed.
    Ignored,
    /// Idle to tracking with the newly registered touches.
    Began(TouchIds),
    /// Touches joined a gesture in progress; existing origins were re-anchored.
    Joined(TouchIds),
    /// Tracked touches moved.
    Moved,
    /// Some touches were lifted and others remain, re-anchored.
    Lifted(TouchIds),
    /// The last tracked touches were lifted or cancelled.
    Ended(TouchIds),
}

/// Tracks the touches of a gesture.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    inputs: ActiveInputs,
    captured: CapturedInputs,
}

impl GestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.inputs.is_empty() {
            GesturePhase::Idle
        } else {
            GesturePhase::Tracking
        }
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.phase() == GesturePhase::Tracking
    }

    /// Tracked touches.
    #[must_use]
    pub fn inputs(&self) -> &ActiveInputs {
        &self.inputs
    }

    /// Touches captured on the host.
    #[must_use]
    pub fn captured(&self) -> &CapturedInputs {
        &self.captured
    }

    /// Mutable access to the capture set, for the engine to keep it in step
    /// with the host.
    pub fn captured_mut(&mut self) -> &mut CapturedInputs {
        &mut self.captured
    }

    /// Registers the touches of a start event that began on the target.
    ///
    /// Touches past [`MAX_ACTIVE_INPUTS`] and touches already tracked are
    /// skipped. When joining a gesture in progress, the touches already
    /// tracked are re-anchored at their last position first.
    pub fn start(&mut self, event: &TouchEvent) -> GestureStep {
        let was_idle = self.inputs.is_empty();
        let mut added = TouchIds::new();
        for point in &event.target_touches {
            if self.inputs.is_full() {
                break;
            }
            if self.inputs.register(point.id, point.position, event.time) {
                added.push(point.id);
            }
        }

        if added.is_empty() {
            GestureStep::Ignored
        } else if was_idle {
            GestureStep::Began(added)
        } else {
            // New touches have no last position, so this only moves the
            // origins of touches that were already down.
            self.inputs.reanchor_all();
            GestureStep::Joined(added)
        }
    }

    /// Records new positions for every tracked touch on the surface.
    pub fn moved(&mut self, event: &TouchEvent) -> GestureStep {
        if self.inputs.is_empty() {
            return GestureStep::Ignored;
        }
        let mut any = false;
        for point in &event.touches {
            any |= self.inputs.update(point.id, point.position, event.time);
        }
        if any {
            GestureStep::Moved
        } else {
            GestureStep::Ignored
        }
    }

    /// Stops tracking the touches an end event reports as changed.
    pub fn end(&mut self, event: &TouchEvent) -> GestureStep {
        let mut removed = TouchIds::new();
        for point in &event.changed_touches {
            if self.inputs.remove(point.id).is_some() {
                removed.push(point.id);
            }
        }

        if removed.is_empty() {
            GestureStep::Ignored
        } else if self.inputs.is_empty() {
            GestureStep::Ended(removed)
        } else {
            self.inputs.reanchor_all();
            GestureStep::Lifted(removed)
        }
    }

    /// Drops every tracked touch.
    pub fn cancel(&mut self) -> GestureStep {
        if self.inputs.is_empty() {
            return GestureStep::Ignored;
        }
        let removed = self.inputs.iter().map(|(id, _)| id).collect();
        self.inputs.clear();
        GestureStep::Ended(removed)
    }

    /// Moves the origin of every moved touch to its last position.
    pub fn reanchor(&mut self) {
        self.inputs.reanchor_all();
    }
}
