// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracked touch points.
//!
//! [`ActiveInputs`] holds at most [`MAX_ACTIVE_INPUTS`] touches keyed by
//! [`TouchId`]. Its length is the number of stored entries; there is no
//! separate counter to keep in sync.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::event::TouchId;

/// Number of touches tracked at once; further touches are ignored.
pub const MAX_ACTIVE_INPUTS: usize = 2;

/// State of one tracked touch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActiveInput {
    /// Anchor position at the start of the current gesture segment.
    pub origin: Point,
    /// Most recent observed position, unset until the first move.
    pub last: Option<Point>,
    /// Time of the latest event for this touch, in milliseconds.
    pub time: f64,
}

impl ActiveInput {
    /// Creates an input anchored at `origin`.
    #[must_use]
    pub fn new(origin: Point, time: f64) -> Self {
        Self {
            origin,
            last: None,
            time,
        }
    }

    /// Current position: the last observed one, or the origin before any move.
    #[must_use]
    pub fn position(&self) -> Point {
        self.last.unwrap_or(self.origin)
    }

    /// Movement since the origin. Zero until the touch has moved.
    #[must_use]
    pub fn displacement(&self) -> Vec2 {
        self.position() - self.origin
    }

    /// Moves the origin to the last observed position, if there is one.
    pub fn reanchor(&mut self) {
        if let Some(last) = self.last {
            self.origin = last;
        }
    }
}

/// The set of touches currently driving a gesture, in registration order.
#[derive(Clone, Debug, Default)]
pub struct ActiveInputs {
    entries: SmallVec<[(TouchId, ActiveInput); MAX_ACTIVE_INPUTS]>,
}

impl ActiveInputs {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked touches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no touch is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when no further touch can be registered.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_ACTIVE_INPUTS
    }

    /// Returns `true` if `id` is tracked.
    #[must_use]
    pub fn contains(&self, id: TouchId) -> bool {
        self.entries.iter().any(|(tracked, _)| *tracked == id)
    }

    /// Returns the input tracked for `id`.
    #[must_use]
    pub fn get(&self, id: TouchId) -> Option<&ActiveInput> {
        self.entries
            .iter()
            .find_map(|(tracked, input)| (*tracked == id).then_some(input))
    }

    /// Iterates tracked touches in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TouchId, &ActiveInput)> + '_ {
        self.entries.iter().map(|(id, input)| (*id, input))
    }

    /// Starts tracking `id` at `origin`.
    ///
    /// Returns `false`, leaving the set unchanged, when `id` is already
    /// tracked or the set is full.
    pub fn register(&mut self, id: TouchId, origin: Point, time: f64) -> bool {
        if self.is_full() || self.contains(id) {
            return false;
        }
        self.entries.push((id, ActiveInput::new(origin, time)));
        true
    }

    /// Records a new position for `id`. Untracked ids are ignored.
    pub fn update(&mut self, id: TouchId, position: Point, time: f64) -> bool {
        match self.entries.iter_mut().find(|(tracked, _)| *tracked == id) {
            Some((_, input)) => {
                input.last = Some(position);
                input.time = time;
                true
            }
            None => false,
        }
    }

    /// Stops tracking `id`.
    pub fn remove(&mut self, id: TouchId) -> Option<ActiveInput> {
        let index = self.entries.iter().position(|(tracked, _)| *tracked == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Forgets every touch.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Re-anchors every touch that has moved to its last position.
    pub fn reanchor_all(&mut self) {
        for (_, input) in &mut self.entries {
            input.reanchor();
        }
    }

    /// The two tracked touches, when exactly two are tracked.
    #[must_use]
    pub fn pair(&self) -> Option<(&ActiveInput, &ActiveInput)> {
        match self.entries.as_slice() {
            [(_, a), (_, b)] => Some((a, b)),
            _ => None,
        }
    }

    /// Mean displacement of all tracked touches; zero when empty.
    #[must_use]
    pub fn average_displacement(&self) -> Vec2 {
        if self.entries.is_empty() {
            return Vec2::ZERO;
        }
        let total = self
            .entries
            .iter()
            .fold(Vec2::ZERO, |acc, (_, input)| acc + input.displacement());
        #[allow(
            clippy::cast_precision_loss,
            reason = "At most two entries are ever stored."
        )]
        let count = self.entries.len() as f64;
        total / count
    }
}

/// Touch identifiers currently captured on the host.
#[derive(Clone, Debug, Default)]
pub struct CapturedInputs {
    ids: SmallVec<[TouchId; MAX_ACTIVE_INPUTS]>,
}

impl CapturedInputs {
    /// Marks `id` as captured. Returns `false` if it already was.
    pub fn capture(&mut self, id: TouchId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Unmarks `id`. Returns `false` if it was not captured.
    pub fn release(&mut self, id: TouchId) -> bool {
        match self.ids.iter().position(|captured| *captured == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `id` is captured.
    #[must_use]
    pub fn contains(&self, id: TouchId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of captured ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing is captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Unmarks every id, yielding them.
    pub fn drain(&mut self) -> impl Iterator<Item = TouchId> + '_ {
        self.ids.drain(..)
    }
}
