// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral touch events and the typed listener table.
//!
//! Bindings translate their platform's touch events into [`TouchEvent`] and
//! feed them to [`PinchZoom::handle`](crate::PinchZoom::handle) together with
//! the [`TouchEventKind`] the listener was bound for. Listener handles live in
//! a [`ListenerTable`], indexed by kind rather than by event-name strings.

use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

/// Platform-assigned identifier of one touch point.
///
/// Identifiers are stable for the lifetime of a touch and may be reused by
/// the platform once the touch ends.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub i64);

impl fmt::Debug for TouchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TouchId").field(&self.0).finish()
    }
}

/// One touch point as reported by the platform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint {
    /// Identifier of the touch.
    pub id: TouchId,
    /// Position in client (viewport) coordinates.
    pub position: Point,
}

impl TouchPoint {
    /// Creates a touch point.
    #[must_use]
    pub fn new(id: i64, position: impl Into<Point>) -> Self {
        Self {
            id: TouchId(id),
            position: position.into(),
        }
    }
}

/// Touch lists rarely hold more than a handful of points.
pub type TouchList = SmallVec<[TouchPoint; 4]>;

/// A touch event with the three lists a touch platform reports.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    /// Event time in milliseconds.
    pub time: f64,
    /// Every touch currently on the surface.
    pub touches: TouchList,
    /// Touches that started on the event's target element.
    pub target_touches: TouchList,
    /// Touches that changed in this event.
    pub changed_touches: TouchList,
}

impl TouchEvent {
    /// Creates an empty event at `time`.
    #[must_use]
    pub fn new(time: f64) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    /// Builds a start event: `points` begin on the target, joining `held`
    /// touches that are already down.
    #[must_use]
    pub fn start(time: f64, held: &[TouchPoint], points: &[TouchPoint]) -> Self {
        let all: TouchList = held.iter().chain(points).copied().collect();
        Self {
            time,
            touches: all.clone(),
            target_touches: all,
            changed_touches: points.iter().copied().collect(),
        }
    }

    /// Builds a move event where every point in `points` is on the surface.
    #[must_use]
    pub fn moved(time: f64, points: &[TouchPoint]) -> Self {
        let all: TouchList = points.iter().copied().collect();
        Self {
            time,
            touches: all.clone(),
            target_touches: all.clone(),
            changed_touches: all,
        }
    }

    /// Builds an end event: `lifted` left the surface, `remaining` are still down.
    #[must_use]
    pub fn end(time: f64, lifted: &[TouchPoint], remaining: &[TouchPoint]) -> Self {
        let remaining: TouchList = remaining.iter().copied().collect();
        Self {
            time,
            touches: remaining.clone(),
            target_touches: remaining,
            changed_touches: lifted.iter().copied().collect(),
        }
    }
}

/// The closed set of touch events the engine listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchEventKind {
    /// A touch began.
    Start,
    /// One or more touches moved.
    Move,
    /// One or more touches were lifted.
    End,
    /// The platform cancelled the touches.
    Cancel,
}

impl TouchEventKind {
    /// All kinds, in binding order.
    pub const ALL: [Self; 4] = [Self::Start, Self::Move, Self::End, Self::Cancel];

    /// DOM event name for this kind.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Start => "touchstart",
            Self::Move => "touchmove",
            Self::End => "touchend",
            Self::Cancel => "touchcancel",
        }
    }

    /// Slot of this kind in a [`ListenerTable`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Move => 1,
            Self::End => 2,
            Self::Cancel => 3,
        }
    }
}

/// Side effects a binding should apply to the platform event after the
/// engine handled it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform's default gesture handling (scrolling, zooming).
    pub prevent_default: bool,
    /// Keep the event from reaching ancestors, which may scroll.
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Leave the event alone.
    pub const IGNORED: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// Stop propagation only.
    pub const STOP: Self = Self {
        prevent_default: false,
        stop_propagation: true,
    };

    /// Prevent the default action and stop propagation.
    pub const CONSUME: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}

/// Fixed table holding one listener handle per [`TouchEventKind`].
///
/// Bindings store whatever their platform needs to unregister a listener
/// (a closure, a token) and drain the table on teardown.
pub struct ListenerTable<T> {
    slots: [Option<T>; 4],
}

impl<T> ListenerTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }

    /// Stores the handle for `kind`, returning the previous one.
    pub fn insert(&mut self, kind: TouchEventKind, handle: T) -> Option<T> {
        self.slots[kind.index()].replace(handle)
    }

    /// Returns the handle bound for `kind`.
    #[must_use]
    pub fn get(&self, kind: TouchEventKind) -> Option<&T> {
        self.slots[kind.index()].as_ref()
    }

    /// Removes and returns the handle for `kind`.
    pub fn remove(&mut self, kind: TouchEventKind) -> Option<T> {
        self.slots[kind.index()].take()
    }

    /// Returns `true` when `kind` has a handle.
    #[must_use]
    pub fn is_bound(&self, kind: TouchEventKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Number of bound kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every handle, yielding them with their kind.
    pub fn drain(&mut self) -> impl Iterator<Item = (TouchEventKind, T)> + '_ {
        TouchEventKind::ALL
            .into_iter()
            .filter_map(move |kind| self.remove(kind).map(|handle| (kind, handle)))
    }
}

impl<T> Default for ListenerTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ListenerTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for kind in TouchEventKind::ALL {
            if self.is_bound(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}
