//! Pointer gesture tracking for the two handles.
//!
//! A press grabs whichever handle's enlarged hotspot it lands in (start wins
//! when both overlap). While the pointer moves, its angle is quantised to an
//! hour and forwarded to the session only when that hour changes, so a slow
//! drag across one hour's arc costs a single constraint check and a single
//! haptic tick.

use serde::{Deserialize, Serialize};

use crate::angle::{angle_to_hour, pointer_angle};
use crate::geometry::{DialGeometry, Point};
use crate::interval::{Handles, Hour};
use crate::session::{EditSession, Haptics};
use crate::solver::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The pointer was lost (e.g. the gesture was stolen by a scroll).
    Cancel,
}

/// A pointer sample in dial-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub const fn new(x: f64, y: f64, phase: PointerPhase) -> Self {
        Self { x, y, phase }
    }

    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    WaitingForPress,
    Tracking {
        handle: Handle,
        /// Last hour forwarded to the session during this gesture.
        last_dispatched: Hour,
    },
}

#[derive(Debug, Clone)]
pub struct DragSession {
    geometry: DialGeometry,
    state: DragState,
}

impl DragSession {
    pub fn new(geometry: DialGeometry) -> Self {
        Self {
            geometry,
            state: DragState::WaitingForPress,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    /// The handle whose hotspot contains `point`, if any.
    pub fn hit_test(&self, point: Point, handles: Handles) -> Option<Handle> {
        if self.geometry.hotspot(handles.start).contains(point) {
            Some(Handle::Start)
        } else if self.geometry.hotspot(handles.end).contains(point) {
            Some(Handle::End)
        } else {
            None
        }
    }

    /// The hour under `point`.
    pub fn hour_at(&self, point: Point) -> Hour {
        let center = self.geometry.center();
        angle_to_hour(pointer_angle(point.x - center.x, point.y - center.y))
    }

    /// Start a gesture. A press that misses both handles starts no drag.
    pub fn press(&mut self, point: Point, handles: Handles) -> Option<Handle> {
        let grabbed = self.hit_test(point, handles);
        self.state = match grabbed {
            Some(Handle::Start) => DragState::Tracking {
                handle: Handle::Start,
                last_dispatched: handles.start,
            },
            Some(Handle::End) => DragState::Tracking {
                handle: Handle::End,
                last_dispatched: handles.end,
            },
            None => DragState::WaitingForPress,
        };
        grabbed
    }

    /// Follow the pointer; returns the new pair when the session accepted a move.
    pub fn drag(
        &mut self,
        point: Point,
        session: &mut EditSession,
        haptics: &mut impl Haptics,
    ) -> Option<Handles> {
        let DragState::Tracking {
            handle,
            last_dispatched,
        } = self.state
        else {
            return None;
        };
        let hour = self.hour_at(point);
        if hour == last_dispatched {
            return None;
        }
        self.state = DragState::Tracking {
            handle,
            last_dispatched: hour,
        };
        session.propose(handle, hour, haptics)
    }

    /// End the gesture.
    pub fn release(&mut self) {
        self.state = DragState::WaitingForPress;
    }

    /// Feed one pointer event through the gesture state machine.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        session: &mut EditSession,
        haptics: &mut impl Haptics,
    ) -> Option<Handles> {
        match event.phase {
            PointerPhase::Down => {
                self.press(event.point(), session.handles());
                None
            }
            PointerPhase::Move => self.drag(event.point(), session, haptics),
            PointerPhase::Up | PointerPhase::Cancel => {
                self.release();
                None
            }
        }
    }
}
