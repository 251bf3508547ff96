//! Constraint solving for handle drags.
//!
//! Given the limit the window may occupy, the current handle pair and a
//! minimum spacing, decide whether moving one handle to a candidate hour is
//! legal. Some moves are accepted only after the opposite handle is pushed
//! along (a cascade) or nudged off a coincident position; illegal moves are
//! ignored and return `None`.
//!
//! Three geometric cases are handled separately:
//!
//! - the limit wraps through midnight (`first > last`),
//! - the limit is degenerate (`first == last`, a full circle),
//! - the limit is an ordinary daytime range (`first < last`, including `0..24`).

use std::fmt;

use tracing::{debug, trace};

use crate::commit::EditMode;
use crate::interval::{gap_between, CircularInterval, Handles, Hour, HOURS_PER_DAY};

/// Which endpoint of the window is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Start,
    End,
}

/// Why a proposed move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The handles would end up closer than the minimum spacing.
    BelowMinSpacing,
    /// The candidate lies outside the limit.
    OutsideLimit,
    /// The candidate would cross into the opposite handle's side.
    CrossesOpposite,
    /// A cascade would push the opposite handle off the dial.
    NoRoomToCascade,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::BelowMinSpacing => "below minimum spacing",
            Rejection::OutsideLimit => "outside limit",
            Rejection::CrossesOpposite => "crosses opposite handle",
            Rejection::NoRoomToCascade => "no room to cascade",
        };
        f.write_str(reason)
    }
}

/// Stateless rule set for one editing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSolver {
    limit: CircularInterval,
    min_spacing: Hour,
    mode: EditMode,
}

impl HandleSolver {
    pub const fn new(limit: CircularInterval, min_spacing: Hour, mode: EditMode) -> Self {
        Self {
            limit,
            min_spacing,
            mode,
        }
    }

    pub const fn limit(&self) -> CircularInterval {
        self.limit
    }

    pub const fn min_spacing(&self) -> Hour {
        self.min_spacing
    }

    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Propose moving `handle` to `candidate`; `Some` carries the new pair.
    pub fn propose(&self, handle: Handle, current: Handles, candidate: Hour) -> Option<Handles> {
        let outcome = match handle {
            Handle::Start => self.solve_start(current, candidate),
            Handle::End => self.solve_end(current, candidate),
        }
        .and_then(|next| self.check_result(next));

        match outcome {
            Ok(next) => {
                debug!(?handle, candidate, start = next.start, end = next.end, "move accepted");
                Some(next)
            }
            Err(reason) => {
                trace!(?handle, candidate, %reason, "move ignored");
                None
            }
        }
    }

    pub fn propose_start(&self, current: Handles, candidate: Hour) -> Option<Handles> {
        self.propose(Handle::Start, current, candidate)
    }

    pub fn propose_end(&self, current: Handles, candidate: Hour) -> Option<Handles> {
        self.propose(Handle::End, current, candidate)
    }

    fn solve_start(&self, current: Handles, candidate: Hour) -> Result<Handles, Rejection> {
        if candidate > HOURS_PER_DAY {
            return Err(Rejection::OutsideLimit);
        }
        let start = if candidate == HOURS_PER_DAY { 0 } else { candidate };
        let mut end = current.end;
        if gap_between(start, end) < self.min_spacing {
            return Err(Rejection::BelowMinSpacing);
        }

        let CircularInterval { first, last } = self.limit;
        let min = i32::from(self.min_spacing);

        if self.limit.is_wrapping() {
            if start < first && start > last {
                return Err(Rejection::OutsideLimit);
            }
            let occupied = if end < first {
                (end..=last).contains(&start)
            } else {
                (end..=HOURS_PER_DAY).contains(&start) || start <= last
            };
            if occupied {
                return Err(Rejection::CrossesOpposite);
            }
            let start_offset = i32::from(gap_between(first, start));
            let end_offset = i32::from(gap_between(end, last));
            if start_offset + end_offset < min {
                let mut next_end = i32::from(last) - min - start_offset;
                if next_end <= 0 {
                    next_end += i32::from(HOURS_PER_DAY);
                }
                end = to_hour(next_end)?;
            }
        } else if self.limit.is_degenerate() {
            if start == end {
                end = if end > 0 { end - 1 } else { HOURS_PER_DAY - 1 };
            }
        } else {
            if !self.limit.contains(start) {
                return Err(Rejection::OutsideLimit);
            }
            if self.guards_crossing() && (end..=last).contains(&start) {
                return Err(Rejection::CrossesOpposite);
            }
            let start_offset = i32::from(start) - i32::from(first);
            let end_offset = i32::from(last) - i32::from(end);
            if start_offset + end_offset < min {
                end = to_hour(i32::from(last) - min - start_offset)?;
            }
        }

        Ok(Handles::new(start, end))
    }

    fn solve_end(&self, current: Handles, candidate: Hour) -> Result<Handles, Rejection> {
        if candidate > HOURS_PER_DAY {
            return Err(Rejection::OutsideLimit);
        }
        let end = if candidate == 0 { HOURS_PER_DAY } else { candidate };
        let mut start = current.start;
        if gap_between(start, end) < self.min_spacing {
            return Err(Rejection::BelowMinSpacing);
        }

        let CircularInterval { first, last } = self.limit;
        let min = i32::from(self.min_spacing);

        if self.limit.is_wrapping() {
            if end < first && end > last {
                return Err(Rejection::OutsideLimit);
            }
            let occupied = if start < last {
                (first..=HOURS_PER_DAY).contains(&end) || end <= start
            } else {
                (first..=start).contains(&end)
            };
            if occupied {
                return Err(Rejection::CrossesOpposite);
            }
            let start_offset = i32::from(gap_between(first, start));
            let end_offset = i32::from(gap_between(end, last));
            if start_offset + end_offset < min {
                let mut next_start = i32::from(first) + min + end_offset;
                if next_start >= i32::from(HOURS_PER_DAY) {
                    next_start -= i32::from(HOURS_PER_DAY);
                }
                start = to_hour(next_start)?;
            }
        } else if self.limit.is_degenerate() {
            if end == start {
                start = if start < HOURS_PER_DAY - 1 { start + 1 } else { 0 };
            }
        } else {
            if !self.limit.contains(end) {
                return Err(Rejection::OutsideLimit);
            }
            if self.guards_crossing() && (first..=start).contains(&end) {
                return Err(Rejection::CrossesOpposite);
            }
            let start_offset = i32::from(start) - i32::from(first);
            let end_offset = i32::from(last) - i32::from(end);
            if start_offset + end_offset < min {
                start = to_hour(i32::from(first) + min + end_offset)?;
            }
        }

        Ok(Handles::new(start, end))
    }

    /// Handles may pass each other only on an open full-day dial.
    fn guards_crossing(&self) -> bool {
        !self.limit.is_full_day()
    }

    /// A cascade or nudge must still leave a legal window inside the limit.
    fn check_result(&self, next: Handles) -> Result<Handles, Rejection> {
        if next.gap() < self.min_spacing {
            return Err(Rejection::BelowMinSpacing);
        }
        if !self.limit.contains(next.start) || !self.limit.contains(next.end) {
            return Err(Rejection::OutsideLimit);
        }
        Ok(next)
    }
}

fn to_hour(value: i32) -> Result<Hour, Rejection> {
    match Hour::try_from(value) {
        Ok(hour) if hour <= HOURS_PER_DAY => Ok(hour),
        _ => Err(Rejection::NoRoomToCascade),
    }
}
