//! Circular interval arithmetic over the integer hours of a single day.
//!
//! Hours run from 0 to 24 inclusive. 0 and 24 are the same wall-clock
//! instant: 24 is only meaningful as an *end* ("midnight, end of day") and
//! 0 only as a *start*. An interval whose `first` is greater than its `last`
//! wraps through midnight; one whose bounds are equal covers the whole day.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An hour of the day in `0..=24`.
pub type Hour = u8;

/// Number of hours on the dial.
pub const HOURS_PER_DAY: Hour = 24;

/// Clockwise length from `start` to `end`.
///
/// `end - start` when `end > start`, otherwise the span wraps midnight and is
/// `24 - start + end`. Equal bounds therefore measure a full day.
pub fn duration_between(start: Hour, end: Hour) -> Hour {
    if end > start {
        end - start
    } else {
        HOURS_PER_DAY - start + end
    }
}

/// Clockwise gap between two handles, as used for minimum-spacing checks.
///
/// Unlike [`duration_between`], coincident handles have a gap of zero.
pub fn gap_between(start: Hour, end: Hour) -> Hour {
    if start <= end {
        end - start
    } else {
        HOURS_PER_DAY - start + end
    }
}

/// Render an hour as a `HH:00` wall-clock label. 24 renders as `24:00`.
pub fn format_hour(hour: Hour) -> String {
    format!("{:02}:00", hour)
}

/// A closed, non-wrapping run of hours `[first, last]`.
///
/// Wrapping intervals are materialised as one or two spans split at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub first: Hour,
    pub last: Hour,
}

impl Span {
    pub const fn new(first: Hour, last: Hour) -> Self {
        Self { first, last }
    }

    pub const fn contains(&self, hour: Hour) -> bool {
        self.first <= hour && hour <= self.last
    }

    /// True when `other` lies entirely inside this span.
    pub const fn covers(&self, other: &Span) -> bool {
        self.first <= other.first && self.last >= other.last
    }

    /// True when the spans share more than a boundary point.
    pub const fn overlaps(&self, other: &Span) -> bool {
        self.first < other.last && other.first < self.last
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.first, self.last)
    }
}

/// A possibly wrap-around interval over the hours of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircularInterval {
    pub first: Hour,
    pub last: Hour,
}

impl CircularInterval {
    /// The canonical full day, midnight to midnight.
    pub const FULL_DAY: CircularInterval = CircularInterval::new(0, HOURS_PER_DAY);

    pub const fn new(first: Hour, last: Hour) -> Self {
        Self { first, last }
    }

    /// True when the interval crosses midnight (`first > last`).
    pub const fn is_wrapping(&self) -> bool {
        self.first > self.last
    }

    /// True when both bounds coincide, which denotes a full circle.
    pub const fn is_degenerate(&self) -> bool {
        self.first == self.last
    }

    /// True for either spelling of the whole day: equal bounds or `0..24`.
    pub const fn is_full_day(&self) -> bool {
        self.first == self.last || (self.first == 0 && self.last == HOURS_PER_DAY)
    }

    /// Membership with midnight wrap. Degenerate intervals contain every hour.
    pub const fn contains(&self, hour: Hour) -> bool {
        if self.first < self.last {
            self.first <= hour && hour <= self.last
        } else if self.first > self.last {
            (self.first <= hour && hour <= HOURS_PER_DAY) || hour <= self.last
        } else {
            true
        }
    }

    /// Clockwise length, see [`duration_between`].
    pub fn duration(&self) -> Hour {
        duration_between(self.first, self.last)
    }

    /// The interval as non-wrapping spans, split at midnight when it wraps.
    ///
    /// A degenerate interval yields the single point it names; callers that
    /// need full-day semantics must check [`is_full_day`](Self::is_full_day).
    pub fn pieces(&self) -> Vec<Span> {
        if self.first > self.last {
            vec![
                Span::new(self.first, HOURS_PER_DAY),
                Span::new(0, self.last),
            ]
        } else {
            vec![Span::new(self.first, self.last)]
        }
    }

    /// True when every piece of `other` lies inside some piece of `self`.
    pub fn contains_interval(&self, other: &CircularInterval) -> bool {
        if self.is_degenerate() {
            return true;
        }
        let own = self.pieces();
        other
            .pieces()
            .iter()
            .all(|piece| own.iter().any(|mine| mine.covers(piece)))
    }

    /// True when the two intervals share more than a boundary instant.
    pub fn overlaps(&self, other: &CircularInterval) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return true;
        }
        let own = self.pieces();
        other
            .pieces()
            .iter()
            .any(|piece| own.iter().any(|mine| mine.overlaps(piece)))
    }

    /// The stretch of this limit from `first` up to `boundary`.
    ///
    /// Materialises the implicit previous neighbour. When `boundary` sits
    /// before `first` the stretch crosses midnight and comes back as two
    /// pieces.
    pub fn leading_region(&self, boundary: Hour) -> Vec<Span> {
        if boundary < self.first {
            vec![Span::new(0, boundary), Span::new(self.first, HOURS_PER_DAY)]
        } else {
            vec![Span::new(self.first, boundary)]
        }
    }

    /// The stretch of this limit from `boundary` up to `last`.
    ///
    /// Materialises the implicit next neighbour, split in two when it
    /// crosses midnight.
    pub fn trailing_region(&self, boundary: Hour) -> Vec<Span> {
        if boundary > self.last {
            vec![Span::new(boundary, HOURS_PER_DAY), Span::new(0, self.last)]
        } else {
            vec![Span::new(boundary, self.last)]
        }
    }
}

impl fmt::Display for CircularInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.first, self.last)
    }
}

/// The two draggable endpoints of the duty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handles {
    pub start: Hour,
    pub end: Hour,
}

impl Handles {
    pub const fn new(start: Hour, end: Hour) -> Self {
        Self { start, end }
    }

    /// Displayed length of the window, see [`duration_between`].
    pub fn duration(&self) -> Hour {
        duration_between(self.start, self.end)
    }

    /// Spacing between the handles, see [`gap_between`].
    pub fn gap(&self) -> Hour {
        gap_between(self.start, self.end)
    }

    /// True when the end falls on the following calendar day.
    pub const fn ends_next_day(&self) -> bool {
        self.end <= self.start
    }

    pub const fn as_interval(&self) -> CircularInterval {
        CircularInterval::new(self.start, self.end)
    }

    /// The window as non-wrapping spans.
    pub fn region(&self) -> Vec<Span> {
        self.as_interval().pieces()
    }

    /// Express a midnight end as 24 rather than 0.
    pub const fn with_end_sentinel(self) -> Self {
        if self.end == 0 {
            Self::new(self.start, HOURS_PER_DAY)
        } else {
            self
        }
    }
}

impl fmt::Display for Handles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", format_hour(self.start), format_hour(self.end))
    }
}
