//! Commit-time decomposition of the edited window into duty records.
//!
//! When the user confirms, the final handle pair is split against the limit
//! into PREVIOUS / CURRENT / NEXT records. In edit mode the resolver also
//! notices when the new window swallows a neighbouring duty entirely, and
//! asks for confirmation before that neighbour disappears.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interval::{format_hour, CircularInterval, Handles, Hour, Span, HOURS_PER_DAY};

/// How the edited window relates to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Carve the window out of the limit; the leftovers become neighbours.
    Split,
    /// Resize the window against existing neighbours inside the limit.
    Edit,
}

/// Position of a record relative to the edited window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyKind {
    Previous,
    Current,
    Next,
}

/// One stretch of the roster, ready to hand to persistence.
///
/// A start of 24 is stored as 0 and an end of 0 as 24, so records always
/// read as "from the start of `start` to the end of `end`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DutyRecord {
    start: Hour,
    end: Hour,
    kind: DutyKind,
}

impl DutyRecord {
    pub(crate) fn new(start: Hour, end: Hour, kind: DutyKind) -> Self {
        let start = if start >= HOURS_PER_DAY { 0 } else { start };
        let end = if end == 0 { HOURS_PER_DAY } else { end };
        Self { start, end, kind }
    }

    pub const fn start(&self) -> Hour {
        self.start
    }

    pub const fn end(&self) -> Hour {
        self.end
    }

    pub const fn kind(&self) -> DutyKind {
        self.kind
    }

    /// `(start, end, kind)` as a tuple.
    pub const fn parts(&self) -> (Hour, Hour, DutyKind) {
        (self.start, self.end, self.kind)
    }
}

/// A commit that would swallow a neighbouring duty and needs the user's say-so.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeConflict {
    /// The previous neighbour would be absorbed.
    pub merge_up: bool,
    /// The next neighbour would be absorbed.
    pub merge_down: bool,
    /// The absorbed ranges, in the order they are described.
    pub absorbed: Vec<CircularInterval>,
    /// Human-readable summary of the absorbed ranges.
    pub description: String,
    #[serde(skip)]
    records: Vec<DutyRecord>,
}

impl MergeConflict {
    /// The records that will be committed once the merge is approved.
    pub fn records(&self) -> &[DutyRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DutyRecord> {
        self.records
    }
}

/// Result of attempting to commit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommitOutcome {
    /// Nothing is absorbed; commit the records directly.
    Ready { records: Vec<DutyRecord> },
    /// A neighbour would be absorbed; await confirmation.
    Pending(MergeConflict),
}

impl CommitOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, CommitOutcome::Pending(_))
    }

    /// The record list, whether committed directly or after approval.
    pub fn records(&self) -> &[DutyRecord] {
        match self {
            CommitOutcome::Ready { records } => records,
            CommitOutcome::Pending(conflict) => conflict.records(),
        }
    }
}

/// Everything the resolver needs besides the final handle pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitResolver {
    pub mode: EditMode,
    pub limit: CircularInterval,
    /// The pair the session opened with; it bounds the implicit neighbours.
    pub original: Handles,
    pub has_previous: bool,
    pub has_next: bool,
}

impl CommitResolver {
    /// Decompose `current` into duty records according to the edit mode.
    pub fn records(&self, current: Handles) -> Vec<DutyRecord> {
        let records = match self.mode {
            EditMode::Split => self.split_records(current),
            EditMode::Edit => self.edit_records(current),
        };
        debug!(?records, "resolved duty records");
        records
    }

    /// Decompose `current` and flag any neighbour the commit would absorb.
    pub fn resolve(&self, current: Handles) -> CommitOutcome {
        let records = self.records(current);
        let has_kind = |kind: DutyKind| records.iter().any(|r| r.kind() == kind);
        let merge_up = self.has_previous && !has_kind(DutyKind::Previous);
        let merge_down = self.has_next && !has_kind(DutyKind::Next);

        if !merge_up && !merge_down {
            return CommitOutcome::Ready { records };
        }

        let mut absorbed = Vec::new();
        if merge_up {
            absorbed.push(CircularInterval::new(self.limit.first, self.original.start));
        }
        if merge_down {
            absorbed.push(CircularInterval::new(self.original.end, self.limit.last));
        }
        let description = describe_absorbed(&absorbed);
        debug!(merge_up, merge_down, %description, "commit needs confirmation");

        CommitOutcome::Pending(MergeConflict {
            merge_up,
            merge_down,
            absorbed,
            description,
            records,
        })
    }

    fn split_records(&self, current: Handles) -> Vec<DutyRecord> {
        let CircularInterval { first, last } = self.limit;
        let mut records = Vec::with_capacity(3);
        if current.start != first {
            records.push(DutyRecord::new(first, current.start, DutyKind::Previous));
        }
        records.push(DutyRecord::new(current.start, current.end, DutyKind::Current));
        if current.end != last {
            records.push(DutyRecord::new(current.end, last, DutyKind::Next));
        }
        records
    }

    fn edit_records(&self, current: Handles) -> Vec<DutyRecord> {
        let CircularInterval { first, last } = self.limit;
        let current_region = current.region();
        let covered = |region: &[Span]| {
            region
                .iter()
                .all(|piece| current_region.iter().any(|c| c.covers(piece)))
        };

        let keep_previous =
            self.has_previous && !covered(&self.limit.leading_region(self.original.start));
        let keep_next = self.has_next && !covered(&self.limit.trailing_region(self.original.end));
        let full_day = self.limit.is_full_day();

        let mut records = Vec::with_capacity(3);
        if keep_previous {
            // On a full-day dial the previous duty only reaches back to the
            // limit edge when the next one is also rewritten.
            let from = if full_day && !keep_next { current.end } else { first };
            records.push(DutyRecord::new(from, current.start, DutyKind::Previous));
        }
        records.push(DutyRecord::new(current.start, current.end, DutyKind::Current));
        if keep_next {
            let to = if full_day && !keep_previous { current.start } else { last };
            records.push(DutyRecord::new(current.end, to, DutyKind::Next));
        }
        records
    }
}

fn describe_absorbed(absorbed: &[CircularInterval]) -> String {
    let ranges: String = absorbed
        .iter()
        .map(|range| format!("[{} ~ {}]", format_hour(range.first), format_hour(range.last)))
        .collect();
    format!("Overwrite duty periods {}?", ranges)
}
