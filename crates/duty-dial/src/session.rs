//! The live state of one editing session.
//!
//! An [`EditSession`] owns the handle pair while the user drags, routes
//! every proposal through the [`HandleSolver`], and runs the commit /
//! confirm / decline flow through the [`CommitResolver`]. Nothing here is
//! reactive: derived values are recomputed from the pair on every query.

use tracing::{debug, warn};

use crate::commit::{CommitOutcome, CommitResolver, DutyRecord, EditMode, MergeConflict};
use crate::config::EditConfig;
use crate::error::{DialError, Result};
use crate::geometry::DialGeometry;
use crate::interval::{CircularInterval, Handles, Hour, HOURS_PER_DAY};
use crate::solver::{Handle, HandleSolver};

/// Receives a tick for every accepted handle move.
pub trait Haptics {
    fn tick(&mut self);
}

impl<F: FnMut()> Haptics for F {
    fn tick(&mut self) {
        self()
    }
}

/// Discards ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn tick(&mut self) {}
}

/// Counts ticks so a host can play them back later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounter {
    pub ticks: u32,
}

impl TickCounter {
    /// Return the ticks seen since the last call and reset the count.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.ticks)
    }
}

impl Haptics for TickCounter {
    fn tick(&mut self) {
        self.ticks += 1;
    }
}

#[derive(Debug, Clone)]
pub struct EditSession {
    solver: HandleSolver,
    resolver: CommitResolver,
    geometry: DialGeometry,
    handles: Handles,
    pending: Option<MergeConflict>,
}

impl EditSession {
    /// Open a session from a validated configuration.
    ///
    /// When the window opens with coincident handles, the end is pulled back
    /// by the minimum spacing so the arc never starts with zero width.
    pub fn new(config: &EditConfig) -> Result<Self> {
        config.validate()?;
        let limit = config.limit();
        if config.min_spacing >= limit.duration() {
            warn!(
                min_spacing = config.min_spacing,
                %limit,
                "minimum spacing cannot fit inside the limit; no move will be accepted"
            );
        }

        let original = Handles::new(config.start, config.end);
        let mut handles = original;
        if handles.start == handles.end && config.min_spacing > 0 {
            let min = config.min_spacing;
            handles.end = if handles.end >= min {
                handles.end - min
            } else {
                handles.end + HOURS_PER_DAY - min
            };
            handles = handles.with_end_sentinel();
        }

        debug!(start = handles.start, end = handles.end, %limit, mode = ?config.mode, "edit session opened");
        Ok(Self {
            solver: HandleSolver::new(limit, config.min_spacing, config.mode),
            resolver: config.commit_resolver(),
            geometry: config.geometry,
            handles,
            pending: None,
        })
    }

    pub fn handles(&self) -> Handles {
        self.handles
    }

    pub fn start(&self) -> Hour {
        self.handles.start
    }

    pub fn end(&self) -> Hour {
        self.handles.end
    }

    /// The pair the session was opened with.
    pub fn initial(&self) -> Handles {
        self.resolver.original
    }

    pub fn limit(&self) -> CircularInterval {
        self.solver.limit()
    }

    pub fn mode(&self) -> EditMode {
        self.solver.mode()
    }

    pub fn min_spacing(&self) -> Hour {
        self.solver.min_spacing()
    }

    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    pub fn has_previous(&self) -> bool {
        self.resolver.has_previous
    }

    pub fn has_next(&self) -> bool {
        self.resolver.has_next
    }

    /// Length of the window for display.
    pub fn duration(&self) -> Hour {
        self.handles.duration()
    }

    /// True once the pair differs from the one the session opened with.
    pub fn is_modified(&self) -> bool {
        self.handles != self.resolver.original
    }

    pub fn pending(&self) -> Option<&MergeConflict> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Propose moving `handle` to `candidate`.
    ///
    /// Accepted moves tick `haptics` and return the new pair, with a
    /// midnight end reported as 24. Rejected moves, and any move while a
    /// merge awaits confirmation, leave the session untouched.
    pub fn propose(
        &mut self,
        handle: Handle,
        candidate: Hour,
        haptics: &mut impl Haptics,
    ) -> Option<Handles> {
        if self.pending.is_some() {
            return None;
        }
        let next = self.solver.propose(handle, self.handles, candidate)?;
        haptics.tick();
        self.handles = next.with_end_sentinel();
        Some(self.handles)
    }

    pub fn propose_start(&mut self, candidate: Hour, haptics: &mut impl Haptics) -> Option<Handles> {
        self.propose(Handle::Start, candidate, haptics)
    }

    pub fn propose_end(&mut self, candidate: Hour, haptics: &mut impl Haptics) -> Option<Handles> {
        self.propose(Handle::End, candidate, haptics)
    }

    /// Try to commit the current pair.
    ///
    /// A `Pending` outcome parks the session until [`confirm`](Self::confirm)
    /// is called.
    pub fn commit(&mut self) -> Result<CommitOutcome> {
        if self.pending.is_some() {
            return Err(DialError::MergePending);
        }
        let outcome = self.resolver.resolve(self.handles);
        if let CommitOutcome::Pending(conflict) = &outcome {
            self.pending = Some(conflict.clone());
        }
        Ok(outcome)
    }

    /// Answer a pending merge.
    ///
    /// Approval yields the records computed at commit time. Declining drops
    /// them and returns the session to editing with the pair unchanged.
    pub fn confirm(&mut self, approved: bool) -> Result<Option<Vec<DutyRecord>>> {
        let conflict = self.pending.take().ok_or(DialError::NoPendingMerge)?;
        if approved {
            debug!(description = %conflict.description, "merge approved");
            Ok(Some(conflict.into_records()))
        } else {
            debug!("merge declined");
            Ok(None)
        }
    }

    /// Abandon the edit: restore the initial pair and drop any pending merge.
    pub fn cancel(&mut self) {
        self.handles = self.resolver.original;
        self.pending = None;
    }
}
