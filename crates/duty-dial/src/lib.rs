//! # duty-dial
//!
//! Circular 24-hour duty window engine for dial-style roster editors.
//!
//! A user edits a contiguous stretch of the day by dragging two handles
//! around a 24-hour dial. This crate holds everything between the raw
//! pointer events and the roster records: no rendering, no I/O.
//!
//! ## Quick start
//!
//! ```rust
//! use duty_dial::{CommitOutcome, DutyKind, EditConfig, EditMode, EditSession, NoHaptics};
//!
//! let config = EditConfig::new(10, 15, EditMode::Split).with_limit(8, 20);
//! let mut session = EditSession::new(&config).unwrap();
//!
//! // Drag the start handle back one hour.
//! session.propose_start(9, &mut NoHaptics).unwrap();
//!
//! let outcome = session.commit().unwrap();
//! let kinds: Vec<DutyKind> = outcome.records().iter().map(|r| r.kind()).collect();
//! assert_eq!(kinds, [DutyKind::Previous, DutyKind::Current, DutyKind::Next]);
//! assert!(matches!(outcome, CommitOutcome::Ready { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`angle`] — pointer angle ⇄ hour of day, with the dial's 6 o'clock origin
//! - [`interval`] — wrap-aware intervals, spans and the handle pair
//! - [`geometry`] — handle placement and enlarged touch hotspots
//! - [`solver`] — minimum-spacing and limit rules for handle moves
//! - [`session`] — live editing state, haptics, commit and confirmation
//! - [`drag`] — press / move / release gesture tracking
//! - [`commit`] — PREVIOUS / CURRENT / NEXT decomposition and merge detection
//! - [`phase`] — time-of-day phase for handle icons
//! - [`config`] — session configuration
//! - [`error`] — Error types

pub mod angle;
pub mod commit;
pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod interval;
pub mod phase;
pub mod session;
pub mod solver;

pub use angle::{angle_to_hour, hour_to_angle, sweep_angle};
pub use commit::{CommitOutcome, CommitResolver, DutyKind, DutyRecord, EditMode, MergeConflict};
pub use config::EditConfig;
pub use drag::{DragSession, DragState, PointerEvent, PointerPhase};
pub use error::DialError;
pub use geometry::{DialGeometry, Point};
pub use interval::{duration_between, CircularInterval, Handles, Hour, Span};
pub use phase::DayPhase;
pub use session::{EditSession, Haptics, NoHaptics, TickCounter};
pub use solver::{Handle, HandleSolver};
