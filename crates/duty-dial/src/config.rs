//! Inputs an editing session is opened with.

use serde::{Deserialize, Serialize};

use crate::commit::{CommitResolver, EditMode};
use crate::error::{DialError, Result};
use crate::geometry::DialGeometry;
use crate::interval::{CircularInterval, Handles, Hour, HOURS_PER_DAY};

/// Configuration for one editing session, as supplied by the host screen.
///
/// ```rust
/// use duty_dial::{EditConfig, EditMode};
///
/// let config: EditConfig = serde_json::from_str(
///     r#"{"start": 10, "end": 15, "limit": {"first": 8, "last": 20}, "mode": "split"}"#,
/// )
/// .unwrap();
/// assert_eq!(config.mode, EditMode::Split);
/// assert_eq!(config.limit().first, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditConfig {
    pub start: Hour,
    pub end: Hour,
    /// Region the window may move within; defaults to `start..end`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<CircularInterval>,
    /// A duty precedes the window inside the limit.
    #[serde(default)]
    pub has_previous: bool,
    /// A duty follows the window inside the limit.
    #[serde(default)]
    pub has_next: bool,
    /// Minimum number of hours between the handles.
    #[serde(default)]
    pub min_spacing: Hour,
    pub mode: EditMode,
    #[serde(default)]
    pub geometry: DialGeometry,
}

impl EditConfig {
    pub fn new(start: Hour, end: Hour, mode: EditMode) -> Self {
        Self {
            start,
            end,
            limit: None,
            has_previous: false,
            has_next: false,
            min_spacing: 0,
            mode,
            geometry: DialGeometry::default(),
        }
    }

    pub fn with_limit(mut self, first: Hour, last: Hour) -> Self {
        self.limit = Some(CircularInterval::new(first, last));
        self
    }

    pub fn with_neighbours(mut self, has_previous: bool, has_next: bool) -> Self {
        self.has_previous = has_previous;
        self.has_next = has_next;
        self
    }

    pub fn with_min_spacing(mut self, min_spacing: Hour) -> Self {
        self.min_spacing = min_spacing;
        self
    }

    pub fn with_geometry(mut self, geometry: DialGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// The effective limit interval.
    pub fn limit(&self) -> CircularInterval {
        self.limit
            .unwrap_or(CircularInterval::new(self.start, self.end))
    }

    /// Resolver for commits against this configuration's limit and neighbours.
    pub fn commit_resolver(&self) -> CommitResolver {
        CommitResolver {
            mode: self.mode,
            limit: self.limit(),
            original: Handles::new(self.start, self.end),
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }

    /// Reject hours beyond the dial and unusable geometry.
    ///
    /// A minimum spacing the limit can never satisfy is not an error; the
    /// session simply never accepts a move.
    pub fn validate(&self) -> Result<()> {
        let limit = self.limit();
        let hours = [
            ("start", self.start),
            ("end", self.end),
            ("limit.first", limit.first),
            ("limit.last", limit.last),
            ("min_spacing", self.min_spacing),
        ];
        if let Some((field, hour)) = hours.into_iter().find(|(_, h)| *h > HOURS_PER_DAY) {
            return Err(DialError::InvalidHour { field, hour });
        }
        self.geometry.validate()
    }
}
