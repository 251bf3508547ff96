//! Dial geometry: where the handles sit and how large their touch targets are.
//!
//! All lengths are in the host's layout units (the reference dial is 226
//! units across with a 28-unit ring). The origin is the dial's top-left
//! corner with y growing downwards, matching pointer event coordinates.

use serde::{Deserialize, Serialize};

use crate::angle::hour_to_angle;
use crate::error::{DialError, Result};
use crate::interval::Hour;

/// A point in dial-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An enlarged circular touch target around a handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub center: Point,
    pub radius: f64,
}

impl Hotspot {
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }
}

/// Size of the dial and of the ring the handles travel on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialGeometry {
    /// Outer diameter of the dial.
    pub size: f64,
    /// Width of the ring; handles are inscribed in it.
    pub stroke: f64,
    /// Touch tolerance: hotspot radius as a multiple of the handle radius.
    pub tap_scale: f64,
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self {
            size: 226.0,
            stroke: 28.0,
            tap_scale: 2.0,
        }
    }
}

impl DialGeometry {
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.size) || !positive(self.stroke) || !positive(self.tap_scale) {
            return Err(DialError::InvalidGeometry(format!(
                "size, stroke and tap_scale must be positive (got {}, {}, {})",
                self.size, self.stroke, self.tap_scale
            )));
        }
        if self.stroke >= self.size {
            return Err(DialError::InvalidGeometry(format!(
                "stroke {} must be narrower than the dial {}",
                self.stroke, self.size
            )));
        }
        Ok(())
    }

    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Radius of the circle running through the middle of the ring.
    pub fn track_radius(&self) -> f64 {
        self.size / 2.0 - self.stroke / 2.0
    }

    /// Diameter of a handle: the square inscribed in the ring's width.
    pub fn handle_size(&self) -> f64 {
        self.stroke / std::f64::consts::SQRT_2
    }

    /// Centre of the handle drawn for `hour`.
    pub fn handle_center(&self, hour: Hour) -> Point {
        let radians = hour_to_angle(hour).to_radians();
        let center = self.center();
        let radius = self.track_radius();
        Point::new(
            center.x + radius * radians.cos(),
            center.y + radius * radians.sin(),
        )
    }

    /// Touch target for the handle drawn at `hour`.
    pub fn hotspot(&self, hour: Hour) -> Hotspot {
        Hotspot {
            center: self.handle_center(hour),
            radius: self.handle_size() / 2.0 * self.tap_scale,
        }
    }
}
