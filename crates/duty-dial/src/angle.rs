//! Mapping between pointer angles on the dial and hours of the day.
//!
//! Angles are in degrees, measured clockwise in screen coordinates from the
//! positive x axis (3 o'clock on screen). The dial is drawn with hour 6 at
//! that zero angle, so every conversion carries a fixed six-hour offset.
//!
//! The two directions are not exact inverses around 0, 6 and
//! 24: [`angle_to_hour`] never yields 0 (midnight comes back as the end
//! sentinel 24), and [`hour_to_angle`] pins hour 6 to angle 0.

use crate::interval::{duration_between, Hour, HOURS_PER_DAY};

/// Degrees swept by one hour on the dial.
pub const DEGREES_PER_HOUR: f64 = 360.0 / HOURS_PER_DAY as f64;

/// The hour drawn at angle zero.
pub const DIAL_ORIGIN_HOUR: Hour = 6;

/// Quantise a pointer angle to the nearest hour on the dial.
///
/// The angle is first folded into `[0, 360)`. Total: non-finite input
/// quantises to the origin hour.
pub fn angle_to_hour(angle: f64) -> Hour {
    let mut positive = angle % 360.0;
    if positive < 0.0 {
        positive += 360.0;
    }
    // NaN casts to 0, landing on the origin hour.
    let mut hour = (positive / DEGREES_PER_HOUR).round() as i32 + DIAL_ORIGIN_HOUR as i32;
    if hour > HOURS_PER_DAY as i32 {
        hour -= HOURS_PER_DAY as i32;
    }
    hour as Hour
}

/// Angle at which `hour` is drawn on the dial.
pub fn hour_to_angle(hour: Hour) -> f64 {
    let hour = f64::from(hour);
    let origin = f64::from(DIAL_ORIGIN_HOUR);
    if hour < origin {
        (hour + 18.0) / 24.0 * 360.0
    } else if hour > origin {
        (hour - origin) / 24.0 * 360.0
    } else {
        0.0
    }
}

/// Angle of a pointer at `(dx, dy)` relative to the dial centre, in `(-180, 180]`.
pub fn pointer_angle(dx: f64, dy: f64) -> f64 {
    normalize_signed(dy.atan2(dx).to_degrees())
}

/// Fold any angle into `(-180, 180]`.
pub fn normalize_signed(angle: f64) -> f64 {
    let mut folded = angle % 360.0;
    if folded <= -180.0 {
        folded += 360.0;
    } else if folded > 180.0 {
        folded -= 360.0;
    }
    folded
}

/// Arc length in degrees drawn between the start and end handles.
///
/// An end at or before the start wraps through midnight, so equal handles
/// sweep the whole dial.
pub fn sweep_angle(start: Hour, end: Hour) -> f64 {
    f64::from(duration_between(start, end)) / f64::from(HOURS_PER_DAY) * 360.0
}
