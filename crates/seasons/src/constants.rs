pub const OSCILLATION_SPEED: f64 = 0.1;
pub const MAX_TILT_DEGREES: f64 = 23.5;
pub const EARTH_ROTATION_SPEED: f64 = 0.02;

pub const DAYS_IN_YEAR: f64 = 365.0;
/// Longest configurable year, a leap year.
pub const MAX_DAYS_IN_YEAR: f64 = 366.0;

// Date shown at orbit angle 0: the last day of spring.
pub const ANCHOR_YEAR: i32 = 2023;
pub const ANCHOR_MONTH: u32 = 6;
pub const ANCHOR_DAY: u32 = 22;

/// Readouts within this many degrees of the maximum tilt snap to the maximum.
pub const TILT_SATURATION_MARGIN: f64 = 0.5;
