//! Mapping from an orbit angle to a calendar date and season.
//!
//! The orbit angle decreases as the animation advances, so the date is counted
//! backwards from the anchor: angle 0 is the anchor date (the last day of
//! spring) and the calendar moves forward as the angle winds down towards -2π.

use crate::config::{CalendarConfig, ConfigError};
use chrono::{Datelike, Days, NaiveDate};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// In order of increasing orbit angle.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Winter, Season::Fall, Season::Summer];

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// Quadrant of the normalized orbit angle this season occupies.
    /// Lower bound inclusive, so a boundary angle belongs to the higher band.
    pub fn angle_band(self) -> Range<f64> {
        match self {
            Season::Spring => 0.0..FRAC_PI_2,
            Season::Winter => FRAC_PI_2..PI,
            Season::Fall => PI..PI + FRAC_PI_2,
            Season::Summer => PI + FRAC_PI_2..TAU,
        }
    }

    /// `normalized` must already be in [0, 2π).
    pub fn from_normalized_angle(normalized: f64) -> Self {
        if normalized >= PI + FRAC_PI_2 {
            Season::Summer
        } else if normalized >= PI {
            Season::Fall
        } else if normalized >= FRAC_PI_2 {
            Season::Winter
        } else {
            Season::Spring
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonDate {
    pub season: Season,
    /// Full English month name.
    pub month: String,
    pub day: u32,
}

impl fmt::Display for SeasonDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.day)
    }
}

/// Wraps any angle into [0, 2π). In-range input is returned unchanged.
pub fn normalize_angle(angle: f64) -> f64 {
    let remainder = angle % TAU;
    let wrapped = if remainder < 0.0 {
        remainder + TAU
    } else {
        remainder
    };
    // -1e-20 + 2π rounds to 2π
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[derive(Debug, Clone)]
pub struct SeasonCalculator {
    anchor: NaiveDate,
    days_per_radian: f64,
}

impl SeasonCalculator {
    pub fn new(config: &CalendarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            anchor: config.anchor_date()?,
            days_per_radian: config.days_in_year / TAU,
        })
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Whole days between the anchor and the date shown at `angle`.
    pub fn days_before_anchor(&self, angle: f64) -> u64 {
        (normalize_angle(angle) * self.days_per_radian).floor() as u64
    }

    pub fn date(&self, angle: f64) -> NaiveDate {
        self.anchor - Days::new(self.days_before_anchor(angle))
    }

    pub fn calculate(&self, angle: f64) -> SeasonDate {
        let season = Season::from_normalized_angle(normalize_angle(angle));
        let date = self.date(angle);

        SeasonDate {
            season,
            month: date.format("%B").to_string(),
            day: date.day(),
        }
    }
}
