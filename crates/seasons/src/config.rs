use crate::constants::*;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const CONFIG_FILE: &str = "seasons_config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonsConfig {
    pub orbit: OrbitConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Phase advance per frame; also the angular frequency of the tilt oscillation.
    pub oscillation_speed: f64,
    pub max_tilt_degrees: f64,
    /// Earth spin advance per frame, radians.
    pub spin_speed: f64,
    /// When set, per-frame increments are scaled by `delta * reference_fps`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_fps: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub days_in_year: f64,
    pub anchor_year: i32,
    pub anchor_month: u32,
    pub anchor_day: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidOscillationSpeed(f64),
    InvalidMaxTilt(f64),
    InvalidSpinSpeed(f64),
    InvalidReferenceFps(f64),
    InvalidDaysInYear(f64),
    InvalidAnchorDate { year: i32, month: u32, day: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOscillationSpeed(v) => {
                write!(f, "oscillation_speed must be finite and positive, got {v}")
            }
            ConfigError::InvalidMaxTilt(v) => {
                write!(f, "max_tilt_degrees must be in (0, 90], got {v}")
            }
            ConfigError::InvalidSpinSpeed(v) => {
                write!(f, "spin_speed must be finite and non-negative, got {v}")
            }
            ConfigError::InvalidReferenceFps(v) => {
                write!(f, "reference_fps must be finite and positive, got {v}")
            }
            ConfigError::InvalidDaysInYear(v) => {
                write!(
                    f,
                    "days_in_year must be in (0, {MAX_DAYS_IN_YEAR}], got {v}"
                )
            }
            ConfigError::InvalidAnchorDate { year, month, day } => {
                write!(
                    f,
                    "anchor date {year}-{month:02}-{day:02} is not a calendar date \
                     with a full year of dates before it"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for SeasonsConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            oscillation_speed: OSCILLATION_SPEED,
            max_tilt_degrees: MAX_TILT_DEGREES,
            spin_speed: EARTH_ROTATION_SPEED,
            reference_fps: None,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            days_in_year: DAYS_IN_YEAR,
            anchor_year: ANCHOR_YEAR,
            anchor_month: ANCHOR_MONTH,
            anchor_day: ANCHOR_DAY,
        }
    }
}

impl SeasonsConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: SeasonsConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.orbit.validate()?;
        self.calendar.validate()
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.oscillation_speed.is_finite() || self.oscillation_speed <= 0.0 {
            return Err(ConfigError::InvalidOscillationSpeed(self.oscillation_speed));
        }
        if !self.max_tilt_degrees.is_finite()
            || self.max_tilt_degrees <= 0.0
            || self.max_tilt_degrees > 90.0
        {
            return Err(ConfigError::InvalidMaxTilt(self.max_tilt_degrees));
        }
        if !self.spin_speed.is_finite() || self.spin_speed < 0.0 {
            return Err(ConfigError::InvalidSpinSpeed(self.spin_speed));
        }
        if let Some(fps) = self.reference_fps {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(ConfigError::InvalidReferenceFps(fps));
            }
        }
        Ok(())
    }

    pub fn max_tilt_radians(&self) -> f64 {
        self.max_tilt_degrees.to_radians()
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails the range check too
        if !(self.days_in_year > 0.0 && self.days_in_year <= MAX_DAYS_IN_YEAR) {
            return Err(ConfigError::InvalidDaysInYear(self.days_in_year));
        }
        // every displayed date lies within one year before the anchor
        self.anchor_date()?
            .checked_sub_days(Days::new(MAX_DAYS_IN_YEAR as u64))
            .map(|_| ())
            .ok_or_else(|| self.invalid_anchor())
    }

    pub fn anchor_date(&self) -> Result<NaiveDate, ConfigError> {
        NaiveDate::from_ymd_opt(self.anchor_year, self.anchor_month, self.anchor_day)
            .ok_or_else(|| self.invalid_anchor())
    }

    fn invalid_anchor(&self) -> ConfigError {
        ConfigError::InvalidAnchorDate {
            year: self.anchor_year,
            month: self.anchor_month,
            day: self.anchor_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(SeasonsConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_anchor_is_june_22() {
        let anchor = CalendarConfig::default().anchor_date().unwrap();
        assert_eq!(anchor, NaiveDate::from_ymd_opt(2023, 6, 22).unwrap());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.1)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_rejects_bad_oscillation_speed(#[case] speed: f64) {
        let mut config = SeasonsConfig::default();
        config.orbit.oscillation_speed = speed;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOscillationSpeed(_))
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-23.5)]
    #[case(90.5)]
    fn test_rejects_bad_tilt(#[case] tilt: f64) {
        let mut config = SeasonsConfig::default();
        config.orbit.max_tilt_degrees = tilt;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMaxTilt(tilt)));
    }

    #[test]
    fn test_rejects_negative_spin() {
        let mut config = SeasonsConfig::default();
        config.orbit.spin_speed = -0.02;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpinSpeed(-0.02)));
    }

    #[test]
    fn test_rejects_zero_reference_fps() {
        let mut config = SeasonsConfig::default();
        config.orbit.reference_fps = Some(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidReferenceFps(0.0)));
    }

    #[rstest]
    #[case(2023, 2, 29)]
    #[case(2023, 13, 1)]
    #[case(2023, 6, 31)]
    fn test_rejects_bad_anchor(#[case] year: i32, #[case] month: u32, #[case] day: u32) {
        let mut config = SeasonsConfig::default();
        config.calendar.anchor_year = year;
        config.calendar.anchor_month = month;
        config.calendar.anchor_day = day;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidAnchorDate { year, month, day })
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(366.5)]
    #[case(1e12)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_rejects_year_length_out_of_range(#[case] days: f64) {
        let mut config = SeasonsConfig::default();
        config.calendar.days_in_year = days;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDaysInYear(_))
        ));
    }

    #[rstest]
    #[case(0.5)]
    #[case(365.25)]
    #[case(366.0)]
    fn test_accepts_year_length_in_range(#[case] days: f64) {
        let mut config = SeasonsConfig::default();
        config.calendar.days_in_year = days;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_anchor_without_a_year_before_it() {
        let mut config = SeasonsConfig::default();
        config.calendar.anchor_year = NaiveDate::MIN.year();
        config.calendar.anchor_month = NaiveDate::MIN.month();
        config.calendar.anchor_day = NaiveDate::MIN.day();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAnchorDate { .. })
        ));
    }

    #[test]
    fn test_parses_toml_without_reference_fps() {
        let content = r#"
            [orbit]
            oscillation_speed = 0.2
            max_tilt_degrees = 23.5
            spin_speed = 0.01

            [calendar]
            days_in_year = 365.5
            anchor_year = 2024
            anchor_month = 6
            anchor_day = 21
        "#;
        let config: SeasonsConfig = toml::from_str(content).unwrap();
        assert_eq!(config.orbit.oscillation_speed, 0.2);
        assert_eq!(config.orbit.reference_fps, None);
        assert_eq!(config.calendar.days_in_year, 365.5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!("seasons_config_{}.toml", std::process::id()));
        let mut config = SeasonsConfig::default();
        config.orbit.reference_fps = Some(60.0);

        config.save_to_file(&path).unwrap();
        let loaded = SeasonsConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let path = std::env::temp_dir().join("seasons_config_does_not_exist.toml");
        assert!(SeasonsConfig::load_from_file(path).is_err());
    }
}
