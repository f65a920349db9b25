//! Per-frame animation state: axial tilt, spin and orbital phase.

use crate::calendar::{Season, SeasonCalculator, SeasonDate};
use crate::config::{ConfigError, OrbitConfig, SeasonsConfig};
use crate::freeze::{FreezeGate, GateDecision};
use glam::{EulerRot, Quat};
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserControls {
    pub show_helpers: bool,
    pub freeze: bool,
}

impl Default for UserControls {
    fn default() -> Self {
        Self {
            show_helpers: true,
            freeze: false,
        }
    }
}

/// Everything one tick publishes to the scene and the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Phase this frame was computed from.
    pub phase: f64,
    /// Axial tilt, radians.
    pub inclination: f64,
    pub inclination_degrees: f64,
    /// Accumulated spin about the axis, radians in [0, 2π).
    pub spin: f64,
    pub orbit_angle: f64,
    pub season_date: SeasonDate,
    /// The freeze gate kept the phase from advancing after this frame.
    pub suppressed: bool,
}

impl FrameOutput {
    /// Tilt about X followed by spin about the tilted Y axis.
    pub fn earth_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.inclination as f32,
            self.spin as f32,
            0.0,
        )
    }
}

pub fn inclination_factor(phase: f64, orbit: &OrbitConfig) -> f64 {
    (orbit.oscillation_speed * phase).sin()
}

pub fn inclination_degrees(phase: f64, orbit: &OrbitConfig) -> f64 {
    orbit.max_tilt_degrees * inclination_factor(phase, orbit)
}

pub fn orbit_angle(phase: f64, orbit: &OrbitConfig) -> f64 {
    -(phase * orbit.oscillation_speed + FRAC_PI_2)
}

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    orbit: OrbitConfig,
    calculator: SeasonCalculator,
    gate: FreezeGate,
    phase: f64,
    spin: f64,
}

impl AnimationDriver {
    pub fn new(config: &SeasonsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            orbit: config.orbit.clone(),
            calculator: SeasonCalculator::new(&config.calendar)?,
            gate: FreezeGate::default(),
            phase: 0.0,
            spin: 0.0,
        })
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn last_season(&self) -> Option<Season> {
        self.gate.last_season()
    }

    pub fn orbit(&self) -> &OrbitConfig {
        &self.orbit
    }

    pub fn calculator(&self) -> &SeasonCalculator {
        &self.calculator
    }

    fn frame_scale(&self, delta_seconds: f64) -> f64 {
        match self.orbit.reference_fps {
            Some(fps) => delta_seconds.max(0.0) * fps,
            None => 1.0,
        }
    }

    pub fn tick(&mut self, delta_seconds: f64, controls: UserControls) -> FrameOutput {
        let scale = self.frame_scale(delta_seconds);

        let factor = inclination_factor(self.phase, &self.orbit);
        let inclination = self.orbit.max_tilt_radians() * factor;
        let inclination_degrees = self.orbit.max_tilt_degrees * factor;

        self.spin = (self.spin + self.orbit.spin_speed * scale) % TAU;

        let orbit_angle = orbit_angle(self.phase, &self.orbit);
        let season_date = self.calculator.calculate(orbit_angle);

        // Transforms above are published even on frames the orbit stays put.
        let decision = self.gate.evaluate(controls.freeze, season_date.season);
        let output = FrameOutput {
            phase: self.phase,
            inclination,
            inclination_degrees,
            spin: self.spin,
            orbit_angle,
            season_date,
            suppressed: decision == GateDecision::Suppress,
        };

        if decision == GateDecision::Advance {
            self.phase += self.orbit.oscillation_speed * scale;
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    const FRAME: f64 = 1.0 / 60.0;

    fn driver() -> AnimationDriver {
        AnimationDriver::new(&SeasonsConfig::default()).unwrap()
    }

    fn frozen() -> UserControls {
        UserControls {
            show_helpers: true,
            freeze: true,
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-3.7)]
    #[case(157.08)]
    #[case(1e6)]
    fn test_inclination_within_max_tilt(#[case] phase: f64) {
        let degrees = inclination_degrees(phase, &OrbitConfig::default());
        assert!((-23.5..=23.5).contains(&degrees), "{degrees}");
    }

    #[test]
    fn test_inclination_stays_in_range_over_many_frames() {
        let mut driver = driver();
        for _ in 0..5000 {
            let frame = driver.tick(FRAME, UserControls::default());
            assert!((-23.5..=23.5).contains(&frame.inclination_degrees));
            assert!(frame.inclination.abs() <= 23.5_f64.to_radians() + 1e-12);
        }
    }

    #[test]
    fn test_first_frame() {
        let mut driver = driver();
        let frame = driver.tick(FRAME, UserControls::default());

        assert_eq!(frame.phase, 0.0);
        assert_eq!(frame.inclination, 0.0);
        assert_eq!(frame.orbit_angle, -FRAC_PI_2);
        assert_eq!(frame.season_date.month, "September");
        assert_eq!(frame.season_date.day, 22);
        assert!(!frame.suppressed);
        assert!((driver.phase() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_phase_advances_by_oscillation_speed_per_frame() {
        let mut driver = driver();
        for i in 0..100 {
            let frame = driver.tick(FRAME, UserControls::default());
            assert!((frame.phase - i as f64 * 0.1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_per_frame_mode_ignores_delta() {
        let mut slow = driver();
        let mut fast = driver();
        for _ in 0..10 {
            slow.tick(0.5, UserControls::default());
            fast.tick(0.001, UserControls::default());
        }
        assert_eq!(slow.phase(), fast.phase());
        assert_eq!(slow.spin(), fast.spin());
    }

    #[test]
    fn test_reference_fps_scales_advance() {
        let mut config = SeasonsConfig::default();
        config.orbit.reference_fps = Some(60.0);
        let mut driver = AnimationDriver::new(&config).unwrap();

        driver.tick(2.0 / 60.0, UserControls::default());

        assert!((driver.phase() - 0.2).abs() < 1e-9);
        assert!((driver.spin() - 0.04).abs() < 1e-9);
    }

    #[test]
    fn test_spin_wraps() {
        let mut driver = driver();
        for _ in 0..2000 {
            let frame = driver.tick(FRAME, UserControls::default());
            assert!((0.0..TAU).contains(&frame.spin));
        }
    }

    #[test]
    fn test_earth_rotation_combines_tilt_and_spin() {
        let mut driver = driver();
        let frame = driver.tick(FRAME, UserControls::default());
        assert!(
            frame
                .earth_rotation()
                .abs_diff_eq(Quat::from_rotation_y(0.02), 1e-6)
        );

        let tilted = FrameOutput {
            inclination: 0.3,
            spin: 0.0,
            ..frame
        };
        assert!(
            tilted
                .earth_rotation()
                .abs_diff_eq(Quat::from_rotation_x(0.3), 1e-6)
        );
    }

    #[test]
    fn test_calendar_moves_forward() {
        let mut driver = driver();
        let calculator = driver.calculator().clone();
        let mut previous: Option<NaiveDate> = None;
        for _ in 0..600 {
            let frame = driver.tick(FRAME, UserControls::default());
            let date = calculator.date(frame.orbit_angle);
            if let Some(previous) = previous {
                // one frame is under a day, so dates only step forward or wrap a year
                let step = (date - previous).num_days();
                assert!(step == 0 || step == 1 || step == -364, "step was {step}");
            }
            previous = Some(date);
        }
    }

    #[test]
    fn test_freeze_holds_phase_once_season_changes() {
        let mut driver = driver();

        let mut frozen_at = None;
        for _ in 0..1000 {
            let frame = driver.tick(FRAME, frozen());
            if frame.suppressed {
                frozen_at = Some(frame.phase);
                break;
            }
        }
        let frozen_phase = frozen_at.expect("freeze never engaged");

        let spin_before = driver.spin();
        for _ in 0..100 {
            let frame = driver.tick(FRAME, frozen());
            assert!(frame.suppressed);
            assert_eq!(frame.phase, frozen_phase);
            assert_eq!(driver.phase(), frozen_phase);
        }
        assert_ne!(driver.spin(), spin_before);

        let resumed = driver.tick(FRAME, UserControls::default());
        assert!(!resumed.suppressed);
        assert_eq!(resumed.phase, frozen_phase);
        assert!((driver.phase() - (frozen_phase + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_freeze_reengages_at_next_season() {
        let mut driver = driver();
        // engage once, then release
        while !driver.tick(FRAME, frozen()).suppressed {}
        let released = driver.tick(FRAME, UserControls::default());
        let held_season = released.season_date.season;

        let mut frames = 0;
        loop {
            let frame = driver.tick(FRAME, frozen());
            frames += 1;
            if frame.suppressed {
                assert_ne!(frame.season_date.season, held_season);
                assert_eq!(driver.last_season(), Some(held_season));
                break;
            }
            assert_eq!(frame.season_date.season, held_season);
            assert!(frames < 1000, "freeze never re-engaged");
        }
        // a quarter turn of orbit angle at 0.01 rad per frame
        assert!((150..=160).contains(&frames), "frames was {frames}");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = SeasonsConfig::default();
        config.orbit.oscillation_speed = 0.0;
        assert!(AnimationDriver::new(&config).is_err());
    }
}
