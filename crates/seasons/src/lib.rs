pub mod calendar;
pub mod config;
pub mod constants;
pub mod display;
pub mod driver;
pub mod freeze;
pub mod scene;

pub use calendar::{Season, SeasonCalculator, SeasonDate};
pub use config::{ConfigError, SeasonsConfig};
pub use driver::{AnimationDriver, FrameOutput, UserControls};
