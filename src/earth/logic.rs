use bevy::log::{error, info, warn};
use seasons::{AnimationDriver, SeasonsConfig};
use std::path::Path;

/// Reads the config file, falling back to the built-in defaults when it is
/// missing, malformed or fails validation.
pub fn load_config(path: &Path) -> SeasonsConfig {
    if !path.exists() {
        warn!("{} not found, using default seasons config", path.display());
        return SeasonsConfig::default();
    }

    match SeasonsConfig::load_from_file(path) {
        Ok(config) => {
            info!("Loaded seasons config from {}", path.display());
            config
        }
        Err(err) => {
            error!("Failed to load {}: {err}; using defaults", path.display());
            SeasonsConfig::default()
        }
    }
}

pub fn build_driver(config: &SeasonsConfig) -> AnimationDriver {
    AnimationDriver::new(config).unwrap_or_else(|err| {
        error!("Invalid seasons config ({err}), using defaults");
        AnimationDriver::new(&SeasonsConfig::default()).expect("default seasons config is valid")
    })
}
