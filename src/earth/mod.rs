pub mod components;
pub mod events;
pub mod logic;
pub mod resources;
pub mod systems;

use crate::earth::events::*;
use crate::earth::logic::{build_driver, load_config};
use crate::earth::resources::*;
use crate::earth::systems::*;
use bevy::prelude::*;
use seasons::config::CONFIG_FILE;
use std::path::Path;

pub struct EarthPlugin;

impl Plugin for EarthPlugin {
    fn build(&self, app: &mut App) {
        let config = load_config(Path::new(CONFIG_FILE));
        let driver = build_driver(&config);

        app.add_message::<SeasonChanged>()
            .insert_resource(OrbitAnimation { driver })
            .init_resource::<Controls>()
            .init_resource::<CurrentFrame>()
            .add_systems(Startup, spawn_solar_system)
            .add_systems(
                Update,
                (animate_earth, log_season_changes, sync_helpers).chain(),
            );
    }
}
