pub mod bundles;
pub mod components;
pub mod systems;

use crate::earth::systems::animate_earth;
use crate::ui::systems::*;
use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((EguiPlugin::default(), SeasonOverlayPlugin))
            .add_systems(EguiPrimaryContextPass, render_control_panel);
    }
}

/// Date, season and inclination text, refreshed from the frame published
/// by `animate_earth` in the same update.
pub struct SeasonOverlayPlugin;

impl Plugin for SeasonOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay).add_systems(
            Update,
            (update_season_overlay, update_inclination_readout).after(animate_earth),
        );
    }
}
