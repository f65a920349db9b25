mod core;
mod earth;
mod helpers;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::earth::EarthPlugin;
use crate::ui::UIPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

pub struct EarthSeasonsPlugin;

impl Plugin for EarthSeasonsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraPlugin, EarthPlugin, UIPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins((
                FrameTimeDiagnosticsPlugin::default(),
                LogDiagnosticsPlugin::default(),
            ));
        }
    }
}
