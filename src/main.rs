// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use earth_seasons::EarthSeasonsPlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::linear_rgb(0.005, 0.005, 0.02)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Earth Seasons".into(),
                resolution: WindowResolution::new(1280, 800),
                present_mode: PresentMode::AutoVsync,
                resize_constraints: WindowResizeConstraints {
                    min_width: 640.0,
                    min_height: 480.0,
                    ..default()
                },
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EarthSeasonsPlugin)
        .run();
}
