use crate::core::camera::components::{FillLight, MainCamera};
use bevy::log::info;
use bevy::math::Vec3;
use bevy::prelude::*;

const CAMERA_DISTANCE: f32 = 5.0;
const CAMERA_FOV_DEGREES: f32 = 75.0;
const CAMERA_FAR: f32 = 10_000.0;
const FILL_LIGHT_ILLUMINANCE: f32 = 600.0;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        Transform::from_xyz(1.0, 0.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
        DirectionalLight {
            illuminance: FILL_LIGHT_ILLUMINANCE,
            ..default()
        },
        FillLight,
    ));

    info!("Camera spawned");
}
