use bevy::prelude::*;
use seasons::scene::HelperKind;

/// Parent of every body in the scene, turned a quarter turn so the sun sits to the side.
#[derive(Component)]
pub struct SolarSystemRoot;

#[derive(Component)]
pub struct Sun;

#[derive(Component)]
pub struct Earth;

#[derive(Component)]
pub struct CloudLayer;

/// Tilts and spins with the earth.
#[derive(Component)]
pub struct Spinning;

#[derive(Component)]
pub struct Helper(pub HelperKind);
