use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

/// Dim light standing in for the ambient term, so the night side is not pitch black.
#[derive(Component)]
pub struct FillLight;
