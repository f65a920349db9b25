use bevy::prelude::*;

#[derive(Component)]
pub struct SeasonOverlay;

#[derive(Component)]
pub struct DateText;

#[derive(Component)]
pub struct SeasonText;

#[derive(Component)]
pub struct InclinationText;
