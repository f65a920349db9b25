use bevy::prelude::Resource;
use seasons::{AnimationDriver, FrameOutput, UserControls};

#[derive(Resource)]
pub struct OrbitAnimation {
    pub driver: AnimationDriver,
}

/// Checkbox state, written by the control panel and read once per frame.
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq)]
pub struct Controls(pub UserControls);

/// Output of the latest animation tick.
#[derive(Resource, Default)]
pub struct CurrentFrame {
    pub frame: Option<FrameOutput>,
}
