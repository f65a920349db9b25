use bevy::prelude::*;
use seasons::Season;

#[derive(Message)]
pub struct SeasonChanged {
    pub season: Season,
    pub date: String,
}
