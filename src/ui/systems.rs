use crate::earth::resources::{Controls, CurrentFrame, OrbitAnimation};
use crate::ui::bundles::*;
use crate::ui::components::*;
use bevy::color::Color;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use seasons::SeasonDate;
use seasons::display::format_inclination;

const OVERLAY_FONT_SIZE: f32 = 24.0;
const READOUT_FONT_SIZE: f32 = 20.0;

pub fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((OverlayColumnBundle::top_center(10.0), SeasonOverlay))
        .with_children(|parent| {
            parent.spawn((
                LabelBundle::new("", OVERLAY_FONT_SIZE, Color::WHITE),
                DateText,
            ));
            parent.spawn((
                LabelBundle::new("", OVERLAY_FONT_SIZE, Color::WHITE),
                SeasonText,
            ));
        });

    // Sits above and to the left of the earth
    commands.spawn((
        LabelBundle::new("", READOUT_FONT_SIZE, Color::WHITE).with_node(Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(22.0),
            right: Val::Percent(52.0),
            ..default()
        }),
        InclinationText,
    ));
}

/// Date on the first line, season on the second.
pub fn overlay_lines(date: &SeasonDate) -> (String, String) {
    (date.to_string(), date.season.to_string())
}

fn set_text(text: &mut Text, value: &str) {
    if text.0 != value {
        text.0 = value.to_string();
    }
}

pub fn update_season_overlay(
    current: Res<CurrentFrame>,
    mut date_query: Query<&mut Text, (With<DateText>, Without<SeasonText>)>,
    mut season_query: Query<&mut Text, (With<SeasonText>, Without<DateText>)>,
) {
    if !current.is_changed() {
        return;
    }
    let Some(frame) = current.frame.as_ref() else {
        return;
    };

    let (date, season) = overlay_lines(&frame.season_date);
    for mut text in date_query.iter_mut() {
        set_text(&mut text, &date);
    }
    for mut text in season_query.iter_mut() {
        set_text(&mut text, &season);
    }
}

pub fn update_inclination_readout(
    current: Res<CurrentFrame>,
    animation: Res<OrbitAnimation>,
    mut readout_query: Query<&mut Text, With<InclinationText>>,
) {
    let Some(frame) = current.frame.as_ref() else {
        return;
    };

    let readout = format_inclination(
        frame.inclination_degrees,
        animation.driver.orbit().max_tilt_degrees,
    );
    for mut text in readout_query.iter_mut() {
        set_text(&mut text, &readout);
    }
}

pub fn render_control_panel(mut contexts: EguiContexts, mut controls: ResMut<Controls>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut next = controls.0;
    egui::Window::new("Controls")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .title_bar(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut next.freeze, "Freeze");
                ui.checkbox(&mut next.show_helpers, "Show Helpers");
            });
        });

    // only flag a change when a checkbox actually flipped
    controls.set_if_neq(Controls(next));
}
