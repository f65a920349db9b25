use crate::earth::components::*;
use crate::earth::events::SeasonChanged;
use crate::earth::resources::*;
use crate::helpers::mesh::{helper_mesh, sphere_mesh};
use bevy::color::Color;
use bevy::math::{Quat, Vec3};
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;
use seasons::scene::{
    CLOUD_LAYER_RADIUS, EARTH_RADIUS, HelperShape, SUN_POSITION, SUN_RADIUS, helper_requests,
};
use std::f32::consts::FRAC_PI_2;

const SUN_ILLUMINANCE: f32 = 12_000.0;

pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sun_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.85, 0.4),
        unlit: true,
        ..default()
    });
    let earth_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.15, 0.35, 0.75),
        perceptual_roughness: 0.8,
        ..default()
    });
    let cloud_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.2),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    commands
        .spawn((
            Transform::from_rotation(Quat::from_rotation_y(FRAC_PI_2)),
            Visibility::default(),
            SolarSystemRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(sphere_mesh(SUN_RADIUS))),
                MeshMaterial3d(sun_material),
                Transform::from_translation(SUN_POSITION),
                Sun,
            ));

            // Shines from behind the sun towards the earth at the origin
            parent.spawn((
                Transform::from_translation(SUN_POSITION + Vec3::NEG_Z * 5.0)
                    .looking_at(Vec3::ZERO, Vec3::Y),
                DirectionalLight {
                    illuminance: SUN_ILLUMINANCE,
                    ..default()
                },
            ));

            parent.spawn((
                Mesh3d(meshes.add(sphere_mesh(EARTH_RADIUS))),
                MeshMaterial3d(earth_material),
                Transform::default(),
                Earth,
                Spinning,
            ));

            parent.spawn((
                Mesh3d(meshes.add(sphere_mesh(CLOUD_LAYER_RADIUS))),
                MeshMaterial3d(cloud_material),
                Transform::default(),
                CloudLayer,
                Spinning,
            ));
        });

    info!("Solar system spawned");
}

pub fn animate_earth(
    time: Res<Time>,
    controls: Res<Controls>,
    mut animation: ResMut<OrbitAnimation>,
    mut current: ResMut<CurrentFrame>,
    mut season_changed: MessageWriter<SeasonChanged>,
    mut bodies: Query<&mut Transform, With<Spinning>>,
) {
    let frame = animation.driver.tick(time.delta_secs_f64(), controls.0);

    let rotation = frame.earth_rotation();
    for mut transform in bodies.iter_mut() {
        transform.rotation = rotation;
    }

    let previous = current.frame.as_ref();
    if previous.map(|f| f.season_date.season) != Some(frame.season_date.season) {
        season_changed.write(SeasonChanged {
            season: frame.season_date.season,
            date: frame.season_date.to_string(),
        });
    }
    if frame.suppressed && !previous.is_some_and(|f| f.suppressed) {
        debug!("Orbit frozen at phase {:.2}", frame.phase);
    }

    current.frame = Some(frame);
}

pub fn log_season_changes(mut events: MessageReader<SeasonChanged>) {
    for event in events.read() {
        info!("{} begins on {}", event.season, event.date);
    }
}

/// Respawns the helper geometry under the earth whenever the checkbox flips.
pub fn sync_helpers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    controls: Res<Controls>,
    earth_query: Query<Entity, With<Earth>>,
    helpers: Query<(Entity, &Helper)>,
    mut applied: Local<Option<bool>>,
) {
    let show_helpers = controls.0.show_helpers;
    if *applied == Some(show_helpers) {
        return;
    }
    let Ok(earth) = earth_query.single() else {
        return;
    };

    for (entity, helper) in helpers.iter() {
        debug!("Removing {:?} helper", helper.0);
        commands.entity(entity).despawn();
    }

    let requests = helper_requests(show_helpers);
    if !requests.is_empty() {
        let pin_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.69, 0.69, 0.69),
            ..default()
        });
        let ring_material = materials.add(StandardMaterial {
            base_color: Color::WHITE,
            ..default()
        });

        commands.entity(earth).with_children(|parent| {
            for request in requests {
                let material = match request.shape {
                    HelperShape::Pin { .. } => pin_material.clone(),
                    HelperShape::Ring { .. } => ring_material.clone(),
                };
                parent.spawn((
                    Mesh3d(meshes.add(helper_mesh(request.shape))),
                    MeshMaterial3d(material),
                    Transform::from_translation(request.offset),
                    Helper(request.kind),
                ));
            }
        });
    }

    info!("Helpers {}", if show_helpers { "shown" } else { "hidden" });
    *applied = Some(show_helpers);
}
