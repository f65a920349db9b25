use bevy::prelude::*;
use seasons::scene::HelperShape;

const SPHERE_SECTORS: u32 = 32;
const SPHERE_STACKS: u32 = 32;
const PIN_RESOLUTION: u32 = 32;
const RING_MINOR_RESOLUTION: usize = 16;
const RING_MAJOR_RESOLUTION: usize = 100;

pub fn sphere_mesh(radius: f32) -> Mesh {
    Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS)
}

pub fn helper_mesh(shape: HelperShape) -> Mesh {
    match shape {
        HelperShape::Pin { radius, length } => {
            Mesh::from(Cylinder::new(radius, length).mesh().resolution(PIN_RESOLUTION))
        }
        // bevy's torus is already in the XZ plane, no extra rotation needed
        HelperShape::Ring {
            radius,
            tube_radius,
        } => Mesh::from(
            Torus::new(radius - tube_radius, radius + tube_radius)
                .mesh()
                .minor_resolution(RING_MINOR_RESOLUTION)
                .major_resolution(RING_MAJOR_RESOLUTION),
        ),
    }
}
