use glam::Vec3;

pub const EARTH_RADIUS: f32 = 1.0;
pub const CLOUD_LAYER_RADIUS: f32 = 1.01;
pub const SUN_RADIUS: f32 = 0.5;
pub const SUN_POSITION: Vec3 = Vec3::new(0.0, 0.0, -50.0);

const POLE_PIN_RADIUS: f32 = 0.02;
const POLE_PIN_LENGTH: f32 = 0.4;
const POLE_PIN_OFFSET: f32 = 1.05;
const EQUATOR_RING_RADIUS: f32 = 1.01;
const EQUATOR_RING_TUBE_RADIUS: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperKind {
    NorthPole,
    SouthPole,
    Equator,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HelperShape {
    /// Cylinder along the local Y axis.
    Pin { radius: f32, length: f32 },
    /// Torus lying in the local XZ plane.
    Ring { radius: f32, tube_radius: f32 },
}

/// A piece of auxiliary geometry attached to the earth, in the earth's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelperRequest {
    pub kind: HelperKind,
    pub shape: HelperShape,
    pub offset: Vec3,
}

impl HelperRequest {
    pub fn for_kind(kind: HelperKind) -> Self {
        let pin = HelperShape::Pin {
            radius: POLE_PIN_RADIUS,
            length: POLE_PIN_LENGTH,
        };
        match kind {
            HelperKind::NorthPole => Self {
                kind,
                shape: pin,
                offset: Vec3::Y * POLE_PIN_OFFSET,
            },
            HelperKind::SouthPole => Self {
                kind,
                shape: pin,
                offset: Vec3::NEG_Y * POLE_PIN_OFFSET,
            },
            HelperKind::Equator => Self {
                kind,
                shape: HelperShape::Ring {
                    radius: EQUATOR_RING_RADIUS,
                    tube_radius: EQUATOR_RING_TUBE_RADIUS,
                },
                offset: Vec3::ZERO,
            },
        }
    }
}

pub fn helper_requests(show_helpers: bool) -> Vec<HelperRequest> {
    if !show_helpers {
        return Vec::new();
    }
    [HelperKind::NorthPole, HelperKind::SouthPole, HelperKind::Equator]
        .into_iter()
        .map(HelperRequest::for_kind)
        .collect()
}
