use std::f32::consts::{
    FRAC_PI_2,
    PI,
};

use bevy::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};


/// Heading source for the geographic frames.
///
/// `heading` is the clockwise angle, in radians, from north to the engine's
/// forward (+Z) axis. Implementations must return the same value for the
/// duration of one conversion call.
pub trait Compass {
    fn heading(&self) -> f32;
}


#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Reflect,
    Serialize,
)]
pub enum CardinalDirection {
    #[default]
    North,
    East,
    South,
    West,
}

impl Compass for CardinalDirection {
    fn heading(&self) -> f32 {
        match self {
            CardinalDirection::North => 0.0,
            CardinalDirection::East => FRAC_PI_2,
            CardinalDirection::South => PI,
            CardinalDirection::West => 3.0 * FRAC_PI_2,
        }
    }
}


/// Direction the engine's forward axis points in the world, shared by every
/// visualizer converting NED or ENU geometry.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Resource,
    Serialize,
)]
#[reflect(Resource)]
pub struct GeometryCompass {
    pub heading: f32,
}

impl GeometryCompass {
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            heading: degrees.to_radians(),
        }
    }

    pub fn set_heading_degrees(&mut self, degrees: f32) {
        self.heading = degrees.to_radians();
    }

    /// Rotation carrying the engine's forward axis onto north.
    pub fn rotation(&self) -> Quat {
        // north sits `heading` counter-clockwise of forward, seen from above
        Quat::from_rotation_y(-self.heading)
    }
}

impl From<CardinalDirection> for GeometryCompass {
    fn from(direction: CardinalDirection) -> Self {
        Self {
            heading: direction.heading(),
        }
    }
}

impl Compass for GeometryCompass {
    fn heading(&self) -> f32 {
        self.heading
    }
}


pub(crate) fn enu_from_ruf(v: Vec3, heading: f32) -> Vec3 {
    let (sin, cos) = heading.sin_cos();
    Vec3::new(
        v.x * cos + v.z * sin,
        -v.x * sin + v.z * cos,
        v.y,
    )
}

pub(crate) fn enu_to_ruf(v: Vec3, heading: f32) -> Vec3 {
    let (sin, cos) = heading.sin_cos();
    Vec3::new(
        v.x * cos - v.y * sin,
        v.z,
        v.x * sin + v.y * cos,
    )
}

pub(crate) fn ned_from_ruf(v: Vec3, heading: f32) -> Vec3 {
    let enu = enu_from_ruf(v, heading);
    Vec3::new(enu.y, enu.x, -enu.z)
}

pub(crate) fn ned_to_ruf(v: Vec3, heading: f32) -> Vec3 {
    enu_to_ruf(Vec3::new(v.y, v.x, -v.z), heading)
}
