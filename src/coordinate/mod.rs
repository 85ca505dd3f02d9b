use std::{
    fmt,
    str::FromStr,
};

use bevy::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};

pub use compass::{
    CardinalDirection,
    Compass,
    GeometryCompass,
};

pub mod compass;


#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CoordinateSpaceError {
    #[error("invalid coordinate space: {0}")]
    UnknownFrame(String),
}


#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
)]
pub enum ConversionDirection {
    ToCanonical,
    FromCanonical,
}


/// Axis convention of incoming geometry, relative to the engine's RUF
/// (right, up, forward) space.
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
pub enum CoordinateFrame {
    #[default]
    Ruf,
    Flu,
    Frd,
    Ned,
    Enu,
    NedLocal,
    EnuLocal,
}

impl CoordinateFrame {
    pub const ALL: [CoordinateFrame; 7] = [
        CoordinateFrame::Ruf,
        CoordinateFrame::Flu,
        CoordinateFrame::Frd,
        CoordinateFrame::Ned,
        CoordinateFrame::Enu,
        CoordinateFrame::NedLocal,
        CoordinateFrame::EnuLocal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CoordinateFrame::Ruf => "RUF",
            CoordinateFrame::Flu => "FLU",
            CoordinateFrame::Frd => "FRD",
            CoordinateFrame::Ned => "NED",
            CoordinateFrame::Enu => "ENU",
            CoordinateFrame::NedLocal => "NEDLocal",
            CoordinateFrame::EnuLocal => "ENULocal",
        }
    }

    /// NED and ENU are anchored to the compass; every other frame is a
    /// fixed axis permutation.
    pub fn uses_compass(self) -> bool {
        matches!(self, CoordinateFrame::Ned | CoordinateFrame::Enu)
    }

    /// Map a raw selection value onto a frame, reporting unknown values and
    /// substituting RUF.
    pub fn resolve_or_ruf(raw: u8) -> CoordinateFrame {
        CoordinateFrame::try_from(raw).unwrap_or_else(|err| {
            error!(raw, "{err}, falling back to RUF");
            CoordinateFrame::Ruf
        })
    }

    pub fn parse_or_ruf(name: &str) -> CoordinateFrame {
        name.parse().unwrap_or_else(|err: CoordinateSpaceError| {
            error!(name, "{err}, falling back to RUF");
            CoordinateFrame::Ruf
        })
    }

    pub fn convert_vec3(
        self,
        v: Vec3,
        direction: ConversionDirection,
        compass: &dyn Compass,
    ) -> Vec3 {
        match direction {
            ConversionDirection::FromCanonical => self.convert_from_ruf(v, compass),
            ConversionDirection::ToCanonical => self.convert_to_ruf(v, compass),
        }
    }

    pub fn convert_quat(
        self,
        q: Quat,
        direction: ConversionDirection,
        compass: &dyn Compass,
    ) -> Quat {
        match direction {
            ConversionDirection::FromCanonical => self.convert_quat_from_ruf(q, compass),
            ConversionDirection::ToCanonical => self.convert_quat_to_ruf(q, compass),
        }
    }

    /// Express an engine-space vector in this frame.
    pub fn convert_from_ruf(self, v: Vec3, compass: &dyn Compass) -> Vec3 {
        match self {
            CoordinateFrame::Ruf => v,
            CoordinateFrame::Flu | CoordinateFrame::EnuLocal => flu_from_ruf(v),
            CoordinateFrame::Frd | CoordinateFrame::NedLocal => frd_from_ruf(v),
            CoordinateFrame::Enu => compass::enu_from_ruf(v, compass.heading()),
            CoordinateFrame::Ned => compass::ned_from_ruf(v, compass.heading()),
        }
    }

    /// Bring a vector expressed in this frame into engine space.
    pub fn convert_to_ruf(self, v: Vec3, compass: &dyn Compass) -> Vec3 {
        match self {
            CoordinateFrame::Ruf => v,
            CoordinateFrame::Flu | CoordinateFrame::EnuLocal => flu_to_ruf(v),
            CoordinateFrame::Frd | CoordinateFrame::NedLocal => frd_to_ruf(v),
            CoordinateFrame::Enu => compass::enu_to_ruf(v, compass.heading()),
            CoordinateFrame::Ned => compass::ned_to_ruf(v, compass.heading()),
        }
    }

    pub fn convert_quat_from_ruf(self, q: Quat, compass: &dyn Compass) -> Quat {
        match self {
            CoordinateFrame::Ruf => q,
            _ => flip_handedness(q, |axis| self.convert_from_ruf(axis, compass)),
        }
    }

    pub fn convert_quat_to_ruf(self, q: Quat, compass: &dyn Compass) -> Quat {
        match self {
            CoordinateFrame::Ruf => q,
            _ => flip_handedness(q, |axis| self.convert_to_ruf(axis, compass)),
        }
    }
}

impl fmt::Display for CoordinateFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<CoordinateFrame> for u8 {
    fn from(frame: CoordinateFrame) -> u8 {
        frame as u8
    }
}

impl TryFrom<u8> for CoordinateFrame {
    type Error = CoordinateSpaceError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        CoordinateFrame::ALL
            .get(raw as usize)
            .copied()
            .ok_or_else(|| CoordinateSpaceError::UnknownFrame(raw.to_string()))
    }
}

impl FromStr for CoordinateFrame {
    type Err = CoordinateSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoordinateFrame::ALL
            .iter()
            .copied()
            .find(|frame| frame.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoordinateSpaceError::UnknownFrame(s.to_string()))
    }
}


pub fn flu_from_ruf(v: Vec3) -> Vec3 {
    Vec3::new(v.z, -v.x, v.y)
}

pub fn flu_to_ruf(v: Vec3) -> Vec3 {
    Vec3::new(-v.y, v.z, v.x)
}

pub fn frd_from_ruf(v: Vec3) -> Vec3 {
    Vec3::new(v.z, v.x, -v.y)
}

pub fn frd_to_ruf(v: Vec3) -> Vec3 {
    Vec3::new(v.y, -v.z, v.x)
}

// every non-RUF frame is right-handed, so the rotation axis maps like a
// vector and the scalar part changes sign
fn flip_handedness(q: Quat, map_axis: impl Fn(Vec3) -> Vec3) -> Quat {
    let axis = map_axis(Vec3::new(q.x, q.y, q.z));
    Quat::from_xyzw(axis.x, axis.y, axis.z, -q.w)
}


#[derive(Default)]
pub struct CoordinatePlugin;

impl Plugin for CoordinatePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CoordinateFrame>();
        app.register_type::<CardinalDirection>();
        app.register_type::<GeometryCompass>();

        app.init_resource::<GeometryCompass>();
    }
}
