use bevy::prelude::*;
use serde::{
    Deserialize,
    Serialize,
};

use crate::coordinate::{
    Compass,
    CoordinateFrame,
};

pub mod inspector;


#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct TimeMsg {
    pub sec: i32,
    pub nanosec: u32,
}

impl TimeMsg {
    pub fn as_secs_f64(&self) -> f64 {
        self.sec as f64 + self.nanosec as f64 * 1e-9
    }
}


#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct HeaderMsg {
    pub stamp: TimeMsg,
    pub frame_id: String,
}


#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct Vector3Msg {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct PointMsg {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct Point32Msg {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct QuaternionMsg {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for QuaternionMsg {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}


#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct Vector3StampedMsg {
    pub header: HeaderMsg,
    pub vector: Vector3Msg,
}

#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct PointStampedMsg {
    pub header: HeaderMsg,
    pub point: PointMsg,
}

#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct QuaternionStampedMsg {
    pub header: HeaderMsg,
    pub quaternion: QuaternionMsg,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct TransformMsg {
    pub translation: Vector3Msg,
    pub rotation: QuaternionMsg,
}

#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct PointCloudMsg {
    pub header: HeaderMsg,
    pub points: Vec<Point32Msg>,
}


#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct MultiArrayDimensionMsg {
    pub label: String,
    pub size: u32,
    pub stride: u32,
}

#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct MultiArrayLayoutMsg {
    pub dim: Vec<MultiArrayDimensionMsg>,
    pub data_offset: u32,
}

#[derive(
    Clone,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Reflect,
    Serialize,
)]
pub struct UInt16MultiArrayMsg {
    pub layout: MultiArrayLayoutMsg,
    pub data: Vec<u16>,
}


/// Geometry records carrying three numeric components.
pub trait GeometryVector {
    fn components(&self) -> Vec3;

    /// Engine-space position of a record expressed in `frame`.
    fn in_ruf(&self, frame: CoordinateFrame, compass: &dyn Compass) -> Vec3 {
        frame.convert_to_ruf(self.components(), compass)
    }
}

impl GeometryVector for Vector3Msg {
    fn components(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl GeometryVector for PointMsg {
    fn components(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl GeometryVector for Point32Msg {
    fn components(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Vector3Msg {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x as f64,
            y: v.y as f64,
            z: v.z as f64,
        }
    }
}

impl From<Vec3> for PointMsg {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x as f64,
            y: v.y as f64,
            z: v.z as f64,
        }
    }
}

impl From<Vec3> for Point32Msg {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl Vector3Msg {
    /// Express an engine-space vector in `frame`.
    pub fn from_ruf(v: Vec3, frame: CoordinateFrame, compass: &dyn Compass) -> Self {
        frame.convert_from_ruf(v, compass).into()
    }
}

impl PointMsg {
    pub fn from_ruf(v: Vec3, frame: CoordinateFrame, compass: &dyn Compass) -> Self {
        frame.convert_from_ruf(v, compass).into()
    }
}


impl QuaternionMsg {
    pub fn components(&self) -> Quat {
        Quat::from_xyzw(self.x as f32, self.y as f32, self.z as f32, self.w as f32)
    }

    pub fn in_ruf(&self, frame: CoordinateFrame, compass: &dyn Compass) -> Quat {
        frame.convert_quat_to_ruf(self.components(), compass)
    }

    pub fn from_ruf(q: Quat, frame: CoordinateFrame, compass: &dyn Compass) -> Self {
        frame.convert_quat_from_ruf(q, compass).into()
    }
}

impl From<Quat> for QuaternionMsg {
    fn from(q: Quat) -> Self {
        Self {
            x: q.x as f64,
            y: q.y as f64,
            z: q.z as f64,
            w: q.w as f64,
        }
    }
}


impl TransformMsg {
    pub fn from_transform(
        transform: &Transform,
        frame: CoordinateFrame,
        compass: &dyn Compass,
    ) -> Self {
        Self {
            translation: Vector3Msg::from_ruf(transform.translation, frame, compass),
            rotation: QuaternionMsg::from_ruf(transform.rotation, frame, compass),
        }
    }

    pub fn to_transform(&self, frame: CoordinateFrame, compass: &dyn Compass) -> Transform {
        Transform {
            translation: self.translation.in_ruf(frame, compass),
            rotation: self.rotation.in_ruf(frame, compass),
            ..default()
        }
    }
}
