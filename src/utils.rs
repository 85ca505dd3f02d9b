use bevy::prelude::*;
use clap::Parser;
use serde::{
    Deserialize,
    Serialize,
};

use crate::coordinate::{
    CoordinateFrame,
    GeometryCompass,
};


#[derive(
    Clone,
    Debug,
    Serialize,
    Deserialize,
    Parser,
)]
#[command(about = "convert a vector between robotics coordinate frames", version, long_about = None)]
pub struct FrameConvertArgs {
    #[arg(long, default_value = "FLU")]
    pub from: CoordinateFrame,

    #[arg(long, default_value = "RUF")]
    pub to: CoordinateFrame,

    /// clockwise angle from north to the engine forward axis
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub heading_degrees: f32,

    /// convert a quaternion `x y z w` instead of a vector `x y z`
    #[arg(long, default_value = "false")]
    pub quaternion: bool,

    #[arg(allow_negative_numbers = true, num_args = 3..=4, required = true)]
    pub components: Vec<f32>,
}

impl Default for FrameConvertArgs {
    fn default() -> FrameConvertArgs {
        FrameConvertArgs {
            from: CoordinateFrame::Flu,
            to: CoordinateFrame::Ruf,
            heading_degrees: 0.0,
            quaternion: false,
            components: vec![0.0, 0.0, 0.0],
        }
    }
}

impl FrameConvertArgs {
    pub fn compass(&self) -> GeometryCompass {
        GeometryCompass::from_degrees(self.heading_degrees)
    }

    /// Run the conversion through engine space, returning the converted
    /// components or `None` when the component count does not match the
    /// requested kind.
    pub fn convert(&self) -> Option<Vec<f32>> {
        let compass = self.compass();

        match (self.quaternion, self.components.as_slice()) {
            (false, &[x, y, z]) => {
                let ruf = self.from.convert_to_ruf(Vec3::new(x, y, z), &compass);
                Some(self.to.convert_from_ruf(ruf, &compass).to_array().to_vec())
            }
            (true, &[x, y, z, w]) => {
                let ruf = self.from.convert_quat_to_ruf(Quat::from_xyzw(x, y, z, w), &compass);
                Some(self.to.convert_quat_from_ruf(ruf, &compass).to_array().to_vec())
            }
            _ => None,
        }
    }
}
