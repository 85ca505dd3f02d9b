use bevy::prelude::*;

pub use coordinate::{
    CardinalDirection,
    Compass,
    ConversionDirection,
    CoordinateFrame,
    CoordinateSpaceError,
    GeometryCompass,
};

pub use drawing::{
    BasicDrawing,
    DrawPrimitive,
    Drawing,
};

pub use point_cloud::{
    IndexFormat,
    PointCloudBuffers,
    PointCloudDrawing,
    PointCloudState,
    PointSplat,
    random_splats,
};

pub use visualizer::{
    MessageMetadata,
    VisualizerSettings,
};

use coordinate::CoordinatePlugin;
use point_cloud::PointCloudPlugin;
use visualizer::VisualizerPlugin;

pub mod coordinate;
pub mod drawing;
pub mod message;
pub mod point_cloud;
pub mod utils;
pub mod visualizer;


pub struct MessageVisualizationPlugin;

impl Plugin for MessageVisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CoordinatePlugin,
            PointCloudPlugin,
            VisualizerPlugin,
        ));
    }
}

