use bevy::{
    color::{
        Alpha,
        ColorToPacked,
    },
    prelude::*,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    coordinate::{
        Compass,
        CoordinateFrame,
    },
    drawing::Drawing,
    message::{
        GeometryVector,
        HeaderMsg,
        PointCloudMsg,
        PointStampedMsg,
        QuaternionMsg,
        QuaternionStampedMsg,
        TransformMsg,
        UInt16MultiArrayMsg,
        Vector3Msg,
        Vector3StampedMsg,
        inspector::DEFAULT_TABULATE,
    },
    point_cloud::PointCloudDrawing,
};


pub const DEFAULT_RADIUS: f32 = 0.01;
pub const DEFAULT_AXES_SIZE: f32 = 0.1;
pub const LABEL_SCALE: f32 = 1.5;


/// Where a message came from; drives the fallback color and label.
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
pub struct MessageMetadata {
    pub topic: String,
    pub frame_id: String,
}


#[derive(
    Component,
    Clone,
    Debug,
    Deserialize,
    Reflect,
    Serialize,
)]
#[reflect(Component)]
pub struct VisualizerSettings {
    pub radius: f32,
    pub axes_size: f32,
    /// Fully transparent picks a per-topic color.
    pub color: Color,
    /// Empty uses the topic name.
    pub label: String,
    pub frame: CoordinateFrame,
    /// Lay two-dimensional multi-arrays out as rows.
    pub tabulate: bool,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            axes_size: DEFAULT_AXES_SIZE,
            color: Color::NONE,
            label: String::new(),
            frame: CoordinateFrame::Flu,
            tabulate: DEFAULT_TABULATE,
        }
    }
}

impl VisualizerSettings {
    pub fn color_for(&self, meta: &MessageMetadata) -> Color {
        select_color(self.color, meta)
    }

    pub fn inspect_multi_array(&self, message: &UInt16MultiArrayMsg) -> Vec<String> {
        message.inspect_tabulated(self.tabulate)
    }

    pub fn label_for<'a>(&'a self, meta: &'a MessageMetadata) -> &'a str {
        select_label(&self.label, meta)
    }
}


pub fn select_color(color: Color, meta: &MessageMetadata) -> Color {
    if color.alpha() > 0.0 {
        return color;
    }

    topic_color(&meta.topic)
}

pub fn select_label<'a>(label: &'a str, meta: &'a MessageMetadata) -> &'a str {
    if label.is_empty() {
        &meta.topic
    } else {
        label
    }
}

/// Stable, saturated color for a topic name.
pub fn topic_color(topic: &str) -> Color {
    // fnv-1a
    let hash = topic
        .bytes()
        .fold(0x811c_9dc5_u32, |hash, byte| (hash ^ byte as u32).wrapping_mul(0x0100_0193));

    let hue = (hash % 360) as f32;
    Color::hsl(hue, 0.8, 0.5)
}


pub fn draw_vector3(
    drawing: &mut impl Drawing,
    message: &Vector3Msg,
    frame: CoordinateFrame,
    compass: &dyn Compass,
    color: Color,
    label: &str,
    radius: f32,
) {
    draw_labelled_point(drawing, message.in_ruf(frame, compass), color, label, radius);
}

/// Same as [`draw_vector3`], placed relative to `origin`.
#[allow(clippy::too_many_arguments)]
pub fn draw_vector3_at(
    drawing: &mut impl Drawing,
    message: &Vector3Msg,
    frame: CoordinateFrame,
    compass: &dyn Compass,
    origin: Option<&GlobalTransform>,
    color: Color,
    label: &str,
    radius: f32,
) {
    let mut point = message.in_ruf(frame, compass);
    if let Some(origin) = origin {
        point = origin.transform_point(point);
    }

    draw_labelled_point(drawing, point, color, label, radius);
}

pub fn draw_vector3_stamped(
    drawing: &mut impl Drawing,
    message: &Vector3StampedMsg,
    compass: &dyn Compass,
    color: Color,
    label: &str,
    radius: f32,
) {
    draw_vector3(drawing, &message.vector, CoordinateFrame::Flu, compass, color, label, radius);
}

pub fn draw_point_stamped(
    drawing: &mut impl Drawing,
    message: &PointStampedMsg,
    frame: CoordinateFrame,
    compass: &dyn Compass,
    color: Color,
    label: &str,
    radius: f32,
) {
    draw_labelled_point(drawing, message.point.in_ruf(frame, compass), color, label, radius);
}

/// Draw the rotated right/up/forward axes of `message` at `position`.
pub fn draw_quaternion(
    drawing: &mut impl Drawing,
    message: &QuaternionMsg,
    frame: CoordinateFrame,
    compass: &dyn Compass,
    position: Vec3,
    size: f32,
) {
    let rotation = message.in_ruf(frame, compass).normalize();
    draw_axes(drawing, position, rotation, size);
}

#[allow(clippy::too_many_arguments)]
pub fn draw_quaternion_stamped(
    drawing: &mut impl Drawing,
    message: &QuaternionStampedMsg,
    frame: CoordinateFrame,
    compass: &dyn Compass,
    position: Vec3,
    color: Color,
    label: &str,
    size: f32,
) {
    draw_quaternion(drawing, &message.quaternion, frame, compass, position, size);
    drawing.draw_label(label, position, color, size);
}

pub fn draw_axes(
    drawing: &mut impl Drawing,
    position: Vec3,
    rotation: Quat,
    size: f32,
) {
    let thickness = size * 0.1;

    drawing.draw_line(position, position + rotation * Vec3::X * size, Color::srgb(1.0, 0.0, 0.0), thickness);
    drawing.draw_line(position, position + rotation * Vec3::Y * size, Color::srgb(0.0, 1.0, 0.0), thickness);
    drawing.draw_line(position, position + rotation * Vec3::Z * size, Color::srgb(0.0, 0.0, 1.0), thickness);
}

/// Append every point of `message` to `cloud` as a point splat.
pub fn draw_point_cloud(
    cloud: &mut PointCloudDrawing,
    message: &PointCloudMsg,
    frame: CoordinateFrame,
    compass: &dyn Compass,
    color: Color,
    radius: f32,
) {
    let color = color.to_srgba().to_u8_array();

    cloud.reserve(message.points.len());
    for point in &message.points {
        cloud.add_point(point.in_ruf(frame, compass), color, radius);
    }
}

fn draw_labelled_point(
    drawing: &mut impl Drawing,
    point: Vec3,
    color: Color,
    label: &str,
    radius: f32,
) {
    drawing.draw_point(point, color, radius);
    drawing.draw_label(label, point, color, radius * LABEL_SCALE);
}


#[derive(Default)]
pub struct VisualizerPlugin;

impl Plugin for VisualizerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MessageMetadata>();
        app.register_type::<VisualizerSettings>();

        app.register_type::<HeaderMsg>();
        app.register_type::<PointCloudMsg>();
        app.register_type::<PointStampedMsg>();
        app.register_type::<QuaternionStampedMsg>();
        app.register_type::<TransformMsg>();
        app.register_type::<UInt16MultiArrayMsg>();
        app.register_type::<Vector3StampedMsg>();
    }
}
