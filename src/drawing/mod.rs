use bevy::prelude::*;


/// Surface receiving debug primitives. Rendering them is up to the host.
pub trait Drawing {
    fn draw_point(&mut self, position: Vec3, color: Color, radius: f32);
    fn draw_label(&mut self, text: &str, position: Vec3, color: Color, size: f32);
    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color, thickness: f32);
}


#[derive(
    Clone,
    Debug,
    PartialEq,
)]
pub enum DrawPrimitive {
    Point {
        position: Vec3,
        color: Color,
        radius: f32,
    },
    Label {
        text: String,
        position: Vec3,
        color: Color,
        size: f32,
    },
    Line {
        from: Vec3,
        to: Vec3,
        color: Color,
        thickness: f32,
    },
}


/// Records primitives for the host to render, typically cleared and redrawn
/// whenever a new message arrives.
#[derive(
    Component,
    Clone,
    Debug,
    Default,
)]
#[require(Transform, Visibility)]
pub struct BasicDrawing {
    primitives: Vec<DrawPrimitive>,
}

impl BasicDrawing {
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Drawing for BasicDrawing {
    fn draw_point(&mut self, position: Vec3, color: Color, radius: f32) {
        self.primitives.push(DrawPrimitive::Point {
            position,
            color,
            radius,
        });
    }

    fn draw_label(&mut self, text: &str, position: Vec3, color: Color, size: f32) {
        // nothing to show for an unlabelled message
        if text.is_empty() {
            return;
        }

        self.primitives.push(DrawPrimitive::Label {
            text: text.to_string(),
            position,
            color,
            size,
        });
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color, thickness: f32) {
        self.primitives.push(DrawPrimitive::Line {
            from,
            to,
            color,
            thickness,
        });
    }
}
