use bevy::prelude::*;

pub use buffers::{
    ATTRIBUTE_COLOR32,
    ATTRIBUTE_UV_RADIUS,
    IndexFormat,
    PointCloudBuffers,
    PointCloudState,
    PointSplat,
};
pub use random::random_splats;

pub mod buffers;
pub mod random;


/// Point cloud geometry owned by an entity. The material is supplied by the
/// host; this component only produces the `Mesh3d` it renders.
#[derive(Component, Debug, Default)]
#[require(Transform, Visibility)]
pub struct PointCloudDrawing {
    buffers: PointCloudBuffers,
    baked_mesh: Option<Mesh>,
}

impl PointCloudDrawing {
    pub fn with_capacity(points: usize) -> Self {
        Self {
            buffers: PointCloudBuffers::with_capacity(points),
            baked_mesh: None,
        }
    }

    pub fn set_capacity(&mut self, points: usize) {
        self.buffers.set_capacity(points);
    }

    pub fn reserve(&mut self, points: usize) {
        self.buffers.reserve(points);
    }

    pub fn add_point(&mut self, position: Vec3, color: [u8; 4], radius: f32) {
        self.buffers.add_point(position, color, radius);
    }

    pub fn add_triangle(&mut self, position: Vec3, color: [u8; 4], radius: f32) {
        self.buffers.add_triangle(position, color, radius);
    }

    pub fn add_splat(&mut self, splat: PointSplat) {
        self.buffers.add_splat(splat);
    }

    pub fn clear(&mut self) {
        self.buffers.clear();
    }

    /// Freeze the current splats. The mesh is handed to the entity on the
    /// next `PostUpdate` and never regenerated afterwards.
    pub fn bake(&mut self) {
        self.baked_mesh = Some(self.buffers.bake());
    }

    pub fn buffers(&self) -> &PointCloudBuffers {
        &self.buffers
    }

    pub fn state(&self) -> PointCloudState {
        self.buffers.state()
    }

    /// Mesh the entity should display, if it changed since the last call.
    pub fn take_mesh_update(&mut self) -> Option<Mesh> {
        // splats added after a bake supersede the baked mesh
        if self.buffers.take_dirty() {
            self.baked_mesh = None;
            return Some(self.buffers.generate_mesh());
        }

        self.baked_mesh.take()
    }
}

impl From<PointCloudBuffers> for PointCloudDrawing {
    fn from(buffers: PointCloudBuffers) -> Self {
        Self {
            buffers,
            baked_mesh: None,
        }
    }
}


#[derive(Default)]
pub struct PointCloudPlugin;

impl Plugin for PointCloudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, update_point_cloud_drawings);
    }
}


pub fn update_point_cloud_drawings(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut drawings: Query<(
        Entity,
        &mut PointCloudDrawing,
        Option<&Mesh3d>,
    )>,
) {
    for (entity, mut drawing, mesh_3d) in &mut drawings {
        // bypass change detection so idle drawings stay untouched
        let Some(mesh) = drawing.bypass_change_detection().take_mesh_update() else {
            continue;
        };

        debug!(
            ?entity,
            vertex_count = mesh.count_vertices(),
            "regenerating point cloud mesh"
        );

        match mesh_3d.and_then(|handle| meshes.get_mut(&handle.0)) {
            Some(existing) => *existing = mesh,
            None => {
                commands.entity(entity).insert(Mesh3d(meshes.add(mesh)));
            }
        }
    }
}
