use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::{
        mesh::{
            Indices,
            MeshVertexAttribute,
            PrimitiveTopology,
            VertexAttributeValues,
        },
        render_resource::VertexFormat,
    },
};


/// Per-vertex splat color, one byte per channel.
pub const ATTRIBUTE_COLOR32: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_Color32", 988_540_917, VertexFormat::Unorm8x4);

/// Per-vertex corner tag `(u, v)` and splat radius, expanded by the point
/// cloud shader.
pub const ATTRIBUTE_UV_RADIUS: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_UvRadius", 988_540_918, VertexFormat::Float32x3);

pub const POINT_VERTEX_COUNT: usize = 4;
pub const POINT_INDEX_COUNT: usize = 6;
pub const TRIANGLE_VERTEX_COUNT: usize = 3;

const POINT_CORNERS: [[f32; 2]; POINT_VERTEX_COUNT] = [
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 0.0],
    [1.0, 1.0],
];

// quad corners 0-1-2 and 3-2-1 share the 1-2 diagonal
const POINT_INDICES: [u32; POINT_INDEX_COUNT] = [0, 1, 2, 3, 2, 1];

const ROOT_HALF: f32 = std::f32::consts::FRAC_1_SQRT_2;

const TRIANGLE_CORNERS: [[f32; 2]; TRIANGLE_VERTEX_COUNT] = [
    [0.5 - ROOT_HALF, 0.5],
    [1.0, 1.5 + ROOT_HALF],
    [1.0, -0.5 - ROOT_HALF],
];


#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
)]
pub enum IndexFormat {
    U16,
    U32,
}

impl IndexFormat {
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count < 65536 {
            IndexFormat::U16
        } else {
            IndexFormat::U32
        }
    }
}


#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
)]
pub enum PointCloudState {
    Empty,
    Accumulating,
    Baked,
}


#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
)]
pub struct PointSplat {
    pub position: Vec3,
    pub color: [u8; 4],
    pub radius: f32,
}


/// Parallel vertex, color, corner/radius and index buffers for billboarded
/// point and triangle splats.
#[derive(Clone, Debug, Default)]
pub struct PointCloudBuffers {
    vertices: Vec<[f32; 3]>,
    colors: Vec<[u8; 4]>,
    uv_radii: Vec<[f32; 3]>,
    indices: Vec<u32>,
    dirty: bool,
    baked: bool,
}

impl PointCloudBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(points: usize) -> Self {
        let mut buffers = Self::default();
        buffers.set_capacity(points);
        buffers
    }

    /// Reserve room for `points` point splats. Advisory only; appends past
    /// the reservation grow the buffers as usual.
    pub fn set_capacity(&mut self, points: usize) {
        let vertex_count = points * POINT_VERTEX_COUNT;

        self.vertices.reserve(vertex_count.saturating_sub(self.vertices.len()));
        self.colors.reserve(vertex_count.saturating_sub(self.colors.len()));
        self.uv_radii.reserve(vertex_count.saturating_sub(self.uv_radii.len()));
        self.indices.reserve((points * POINT_INDEX_COUNT).saturating_sub(self.indices.len()));
    }

    /// Reserve room for `points` more point splats.
    pub fn reserve(&mut self, points: usize) {
        self.vertices.reserve(points * POINT_VERTEX_COUNT);
        self.colors.reserve(points * POINT_VERTEX_COUNT);
        self.uv_radii.reserve(points * POINT_VERTEX_COUNT);
        self.indices.reserve(points * POINT_INDEX_COUNT);
    }

    pub fn add_point(&mut self, position: Vec3, color: [u8; 4], radius: f32) {
        self.reopen();

        let start = self.vertices.len() as u32;

        for [u, v] in POINT_CORNERS {
            self.vertices.push(position.to_array());
            self.colors.push(color);
            self.uv_radii.push([u, v, radius]);
        }

        self.indices.extend(POINT_INDICES.iter().map(|offset| start + offset));
        self.dirty = true;
    }

    pub fn add_triangle(&mut self, position: Vec3, color: [u8; 4], radius: f32) {
        self.reopen();

        let start = self.vertices.len() as u32;

        for [u, v] in TRIANGLE_CORNERS {
            self.vertices.push(position.to_array());
            self.colors.push(color);
            self.uv_radii.push([u, v, radius]);
        }

        self.indices.extend([start, start + 1, start + 2]);
        self.dirty = true;
    }

    pub fn add_splat(&mut self, splat: PointSplat) {
        self.add_point(splat.position, splat.color, splat.radius);
    }

    /// Drop every splat but keep the allocations.
    pub fn clear(&mut self) {
        self.clear_buffers();
        self.baked = false;
        self.dirty = true;
    }

    /// Materialize the buffers into a mesh and release them. The drawing
    /// stops requesting regeneration until something new is added.
    pub fn bake(&mut self) -> Mesh {
        let mesh = build_mesh(
            std::mem::take(&mut self.vertices),
            std::mem::take(&mut self.colors),
            std::mem::take(&mut self.uv_radii),
            std::mem::take(&mut self.indices),
        );

        self.dirty = false;
        self.baked = true;

        mesh
    }

    pub fn generate_mesh(&self) -> Mesh {
        build_mesh(
            self.vertices.clone(),
            self.colors.clone(),
            self.uv_radii.clone(),
            self.indices.clone(),
        )
    }

    /// Returns whether the buffers changed since the last call, clearing the
    /// flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn state(&self) -> PointCloudState {
        if self.baked {
            PointCloudState::Baked
        } else if self.vertices.is_empty() {
            PointCloudState::Empty
        } else {
            PointCloudState::Accumulating
        }
    }

    pub fn index_format(&self) -> IndexFormat {
        IndexFormat::for_vertex_count(self.vertices.len())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    pub fn colors(&self) -> &[[u8; 4]] {
        &self.colors
    }

    pub fn uv_radii(&self) -> &[[f32; 3]] {
        &self.uv_radii
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_capacity(&self) -> usize {
        self.vertices.capacity()
    }

    fn reopen(&mut self) {
        if self.baked {
            warn!("point cloud was baked; accumulating a new cloud from empty buffers");
            self.baked = false;
        }
    }

    fn clear_buffers(&mut self) {
        self.vertices.clear();
        self.colors.clear();
        self.uv_radii.clear();
        self.indices.clear();
    }
}

impl Extend<PointSplat> for PointCloudBuffers {
    fn extend<T: IntoIterator<Item = PointSplat>>(&mut self, iter: T) {
        for splat in iter {
            self.add_splat(splat);
        }
    }
}

impl FromIterator<PointSplat> for PointCloudBuffers {
    fn from_iter<T: IntoIterator<Item = PointSplat>>(iter: T) -> Self {
        let iter = iter.into_iter();

        let mut buffers = PointCloudBuffers::with_capacity(iter.size_hint().0);
        buffers.extend(iter);
        buffers
    }
}


fn build_mesh(
    vertices: Vec<[f32; 3]>,
    colors: Vec<[u8; 4]>,
    uv_radii: Vec<[f32; 3]>,
    indices: Vec<u32>,
) -> Mesh {
    let indices = match IndexFormat::for_vertex_count(vertices.len()) {
        IndexFormat::U16 => Indices::U16(indices.into_iter().map(|index| index as u16).collect()),
        IndexFormat::U32 => Indices::U32(indices),
    };

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_attribute(ATTRIBUTE_COLOR32, VertexAttributeValues::Unorm8x4(colors));
    mesh.insert_attribute(ATTRIBUTE_UV_RADIUS, VertexAttributeValues::Float32x3(uv_radii));
    mesh.insert_indices(indices);

    mesh
}
