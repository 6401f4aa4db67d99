use bytemuck::{Pod, Zeroable};

/// Number of `f32` components per vertex in flat position data.
pub const FLOATS_PER_VERTEX: usize = 2;

/// Clip-space positions of the reference triangle, counter-clockwise.
pub const TRIANGLE_POSITIONS: [f32; 6] = [
    -0.5, -0.5, //
    0.5, -0.5, //
    0.0, 0.5,
];

/// Vertex count of [`TRIANGLE_POSITIONS`].
pub const TRIANGLE_VERTEX_COUNT: u32 = (TRIANGLE_POSITIONS.len() / FLOATS_PER_VERTEX) as u32;

/// 2D clip-space vertex position.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Position {
    pub pos: [f32; 2],
}

impl Position {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    /// Size of one vertex in bytes.
    pub const STRIDE: u32 = std::mem::size_of::<Position>() as u32;

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Number of vertices described by flat `[x, y, x, y, ...]` data, or `None`
/// when it does not fit a draw range.
///
/// A trailing lone component is not a vertex and is ignored.
pub fn vertex_count(positions: &[f32]) -> Option<u32> {
    vertices_in(positions.len())
}

fn vertices_in(components: usize) -> Option<u32> {
    u32::try_from(components / FLOATS_PER_VERTEX).ok()
}
