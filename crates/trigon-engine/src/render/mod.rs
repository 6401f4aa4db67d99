//! GPU rendering subsystem.
//!
//! A [`Scene`] describes what every frame records; [`SceneRenderer`] owns the
//! pipeline and vertex buffer built from it.
//!
//! Convention:
//! - positions are 2D clip-space coordinates, two `f32` per vertex
//! - shader text is passed to wgpu unvalidated

mod ctx;
mod mesh;
mod pipeline;
mod renderer;
mod scene;
mod shader;
mod vertex;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::VertexBuffer;
pub use renderer::SceneRenderer;
pub use scene::{Geometry, Scene, BACKGROUND, CLEAR_RED};
pub use shader::{FRAGMENT_ENTRY, TRIANGLE_WGSL, VERTEX_ENTRY};
pub use vertex::{
    vertex_count, Position, FLOATS_PER_VERTEX, TRIANGLE_POSITIONS, TRIANGLE_VERTEX_COUNT,
};
