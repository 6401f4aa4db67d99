use super::ctx::RenderCtx;
use super::scene::Geometry;

/// Static vertex buffer, written once through the queue.
pub struct VertexBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl VertexBuffer {
    /// Allocates a `VERTEX | COPY_DST` buffer and schedules the upload of the
    /// geometry's positions. The copy runs with the next queue submission.
    pub fn upload(ctx: &RenderCtx<'_>, geometry: &Geometry) -> Self {
        let contents: &[u8] = bytemuck::cast_slice(geometry.positions());

        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("trigon vertex buffer"),
            size: contents.len() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        ctx.queue.write_buffer(&buffer, 0, contents);

        let vertex_count = geometry.vertex_count();
        log::debug!("vertex buffer: {vertex_count} vertices, {} bytes", contents.len());

        Self {
            buffer,
            vertex_count,
        }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}
