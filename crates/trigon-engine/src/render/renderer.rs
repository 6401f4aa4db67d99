use crate::frame::DrawCall;

use super::ctx::{RenderCtx, RenderTarget};
use super::mesh::VertexBuffer;
use super::pipeline::build_pipeline;
use super::scene::Scene;

struct DrawResources {
    pipeline: wgpu::RenderPipeline,
    vertices: VertexBuffer,
}

/// GPU resources for one [`Scene`], built once and reused every frame.
pub struct SceneRenderer {
    clear: wgpu::Color,
    draw: Option<DrawResources>,
}

impl SceneRenderer {
    /// Builds the pipeline and uploads vertex data when the scene draws geometry.
    pub fn new(ctx: &RenderCtx<'_>, scene: &Scene) -> Self {
        let clear = scene.clear_color().unwrap_or(wgpu::Color::BLACK);

        let draw = scene.geometry().map(|geometry| DrawResources {
            pipeline: build_pipeline(ctx.device, ctx.surface_format, geometry.shader()),
            vertices: VertexBuffer::upload(ctx, geometry),
        });

        Self { clear, draw }
    }

    /// Records the frame's single render pass into `target`.
    ///
    /// The pass clears then stores the color attachment. When the scene has
    /// geometry, the pipeline and vertex buffer are bound and one draw is
    /// issued; the draw is returned for bookkeeping.
    pub fn encode(&self, target: &mut RenderTarget<'_>) -> Option<DrawCall> {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let draw = self.draw.as_ref()?;
        let call = DrawCall::vertices(draw.vertices.vertex_count());

        rpass.set_pipeline(&draw.pipeline);
        rpass.set_vertex_buffer(0, draw.vertices.buffer().slice(..));
        rpass.draw(call.vertices.clone(), call.instances.clone());

        Some(call)
    }
}
