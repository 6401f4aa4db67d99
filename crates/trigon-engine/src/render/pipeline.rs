use super::shader::{FRAGMENT_ENTRY, VERTEX_ENTRY};
use super::vertex::Position;

/// Straight-alpha "over" blending for both color and alpha.
pub(crate) fn alpha_over_blend() -> wgpu::BlendState {
    wgpu::BlendState::ALPHA_BLENDING
}

/// Fixed-function primitive state: triangle list, CCW front face, no culling.
pub(crate) fn triangle_primitive() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

/// Compiles `shader_src` and builds the render pipeline for 2D positions.
///
/// The source is handed to wgpu unvalidated; compile errors are reported
/// through the device's uncaptured-error handler.
pub(crate) fn build_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    shader_src: &str,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("trigon shader"),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("trigon pipeline layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("trigon pipeline"),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(VERTEX_ENTRY),
            compilation_options: Default::default(),
            buffers: &[Position::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(FRAGMENT_ENTRY),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(alpha_over_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: triangle_primitive(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview_mask: None,
        cache: None,
    });

    log::debug!("render pipeline built for {format:?}");
    pipeline
}
