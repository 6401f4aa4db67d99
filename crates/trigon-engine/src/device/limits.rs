/// Vertex-side resources a scene needs from the device.
///
/// A scene without geometry needs nothing beyond the baseline limits.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ResourceNeeds {
    pub vertex_attributes: u32,
    pub vertex_buffers: u32,
    /// Largest buffer the scene allocates, in bytes.
    pub buffer_size: u64,
    /// Stride of the widest vertex layout, in bytes.
    pub vertex_stride: u32,
}

impl ResourceNeeds {
    /// Needs of a single vertex buffer holding `vertex_count` vertices with
    /// one attribute of `vertex_stride` bytes each.
    pub fn single_buffer(vertex_count: u32, vertex_stride: u32) -> Self {
        Self {
            vertex_attributes: 1,
            vertex_buffers: 1,
            buffer_size: u64::from(vertex_count) * u64::from(vertex_stride),
            vertex_stride,
        }
    }

    /// Returns `true` when every need is within `supported`.
    pub fn fits(&self, supported: &wgpu::Limits) -> bool {
        self.vertex_attributes <= supported.max_vertex_attributes
            && self.vertex_buffers <= supported.max_vertex_buffers
            && self.buffer_size <= supported.max_buffer_size
            && self.vertex_stride <= supported.max_vertex_buffer_array_stride
    }
}

/// Builds the limits to request from the adapter.
///
/// Starts from the portable WebGL2 baseline (with the adapter's texture
/// resolution), raises the vertex fields to what `needs` asks for, then clamps
/// them to `supported`. Buffer offset alignments are copied verbatim from
/// `supported`, since a stricter-than-needed alignment is always accepted.
///
/// The result never exceeds `supported` on the vertex, buffer and alignment
/// fields, even when `needs` does.
pub fn required_limits(supported: &wgpu::Limits, needs: ResourceNeeds) -> wgpu::Limits {
    let mut required =
        wgpu::Limits::downlevel_webgl2_defaults().using_resolution(supported.clone());

    required.max_vertex_attributes = required
        .max_vertex_attributes
        .max(needs.vertex_attributes)
        .min(supported.max_vertex_attributes);
    required.max_vertex_buffers = required
        .max_vertex_buffers
        .max(needs.vertex_buffers)
        .min(supported.max_vertex_buffers);
    required.max_buffer_size = required
        .max_buffer_size
        .max(needs.buffer_size)
        .min(supported.max_buffer_size);
    required.max_vertex_buffer_array_stride = required
        .max_vertex_buffer_array_stride
        .max(needs.vertex_stride)
        .min(supported.max_vertex_buffer_array_stride);

    required.min_uniform_buffer_offset_alignment = supported.min_uniform_buffer_offset_alignment;
    required.min_storage_buffer_offset_alignment = supported.min_storage_buffer_offset_alignment;

    required
}
