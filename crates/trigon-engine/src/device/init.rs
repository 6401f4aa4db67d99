/// Initialization parameters for the GPU layer.
///
/// Device limits are not part of this structure: they are derived from the
/// adapter's supported limits and the scene's [`ResourceNeeds`](super::ResourceNeeds).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Graphics backends the instance may pick an adapter from.
    ///
    /// Defaults to `WGPU_BACKEND` (e.g. `vulkan`, `metal,gl`) when it names a
    /// known backend, otherwise all of them.
    pub backends: wgpu::Backends,

    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is the only mode every surface is required to support.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: resolve_backends(wgpu::Backends::from_env()),
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Falls back to every backend when the request names none that wgpu knows.
pub(crate) fn resolve_backends(requested: Option<wgpu::Backends>) -> wgpu::Backends {
    match requested {
        Some(backends) if !backends.is_empty() => backends,
        Some(_) => {
            log::warn!("WGPU_BACKEND names no known backend; using all backends");
            wgpu::Backends::all()
        }
        None => wgpu::Backends::all(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backends_default_to_all() {
        assert_eq!(resolve_backends(None), wgpu::Backends::all());
    }

    #[test]
    fn requested_backends_are_kept() {
        let requested = wgpu::Backends::VULKAN | wgpu::Backends::GL;
        assert_eq!(resolve_backends(Some(requested)), requested);
    }

    #[test]
    fn unknown_backend_falls_back_to_all() {
        let parsed = wgpu::Backends::from_comma_list("dawn");
        assert_eq!(resolve_backends(Some(parsed)), wgpu::Backends::all());
    }

    #[test]
    fn default_init() {
        let init = GpuInit::default();
        assert!(!init.backends.is_empty());
        assert!(init.prefer_srgb);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.alpha_mode, None);
        assert_eq!(init.required_features, wgpu::Features::empty());
        assert_eq!(init.desired_maximum_frame_latency, 2);
    }
}
