pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if caps.formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        if let Some(f) = caps.formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }

    Some(caps.formats[0])
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Falls back to FIFO when the requested present mode is not offered.
pub(crate) fn choose_present_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if caps.present_modes.contains(&requested) {
        requested
    } else {
        wgpu::PresentMode::Fifo
    }
}

/// Log level for a failed texture acquisition.
///
/// Every failure ends the frame loop since the swap chain is never recreated.
/// Lost and outdated surfaces are the expected way out (window closed or
/// resized); anything else is worth a warning.
pub(crate) fn surface_error_level(err: &wgpu::SurfaceError) -> log::Level {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => log::Level::Info,
        wgpu::SurfaceError::Timeout
        | wgpu::SurfaceError::OutOfMemory
        | wgpu::SurfaceError::Other => log::Level::Warn,
    }
}
