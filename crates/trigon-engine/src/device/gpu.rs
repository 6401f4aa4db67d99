use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::window::Window;

use super::error::install_error_handlers;
use super::handles::GpuHandles;
use super::limits::{required_limits, ResourceNeeds};
use super::surface;
use super::{ErrorSink, GpuInit};

type WgpuHandles<'w> =
    GpuHandles<wgpu::Surface<'w>, wgpu::Queue, wgpu::Device, wgpu::Adapter, wgpu::Instance>;

/// Owns wgpu core objects and the surface configuration.
///
/// This type is the low-level rendering context:
/// - creates and stores Instance/Adapter/Device/Queue
/// - creates and configures the Surface (swapchain)
/// - acquires frames and provides an encoder + view for rendering
///
/// Handles are released children first: the surface goes before the device
/// and the instance goes last.
pub struct Gpu<'w> {
    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Surface lifetime is tied to the window; architecture must ensure the
    /// window outlives the `Gpu` instance.
    handles: WgpuHandles<'w>,
}

/// Represents a single acquired frame.
///
/// This object is short-lived and must be finalized promptly. Holding the surface
/// texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
    pub surface_texture: wgpu::SurfaceTexture,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    ///
    /// `needs` sizes the device limits; `sink` receives uncaptured device
    /// errors for the lifetime of the device.
    pub async fn new(
        window: &'w Window,
        init: GpuInit,
        needs: ResourceNeeds,
        sink: Arc<dyn ErrorSink>,
    ) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });
        log::debug!("wgpu instance created for {:?}", init.backends);

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;
        log_adapter(&adapter);

        let supported = adapter.limits();
        if !needs.fits(&supported) {
            log::warn!("adapter limits are below scene needs ({needs:?}); requesting clamped limits");
        }
        let limits = required_limits(&supported, needs);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("trigon device"),
                required_features: init.required_features,
                required_limits: limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;
        install_error_handlers(&device, sink);
        log::info!("device ready");

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&surface_caps, init.prefer_srgb)
            .context("no supported surface formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: surface::choose_present_mode(&surface_caps, init.present_mode),
            alpha_mode: surface::choose_alpha_mode(&surface_caps, init.alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);
        log::info!(
            "swap chain configured: {}x{} {:?} {:?}",
            config.width,
            config.height,
            config.format,
            config.present_mode
        );

        Ok(Gpu {
            config,
            handles: GpuHandles::new(surface, queue, device, adapter, instance),
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.handles.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.handles.queue
    }

    /// Acquires the next surface texture and creates an encoder.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.handles.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .handles
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("trigon frame encoder"),
            });

        Ok(GpuFrame {
            view,
            encoder,
            surface_texture,
        })
    }

    /// Submits the recorded commands and presents the frame.
    ///
    /// The view is released before the texture is handed back to the swap chain.
    pub fn submit(&self, window: &Window, frame: GpuFrame) {
        let GpuFrame {
            view,
            encoder,
            surface_texture,
        } = frame;

        self.handles.queue.submit(std::iter::once(encoder.finish()));
        window.pre_present_notify();
        drop(view);
        surface_texture.present();
    }

    /// Polls the device without blocking so pending callbacks (errors,
    /// buffer mappings) get delivered.
    pub fn tick(&self) {
        if let Err(err) = self.handles.device.poll(wgpu::PollType::Poll) {
            log::debug!("device poll failed: {err}");
        }
    }
}

/// Logs a failed acquisition. The caller ends the frame loop.
pub(crate) fn log_surface_error(err: &SurfaceError) {
    log::log!(surface::surface_error_level(err), "swap chain invalid: {err}");
}

fn log_adapter(adapter: &wgpu::Adapter) {
    let info = adapter.get_info();
    log::info!(
        "adapter: {} ({:?}, {:?}, driver {} {})",
        info.name,
        info.backend,
        info.device_type,
        info.driver,
        info.driver_info
    );
    log::debug!("adapter limits: {:#?}", adapter.limits());
    log::debug!("adapter features: {:?}", adapter.features());
}
