use std::sync::Arc;

use anyhow::Result;
use winit::window::Window;

use crate::device::{log_surface_error, ErrorSink, Gpu, GpuFrame, GpuInit, Layered};
use crate::render::{RenderCtx, RenderTarget, Scene, SceneRenderer};

use super::state::{Acquire, DrawCall, FrameTarget};

/// Window-bound GPU state that the frame loop renders into.
///
/// Scene resources are released before the device/surface context they were
/// built from. The window itself is borrowed and outlives both.
pub struct SwapChainTarget<'w> {
    layers: Layered<SceneRenderer, Gpu<'w>>,
    window: &'w Window,
}

impl<'w> SwapChainTarget<'w> {
    /// Runs the setup sequence for `scene`: instance, surface, adapter,
    /// device, swap chain, then pipeline and vertex upload.
    pub fn new(
        window: &'w Window,
        init: GpuInit,
        scene: &Scene,
        sink: Arc<dyn ErrorSink>,
    ) -> Result<Self> {
        let gpu = pollster::block_on(Gpu::new(window, init, scene.needs(), sink))?;

        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format());
        let renderer = SceneRenderer::new(&ctx, scene);

        Ok(Self {
            layers: Layered {
                child: renderer,
                parent: gpu,
            },
            window,
        })
    }
}

/// Any acquisition failure is terminal: the swap chain is never recreated.
fn acquired<F>(result: Result<F, wgpu::SurfaceError>) -> Acquire<F> {
    match result {
        Ok(frame) => Acquire::Ready(frame),
        Err(err) => {
            log_surface_error(&err);
            Acquire::Invalid
        }
    }
}

impl FrameTarget for SwapChainTarget<'_> {
    type Frame = GpuFrame;

    fn acquire(&mut self) -> Acquire<GpuFrame> {
        acquired(self.layers.parent.begin_frame())
    }

    fn record(&mut self, frame: &mut GpuFrame) -> Option<DrawCall> {
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        self.layers.child.encode(&mut target)
    }

    fn submit(&mut self, frame: GpuFrame) {
        self.layers.parent.submit(self.window, frame);
    }

    fn tick(&mut self) {
        self.layers.parent.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_surface_error_ends_the_loop() {
        let errors = [
            wgpu::SurfaceError::Timeout,
            wgpu::SurfaceError::Outdated,
            wgpu::SurfaceError::Lost,
            wgpu::SurfaceError::OutOfMemory,
            wgpu::SurfaceError::Other,
        ];
        for err in errors {
            assert!(matches!(acquired::<()>(Err(err)), Acquire::Invalid));
        }
    }

    #[test]
    fn acquired_texture_is_ready() {
        assert!(matches!(acquired(Ok(7u8)), Acquire::Ready(7)));
    }
}
