use std::sync::Arc;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::device::{ErrorSink, GpuInit};
use crate::frame::{FrameLoop, FrameStep, SwapChainTarget};
use crate::render::Scene;

/// Window configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
    /// The swap chain is never recreated, so windows default to a fixed size.
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Learn WebGPU".to_string(),
            width: 640,
            height: 480,
            resizable: false,
        }
    }
}

impl WindowConfig {
    pub(crate) fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(self.width),
                f64::from(self.height),
            ))
            .with_resizable(self.resizable)
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, runs the setup sequence for `scene`, then renders
    /// until the window is closed or the swap chain becomes invalid.
    ///
    /// Setup failures are returned after every acquired resource has been
    /// released.
    pub fn run(
        config: WindowConfig,
        gpu_init: GpuInit,
        scene: Scene,
        sink: Arc<dyn ErrorSink>,
    ) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, scene, sink);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    target: Option<SwapChainTarget<'this>>,
}

struct AppState {
    config: WindowConfig,
    gpu_init: GpuInit,
    scene: Scene,
    sink: Arc<dyn ErrorSink>,

    entry: Option<WindowEntry>,
    frames: FrameLoop,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: WindowConfig, gpu_init: GpuInit, scene: Scene, sink: Arc<dyn ErrorSink>) -> Self {
        Self {
            config,
            gpu_init,
            scene,
            sink,
            entry: None,
            frames: FrameLoop::new(),
            failure: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let window = event_loop
            .create_window(self.config.attributes())
            .context("failed to create window")?;
        log::info!(
            "window opened: \"{}\" {}x{}",
            self.config.title,
            self.config.width,
            self.config.height
        );

        let scene = &self.scene;
        let gpu_init = self.gpu_init.clone();
        let sink = Arc::clone(&self.sink);

        // On error the builder drops the window along with whatever the
        // target acquired before failing.
        WindowEntryTryBuilder {
            window,
            target_builder: |w| {
                if !scene.uses_gpu() {
                    return Ok(None);
                }
                SwapChainTarget::new(w, gpu_init, scene, sink).map(Some)
            },
        }
        .try_build()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("setup failed: {err:#}");
        self.failure = Some(err);
        self.teardown();
        event_loop.exit();
    }

    fn teardown(&mut self) {
        if let Some(entry) = self.entry.take() {
            log::info!("releasing GPU resources and window");
            drop(entry);
        }
    }

    fn owns(&self, id: WindowId) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|entry| entry.with_window(|w| w.id()) == id)
    }

    fn finish(mut self) -> Result<()> {
        self.teardown();
        if let Some(err) = self.failure.take() {
            return Err(err);
        }

        log::info!("frame loop finished: {} frames presented", self.frames.presented());
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.failure.is_some() || self.frames.is_finished() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frames.is_finished() {
            self.teardown();
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw while there is something to render.
        if let Some(entry) = &self.entry {
            if entry.with_target(|t| t.is_some()) {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if !self.owns(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.frames.request_close();
                self.teardown();
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                let frames = &mut self.frames;
                let step = self.entry.as_mut().and_then(|entry| {
                    entry.with_target_mut(|target| target.as_mut().map(|t| frames.step(t)))
                });

                if step == Some(FrameStep::Finished) {
                    self.teardown();
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn default_window_is_fixed_640_by_480() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Learn WebGPU");
        assert_eq!((config.width, config.height), (640, 480));
        assert!(!config.resizable);
    }

    #[test]
    fn attributes_follow_config() {
        let config = WindowConfig {
            title: "triangle".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        };
        let attrs = config.attributes();
        assert_eq!(attrs.title, "triangle");
        assert!(!attrs.resizable);
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(800.0, 600.0)))
        );
    }
}
