//! Shared entry point for the demo binaries.
//!
//! Each binary picks a [`Scene`]; everything else (window size, title, GPU
//! preferences) uses the engine defaults.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use trigon_engine::device::{GpuInit, LogSink};
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::Scene;
use trigon_engine::window::{Runtime, WindowConfig};

/// Runs `scene` in a default window and maps the outcome to a process exit code.
///
/// `0` after the window closes, `1` when setup fails.
pub fn run_scene(scene: Scene) -> ExitCode {
    init_logging(LoggingConfig::default());

    match run(WindowConfig::default(), scene) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(config: WindowConfig, scene: Scene) -> Result<()> {
    log::info!("starting {} scene", scene_name(&scene));
    Runtime::run(config, GpuInit::default(), scene, Arc::new(LogSink))
}

fn scene_name(scene: &Scene) -> &'static str {
    match scene {
        Scene::Blank => "blank",
        Scene::Clear(_) => "clear",
        Scene::Draw { .. } => "triangle",
    }
}
