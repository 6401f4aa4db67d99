//! Clears the swap chain every frame without drawing.

use std::process::ExitCode;

use trigon_engine::render::{Scene, CLEAR_RED};

fn main() -> ExitCode {
    trigon_demo::run_scene(Scene::clear(CLEAR_RED))
}
