//! Opens the window and polls events until it is closed. No GPU objects.

use std::process::ExitCode;

use trigon_engine::render::Scene;

fn main() -> ExitCode {
    trigon_demo::run_scene(Scene::blank())
}
