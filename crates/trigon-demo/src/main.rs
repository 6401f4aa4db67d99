use std::process::ExitCode;

use trigon_engine::render::Scene;

fn main() -> ExitCode {
    trigon_demo::run_scene(Scene::triangle())
}
