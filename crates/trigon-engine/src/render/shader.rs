/// Vertex + fragment program for flat-colored 2D geometry.
///
/// Positions arrive in clip space at location 0; every fragment is the same
/// opaque blue.
pub const TRIANGLE_WGSL: &str = r#"
@vertex
fn vs_main(@location(0) in_pos: vec2f) -> @builtin(position) vec4f {
    return vec4f(in_pos, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4f {
    return vec4f(0.0, 0.4, 1.0, 1.0);
}
"#;

/// Vertex stage entry point in [`TRIANGLE_WGSL`].
pub const VERTEX_ENTRY: &str = "vs_main";

/// Fragment stage entry point in [`TRIANGLE_WGSL`].
pub const FRAGMENT_ENTRY: &str = "fs_main";
