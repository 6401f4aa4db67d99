use std::borrow::Cow;

use anyhow::{Context, Result};

use crate::device::ResourceNeeds;

use super::shader::TRIANGLE_WGSL;
use super::vertex::{
    vertex_count, Position, FLOATS_PER_VERTEX, TRIANGLE_POSITIONS, TRIANGLE_VERTEX_COUNT,
};

/// Clear color used by [`Scene::triangle`].
pub const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.05,
    g: 0.05,
    b: 0.05,
    a: 1.0,
};

/// Clear color of the clear-only demo.
pub const CLEAR_RED: wgpu::Color = wgpu::Color {
    r: 0.9,
    g: 0.1,
    b: 0.2,
    a: 1.0,
};

/// Static vertex data plus the shader that draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    positions: Vec<f32>,
    vertex_count: u32,
    shader: Cow<'static, str>,
}

impl Geometry {
    /// Creates geometry from flat `[x, y, ...]` clip-space positions.
    ///
    /// Fails on empty data, a dangling component, or more vertices than a
    /// draw call can address.
    pub fn new(positions: Vec<f32>, shader: impl Into<Cow<'static, str>>) -> Result<Self> {
        anyhow::ensure!(!positions.is_empty(), "geometry has no vertices");
        anyhow::ensure!(
            positions.len() % FLOATS_PER_VERTEX == 0,
            "position data has {} components, expected a multiple of {FLOATS_PER_VERTEX}",
            positions.len()
        );
        let vertex_count = vertex_count(&positions).context("too many vertices")?;

        Ok(Self {
            positions,
            vertex_count,
            shader: shader.into(),
        })
    }

    /// The reference triangle with the built-in shader.
    pub fn triangle() -> Self {
        Self {
            positions: TRIANGLE_POSITIONS.to_vec(),
            vertex_count: TRIANGLE_VERTEX_COUNT,
            shader: Cow::Borrowed(TRIANGLE_WGSL),
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn shader(&self) -> &str {
        &self.shader
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn needs(&self) -> ResourceNeeds {
        ResourceNeeds::single_buffer(self.vertex_count(), Position::STRIDE)
    }
}

/// What each frame records.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    /// Window only; no GPU objects are created.
    Blank,
    /// One render pass that clears the swap-chain texture.
    Clear(wgpu::Color),
    /// Clear, then draw `geometry` with its pipeline.
    Draw { clear: wgpu::Color, geometry: Geometry },
}

impl Scene {
    pub fn blank() -> Self {
        Scene::Blank
    }

    pub fn clear(color: wgpu::Color) -> Self {
        Scene::Clear(color)
    }

    pub fn triangle() -> Self {
        Scene::Draw {
            clear: BACKGROUND,
            geometry: Geometry::triangle(),
        }
    }

    /// Whether the scene needs a device and swap chain at all.
    pub fn uses_gpu(&self) -> bool {
        !matches!(self, Scene::Blank)
    }

    pub fn clear_color(&self) -> Option<wgpu::Color> {
        match self {
            Scene::Blank => None,
            Scene::Clear(color) => Some(*color),
            Scene::Draw { clear, .. } => Some(*clear),
        }
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Scene::Draw { geometry, .. } => Some(geometry),
            _ => None,
        }
    }

    pub fn needs(&self) -> ResourceNeeds {
        self.geometry().map(Geometry::needs).unwrap_or_default()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::triangle()
    }
}
