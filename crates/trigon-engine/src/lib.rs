//! Trigon engine crate.
//!
//! Window + wgpu lifecycle for drawing a single triangle: instance, surface,
//! adapter, device, swap chain, pipeline, vertex buffer, then a frame loop
//! that clears and draws until the window closes.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`device`] | `Gpu`, `GpuInit`, limit negotiation, `ErrorSink` |
//! | [`render`] | `Scene`, `Geometry`, `SceneRenderer` |
//! | [`frame`] | `FrameLoop` state machine, `SwapChainTarget` |
//! | [`window`] | `Runtime`, `WindowConfig` |
//! | [`logging`] | `init_logging` |

pub mod device;
pub mod frame;
pub mod logging;
pub mod render;
pub mod window;
