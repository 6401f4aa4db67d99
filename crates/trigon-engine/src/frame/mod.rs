//! Frame loop.
//!
//! [`FrameLoop`] is the per-iteration state machine; [`SwapChainTarget`] is the
//! wgpu implementation of the [`FrameTarget`] it drives.

mod state;
mod swap_chain;

pub use state::{Acquire, DrawCall, FrameLoop, FrameStep, FrameTarget};
pub use swap_chain::SwapChainTarget;
