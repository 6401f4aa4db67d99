//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - negotiating device limits against the adapter
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//! - routing uncaptured device errors to an [`ErrorSink`]

mod error;
mod gpu;
mod handles;
mod init;
mod limits;
mod surface;

pub use error::{DeviceErrorKind, ErrorSink, LogSink};
pub use gpu::{Gpu, GpuFrame};
pub(crate) use gpu::log_surface_error;
pub(crate) use handles::Layered;
pub use init::GpuInit;
pub use limits::{required_limits, ResourceNeeds};
