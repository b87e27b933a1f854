//! wgpu render backend for the spinning cube.
//!
//! [`GpuContext`] owns the surface, device and queue. [`WgpuRenderer`] owns
//! the pipeline and draws the cube face table with flat per-face colors and
//! a depth buffer.
//!
//! # Invariants
//! - Renderer never mutates scene state.
//! - Presentation is double-buffered (at most two frames in flight).

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, GpuError};
pub use gpu::WgpuRenderer;
