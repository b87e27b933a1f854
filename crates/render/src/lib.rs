//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate the scene.
//! - A frame derives only from the rotation angle, the fixed camera and the
//!   current projection.
//!
//! The cube is a constant table ([`CUBE_FACES`]) that every backend iterates.
//! [`DebugTextRenderer`] renders it to text for headless runs and tests.

mod camera;
mod cube;
mod renderer;

pub use camera::Camera;
pub use cube::{CUBE_FACES, Face, triangle_list};
pub use renderer::{DebugTextRenderer, FrameView, Renderer};

pub fn crate_info() -> &'static str {
    concat!("cubespin-render v", env!("CARGO_PKG_VERSION"))
}
