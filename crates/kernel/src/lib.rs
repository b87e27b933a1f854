//! Scene kernel: the rotation angle, the field of view, and the callbacks
//! that mutate them.
//!
//! # Invariants
//! - Only [`Scene::tick`] writes the rotation angle; it stays in `[0, 360)`.
//! - Only [`Scene::apply`] writes the field of view; it stays in
//!   `[MIN_FOV_DEG, MAX_FOV_DEG]`, clamped after each adjustment.
//! - The projection is recomputed on every resize and every zoom.

pub mod animation;
pub mod handler;
pub mod projection;
pub mod scene;

pub use animation::{TICK_PERIOD, TickSchedule};
pub use handler::SceneHandler;
pub use projection::{FAR_PLANE, NEAR_PLANE, Projection};
pub use scene::{
    INITIAL_FOV_DEG, MAX_FOV_DEG, MIN_FOV_DEG, ROTATION_STEP_DEG, Scene, ZOOM_STEP_DEG,
};
