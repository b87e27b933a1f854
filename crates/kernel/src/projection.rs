use cubespin_common::WindowSize;
use glam::Mat4;
use serde::{Deserialize, Serialize};

pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 100.0;

/// Perspective projection parameters.
///
/// Only the field of view and the aspect ratio vary; the clip planes are
/// fixed at [`NEAR_PLANE`] and [`FAR_PLANE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Build the projection for a window of the given size.
    pub fn perspective(fov_deg: f32, window: WindowSize) -> Self {
        Self {
            fov_deg,
            aspect: window.aspect_ratio(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    /// Right-handed perspective matrix with a `[0, 1]` depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }
}
