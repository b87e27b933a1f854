use glam::{Mat4, Vec3};

/// Fixed look-at camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub const EYE: Vec3 = Vec3::new(10.0, 10.0, 10.0);

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Self::EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_at_origin() {
        let cam = Camera::default();
        assert_eq!(cam.eye, Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(cam.target, Vec3::ZERO);
        assert_eq!(cam.up, Vec3::Y);
    }

    #[test]
    fn origin_lies_on_view_axis() {
        let view = Camera::default().view_matrix();
        let p = view.transform_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);
        // Right-handed view space looks down -Z.
        assert!((p.z + 300.0_f32.sqrt()).abs() < 1e-4);
    }
}
