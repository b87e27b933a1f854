use crate::camera::Camera;
use crate::cube::CUBE_FACES;
use cubespin_kernel::{Projection, Scene};
use glam::Mat4;
use std::fmt::Write;

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    pub camera: Camera,
    /// Rotation about the Y axis in degrees.
    pub rotation_deg: f32,
    pub projection: Projection,
}

impl FrameView {
    /// Snapshot the scene as seen from the fixed camera.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            camera: Camera::default(),
            rotation_deg: scene.rotation_deg(),
            projection: scene.projection(),
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_deg.to_radians())
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix() * self.camera.view_matrix()
    }

    /// Projection * view * model, the full transform applied to cube corners.
    pub fn model_view_projection(&self) -> Mat4 {
        self.view_projection() * self.model_matrix()
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a frame view and produces output. It never mutates
/// the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, view: &FrameView) -> Self::Output;
}

/// Text renderer for headless runs.
///
/// Lists the frame parameters and, per face, its color and the corners
/// after the model rotation.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, view: &FrameView) -> String {
        let p = &view.projection;
        let eye = view.camera.eye;
        let model = view.model_matrix();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Frame (rotation={:.1}, fov={:.1}) ===",
            view.rotation_deg, p.fov_deg
        );
        let _ = writeln!(
            out,
            "Projection: aspect={:.3} near={:.1} far={:.1}",
            p.aspect, p.near, p.far
        );
        let _ = writeln!(out, "Camera: eye=({:.1}, {:.1}, {:.1})", eye.x, eye.y, eye.z);

        for face in &CUBE_FACES {
            let c = face.color;
            let _ = write!(
                out,
                "  {:<6} rgb=({:.0}, {:.0}, {:.0})",
                face.name, c.r, c.g, c.b
            );
            for corner in face.corners {
                let w = model.transform_point3(corner);
                let _ = write!(out, " ({:.2}, {:.2}, {:.2})", w.x, w.y, w.z);
            }
            out.push('\n');
        }

        out
    }
}
