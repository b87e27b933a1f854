use crate::projection::Projection;
use cubespin_common::WindowSize;
use cubespin_input::Action;

pub const INITIAL_FOV_DEG: f32 = 40.0;
pub const MIN_FOV_DEG: f32 = 1.0;
pub const MAX_FOV_DEG: f32 = 120.0;
/// Field-of-view change per zoom input.
pub const ZOOM_STEP_DEG: f32 = 2.0;
/// Rotation added per animation tick.
pub const ROTATION_STEP_DEG: f32 = 1.5;

/// The whole mutable state of the cube scene.
///
/// The rotation angle is advanced by [`Scene::tick`] and read by renderers.
/// The field of view is changed by [`Scene::apply`] and read by the
/// projection update. The window size is only kept so that zooming can
/// rebuild the projection without asking the window.
#[derive(Debug, Clone)]
pub struct Scene {
    rotation_deg: f32,
    fov_deg: f32,
    window: WindowSize,
    projection: Projection,
}

impl Scene {
    /// A scene at rotation 0 and the initial field of view.
    pub fn new(window: WindowSize) -> Self {
        Self {
            rotation_deg: 0.0,
            fov_deg: INITIAL_FOV_DEG,
            window,
            projection: Projection::perspective(INITIAL_FOV_DEG, window),
        }
    }

    /// Rotation about the Y axis in degrees, in `[0, 360)`.
    pub fn rotation_deg(&self) -> f32 {
        self.rotation_deg
    }

    /// Vertical field of view in degrees.
    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// The projection as of the last resize or zoom.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Advance the rotation by one step and return the new angle.
    pub fn tick(&mut self) -> f32 {
        self.rotation_deg += ROTATION_STEP_DEG;
        if self.rotation_deg >= 360.0 {
            self.rotation_deg -= 360.0;
        }
        tracing::trace!(rotation = self.rotation_deg, "tick");
        self.rotation_deg
    }

    /// Apply a zoom action. Returns `true` if the field of view changed.
    ///
    /// The step is added first and the result clamped afterwards, so a zoom
    /// past either bound lands exactly on it.
    pub fn apply(&mut self, action: Action) -> bool {
        let delta = match action {
            Action::ZoomIn => -ZOOM_STEP_DEG,
            Action::ZoomOut => ZOOM_STEP_DEG,
            Action::Noop => return false,
        };

        let old = self.fov_deg;
        self.fov_deg = (self.fov_deg + delta).clamp(MIN_FOV_DEG, MAX_FOV_DEG);
        tracing::debug!("fov {old:.1} -> {:.1}", self.fov_deg);
        self.update_projection();
        self.fov_deg != old
    }

    /// Record a new window size and rebuild the projection.
    pub fn resize(&mut self, window: WindowSize) {
        tracing::debug!("resize to {}x{}", window.width, window.height);
        self.window = window;
        self.update_projection();
    }

    fn update_projection(&mut self) {
        self.projection = Projection::perspective(self.fov_deg, self.window);
        tracing::debug!(
            fov = self.projection.fov_deg,
            aspect = self.projection.aspect,
            "projection updated"
        );
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(WindowSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let scene = Scene::default();
        assert_eq!(scene.rotation_deg(), 0.0);
        assert_eq!(scene.fov_deg(), 40.0);
        assert_eq!(scene.projection().fov_deg, 40.0);
        assert_eq!(scene.window(), WindowSize::new(800, 600));
    }

    #[test]
    fn rotation_after_n_ticks() {
        let mut scene = Scene::default();
        for n in 1..=1000u32 {
            let angle = scene.tick();
            let expected = (1.5 * n as f32) % 360.0;
            assert_eq!(angle, expected, "after {n} ticks");
            assert!((0.0..360.0).contains(&angle));
        }
    }

    #[test]
    fn full_turn_wraps_to_zero() {
        let mut scene = Scene::default();
        for _ in 0..240 {
            scene.tick();
        }
        assert_eq!(scene.rotation_deg(), 0.0);
        scene.tick();
        assert_eq!(scene.rotation_deg(), 1.5);
    }

    #[test]
    fn one_zoom_in() {
        let mut scene = Scene::default();
        assert!(scene.apply(Action::ZoomIn));
        assert_eq!(scene.fov_deg(), 38.0);
        assert_eq!(scene.projection().fov_deg, 38.0);
    }

    #[test]
    fn twenty_zoom_ins_clamp_to_min() {
        let mut scene = Scene::default();
        for _ in 0..20 {
            scene.apply(Action::ZoomIn);
        }
        assert_eq!(scene.fov_deg(), 1.0);
        assert!(!scene.apply(Action::ZoomIn));
        assert_eq!(scene.fov_deg(), 1.0);
    }

    #[test]
    fn zoom_out_clamps_after_adjusting() {
        let mut scene = Scene::default();
        // 40 -> 118 in 39 steps, then 120, then one more lands on 120 again.
        for _ in 0..39 {
            scene.apply(Action::ZoomOut);
        }
        assert_eq!(scene.fov_deg(), 118.0);
        scene.apply(Action::ZoomIn);
        scene.apply(Action::ZoomOut);
        scene.apply(Action::ZoomOut);
        assert_eq!(scene.fov_deg(), 120.0);
        scene.apply(Action::ZoomOut);
        assert_eq!(scene.fov_deg(), 120.0);
    }

    #[test]
    fn odd_fov_zoom_out_hits_max() {
        let mut scene = Scene::default();
        // Reach 1.0, then climb by 2 to 119.0.
        for _ in 0..20 {
            scene.apply(Action::ZoomIn);
        }
        for _ in 0..59 {
            scene.apply(Action::ZoomOut);
        }
        assert_eq!(scene.fov_deg(), 119.0);
        scene.apply(Action::ZoomOut);
        assert_eq!(scene.fov_deg(), 120.0);
    }

    #[test]
    fn fov_stays_in_bounds_for_mixed_sequences() {
        let mut scene = Scene::default();
        let pattern = [
            Action::ZoomIn,
            Action::ZoomOut,
            Action::ZoomOut,
            Action::Noop,
            Action::ZoomOut,
        ];
        for i in 0..500 {
            scene.apply(pattern[i % pattern.len()]);
            assert!((MIN_FOV_DEG..=MAX_FOV_DEG).contains(&scene.fov_deg()));
        }
        for _ in 0..500 {
            scene.apply(Action::ZoomIn);
            assert!((MIN_FOV_DEG..=MAX_FOV_DEG).contains(&scene.fov_deg()));
        }
    }

    #[test]
    fn noop_leaves_state_alone() {
        let mut scene = Scene::default();
        let before = scene.projection();
        assert!(!scene.apply(Action::Noop));
        assert_eq!(scene.fov_deg(), 40.0);
        assert_eq!(scene.projection(), before);
    }

    #[test]
    fn zoom_does_not_touch_rotation() {
        let mut scene = Scene::default();
        scene.tick();
        scene.apply(Action::ZoomIn);
        assert_eq!(scene.rotation_deg(), 1.5);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut scene = Scene::default();
        scene.resize(WindowSize::new(1000, 500));
        assert_eq!(scene.projection().aspect, 2.0);
        scene.resize(WindowSize::new(300, 0));
        assert_eq!(scene.projection().aspect, 300.0);
    }

    #[test]
    fn zoom_uses_current_window() {
        let mut scene = Scene::default();
        scene.resize(WindowSize::new(1200, 400));
        scene.apply(Action::ZoomOut);
        let p = scene.projection();
        assert_eq!(p.aspect, 3.0);
        assert_eq!(p.fov_deg, 42.0);
    }
}
