use serde::{Deserialize, Serialize};

/// Window client area in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height. A zero height counts as one pixel.
    pub fn aspect_ratio(&self) -> f32 {
        let height = self.height.max(1);
        self.width as f32 / height as f32
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Flat RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
    pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
    pub const MAGENTA: Rgb = Rgb::new(1.0, 0.0, 1.0);
    pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_default_window() {
        let size = WindowSize::default();
        assert_eq!(size, WindowSize::new(800, 600));
        assert!((size.aspect_ratio() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_counts_as_one() {
        assert_eq!(WindowSize::new(640, 0).aspect_ratio(), 640.0);
        assert_eq!(WindowSize::new(0, 0).aspect_ratio(), 0.0);
    }

    #[test]
    fn zero_width_is_finite() {
        let aspect = WindowSize::new(0, 480).aspect_ratio();
        assert_eq!(aspect, 0.0);
        assert!(aspect.is_finite());
    }

    #[test]
    fn color_array_order() {
        assert_eq!(Rgb::MAGENTA.to_array(), [1.0, 0.0, 1.0]);
        assert_eq!(Rgb::CYAN.to_array(), [0.0, 1.0, 1.0]);
    }
}
