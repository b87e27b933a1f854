/// A zoom request produced by either input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Narrow the field of view.
    ZoomIn,
    /// Widen the field of view.
    ZoomOut,
    /// Input with no binding.
    Noop,
}

impl Action {
    /// Map a typed character. `+`/`=` zoom in, `-`/`_` zoom out.
    pub fn from_char(key: char) -> Self {
        match key {
            '+' | '=' => Action::ZoomIn,
            '-' | '_' => Action::ZoomOut,
            _ => Action::Noop,
        }
    }

    /// Map a wheel step. Positive direction (scroll up) zooms in; anything
    /// else zooms out.
    pub fn from_wheel(direction: i32) -> Self {
        if direction > 0 {
            Action::ZoomIn
        } else {
            Action::ZoomOut
        }
    }
}

/// Collapse a vertical scroll delta to a unit wheel direction.
///
/// Returns `None` for a zero delta (horizontal-only scrolling), so it never
/// reaches [`Action::from_wheel`].
pub fn wheel_direction(delta_y: f32) -> Option<i32> {
    if delta_y > 0.0 {
        Some(1)
    } else if delta_y < 0.0 {
        Some(-1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_and_equals_zoom_in() {
        assert_eq!(Action::from_char('+'), Action::ZoomIn);
        assert_eq!(Action::from_char('='), Action::ZoomIn);
    }

    #[test]
    fn minus_and_underscore_zoom_out() {
        assert_eq!(Action::from_char('-'), Action::ZoomOut);
        assert_eq!(Action::from_char('_'), Action::ZoomOut);
    }

    #[test]
    fn other_characters_are_noop() {
        for key in ['a', 'Z', ' ', '0', '\n', '*'] {
            assert_eq!(Action::from_char(key), Action::Noop);
        }
    }

    #[test]
    fn wheel_up_zooms_in() {
        assert_eq!(Action::from_wheel(1), Action::ZoomIn);
        assert_eq!(Action::from_wheel(3), Action::ZoomIn);
    }

    #[test]
    fn wheel_zero_or_down_zooms_out() {
        assert_eq!(Action::from_wheel(0), Action::ZoomOut);
        assert_eq!(Action::from_wheel(-1), Action::ZoomOut);
    }

    #[test]
    fn scroll_delta_direction() {
        assert_eq!(wheel_direction(0.5), Some(1));
        assert_eq!(wheel_direction(-12.0), Some(-1));
        assert_eq!(wheel_direction(0.0), None);
    }
}
