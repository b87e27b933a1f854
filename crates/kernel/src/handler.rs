/// Event callbacks driven by a windowing run loop.
///
/// One state-owning object implements all five; the run loop calls them one
/// at a time on a single thread.
pub trait SceneHandler {
    /// Draw and present one frame.
    fn on_frame(&mut self);

    /// The window client area changed size.
    fn on_resize(&mut self, width: u32, height: u32);

    /// A character was typed.
    fn on_key(&mut self, key: char);

    /// The mouse wheel moved; positive is scroll up.
    fn on_wheel(&mut self, direction: i32);

    /// The animation timer fired.
    fn on_tick(&mut self);
}
