//! Input mapping: raw keyboard characters and wheel motion become [`Action`]s.
//!
//! # Invariants
//! - The scene consumes actions, never raw input events.
//! - Keyboard and wheel produce the same action shape.

pub mod action;

pub use action::{Action, wheel_direction};
