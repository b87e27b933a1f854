//! Shared value types used across the cubespin crates.

mod types;

pub use types::{Rgb, WindowSize};
