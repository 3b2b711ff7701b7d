//! Horologe engine crate.
//!
//! Platform and GPU runtime for the clock app: a single winit window with a
//! wgpu surface, a repeating tick schedule, platform-agnostic input, a sorted
//! draw list and the renderers that replay it.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
