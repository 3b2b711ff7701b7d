//! Window + runtime loop.
//!
//! Owns the winit event loop and the window, wires them to the GPU layer and
//! drives the tick schedule.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
