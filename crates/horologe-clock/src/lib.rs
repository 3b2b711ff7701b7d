//! Clock core for **Horologe**, a desktop analog clock.
//!
//! This crate knows nothing about windows or GPUs. The host feeds it ticks
//! and input through [`ClockEvents`] and receives draw calls through
//! [`Canvas`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`time_state`] | `TimeState`, `FieldUpdate` |
//! | [`angle`] | point → angle → hour/minute conversion |
//! | [`face`] | `FaceGeometry`, `HandGeometry`, `Point`, tick marks |
//! | [`canvas`] | `Canvas` drawing trait, `Rgb` |
//! | [`style`] | `ClockStyle` colors and stroke widths |
//! | [`view`] | `ClockView` redraw pass |
//! | [`controller`] | `ClockController`, `ClockEvents`, input enums |
//!
//! # Quick start
//!
//! ```rust
//! use horologe_clock::{ClockController, ClockEvents, FaceGeometry, TimeState};
//!
//! let face = FaceGeometry::new(200, 200, 150);
//! let mut clock = ClockController::new(TimeState::new(11, 59, 59), face);
//! clock.on_tick(1);
//! assert_eq!(clock.time(), TimeState::new(0, 0, 0));
//! ```

pub mod angle;
pub mod canvas;
pub mod controller;
pub mod face;
pub mod style;
pub mod time_state;
pub mod view;

pub use canvas::{Canvas, Rgb};
pub use controller::{ClockController, ClockEvents, ClockKey, PointerButton};
pub use face::{FaceGeometry, HandGeometry, Point};
pub use style::ClockStyle;
pub use time_state::{FieldUpdate, TimeState};
pub use view::ClockView;
