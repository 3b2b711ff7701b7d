//! Color model shared between the app and the renderers.
//!
//! Colors are linear premultiplied RGBA, matching the renderers'
//! `One, OneMinusSrcAlpha` blend state.

mod color;

pub use color::Color;
