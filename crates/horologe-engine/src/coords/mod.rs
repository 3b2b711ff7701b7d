//! Geometry types shared by the draw list, renderers, and the app.
//!
//! Canonical CPU space is logical pixels with the origin at the top-left,
//! +X right and +Y down. Renderers convert to NDC in their vertex shaders.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
