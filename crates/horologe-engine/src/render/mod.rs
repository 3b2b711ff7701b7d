//! GPU rendering subsystem.
//!
//! [`SceneRenderer`] replays a [`DrawList`](crate::scene::DrawList) in paint
//! order. Consecutive commands handled by the same pipeline are batched into
//! one instanced draw; all batches share a single render pass.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Shaders convert to NDC using a globals uniform (viewport + scale factor).

mod ctx;
mod scene;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene::SceneRenderer;
