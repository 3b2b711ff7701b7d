//! Scene (draw stream) types.
//!
//! The app records renderer-agnostic commands into a [`DrawList`]; the
//! renderers replay them in paint order. Shape-specific payloads and their
//! `push_*` helpers live one per file under `scene::shapes`.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::Border;
pub use z_index::ZIndex;
