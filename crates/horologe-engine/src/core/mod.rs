//! Contracts between the runtime (platform loop) and the application.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{EventCtx, FrameCtx, WindowCtx};
