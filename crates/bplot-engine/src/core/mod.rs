//! Contract between the runtime loop and the application driver.
//!
//! The runtime owns the window and GPU; the driver only sees `App` callbacks
//! and a per-frame `FrameCtx`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
