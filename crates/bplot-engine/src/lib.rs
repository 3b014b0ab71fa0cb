//! BPlotter engine crate.
//!
//! Platform runtime used by the viewer: window + event loop, GPU surface,
//! input translation, frame timing, logging, and a small rectangle renderer
//! fed by a draw list. The state stack lives in `bplot-states` and only sees
//! the platform-agnostic types exported here.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod overlay;
pub mod paint;
pub mod render;
pub mod scene;
