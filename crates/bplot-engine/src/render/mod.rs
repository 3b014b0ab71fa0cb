//! GPU rendering of the scene draw list.
//!
//! CPU geometry is in logical pixels; the vertex shader maps it to NDC with a
//! viewport uniform. Each renderer owns its pipeline and buffers and builds
//! them lazily on first use.

mod common;
mod ctx;
mod rect;

pub use ctx::{RenderCtx, RenderTarget};
pub use rect::RectRenderer;
