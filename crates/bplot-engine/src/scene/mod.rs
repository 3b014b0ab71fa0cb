//! Draw stream recorded by states each frame and consumed by renderers.
//!
//! Items are painted by ascending z, then by insertion order, so a state stack
//! that records bottom-to-top at one z gets correct layering for free.

mod canvas;
mod cmd;
mod key;
mod list;
mod z_index;

pub use canvas::Canvas;
pub use cmd::{DrawCmd, RectCmd};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
