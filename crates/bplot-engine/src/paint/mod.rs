//! Colors shared by the scene, the overlay and the renderers.

mod color;

pub use color::Color;
