//! Input subsystem.
//!
//! Platform-agnostic events and per-window input state. The runtime translates
//! winit events through [`platform::winit`]; nothing above this module sees
//! winit input types.

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
    TextEvent,
};
