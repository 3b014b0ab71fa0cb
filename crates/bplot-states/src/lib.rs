//! Layered application state stack.
//!
//! A [`StateStack`] owns the active [`State`]s of the viewer, bottom to top.
//! States never mutate the stack directly: they queue push/pop/clear requests
//! through the [`StateCtx`] handed to every mutable callback, and the driver
//! applies the queue once per loop iteration with
//! [`StateStack::apply_changes`].
//!
//! Dispatch walks from the top of the stack downwards and stops at the first
//! state that returns `false` ("opaque" for that pass).

mod ctx;
mod stack;
mod state;

pub use ctx::StateCtx;
pub use stack::{Change, StateStack};
pub use state::State;
