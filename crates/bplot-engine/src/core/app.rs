use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// What the runtime should do after an app callback returns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by [`crate::window::Runtime`].
pub trait App {
    /// Raw window event hook, called before the event is translated into input state.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// One outer loop iteration: update, fixed updates, input, draw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once after the event loop stops, before the window is dropped.
    fn on_shutdown(&mut self) {}
}
