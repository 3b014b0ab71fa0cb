use bplot_engine::input::InputEvent;
use bplot_engine::overlay::Overlay;
use bplot_engine::scene::Canvas;

use crate::StateCtx;

/// One screen or mode of the application.
///
/// Every callback has a transparent default: a state that overrides nothing
/// draws nothing and lets every pass through to the states below it.
/// Returning `false` from a dispatch callback stops that pass at this state.
pub trait State<I> {
    /// Records this state's visuals. Called bottom-to-top.
    fn draw(&self, canvas: &mut Canvas<'_>) {
        let _ = canvas;
    }

    fn handle_event(&mut self, ctx: &mut StateCtx<'_, I>, event: &InputEvent) -> bool {
        let _ = (ctx, event);
        true
    }

    /// Per-frame update with the variable frame delta in seconds.
    fn update(&mut self, ctx: &mut StateCtx<'_, I>, dt: f32) -> bool {
        let _ = (ctx, dt);
        true
    }

    /// Constant-step update; `dt` is always the fixed step in seconds.
    fn fixed_update(&mut self, ctx: &mut StateCtx<'_, I>, dt: f32) -> bool {
        let _ = (ctx, dt);
        true
    }

    /// Builds this state's part of the overlay (menu entries, panels).
    fn update_overlay(&mut self, ctx: &mut StateCtx<'_, I>, ui: &mut Overlay<'_>, dt: f32) -> bool {
        let _ = (ctx, ui, dt);
        true
    }

    /// `true` hides every state below this one from [`StateStack::draw`](crate::StateStack::draw).
    fn obscures_below(&self) -> bool {
        false
    }
}
