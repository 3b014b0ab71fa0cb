use std::collections::VecDeque;

use bplot_engine::coords::Rect;
use bplot_engine::input::{InputEvent, Key};
use bplot_engine::overlay::Overlay;
use bplot_engine::paint::Color;
use bplot_engine::scene::Canvas;
use bplot_states::{State, StateCtx};

use super::StateId;

const HISTORY_LEN: usize = 240;

/// Frame times at or under this are drawn as on-budget.
const BUDGET_60HZ: f32 = 1.0 / 60.0;
const BUDGET_30HZ: f32 = 1.0 / 30.0;

/// Top of the plot area, below the menu bar.
const PLOT_TOP: f32 = 40.0;
const PLOT_MARGIN: f32 = 16.0;

/// Fixed updates per sweep of the tick marker.
const TICKS_PER_SWEEP: u64 = 60;

/// The main viewer screen: plots recent frame times.
///
/// Escape or the menu's quit button pushes [`StateId::ExitApplicationState`];
/// Space pauses recording.
#[derive(Debug)]
pub struct MainAppOpen {
    frame_times: FrameHistory,
    fixed_ticks: u64,
    paused: bool,
    exit_requested: bool,
}

impl MainAppOpen {
    pub fn new(history_len: usize) -> Self {
        Self {
            frame_times: FrameHistory::new(history_len),
            fixed_ticks: 0,
            paused: false,
            exit_requested: false,
        }
    }

    /// Queues the exit state once; later requests are ignored.
    fn request_exit(&mut self, ctx: &mut StateCtx<'_, StateId>) {
        if self.exit_requested {
            return;
        }
        self.exit_requested = true;
        log::info!("exit requested from {}", ctx.request_state_on_top());
        ctx.request_push(StateId::ExitApplicationState);
    }

    fn bar_color(dt: f32) -> Color {
        if dt <= BUDGET_60HZ * 1.05 {
            Color::from_straight(0.44, 0.80, 0.52, 1.0)
        } else if dt <= BUDGET_30HZ {
            Color::from_straight(0.93, 0.76, 0.33, 1.0)
        } else {
            Color::from_straight(0.91, 0.36, 0.36, 1.0)
        }
    }
}

impl Default for MainAppOpen {
    fn default() -> Self {
        Self::new(HISTORY_LEN)
    }
}

impl State<StateId> for MainAppOpen {
    fn draw(&self, canvas: &mut Canvas<'_>) {
        let viewport = canvas.viewport();
        let area = Rect::new(
            PLOT_MARGIN,
            PLOT_TOP,
            viewport.width - 2.0 * PLOT_MARGIN,
            viewport.height - PLOT_TOP - PLOT_MARGIN,
        );
        if area.is_empty() {
            return;
        }

        canvas.fill_rect(area, Color::from_straight(0.10, 0.10, 0.13, 1.0));

        // The vertical scale never drops below two 60 Hz frames.
        let scale = self.frame_times.max().max(2.0 * BUDGET_60HZ);
        let slot = area.size.x / self.frame_times.capacity() as f32;
        let bar_width = (slot - 1.0).max(1.0);

        canvas.push_clip(area);
        for (i, dt) in self.frame_times.iter().enumerate() {
            let height = (dt / scale).min(1.0) * area.size.y;
            let x = area.origin.x + i as f32 * slot;
            canvas.fill_rect(Rect::new(x, area.bottom() - height, bar_width, height), Self::bar_color(dt));
        }

        let budget_y = area.bottom() - (BUDGET_60HZ / scale) * area.size.y;
        canvas.fill_rect(
            Rect::new(area.origin.x, budget_y, area.size.x, 1.0),
            Color::from_straight(0.74, 0.58, 0.98, 0.8),
        );

        // Sweeps across the plot once per simulated second.
        let phase = (self.fixed_ticks % TICKS_PER_SWEEP) as f32 / TICKS_PER_SWEEP as f32;
        canvas.fill_rect(
            Rect::new(area.origin.x + phase * (area.size.x - 6.0), area.origin.y + 4.0, 6.0, 6.0),
            Color::from_straight(0.74, 0.58, 0.98, 1.0),
        );
        canvas.pop_clip();
    }

    fn handle_event(&mut self, ctx: &mut StateCtx<'_, StateId>, event: &InputEvent) -> bool {
        if event.is_key_press(Key::Escape) {
            self.request_exit(ctx);
        } else if event.is_key_press(Key::Space) {
            self.paused = !self.paused;
            log::debug!("frame recording {}", if self.paused { "paused" } else { "resumed" });
        }
        true
    }

    fn update(&mut self, _ctx: &mut StateCtx<'_, StateId>, dt: f32) -> bool {
        if !self.paused {
            self.frame_times.push(dt);
        }
        true
    }

    fn fixed_update(&mut self, _ctx: &mut StateCtx<'_, StateId>, _dt: f32) -> bool {
        self.fixed_ticks += 1;
        true
    }

    fn update_overlay(&mut self, ctx: &mut StateCtx<'_, StateId>, ui: &mut Overlay<'_>, _dt: f32) -> bool {
        if ui.menu_button(56.0, Color::from_straight(0.91, 0.36, 0.36, 1.0)) {
            self.request_exit(ctx);
        }

        let accent = if self.paused {
            Color::from_straight(0.93, 0.76, 0.33, 1.0)
        } else {
            Color::from_straight(0.44, 0.80, 0.52, 1.0)
        };
        if ui.menu_button(56.0, accent) {
            self.paused = !self.paused;
        }
        true
    }
}

/// Fixed-capacity ring of frame durations in seconds, oldest first.
#[derive(Debug, Clone)]
struct FrameHistory {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl FrameHistory {
    fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { samples: VecDeque::with_capacity(capacity), capacity }
    }

    fn push(&mut self, dt: f32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(dt);
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    fn max(&self) -> f32 {
        self.samples.iter().copied().fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use bplot_engine::coords::{Vec2, Viewport};
    use bplot_engine::input::{KeyState, Modifiers};
    use bplot_engine::overlay::{OverlayInput, OverlayStyle};
    use bplot_engine::scene::DrawList;
    use bplot_states::StateStack;

    use super::*;

    fn key(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::default(), repeat: false }
    }

    fn stack_with_main() -> StateStack<StateId> {
        let mut stack = StateStack::new();
        stack.save_state(StateId::MainAppOpen, || MainAppOpen::new(4));
        stack.save_default_state::<crate::states::ExitApplicationState>(StateId::ExitApplicationState);
        stack.push(StateId::MainAppOpen);
        stack.apply_changes();
        stack
    }

    #[test]
    fn history_keeps_latest_samples() {
        let mut history = FrameHistory::new(3);
        for dt in [0.1, 0.2, 0.3, 0.4] {
            history.push(dt);
        }
        assert_eq!(history.iter().collect::<Vec<_>>(), [0.2, 0.3, 0.4]);
        assert_eq!(history.max(), 0.4);
    }

    #[test]
    fn escape_requests_exit_state() {
        let mut stack = stack_with_main();

        stack.handle_event(&key(Key::Escape));
        stack.apply_changes();

        assert_eq!(stack.ids(), [StateId::MainAppOpen, StateId::ExitApplicationState]);
    }

    #[test]
    fn escape_and_quit_in_one_frame_push_exit_once() {
        let mut stack = stack_with_main();
        let style = OverlayStyle::default();
        let quit = OverlayInput {
            pointer: Some(Vec2::new(style.padding + 10.0, style.bar_height / 2.0)),
            pressed: false,
            clicked: true,
        };
        let mut list = DrawList::new();
        let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), quit, &style);
        ui.begin_menu_bar();
        stack.update_overlay(&mut ui, 0.016);
        stack.handle_event(&key(Key::Escape));
        stack.handle_event(&key(Key::Escape));

        assert_eq!(stack.pending_changes(), 1);
        stack.apply_changes();
        assert_eq!(stack.ids(), [StateId::MainAppOpen, StateId::ExitApplicationState]);
    }

    #[test]
    fn other_keys_leave_the_stack_alone() {
        let mut stack = stack_with_main();

        stack.handle_event(&key(Key::A));
        assert_eq!(stack.pending_changes(), 0);
    }

    #[test]
    fn draws_one_bar_per_sample_plus_frame() {
        let mut state = MainAppOpen::new(4);
        for _ in 0..3 {
            state.frame_times.push(BUDGET_60HZ);
        }

        let mut list = DrawList::new();
        state.draw(&mut Canvas::new(&mut list, Viewport::new(800.0, 600.0)));

        // background, 3 bars, budget line, tick marker
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn paused_state_stops_recording() {
        let mut stack = stack_with_main();
        stack.handle_event(&key(Key::Space));
        stack.update(0.016);

        let mut list = DrawList::new();
        stack.draw(&mut Canvas::new(&mut list, Viewport::new(800.0, 600.0)));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn fixed_updates_advance_the_tick_marker() {
        let mut stack = stack_with_main();
        let marker_x = |stack: &StateStack<StateId>| {
            let mut list = DrawList::new();
            stack.draw(&mut Canvas::new(&mut list, Viewport::new(800.0, 600.0)));
            match &list.items()[list.len() - 1].cmd {
                bplot_engine::scene::DrawCmd::Rect(r) => r.rect.origin.x,
            }
        };

        let before = marker_x(&stack);
        for _ in 0..10 {
            stack.fixed_update(1.0 / 60.0);
        }
        assert!(marker_x(&stack) > before);
    }
}
