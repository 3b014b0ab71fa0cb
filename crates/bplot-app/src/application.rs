use std::time::Duration;

use bplot_engine::coords::Viewport;
use bplot_engine::core::{App, AppControl, FrameCtx};
use bplot_engine::input::InputEvent;
use bplot_engine::logging::LogBuffer;
use bplot_engine::overlay::{Overlay, OverlayInput, OverlayStyle};
use bplot_engine::render::RectRenderer;
use bplot_engine::scene::{Canvas, DrawList};
use bplot_engine::time::FixedStep;
use bplot_states::StateStack;

use crate::config::AppConfig;
use crate::console::LogConsole;
use crate::states::{self, StateId};

/// Everything one outer iteration consumes.
pub struct FrameInput<'a> {
    pub dt: f32,
    pub viewport: Viewport,
    pub overlay: OverlayInput,
    pub events: &'a [InputEvent],
    pub focused: bool,
}

/// Drives the state stack from the runtime's frame callback.
pub struct Application {
    config: AppConfig,
    stack: StateStack<StateId>,
    fixed_step: FixedStep,

    style: OverlayStyle,
    console: LogConsole,

    draw_list: DrawList,
    rect_renderer: RectRenderer,
}

impl Application {
    pub fn new(config: AppConfig, log_buffer: LogBuffer) -> Self {
        let mut stack = StateStack::new();
        states::register_all(&mut stack);
        stack.push(StateId::MainAppOpen);

        Self {
            fixed_step: config.fixed_step(),
            config,
            stack,
            style: OverlayStyle::default(),
            console: LogConsole::new(log_buffer),
            draw_list: DrawList::new(),
            rect_renderer: RectRenderer::new(),
        }
    }

    /// One outer iteration, everything but presenting.
    ///
    /// Returns [`AppControl::Exit`] once the exit state reaches the top of the
    /// stack or the stack runs empty; nothing is dispatched in that iteration.
    pub fn step(&mut self, frame: FrameInput<'_>) -> AppControl {
        self.stack.apply_changes();

        if self.stack.empty() {
            log::info!("state stack is empty, stopping");
            return AppControl::Exit;
        }
        if self.stack.top() == StateId::ExitApplicationState {
            log::info!("{} reached, stopping", StateId::ExitApplicationState);
            return AppControl::Exit;
        }

        self.draw_list.clear();

        {
            let mut ui = Overlay::new(&mut self.draw_list, frame.viewport, frame.overlay, &self.style);
            ui.begin_menu_bar();
            self.stack.update_overlay(&mut ui, frame.dt);
            self.console.show(&mut ui);
        }
        self.stack.update(frame.dt);

        let ticks = self.fixed_step.advance(Duration::from_secs_f32(frame.dt.max(0.0)));
        let step = self.fixed_step.step_secs();
        for _ in 0..ticks {
            self.stack.fixed_update(step);
        }

        // Unfocused windows keep rendering but do not feed input to states.
        if frame.focused {
            for event in frame.events {
                self.stack.handle_event(event);
            }
        }

        // A minimized window reports a zero-sized viewport.
        if frame.viewport.is_valid() {
            let mut canvas = Canvas::new(&mut self.draw_list, frame.viewport);
            self.stack.draw(&mut canvas);
        }

        AppControl::Continue
    }
}

impl App for Application {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let frame = FrameInput {
            dt: ctx.time.dt,
            viewport: ctx.window.viewport(),
            overlay: OverlayInput::from_input(ctx.input, ctx.input_frame),
            events: &ctx.input_frame.events,
            focused: ctx.window.has_focus(),
        };

        let visible = frame.viewport.is_valid();
        if self.step(frame) == AppControl::Exit {
            return AppControl::Exit;
        }
        if !visible {
            return AppControl::Continue;
        }

        let list = &mut self.draw_list;
        let rects = &mut self.rect_renderer;
        ctx.render(self.config.clear_color, |rctx, target| {
            rects.render(rctx, target, list);
        })
    }

    fn on_shutdown(&mut self) {
        log::info!("shutting down with states {:?}", self.stack.ids());
        self.stack.force_instant_clear();
    }
}

#[cfg(test)]
mod tests {
    use bplot_engine::coords::Vec2;
    use bplot_engine::input::{Key, KeyState, Modifiers};

    use super::*;

    fn idle(events: &[InputEvent]) -> FrameInput<'_> {
        FrameInput {
            dt: 1.0 / 60.0,
            viewport: Viewport::new(1280.0, 720.0),
            overlay: OverlayInput::default(),
            events,
            focused: true,
        }
    }

    fn escape() -> InputEvent {
        InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, modifiers: Modifiers::default(), repeat: false }
    }

    #[test]
    fn starts_on_main_screen() {
        let mut app = Application::new(AppConfig::default(), LogBuffer::new(8));
        assert_eq!(app.step(idle(&[])), AppControl::Continue);
        assert_eq!(app.stack.ids(), [StateId::MainAppOpen]);
        assert!(!app.draw_list.is_empty());
    }

    #[test]
    fn escape_exits_on_the_following_iteration() {
        let mut app = Application::new(AppConfig::default(), LogBuffer::new(8));
        assert_eq!(app.step(idle(&[escape()])), AppControl::Continue);
        assert_eq!(app.stack.top(), StateId::MainAppOpen);

        assert_eq!(app.step(idle(&[])), AppControl::Exit);
        assert_eq!(app.stack.top(), StateId::ExitApplicationState);
    }

    #[test]
    fn unfocused_window_ignores_input() {
        let mut app = Application::new(AppConfig::default(), LogBuffer::new(8));
        let events = [escape()];
        let mut frame = idle(&events);
        frame.focused = false;

        app.step(frame);
        assert_eq!(app.step(idle(&[])), AppControl::Continue);
    }

    #[test]
    fn quit_menu_button_exits() {
        let mut app = Application::new(AppConfig::default(), LogBuffer::new(8));
        let style = OverlayStyle::default();
        let mut frame = idle(&[]);
        frame.overlay = OverlayInput {
            pointer: Some(Vec2::new(style.padding + 10.0, style.bar_height / 2.0)),
            pressed: false,
            clicked: true,
        };

        app.step(frame);
        assert_eq!(app.step(idle(&[])), AppControl::Exit);
    }

    #[test]
    fn minimized_window_still_steps_without_scene_draw() {
        let mut app = Application::new(AppConfig::default(), LogBuffer::new(8));
        let mut frame = idle(&[]);
        frame.viewport = Viewport::new(0.0, 0.0);
        assert_eq!(app.step(frame), AppControl::Continue);
        let minimized = app.draw_list.len();

        app.step(idle(&[]));
        assert!(app.draw_list.len() > minimized);
    }

    #[test]
    fn empty_stack_exits() {
        let mut app = Application::new(AppConfig::default(), LogBuffer::new(8));
        app.stack.clear();
        assert_eq!(app.step(idle(&[])), AppControl::Exit);
    }

    #[test]
    fn shutdown_clears_states() {
        let mut app = Application::new(AppConfig::default(), LogBuffer::new(8));
        app.step(idle(&[]));
        app.on_shutdown();
        assert!(app.stack.empty());
        assert_eq!(app.stack.pending_changes(), 0);
    }
}
