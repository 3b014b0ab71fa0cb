//! Immediate-mode overlay drawn above every application state.
//!
//! The overlay is rebuilt from scratch each frame: callers describe widgets,
//! the overlay records rects into the shared draw list on the
//! [`ZIndex::OVERLAY`] layer and answers hover/click queries against this
//! frame's pointer input.

mod style;

pub use style::OverlayStyle;

use crate::coords::{Rect, Vec2, Viewport};
use crate::input::{InputFrame, InputState, MouseButton};
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// Pointer input the overlay reacts to.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OverlayInput {
    /// Logical pointer position; `None` outside the window.
    pub pointer: Option<Vec2>,
    /// Primary button held.
    pub pressed: bool,
    /// Primary button released this frame.
    pub clicked: bool,
}

impl OverlayInput {
    pub fn from_input(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            pointer: state.pointer_pos.map(Vec2::from),
            pressed: state.button_down(MouseButton::Left),
            clicked: frame.clicked(MouseButton::Left),
        }
    }
}

/// One frame of overlay construction.
pub struct Overlay<'a> {
    draw_list: &'a mut DrawList,
    viewport: Viewport,
    input: OverlayInput,
    style: &'a OverlayStyle,

    z: i32,
    /// Next free x position in the menu bar.
    bar_cursor: f32,
    /// A click is delivered to at most one widget per frame.
    click_taken: bool,
    /// Any overlay widget under the pointer this frame.
    hovered_any: bool,
}

impl<'a> Overlay<'a> {
    pub fn new(
        draw_list: &'a mut DrawList,
        viewport: Viewport,
        input: OverlayInput,
        style: &'a OverlayStyle,
    ) -> Self {
        Self {
            draw_list,
            viewport,
            input,
            style,
            z: 0,
            bar_cursor: style.padding,
            click_taken: false,
            hovered_any: false,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn style(&self) -> &OverlayStyle {
        self.style
    }

    /// True when the pointer was over an overlay widget drawn so far this frame.
    pub fn wants_pointer(&self) -> bool {
        self.hovered_any
    }

    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.input.pointer.is_some_and(|p| rect.contains(p))
    }

    /// A click this frame that no widget took and that landed outside `rect`.
    pub fn clicked_outside(&self, rect: Rect) -> bool {
        self.input.clicked && !self.click_taken && !self.is_hovered(rect)
    }

    // ── menu bar ──────────────────────────────────────────────────────────

    /// The strip along the top edge that menu buttons are laid out in.
    pub fn menu_bar_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport.width, self.style.bar_height)
    }

    /// Draws the bar background and resets the button cursor.
    pub fn begin_menu_bar(&mut self) {
        let bar = self.menu_bar_rect();
        self.bar_cursor = self.style.padding;
        self.track_hover(bar);
        self.fill_rect(bar, self.style.bar_color);
    }

    /// A menu button of `width` placed after the previous one; `accent` marks
    /// it. Returns `true` when clicked this frame.
    pub fn menu_button(&mut self, width: f32, accent: Color) -> bool {
        let inset = self.style.padding * 0.5;
        let rect = Rect::new(
            self.bar_cursor,
            inset,
            width,
            (self.style.bar_height - 2.0 * inset).max(0.0),
        );
        self.bar_cursor += width + self.style.spacing;
        self.button(rect, accent)
    }

    // ── widgets ───────────────────────────────────────────────────────────

    /// Free-standing button; returns `true` when clicked this frame.
    pub fn button(&mut self, rect: Rect, accent: Color) -> bool {
        let hovered = self.track_hover(rect);
        let background = match (hovered, self.input.pressed) {
            (true, true) => self.style.button_active,
            (true, false) => self.style.button_hovered,
            _ => self.style.button,
        };
        self.fill_rect(rect, background);

        let stripe = Rect::new(rect.origin.x, rect.bottom() - 2.0, rect.size.x, 2.0);
        self.fill_rect(stripe, accent);

        self.take_click(rect)
    }

    /// Opaque background panel; swallows the pointer.
    pub fn panel(&mut self, rect: Rect) {
        self.track_hover(rect);
        self.fill_rect(rect, self.style.panel_color);
        self.fill_rect(Rect::new(rect.origin.x, rect.origin.y, rect.size.x, 1.0), self.style.border_color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = ZIndex::OVERLAY.above(self.z);
        self.z += 1;
        self.draw_list.push_rect(z, rect, color);
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    fn track_hover(&mut self, rect: Rect) -> bool {
        let hovered = self.is_hovered(rect);
        self.hovered_any |= hovered;
        hovered
    }

    fn take_click(&mut self, rect: Rect) -> bool {
        if self.click_taken || !self.input.clicked || !self.is_hovered(rect) {
            return false;
        }
        self.click_taken = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_at(x: f32, y: f32, clicked: bool) -> OverlayInput {
        OverlayInput { pointer: Some(Vec2::new(x, y)), pressed: false, clicked }
    }

    #[test]
    fn click_inside_button_fires() {
        let style = OverlayStyle::default();
        let mut list = DrawList::new();
        let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), input_at(15.0, 15.0, true), &style);

        assert!(ui.button(Rect::new(10.0, 10.0, 50.0, 20.0), Color::WHITE));
    }

    #[test]
    fn click_outside_or_hover_only_does_not_fire() {
        let style = OverlayStyle::default();
        let mut list = DrawList::new();
        let rect = Rect::new(10.0, 10.0, 50.0, 20.0);

        let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), input_at(100.0, 100.0, true), &style);
        assert!(!ui.button(rect, Color::WHITE));

        let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), input_at(15.0, 15.0, false), &style);
        assert!(!ui.button(rect, Color::WHITE));
        assert!(ui.wants_pointer());
    }

    #[test]
    fn one_click_reaches_one_widget() {
        let style = OverlayStyle::default();
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
        let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), input_at(5.0, 5.0, true), &style);

        assert!(ui.button(rect, Color::WHITE));
        assert!(!ui.button(rect, Color::WHITE));
    }

    #[test]
    fn click_taken_by_widget_is_not_outside() {
        let style = OverlayStyle::default();
        let mut list = DrawList::new();
        let popup = Rect::new(200.0, 200.0, 100.0, 100.0);
        let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), input_at(5.0, 5.0, true), &style);

        assert!(ui.clicked_outside(popup));
        ui.button(Rect::new(0.0, 0.0, 20.0, 20.0), Color::WHITE);
        assert!(!ui.clicked_outside(popup));
    }

    #[test]
    fn menu_buttons_advance_left_to_right() {
        let style = OverlayStyle::default();
        let mut list = DrawList::new();
        let x = style.padding + 80.0 + style.spacing + 5.0;
        let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), input_at(x, 10.0, true), &style);

        ui.begin_menu_bar();
        assert!(!ui.menu_button(80.0, Color::WHITE));
        assert!(ui.menu_button(80.0, Color::WHITE));
    }

    #[test]
    fn overlay_draws_on_overlay_layer_in_call_order() {
        let style = OverlayStyle::default();
        let mut list = DrawList::new();
        {
            let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), OverlayInput::default(), &style);
            ui.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
            ui.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        }

        let zs: Vec<_> = list.items().iter().map(|i| i.key.z).collect();
        assert_eq!(zs, [ZIndex::OVERLAY, ZIndex::OVERLAY.above(1)]);
    }
}
