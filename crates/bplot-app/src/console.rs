use bplot_engine::coords::Rect;
use bplot_engine::logging::{LogBuffer, LogEntry};
use bplot_engine::overlay::Overlay;
use bplot_engine::paint::Color;

const ROW_HEIGHT: f32 = 14.0;
const ROW_GAP: f32 = 2.0;
const BUTTON_WIDTH: f32 = 56.0;
const BUTTON_HEIGHT: f32 = 20.0;
/// Approximate glyph advance used to size a row's message bar.
const CHAR_WIDTH: f32 = 6.0;

/// Log console popup opened from the help entry of the menu bar.
///
/// Rows are drawn newest at the bottom; when the buffer holds more rows than
/// fit, the oldest visible rows scroll off the top.
pub struct LogConsole {
    buffer: LogBuffer,
    open: bool,
}

impl LogConsole {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu-bar button toggling the popup, then the popup itself.
    pub fn show(&mut self, ui: &mut Overlay<'_>) {
        if ui.menu_button(BUTTON_WIDTH, Color::from_straight(0.74, 0.58, 0.98, 1.0)) {
            self.open = !self.open;
            log::debug!("console {}", if self.open { "opened" } else { "closed" });
        }

        if self.open {
            self.popup(ui);
        }
    }

    fn popup(&mut self, ui: &mut Overlay<'_>) {
        let viewport = ui.viewport();
        let style_padding = ui.style().padding;
        let top = ui.style().bar_height;
        let panel = Rect::new(0.0, top, viewport.width, (viewport.height * 0.5).max(top + 1.0) - top);

        // Clicking anywhere else dismisses the popup.
        if ui.clicked_outside(panel) {
            self.open = false;
            return;
        }

        ui.panel(panel);

        let buttons_y = panel.origin.y + style_padding;
        let clear = Rect::new(style_padding, buttons_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let close = Rect::new(clear.right() + style_padding, buttons_y, BUTTON_WIDTH, BUTTON_HEIGHT);

        if ui.button(clear, Color::from_straight(0.93, 0.76, 0.33, 1.0)) {
            self.buffer.clear();
        }
        if ui.button(close, Color::from_straight(0.44, 0.37, 0.61, 1.0)) {
            self.open = false;
        }

        let rows = Rect::new(
            panel.origin.x + style_padding,
            clear.bottom() + style_padding,
            panel.size.x - 2.0 * style_padding,
            panel.bottom() - clear.bottom() - 2.0 * style_padding,
        );
        if rows.is_empty() {
            return;
        }

        let entries = self.buffer.snapshot();
        let layout = row_layout(rows, entries.len());

        ui.push_clip(rows);
        for (slot, entry) in entries[layout.first..].iter().enumerate() {
            let y = rows.origin.y + slot as f32 * (ROW_HEIGHT + ROW_GAP);
            draw_row(ui, Rect::new(rows.origin.x, y, rows.size.x, ROW_HEIGHT), entry);
        }
        ui.pop_clip();
    }
}

/// Which entries are visible when the list is pinned to the bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct RowLayout {
    first: usize,
    visible: usize,
}

fn row_layout(area: Rect, count: usize) -> RowLayout {
    let fit = ((area.size.y + ROW_GAP) / (ROW_HEIGHT + ROW_GAP)).floor().max(0.0) as usize;
    let visible = fit.min(count);
    RowLayout { first: count - visible, visible }
}

fn draw_row(ui: &mut Overlay<'_>, row: Rect, entry: &LogEntry) {
    let color = level_color(entry.level);
    ui.fill_rect(Rect::new(row.origin.x, row.origin.y, 4.0, row.size.y), color);

    let width = (entry.line().chars().count() as f32 * CHAR_WIDTH).min(row.size.x - 8.0);
    ui.fill_rect(Rect::new(row.origin.x + 8.0, row.origin.y + 3.0, width, row.size.y - 6.0), color.faded(0.6));
}

fn level_color(level: log::Level) -> Color {
    match level {
        log::Level::Error => Color::from_straight(0.91, 0.36, 0.36, 1.0),
        log::Level::Warn => Color::from_straight(0.93, 0.76, 0.33, 1.0),
        log::Level::Info => Color::from_straight(0.85, 0.85, 0.88, 1.0),
        log::Level::Debug => Color::from_straight(0.45, 0.70, 0.90, 1.0),
        log::Level::Trace => Color::from_straight(0.50, 0.50, 0.50, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use bplot_engine::coords::{Vec2, Viewport};
    use bplot_engine::overlay::{OverlayInput, OverlayStyle};
    use bplot_engine::scene::DrawList;

    use super::*;

    fn click_at(x: f32, y: f32) -> OverlayInput {
        OverlayInput { pointer: Some(Vec2::new(x, y)), pressed: false, clicked: true }
    }

    fn frame(console: &mut LogConsole, input: OverlayInput) -> usize {
        let style = OverlayStyle::default();
        let mut list = DrawList::new();
        let mut ui = Overlay::new(&mut list, Viewport::new(800.0, 600.0), input, &style);
        ui.begin_menu_bar();
        console.show(&mut ui);
        list.len()
    }

    /// Centre of the console's menu button, the first one in the bar.
    fn console_button() -> (f32, f32) {
        let style = OverlayStyle::default();
        (style.padding + BUTTON_WIDTH / 2.0, style.bar_height / 2.0)
    }

    #[test]
    fn layout_pins_newest_rows_to_the_bottom() {
        let area = Rect::new(0.0, 0.0, 100.0, 3.0 * ROW_HEIGHT + 2.0 * ROW_GAP);
        assert_eq!(row_layout(area, 10), RowLayout { first: 7, visible: 3 });
        assert_eq!(row_layout(area, 2), RowLayout { first: 0, visible: 2 });
    }

    #[test]
    fn menu_button_toggles_popup() {
        let mut console = LogConsole::new(LogBuffer::new(8));
        let (x, y) = console_button();

        frame(&mut console, click_at(x, y));
        assert!(console.is_open());

        frame(&mut console, click_at(x, y));
        assert!(!console.is_open());
    }

    #[test]
    fn clear_button_empties_the_buffer() {
        let buffer = LogBuffer::new(8);
        buffer.push(log::Level::Info, "hello");
        let mut console = LogConsole::new(buffer.clone());
        let (x, y) = console_button();
        frame(&mut console, click_at(x, y));

        let style = OverlayStyle::default();
        let clear_x = style.padding + BUTTON_WIDTH / 2.0;
        let clear_y = style.bar_height + style.padding + BUTTON_HEIGHT / 2.0;
        frame(&mut console, click_at(clear_x, clear_y));

        assert!(buffer.is_empty());
        assert!(console.is_open());
    }

    #[test]
    fn click_outside_closes_popup() {
        let mut console = LogConsole::new(LogBuffer::new(8));
        let (x, y) = console_button();
        frame(&mut console, click_at(x, y));

        frame(&mut console, click_at(400.0, 550.0));
        assert!(!console.is_open());
    }

    #[test]
    fn one_row_per_entry_while_open() {
        let buffer = LogBuffer::new(8);
        let mut console = LogConsole::new(buffer.clone());
        let (x, y) = console_button();
        let empty = frame(&mut console, click_at(x, y));

        buffer.push(log::Level::Warn, "one");
        buffer.push(log::Level::Error, "two");
        let idle = OverlayInput::default();
        let with_rows = frame(&mut console, idle);

        // Two rects per row: level swatch and message bar.
        assert_eq!(with_rows - empty, 4);
    }
}
