use crate::paint::Color;

/// Overlay palette and metrics.
///
/// Defaults are a dark violet theme: near-black panels, muted purple borders.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub bar_height: f32,
    pub padding: f32,
    pub spacing: f32,

    pub bar_color: Color,
    pub panel_color: Color,
    pub border_color: Color,

    pub button: Color,
    pub button_hovered: Color,
    pub button_active: Color,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            bar_height: 28.0,
            padding: 6.0,
            spacing: 4.0,

            bar_color: Color::from_straight(0.16, 0.16, 0.21, 1.0),
            panel_color: Color::from_straight(0.10, 0.10, 0.13, 0.92),
            border_color: Color::from_straight(0.44, 0.37, 0.61, 0.29),

            button: Color::from_straight(0.13, 0.13, 0.17, 1.0),
            button_hovered: Color::from_straight(0.19, 0.20, 0.25, 1.0),
            button_active: Color::from_straight(0.16, 0.16, 0.21, 1.0),
        }
    }
}
