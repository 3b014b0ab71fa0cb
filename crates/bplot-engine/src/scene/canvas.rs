use crate::coords::{Rect, Viewport};
use crate::paint::Color;

use super::{DrawList, ZIndex};

/// Scene-layer view of a [`DrawList`] handed to application states.
///
/// Everything recorded through a canvas lands on one z layer, so paint order
/// is call order.
pub struct Canvas<'a> {
    list: &'a mut DrawList,
    viewport: Viewport,
    z: ZIndex,
}

impl<'a> Canvas<'a> {
    pub fn new(list: &'a mut DrawList, viewport: Viewport) -> Self {
        Self::with_layer(list, viewport, ZIndex::SCENE)
    }

    pub fn with_layer(list: &'a mut DrawList, viewport: Viewport, z: ZIndex) -> Self {
        Self { list, viewport, z }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.list.push_rect(self.z, rect, color);
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.list.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_on_its_layer() {
        let mut list = DrawList::new();
        {
            let mut canvas = Canvas::with_layer(&mut list, Viewport::new(10.0, 10.0), ZIndex::new(3));
            canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        }
        assert_eq!(list.items()[0].key.z, ZIndex::new(3));
    }
}
