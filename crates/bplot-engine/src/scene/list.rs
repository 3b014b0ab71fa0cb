use crate::coords::Rect;
use crate::paint::Color;

use super::{DrawCmd, RectCmd, SortKey, ZIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels; `None` draws unclipped.
    pub clip_rect: Option<Rect>,
}

/// Draw commands for one frame.
///
/// Cleared and refilled every frame; allocations are kept between frames.
/// Clip regions nest: each [`push_clip`](Self::push_clip) is intersected with
/// the enclosing one.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted: Vec<usize>,
    sorted_dirty: bool,

    clip_stack: Vec<Rect>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted.clear();
        self.sorted_dirty = true;
        self.clip_stack.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items in recording order.
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
        self.sorted_dirty = true;
    }

    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Starts a clipped region. Must be balanced by [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap: a zero-area clip makes renderers skip the items.
            Some(parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip without matching push_clip");
        self.clip_stack.pop();
    }

    /// Items back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.sorted.clear();
            self.sorted.extend(0..self.items.len());
            let items = &self.items;
            self.sorted.sort_by_key(|&i| items[i].key);
            self.sorted_dirty = false;
        }
        self.sorted.iter().map(|&i| &self.items[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(r) => r.color.r,
            })
            .collect()
    }

    fn gray(v: f32) -> Color {
        Color::from_premul(v, v, v, 1.0)
    }

    #[test]
    fn equal_z_keeps_insertion_order() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        list.push_rect(ZIndex::SCENE, rect, gray(0.1));
        list.push_rect(ZIndex::SCENE, rect, gray(0.2));
        list.push_rect(ZIndex::SCENE, rect, gray(0.3));

        assert_eq!(colors(&mut list), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn higher_z_paints_last() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        list.push_rect(ZIndex::OVERLAY, rect, gray(0.9));
        list.push_rect(ZIndex::SCENE, rect, gray(0.1));

        assert_eq!(colors(&mut list), [0.1, 0.9]);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));
        list.push_rect(ZIndex::SCENE, Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        list.pop_clip();
        list.push_rect(ZIndex::SCENE, Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        list.pop_clip();
        list.push_rect(ZIndex::SCENE, Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);

        let clips: Vec<_> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(clips, [
            Some(Rect::new(50.0, 50.0, 50.0, 50.0)),
            Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
            None,
        ]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        list.push_rect(ZIndex::SCENE, Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        list.clear();
        list.push_rect(ZIndex::SCENE, Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].clip_rect, None);
        assert_eq!(list.items()[0].key.order, 0);
    }
}
