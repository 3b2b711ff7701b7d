use super::{DrawCmd, SortKey, ZIndex};

/// A recorded command with its sort key.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Draw stream for one frame.
///
/// `push` is O(1). Paint-order iteration sorts an index buffer that is kept
/// across frames, so a warmed-up list does not allocate.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded items, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.sorted.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Items back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted();
        }
        self.sorted.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted(&mut self) {
        self.sorted.clear();
        self.sorted.extend(0..self.items.len());
        let items = &self.items;
        self.sorted.sort_by_key(|&i| items[i].key);
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    fn rect_at(x: f32) -> DrawCmd {
        DrawCmd::Rect(crate::scene::shapes::rect::RectCmd::solid(
            Rect::new(x, 0.0, 1.0, 1.0),
            Color::rgb_u8(0, 0, 0),
        ))
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(r) => r.rect.origin.x,
                _ => f32::NAN,
            })
            .collect()
    }

    #[test]
    fn same_layer_keeps_insertion_order() {
        let mut list = DrawList::new();
        list.push(ZIndex::FACE, rect_at(1.0));
        list.push(ZIndex::FACE, rect_at(2.0));
        list.push(ZIndex::FACE, rect_at(3.0));
        assert_eq!(xs(&mut list), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn higher_layer_paints_later() {
        let mut list = DrawList::new();
        list.push(ZIndex::MODAL, rect_at(1.0));
        list.push(ZIndex::FACE, rect_at(2.0));
        list.push(ZIndex::CHROME, rect_at(3.0));
        assert_eq!(xs(&mut list), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push(ZIndex::FACE, rect_at(1.0));
        list.clear();
        assert!(list.is_empty());
        list.push(ZIndex::FACE, rect_at(4.0));
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(xs(&mut list), vec![4.0]);
    }

    #[test]
    fn push_helpers_record_expected_variants() {
        let mut list = DrawList::new();
        list.push_line(ZIndex::FACE, Vec2::zero(), Vec2::new(5.0, 5.0), 2.0, Color::rgb_u8(1, 2, 3));
        list.push_circle(ZIndex::FACE, Vec2::new(5.0, 5.0), 3.0, Color::rgb_u8(1, 2, 3), None);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Line(_)));
        assert!(matches!(list.items()[1].cmd, DrawCmd::Ellipse(_)));
        assert!(!list.items()[1].cmd.is_text());
    }
}
