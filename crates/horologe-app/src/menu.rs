use horologe_engine::coords::{Rect, Vec2};
use horologe_engine::scene::Border;

use crate::painter::Painter;
use crate::theme::ChromeTheme;

/// Commands reachable from the menu bar.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuAction {
    SyncToSystemTime,
    Exit,
    ShowControls,
    ShowAbout,
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), items: Vec::new() }
    }

    pub fn item(mut self, label: impl Into<String>, action: MenuAction) -> Self {
        self.items.push(MenuItem { label: label.into(), action });
        self
    }
}

/// Result of hit-testing a pointer release against the bar.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuHit {
    /// Title of the menu at this index.
    Title(usize),
    Item(MenuAction),
    /// Empty part of the bar, or a drop-down's padding.
    Bar,
    Outside,
}

/// Laid-out rectangles for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuLayout {
    pub bar: Rect,
    pub titles: Vec<Rect>,
    /// Open drop-down panel and its item rows.
    pub dropdown: Option<(Rect, Vec<Rect>)>,
}

/// Horizontal menu bar with at most one open drop-down.
#[derive(Debug, Clone)]
pub struct MenuBar {
    menus: Vec<Menu>,
    open: Option<usize>,
    hover: Option<usize>,
}

impl MenuBar {
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus, open: None, hover: None }
    }

    /// *Clock* and *Help* menus.
    pub fn standard() -> Self {
        Self::new(vec![
            Menu::new("Clock")
                .item("Sync to system time", MenuAction::SyncToSystemTime)
                .item("Exit", MenuAction::Exit),
            Menu::new("Help")
                .item("Controls", MenuAction::ShowControls)
                .item("About", MenuAction::ShowAbout),
        ])
    }

    #[inline]
    pub fn open_menu(&self) -> Option<usize> {
        self.open
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Opens menu `index`, or closes it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.menus.len() {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
        self.hover = None;
    }

    pub fn close(&mut self) -> bool {
        self.hover = None;
        self.open.take().is_some()
    }

    /// Updates the highlighted drop-down row. Returns `true` if it changed.
    pub fn set_hover(&mut self, layout: &MenuLayout, pos: Vec2) -> bool {
        let hover = layout
            .dropdown
            .as_ref()
            .and_then(|(_, rows)| rows.iter().position(|r| r.contains(pos)));
        let changed = hover != self.hover;
        self.hover = hover;
        changed
    }

    pub fn layout(&self, width: f32, theme: &ChromeTheme, measure: impl Fn(&str) -> f32) -> MenuLayout {
        let bar = Rect::new(0.0, 0.0, width, theme.bar_height);

        let mut x = 0.0;
        let titles: Vec<Rect> = self
            .menus
            .iter()
            .map(|m| {
                let w = measure(&m.title) + theme.padding * 2.0;
                let r = Rect::new(x, 0.0, w, theme.bar_height);
                x += w;
                r
            })
            .collect();

        let dropdown = self.open.and_then(|i| {
            let menu = self.menus.get(i)?;
            let anchor = titles.get(i)?;
            let widest = menu
                .items
                .iter()
                .map(|it| measure(&it.label))
                .fold(0.0f32, f32::max);
            let w = (widest + theme.padding * 2.0).max(anchor.size.x);
            let top = theme.bar_height;

            let rows: Vec<Rect> = (0..menu.items.len())
                .map(|n| Rect::new(anchor.origin.x, top + n as f32 * theme.item_height, w, theme.item_height))
                .collect();
            let panel = Rect::new(anchor.origin.x, top, w, rows.len() as f32 * theme.item_height);
            Some((panel, rows))
        });

        MenuLayout { bar, titles, dropdown }
    }

    pub fn hit(&self, layout: &MenuLayout, pos: Vec2) -> MenuHit {
        if let Some(i) = layout.titles.iter().position(|r| r.contains(pos)) {
            return MenuHit::Title(i);
        }
        if let (Some(open), Some((panel, rows))) = (self.open, layout.dropdown.as_ref()) {
            if let Some(row) = rows.iter().position(|r| r.contains(pos)) {
                if let Some(item) = self.menus.get(open).and_then(|m| m.items.get(row)) {
                    return MenuHit::Item(item.action);
                }
            }
            if panel.contains(pos) {
                return MenuHit::Bar;
            }
        }
        if layout.bar.contains(pos) {
            return MenuHit::Bar;
        }
        MenuHit::Outside
    }

    pub fn paint(&self, painter: &mut Painter<'_>, layout: &MenuLayout, theme: &ChromeTheme) {
        painter.fill_rect(layout.bar, theme.bar_bg);

        for (i, (menu, rect)) in self.menus.iter().zip(&layout.titles).enumerate() {
            if self.open == Some(i) {
                painter.fill_rect(*rect, theme.highlight);
            }
            painter.text_in(rect.inset(theme.padding, 0.0), &menu.title, theme.bar_fg);
        }

        let Some((open, (panel, rows))) = self.open.zip(layout.dropdown.as_ref()) else {
            return;
        };
        let Some(menu) = self.menus.get(open) else { return };

        painter.panel(*panel, 0.0, theme.dropdown_bg, Some(Border::new(1.0, theme.border)));
        for (n, (item, row)) in menu.items.iter().zip(rows).enumerate() {
            if self.hover == Some(n) {
                painter.fill_rect(*row, theme.highlight);
            }
            painter.text_in(row.inset(theme.padding, 0.0), &item.label, theme.bar_fg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10 px per character.
    fn measure(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    fn theme() -> ChromeTheme {
        ChromeTheme::default()
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn titles_are_laid_out_left_to_right() {
        let bar = MenuBar::standard();
        let l = bar.layout(400.0, &theme(), measure);
        // "Clock" = 50 + 2 * 10 padding
        assert_eq!(l.titles[0], Rect::new(0.0, 0.0, 70.0, 24.0));
        assert_eq!(l.titles[1], Rect::new(70.0, 0.0, 60.0, 24.0));
        assert!(l.dropdown.is_none());
    }

    #[test]
    fn dropdown_sits_below_its_title() {
        let mut bar = MenuBar::standard();
        bar.toggle(1);
        let l = bar.layout(400.0, &theme(), measure);
        let (panel, rows) = l.dropdown.expect("open menu has a dropdown");
        assert_eq!(panel.origin, Vec2::new(70.0, 24.0));
        // "Controls" = 80 + 20
        assert_eq!(panel.size, Vec2::new(100.0, 48.0));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].origin.y, 48.0);
    }

    // ── toggle / close ────────────────────────────────────────────────────

    #[test]
    fn toggle_opens_and_closes() {
        let mut bar = MenuBar::standard();
        bar.toggle(0);
        assert_eq!(bar.open_menu(), Some(0));
        bar.toggle(1);
        assert_eq!(bar.open_menu(), Some(1));
        bar.toggle(1);
        assert!(!bar.is_open());
    }

    #[test]
    fn toggle_out_of_range_ignored() {
        let mut bar = MenuBar::standard();
        bar.toggle(7);
        assert!(!bar.is_open());
    }

    #[test]
    fn close_reports_whether_anything_was_open() {
        let mut bar = MenuBar::standard();
        assert!(!bar.close());
        bar.toggle(0);
        assert!(bar.close());
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn hit_title_and_bar() {
        let bar = MenuBar::standard();
        let l = bar.layout(400.0, &theme(), measure);
        assert_eq!(bar.hit(&l, Vec2::new(5.0, 5.0)), MenuHit::Title(0));
        assert_eq!(bar.hit(&l, Vec2::new(75.0, 5.0)), MenuHit::Title(1));
        assert_eq!(bar.hit(&l, Vec2::new(300.0, 5.0)), MenuHit::Bar);
        assert_eq!(bar.hit(&l, Vec2::new(300.0, 200.0)), MenuHit::Outside);
    }

    #[test]
    fn hit_item_in_open_dropdown() {
        let mut bar = MenuBar::standard();
        bar.toggle(0);
        let l = bar.layout(400.0, &theme(), measure);
        assert_eq!(bar.hit(&l, Vec2::new(10.0, 30.0)), MenuHit::Item(MenuAction::SyncToSystemTime));
        assert_eq!(bar.hit(&l, Vec2::new(10.0, 55.0)), MenuHit::Item(MenuAction::Exit));
        assert_eq!(bar.hit(&l, Vec2::new(10.0, 80.0)), MenuHit::Outside);
    }

    #[test]
    fn closed_menu_items_are_not_hit() {
        let bar = MenuBar::standard();
        let l = bar.layout(400.0, &theme(), measure);
        assert_eq!(bar.hit(&l, Vec2::new(10.0, 30.0)), MenuHit::Outside);
    }

    // ── hover ─────────────────────────────────────────────────────────────

    #[test]
    fn hover_tracks_rows() {
        let mut bar = MenuBar::standard();
        bar.toggle(0);
        let l = bar.layout(400.0, &theme(), measure);
        assert!(bar.set_hover(&l, Vec2::new(10.0, 30.0)));
        assert!(!bar.set_hover(&l, Vec2::new(12.0, 31.0)));
        assert!(bar.set_hover(&l, Vec2::new(300.0, 300.0)));
    }
}
