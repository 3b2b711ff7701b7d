use std::time::Duration;

use anyhow::Result;
use winit::dpi::LogicalSize;

use horologe_clock::{
    ClockController, ClockEvents, ClockKey, ClockStyle, FaceGeometry, PointerButton, TimeState,
};
use horologe_engine::coords::{Vec2, Viewport};
use horologe_engine::core::{App as EngineApp, AppControl, EventCtx, FrameCtx};
use horologe_engine::device::GpuInit;
use horologe_engine::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
use horologe_engine::render::SceneRenderer;
use horologe_engine::scene::{DrawList, ZIndex};
use horologe_engine::text::{FontId, FontSystem};
use horologe_engine::window::{Runtime, RuntimeConfig, RuntimeCtx};

use crate::dialog::MessageBox;
use crate::menu::{MenuAction, MenuBar, MenuHit, MenuLayout};
use crate::painter::{rgb_to_color, Painter, TextMetrics};
use crate::theme::ChromeTheme;

/// Space kept between the face outline and the window edges.
const FACE_MARGIN: f32 = 12.0;

/// Reads the local wall clock.
fn wall_clock() -> TimeState {
    TimeState::from_wall_clock(&chrono::Local::now())
}

fn clock_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

fn clock_key(key: Key) -> ClockKey {
    match key {
        Key::Plus => ClockKey::Plus,
        _ => ClockKey::Other,
    }
}

/// Largest face that fits below the menu bar.
fn face_for(viewport: Viewport, theme: &ChromeTheme) -> FaceGeometry {
    FaceGeometry::fit(
        0.0,
        theme.bar_height,
        viewport.width,
        (viewport.height - theme.bar_height).max(0.0),
        FACE_MARGIN,
    )
}

// ── Application ───────────────────────────────────────────────────────────

/// Clock window builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Horologe")
///     .font(load_font())
///     .run()?;
/// ```
pub struct Application {
    title:         String,
    width:         f64,
    height:        f64,
    font:          Option<Vec<u8>>,
    style:         ClockStyle,
    theme:         ChromeTheme,
    tick_interval: Duration,
    gpu:           GpuInit,
}

impl Application {
    pub fn new() -> Self {
        let defaults = RuntimeConfig::default();
        Self {
            title:         "Horologe".to_string(),
            width:         defaults.initial_size.width,
            height:        defaults.initial_size.height,
            font:          None,
            style:         ClockStyle::default(),
            theme:         ChromeTheme::default(),
            tick_interval: Duration::from_secs(1),
            gpu:           GpuInit::default(),
        }
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Font used for menu and dialog text. Without one, text is not drawn.
    pub fn font(mut self, data: Option<Vec<u8>>) -> Self {
        self.font = data;
        self
    }

    /// Opens the window and runs until it is closed or "Exit" is chosen.
    pub fn run(self) -> Result<()> {
        let config = RuntimeConfig {
            title:         self.title.clone(),
            initial_size:  LogicalSize::new(self.width, self.height),
            tick_interval: Some(self.tick_interval),
            ..RuntimeConfig::default()
        };
        let gpu = self.gpu.clone();
        let state = ClockApp::new(self, wall_clock());
        log::info!("starting at {}", state.clock.time());
        Runtime::run(config, gpu, state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── ClockApp ──────────────────────────────────────────────────────────────

/// Engine-facing state: the clock plus its window chrome.
struct ClockApp {
    clock:    ClockController,
    menu:     MenuBar,
    dialog:   Option<MessageBox>,
    theme:    ChromeTheme,

    fonts:     FontSystem,
    font:      Option<FontId>,
    draw_list: DrawList,
    renderer:  SceneRenderer,
}

impl ClockApp {
    fn new(app: Application, start: TimeState) -> Self {
        let mut fonts = FontSystem::new();
        let font = match app.font.as_deref() {
            Some(bytes) => match fonts.load_font(bytes) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("failed to load font: {e}");
                    None
                }
            },
            None => {
                log::warn!("no font available; menu labels will not be drawn");
                None
            }
        };

        let viewport = Viewport::new(app.width as f32, app.height as f32);
        Self {
            clock:     ClockController::with_style(start, face_for(viewport, &app.theme), app.style),
            menu:      MenuBar::standard(),
            dialog:    None,
            theme:     app.theme,
            fonts,
            font,
            draw_list: DrawList::new(),
            renderer:  SceneRenderer::new(),
        }
    }

    fn metrics(&self) -> TextMetrics<'_> {
        TextMetrics { fonts: &self.fonts, font: self.font, size: self.theme.font_size }
    }

    fn menu_layout(&self, viewport: Viewport) -> MenuLayout {
        let metrics = self.metrics();
        self.menu.layout(viewport.width, &self.theme, |s| metrics.width(s))
    }

    fn run_action(&mut self, action: MenuAction, runtime: &mut RuntimeCtx) {
        log::debug!("menu action: {action:?}");
        match action {
            MenuAction::SyncToSystemTime => {
                self.clock.sync_to(wall_clock());
            }
            MenuAction::Exit => runtime.exit(),
            MenuAction::ShowControls => self.dialog = Some(MessageBox::controls()),
            MenuAction::ShowAbout => self.dialog = Some(MessageBox::about()),
        }
    }

    /// Returns `true` when the screen needs repainting.
    fn on_key(&mut self, key: Key, shift: bool) -> bool {
        if let Some(dialog) = &self.dialog {
            if dialog.on_key(key) {
                self.dialog = None;
                return true;
            }
            return false;
        }
        if key == Key::Escape && self.menu.close() {
            return true;
        }
        self.clock.on_key_down(clock_key(key), shift)
    }

    fn on_release(&mut self, button: MouseButton, pos: Vec2, viewport: Viewport, runtime: &mut RuntimeCtx) -> bool {
        if let Some(dialog) = &self.dialog {
            let metrics = self.metrics();
            let layout = dialog.layout(viewport, &self.theme, |s| metrics.width(s), metrics.line_height());
            if dialog.on_mouse_up(&layout, pos) {
                self.dialog = None;
                return true;
            }
            return false;
        }

        if button == MouseButton::Left {
            let layout = self.menu_layout(viewport);
            match self.menu.hit(&layout, pos) {
                MenuHit::Title(i) => {
                    self.menu.toggle(i);
                    return true;
                }
                MenuHit::Item(action) => {
                    self.menu.close();
                    self.run_action(action, runtime);
                    return true;
                }
                MenuHit::Bar => return false,
                MenuHit::Outside => {}
            }
        }
        // a click anywhere else only dismisses an open drop-down
        if self.menu.close() {
            return true;
        }
        if pos.y < self.theme.bar_height {
            return false;
        }

        self.clock.set_face(face_for(viewport, &self.theme));
        self.clock.on_mouse_up(clock_button(button), pos.x as f64, pos.y as f64)
    }
}

impl EngineApp for ClockApp {
    fn on_tick(&mut self, ticks: u32, ctx: &mut EventCtx<'_>) -> AppControl {
        if self.clock.on_tick(ticks) {
            ctx.runtime.request_redraw();
        }
        AppControl::Continue
    }

    fn on_input(&mut self, event: &InputEvent, ctx: &mut EventCtx<'_>) -> AppControl {
        let dirty = match *event {
            InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                self.on_key(key, modifiers.shift)
            }
            InputEvent::PointerButton(ev) if ev.state == MouseButtonState::Released => {
                self.on_release(ev.button, Vec2::new(ev.x, ev.y), ctx.viewport, ctx.runtime)
            }
            InputEvent::PointerMoved(ev) if self.menu.is_open() => {
                let layout = self.menu_layout(ctx.viewport);
                self.menu.set_hover(&layout, Vec2::new(ev.x, ev.y))
            }
            _ => false,
        };
        if dirty {
            ctx.runtime.request_redraw();
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        if !viewport.is_valid() {
            return AppControl::Continue;
        }
        self.clock.set_face(face_for(viewport, &self.theme));
        let menu_layout = self.menu_layout(viewport);

        self.draw_list.clear();
        {
            let metrics = TextMetrics { fonts: &self.fonts, font: self.font, size: self.theme.font_size };
            let mut painter = Painter::new(&mut self.draw_list, metrics, ZIndex::FACE);
            self.clock.redraw(&mut painter);

            painter.set_layer(ZIndex::CHROME);
            self.menu.paint(&mut painter, &menu_layout, &self.theme);

            if let Some(dialog) = &self.dialog {
                painter.set_layer(ZIndex::MODAL);
                dialog.paint(&mut painter, viewport, &self.theme);
            }
        }

        let clear = rgb_to_color(self.clock.view().style().background);
        let renderer = &mut self.renderer;
        let draw_list = &mut self.draw_list;
        let fonts = &self.fonts;
        ctx.render(clear, |rctx, target| {
            renderer.render(rctx, target, draw_list, fonts);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horologe_engine::input::{InputState, Modifiers};

    fn app() -> ClockApp {
        ClockApp::new(Application::new(), TimeState::new(7, 25, 40))
    }

    fn viewport() -> Viewport {
        Viewport::new(400.0, 440.0)
    }

    // ── face placement ────────────────────────────────────────────────────

    #[test]
    fn face_sits_below_menu_bar() {
        let theme = ChromeTheme::default();
        let face = face_for(viewport(), &theme);
        // area 400 x 416 starting at y=24
        assert_eq!(face.center.x, 200);
        assert_eq!(face.center.y, 232);
        assert_eq!(face.radius, 188);
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn plus_reaches_the_clock() {
        let mut a = app();
        assert!(a.on_key(Key::Plus, false));
        assert_eq!(a.clock.time(), TimeState::new(7, 26, 40));
        assert!(a.on_key(Key::Plus, true));
        assert_eq!(a.clock.time(), TimeState::new(8, 26, 40));
    }

    #[test]
    fn dialog_swallows_clock_keys() {
        let mut a = app();
        a.dialog = Some(MessageBox::about());
        assert!(!a.on_key(Key::Plus, false));
        assert_eq!(a.clock.time(), TimeState::new(7, 25, 40));
        assert!(a.on_key(Key::Escape, false));
        assert!(a.dialog.is_none());
    }

    #[test]
    fn escape_closes_open_menu() {
        let mut a = app();
        a.menu.toggle(0);
        assert!(a.on_key(Key::Escape, false));
        assert!(!a.menu.is_open());
        assert!(!a.on_key(Key::Escape, false));
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn click_on_face_sets_hour() {
        let mut a = app();
        let mut rt = RuntimeCtx::default();
        // right of center (200, 232) → 3 o'clock
        assert!(a.on_release(MouseButton::Left, Vec2::new(350.0, 232.0), viewport(), &mut rt));
        assert_eq!(a.clock.time(), TimeState::new(3, 25, 40));
    }

    #[test]
    fn click_on_menu_title_opens_menu_without_touching_clock() {
        let mut a = app();
        let mut rt = RuntimeCtx::default();
        assert!(a.on_release(MouseButton::Left, Vec2::new(4.0, 4.0), viewport(), &mut rt));
        assert_eq!(a.menu.open_menu(), Some(0));
        assert_eq!(a.clock.time(), TimeState::new(7, 25, 40));
    }

    #[test]
    fn click_outside_open_menu_only_closes_it() {
        let mut a = app();
        let mut rt = RuntimeCtx::default();
        a.menu.toggle(1);
        assert!(a.on_release(MouseButton::Left, Vec2::new(350.0, 232.0), viewport(), &mut rt));
        assert!(!a.menu.is_open());
        assert_eq!(a.clock.time(), TimeState::new(7, 25, 40));
    }

    #[test]
    fn exit_item_requests_exit() {
        let mut a = app();
        let mut rt = RuntimeCtx::default();
        a.menu.toggle(0);
        let layout = a.menu_layout(viewport());
        let (_, rows) = layout.dropdown.expect("menu is open");
        assert!(a.on_release(MouseButton::Left, rows[1].center(), viewport(), &mut rt));
        assert!(rt.exit_requested());
        assert!(!a.menu.is_open());
    }

    #[test]
    fn about_item_opens_dialog_and_ok_closes_it() {
        let mut a = app();
        let mut rt = RuntimeCtx::default();
        a.menu.toggle(1);
        let layout = a.menu_layout(viewport());
        let (_, rows) = layout.dropdown.expect("menu is open");
        a.on_release(MouseButton::Left, rows[1].center(), viewport(), &mut rt);
        assert_eq!(a.dialog, Some(MessageBox::about()));

        let metrics = a.metrics();
        let dialog = MessageBox::about();
        let l = dialog.layout(viewport(), &a.theme, |s| metrics.width(s), metrics.line_height());
        assert!(a.on_release(MouseButton::Left, l.ok_button.center(), viewport(), &mut rt));
        assert!(a.dialog.is_none());
    }

    #[test]
    fn face_clicks_ignored_while_dialog_open() {
        let mut a = app();
        let mut rt = RuntimeCtx::default();
        a.dialog = Some(MessageBox::controls());
        assert!(!a.on_release(MouseButton::Left, Vec2::new(350.0, 232.0), viewport(), &mut rt));
        assert_eq!(a.clock.time(), TimeState::new(7, 25, 40));
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn ticks_advance_even_with_dialog_open() {
        let mut a = app();
        a.dialog = Some(MessageBox::about());
        let input = InputState::default();
        let mut rt = RuntimeCtx::default();
        let mut ctx = EventCtx { input: &input, viewport: viewport(), runtime: &mut rt };
        assert_eq!(a.on_tick(2, &mut ctx), AppControl::Continue);
        assert_eq!(a.clock.time(), TimeState::new(7, 25, 42));
        assert!(rt.redraw_requested());
    }

    #[test]
    fn plus_key_event_requests_redraw() {
        let mut a = app();
        let input = InputState::default();
        let mut rt = RuntimeCtx::default();
        let mut ctx = EventCtx { input: &input, viewport: viewport(), runtime: &mut rt };
        let ev = InputEvent::Key {
            key: Key::Plus,
            state: KeyState::Pressed,
            modifiers: Modifiers { shift: true, ..Modifiers::default() },
            repeat: false,
        };
        a.on_input(&ev, &mut ctx);
        assert_eq!(a.clock.time(), TimeState::new(8, 25, 40));
        assert!(rt.redraw_requested());
    }

    #[test]
    fn button_mapping() {
        assert_eq!(clock_button(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(clock_button(MouseButton::Back), PointerButton::Other);
        assert_eq!(clock_key(Key::Escape), ClockKey::Other);
    }
}
