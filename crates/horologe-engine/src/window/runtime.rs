use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, EventCtx, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::translate::translate_window_event;
use crate::input::InputState;
use crate::time::TickSchedule;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub min_size: Option<LogicalSize<f64>>,
    /// Period of [`App::on_tick`](crate::core::App::on_tick). `None` disables ticking.
    pub tick_interval: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "horologe".to_string(),
            initial_size: LogicalSize::new(400.0, 440.0),
            min_size: Some(LogicalSize::new(160.0, 200.0)),
            tick_interval: Some(Duration::from_secs(1)),
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    /// Schedules a repaint of the window.
    pub fn request_redraw(&mut self) {
        if !self.commands.contains(&Command::RequestRedraw) {
            self.commands.push(Command::RequestRedraw);
        }
    }

    /// Ends the event loop once the current callback returns.
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    pub fn redraw_requested(&self) -> bool {
        self.commands.contains(&Command::RequestRedraw)
    }

    pub fn exit_requested(&self) -> bool {
        self.commands.contains(&Command::Exit)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    RequestRedraw,
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and runs `app` until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    fn viewport(&self) -> Viewport {
        self.with_window(|w| {
            let logical: LogicalSize<f64> = w.inner_size().to_logical(w.scale_factor());
            Viewport::new(logical.width as f32, logical.height as f32)
        })
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    schedule: Option<TickSchedule>,
    exit_requested: bool,
    /// Set when start-up failed inside the loop; returned from `Runtime::run`.
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            schedule: None,
            exit_requested: false,
            fatal: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);
        if let Some(min) = self.config.min_size {
            attrs = attrs.with_min_inner_size(min);
        }

        let window = event_loop.create_window(attrs).context("failed to create window")?;
        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()
    }

    /// Applies buffered commands and the callback's control value.
    fn apply(&mut self, event_loop: &ActiveEventLoop, ctx: RuntimeCtx, control: AppControl) {
        if control == AppControl::Exit {
            self.exit_requested = true;
        }
        for cmd in ctx.commands {
            match cmd {
                Command::RequestRedraw => {
                    if let Some(entry) = self.window.as_ref() {
                        entry.with_window(|w| w.request_redraw());
                    }
                }
                Command::Exit => self.exit_requested = true,
            }
        }
        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn dispatch_ticks(&mut self, event_loop: &ActiveEventLoop) {
        let Some(schedule) = self.schedule.as_mut() else { return };
        let ticks = schedule.poll(Instant::now());
        if ticks == 0 {
            return;
        }
        let Some(entry) = self.window.as_ref() else { return };

        let viewport = entry.viewport();
        let mut runtime = RuntimeCtx::default();
        let app = &mut self.app;
        let control = entry.with_input_state(|input| {
            let mut ctx = EventCtx { input, viewport, runtime: &mut runtime };
            app.on_tick(ticks, &mut ctx)
        });
        self.apply(event_loop, runtime, control);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::ResumeTimeReached { .. } | StartCause::WaitCancelled { .. }) {
            self.dispatch_ticks(event_loop);
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
                self.schedule =
                    self.config.tick_interval.map(|interval| TickSchedule::new(interval, Instant::now()));
                log::info!("window \"{}\" opened", self.config.title);
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.fatal = Some(e);
                self.exit_requested = true;
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        let flow = match self.schedule.as_ref() {
            Some(schedule) => ControlFlow::WaitUntil(schedule.next_deadline()),
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(flow);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        let Some(entry) = self.window.as_mut() else { return };

        // Input: translate, fold into state, forward accepted events.
        let viewport = entry.viewport();
        let mut runtime = RuntimeCtx::default();
        let mut control = AppControl::Continue;
        let app = &mut self.app;
        entry.with_mut(|fields| {
            let scale = fields.window.scale_factor();
            let Some(ev) = translate_window_event(scale, fields.input_state, &event) else {
                return;
            };
            if fields.input_state.apply_event(&ev) {
                let mut ctx = EventCtx { input: fields.input_state, viewport, runtime: &mut runtime };
                control = app.on_input(&ev, &mut ctx);
            }
        });
        self.apply(event_loop, runtime, control);
        if self.exit_requested {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.window = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(entry) = self.window.as_mut() else { return };
                let mut runtime = RuntimeCtx::default();
                let app = &mut self.app;
                let control = entry.with_mut(|fields| {
                    let mut ctx = FrameCtx {
                        window: WindowCtx { window: fields.window },
                        gpu: fields.gpu,
                        input: fields.input_state,
                        runtime: &mut runtime,
                    };
                    app.on_frame(&mut ctx)
                });
                self.apply(event_loop, runtime, control);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_requests_coalesce() {
        let mut ctx = RuntimeCtx::default();
        ctx.request_redraw();
        ctx.request_redraw();
        assert_eq!(ctx.commands, vec![Command::RequestRedraw]);
        assert!(ctx.redraw_requested());
        assert!(!ctx.exit_requested());
    }

    #[test]
    fn exit_is_recorded() {
        let mut ctx = RuntimeCtx::default();
        ctx.exit();
        assert!(ctx.exit_requested());
    }

    #[test]
    fn default_config_ticks_every_second() {
        assert_eq!(RuntimeConfig::default().tick_interval, Some(Duration::from_secs(1)));
    }
}
