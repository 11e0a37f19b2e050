use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window, WindowLevel};

use dockbar::cli::StartupConfig;
use dockbar::commands::{Cmd, CursorAffordance};
use dockbar::messages::{HoverMsg, Msg, PointerMsg};
use dockbar::model::{PanelModel, Point, ScreenMetrics};
use dockbar::queue::EventQueue;
use dockbar::update::update;
use dockbar::view::{paint_panel, Frame};

use super::input::{key_action, leave_msg, mouse_button_msg, to_global, KeyAction};

/// Tick interval while any track is running (~60 Hz)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    startup: StartupConfig,
    /// Created once the monitor size is known
    model: Option<PanelModel>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    queue: EventQueue,
    last_tick: Instant,
    /// Last cursor position reported by the window, window-local
    cursor_local: Option<PhysicalPosition<f64>>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            startup,
            model: None,
            window: None,
            context: None,
            surface: None,
            queue: EventQueue::new(),
            last_tick: Instant::now(),
            cursor_local: None,
            msg_tx,
            msg_rx,
        }
    }

    /// Screen size from the command line, else the primary monitor
    fn detect_screen(&self, event_loop: &ActiveEventLoop) -> Result<ScreenMetrics> {
        if let Some(screen) = self.startup.screen {
            return Ok(screen);
        }
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .ok_or_else(|| anyhow!("No monitor available; pass --screen WxH"))?;
        let size = monitor.size();
        Ok(ScreenMetrics::new(size.width as i64, size.height as i64)?)
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let screen = self.detect_screen(event_loop)?;
        let model = PanelModel::new(screen, &self.startup.panel)?;
        let geometry = model.geometry;

        let window_attributes = Window::default_attributes()
            .with_title("dockbar")
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_inner_size(PhysicalSize::new(
                geometry.size.width as u32,
                geometry.size.height as u32,
            ))
            .with_position(PhysicalPosition::new(
                geometry.position.x,
                geometry.position.y,
            ));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        window.set_cursor(CursorIcon::Grab);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create softbuffer context: {}", e))?;
        let surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        self.model = Some(model);
        self.window = Some(window);
        self.context = Some(context);
        self.surface = Some(surface);
        Ok(())
    }

    /// Global position of the window's top-left corner
    ///
    /// Falls back to the model position where the platform cannot report it.
    fn window_origin(&self) -> Point {
        let fallback = self
            .model
            .as_ref()
            .map(|m| m.geometry.position)
            .unwrap_or_default();
        self.window
            .as_ref()
            .and_then(|w| w.inner_position().ok())
            .map(|p| Point::new(p.x, p.y))
            .unwrap_or(fallback)
    }

    fn render(&mut self) -> Result<()> {
        let (Some(window), Some(surface), Some(model)) =
            (&self.window, self.surface.as_mut(), &self.model)
        else {
            return Ok(());
        };

        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        surface
            .resize(width, height)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;
        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;

        let mut frame = Frame::new(&mut buffer[..], width.get() as usize, height.get() as usize);
        paint_panel(&mut frame, &model.frame());

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }

    fn process_cmd(&self, cmd: Cmd) {
        let Some(window) = &self.window else {
            return;
        };
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::SyncWindow { geometry } => {
                window.set_outer_position(PhysicalPosition::new(
                    geometry.position.x,
                    geometry.position.y,
                ));
                let _ = window.request_inner_size(PhysicalSize::new(
                    geometry.size.width as u32,
                    geometry.size.height as u32,
                ));
            }
            Cmd::SetCursor(affordance) => {
                let icon = match affordance {
                    CursorAffordance::Open => CursorIcon::Grab,
                    CursorAffordance::Grabbing => CursorIcon::Grabbing,
                };
                window.set_cursor(icon);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Run every queued message through `update`; returns true if a redraw is needed
    fn process_queue(&mut self) -> bool {
        let Some(model) = self.model.as_mut() else {
            return false;
        };

        let mut cmds = Vec::new();
        while let Some(msg) = self.queue.pop() {
            match update(model, msg) {
                Ok(Some(cmd)) => cmds.push(cmd),
                Ok(None) => {}
                Err(e) => tracing::warn!(code = e.code(), "Dropped {}: {}", msg.kind(), e),
            }
        }

        let mut needs_redraw = false;
        for cmd in cmds {
            needs_redraw |= cmd.needs_redraw();
            self.process_cmd(cmd);
        }
        needs_redraw
    }

    fn send(&self, msg: Msg) {
        // The receiver lives in `self`, so this cannot fail while the app runs
        let _ = self.msg_tx.send(msg);
    }

    #[cfg(debug_assertions)]
    fn dump_state(&self) {
        let Some(model) = &self.model else {
            return;
        };
        let dump = crate::debug_dump::StateDump::from_model(model);
        match dump.save_to_file() {
            Ok(path) => tracing::info!("State dumped to {}", path),
            Err(e) => tracing::warn!("Failed to write state dump: {}", e),
        }
    }

    fn handle_key(&self, event_loop: &ActiveEventLoop, action: KeyAction) {
        match action {
            KeyAction::Quit => event_loop.exit(),
            KeyAction::DumpState => {
                #[cfg(debug_assertions)]
                self.dump_state();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to start: {:#}", e);
            event_loop.exit();
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::warn!("Render error: {:#}", e);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_local = Some(position);
                let pos = to_global(self.window_origin(), position);
                self.send(Msg::Pointer(PointerMsg::Move { pos }));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(local) = self.cursor_local else {
                    return;
                };
                let pos = to_global(self.window_origin(), local);
                if let Some(msg) = mouse_button_msg(state, button, pos) {
                    self.send(msg);
                }
            }
            WindowEvent::CursorEntered { .. } => self.send(Msg::Hover(HoverMsg::Enter)),
            WindowEvent::CursorLeft { .. } => {
                self.send(leave_msg(self.window_origin(), self.cursor_local));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(action) = key_action(event.physical_key, event.state) {
                    self.handle_key(event_loop, action);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.queue.drain_channel(&self.msg_rx);

        let now = Instant::now();
        let animating = self.model.as_ref().is_some_and(|m| m.is_animating());
        if animating {
            self.queue.push(Msg::Tick(now.duration_since(self.last_tick)));
        }
        self.last_tick = now;

        if self.process_queue() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        let still_animating = self.model.as_ref().is_some_and(|m| m.is_animating());
        if still_animating {
            event_loop.set_control_flow(ControlFlow::WaitUntil(now + FRAME_INTERVAL));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}
