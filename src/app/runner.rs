//! The windowing shell: window lifetime and the event pump.
//!
//! `Shell` drives winit's `ApplicationHandler` under `ControlFlow::Poll`.
//! winit drains the OS queue and calls `window_event` once per message;
//! `about_to_wait` fires only when the queue is momentarily empty, which is
//! where the single game tick per idle cycle happens. Event dispatch
//! therefore always has priority over simulation, and under heavy message
//! traffic the simulation can starve, by design.

use std::sync::Arc;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::device::{DeviceConfig, DeviceDesc};
use crate::game::GameSystem;

use super::config::AppConfig;
use super::error::ShellError;
use super::window::{self, DisplayMode, Placement, ResolvedMode, ScreenMetrics};

/// Where the shell is in its life.
///
/// `initialize` is the only way out of `Uninitialized` and `release` the only
/// way out of `Initialized`; any other transition is rejected with
/// [`ShellError::Lifecycle`] instead of dereferencing absent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Initialized,
    Released,
}

/// What the event pump does with an event after the game has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PumpAction {
    /// Fall through to winit's default handling
    Continue,
    /// Satisfy the paint request without drawing anything
    Paint,
    /// Tear down and leave the event loop
    Quit,
}

/// The windowing shell.
///
/// Owns the OS window and the game subsystem for exactly the `Initialized`
/// span of its lifecycle. The device description handle is shared with the
/// rendering subsystem, which reads display parameters through it.
pub struct Shell<G: GameSystem> {
    config: AppConfig,
    device: DeviceConfig,
    game: G,
    window: Option<Arc<Window>>,
    lifecycle: Lifecycle,
    exclusive_fullscreen: bool,
    error: Option<ShellError>,
}

impl<G: GameSystem> Shell<G> {
    /// Creates a shell around a not-yet-initialized game subsystem.
    pub fn new(config: AppConfig, device: DeviceConfig, game: G) -> Self {
        info!(profile = %config.profile, "starting shell");
        info!(?config.window, "window configuration");

        Self {
            config,
            device,
            game,
            window: None,
            lifecycle: Lifecycle::Uninitialized,
            exclusive_fullscreen: false,
            error: None,
        }
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Builds the event loop and pumps it until the window closes.
    ///
    /// This blocks the calling thread; the only way out is the window being
    /// closed (or startup failing). Returns the first recorded error, if any.
    pub fn run(mut self) -> Result<(), ShellError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Creates the window and brings up the game subsystem.
    ///
    /// Sequencing matters: the geometry pass of the device description is
    /// published before window creation so the rendering subsystem can read
    /// display parameters as soon as it has a surface to attach to, and the
    /// game subsystem is only initialized once a window actually exists.
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ShellError> {
        if self.lifecycle != Lifecycle::Uninitialized {
            return Err(ShellError::Lifecycle {
                action: "initialize",
                state: self.lifecycle,
            });
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .ok_or(ShellError::NoMonitor)?;
        let screen = ScreenMetrics {
            width: monitor.size().width,
            height: monitor.size().height,
        };
        let mode_handles: Vec<_> = monitor.video_modes().collect();
        let modes: Vec<DisplayMode> = mode_handles
            .iter()
            .map(|mode| DisplayMode {
                width: mode.size().width,
                height: mode.size().height,
                bit_depth: mode.bit_depth(),
            })
            .collect();

        let placement = window::resolve_placement(&self.config.window, screen, &modes)?;

        // Geometry pass of the device description.
        self.device.set_desc(DeviceDesc {
            app_name: self.config.window.title.clone(),
            fullscreen: self.config.window.fullscreen,
            vsync: self.config.window.vsync,
            width: self.config.window.width,
            height: self.config.window.height,
            window: None,
        });

        let mode = match placement {
            Placement::Fullscreen { mode_index } => {
                let handle =
                    mode_handles
                        .get(mode_index)
                        .cloned()
                        .ok_or(ShellError::Placement {
                            width: self.config.window.width,
                            height: self.config.window.height,
                        })?;
                ResolvedMode::Fullscreen(Fullscreen::Exclusive(handle))
            }
            Placement::Windowed { x, y, .. } => ResolvedMode::Windowed { x, y },
        };
        let attrs = window::window_attributes(&self.config.window, &mode);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        info!(
            window.width = size.width,
            window.height = size.height,
            fullscreen = self.config.window.fullscreen,
            "window created"
        );

        // Handle pass: merge the created window into the published
        // description without touching the geometry fields.
        self.device.attach_window(window.clone());

        self.game
            .init(window.clone())
            .map_err(ShellError::GameInit)?;

        window.focus_window();

        self.exclusive_fullscreen = matches!(placement, Placement::Fullscreen { .. });
        self.window = Some(window);
        self.lifecycle = Lifecycle::Initialized;
        Ok(())
    }

    /// Tears down the game subsystem and the window.
    ///
    /// Rejected unless the shell is `Initialized`; a second release reports
    /// an error instead of double-freeing.
    fn release(&mut self) -> Result<(), ShellError> {
        if self.lifecycle != Lifecycle::Initialized {
            return Err(ShellError::Lifecycle {
                action: "release",
                state: self.lifecycle,
            });
        }

        if self.should_restore_display_mode()
            && let Some(window) = &self.window
        {
            window.set_fullscreen(None);
        }

        self.game.release();
        self.device.detach_window();
        self.window = None;
        self.lifecycle = Lifecycle::Released;
        info!("shell released");
        Ok(())
    }

    /// True when teardown must hand the desktop its display mode back:
    /// only a live exclusive-fullscreen window changed it. Windowed shells
    /// never touch the display mode.
    fn should_restore_display_mode(&self) -> bool {
        self.lifecycle == Lifecycle::Initialized && self.exclusive_fullscreen
    }

    /// Forwards the raw event to the game subsystem, then classifies it for
    /// the pump. The game sees every event, including the ones the shell
    /// handles itself.
    fn dispatch(&mut self, event: &WindowEvent) -> PumpAction {
        if self.lifecycle == Lifecycle::Initialized {
            self.game.handle_event(event);
        }

        match event {
            WindowEvent::RedrawRequested => PumpAction::Paint,
            WindowEvent::CloseRequested => PumpAction::Quit,
            _ => PumpAction::Continue,
        }
    }

    /// One game step, taken only while initialized.
    fn idle_tick(&mut self) {
        if self.lifecycle == Lifecycle::Initialized {
            self.game.tick();
        }
    }

    /// Records a startup failure and asks the loop to exit.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ShellError) {
        error!(error = %err, "shell startup failed");
        self.device.detach_window();
        self.window = None;
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }
}

impl<G: GameSystem> ApplicationHandler for Shell<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Initialization runs exactly once; later resume notifications
        // (which only occur on mobile targets) are ignored.
        if self.lifecycle != Lifecycle::Uninitialized {
            return;
        }
        if let Err(err) = self.initialize(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // The OS queue is momentarily empty: exactly one game step.
        self.idle_tick();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match self.dispatch(&event) {
            PumpAction::Continue => {}
            PumpAction::Paint => {
                // Empty paint cycle: the rendering subsystem presents on its
                // own schedule through the device description.
                if let Some(window) = &self.window {
                    window.pre_present_notify();
                }
            }
            PumpAction::Quit => {
                info!("close requested, shutting down");
                if let Err(err) = self.release() {
                    warn!(error = %err, "close arrived outside the initialized span");
                }
                event_loop.exit();
            }
        }
    }
}
