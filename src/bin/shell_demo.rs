//! Demo driver for the windowing shell.
//!
//! Runs the shell around a trivial game subsystem that counts idle-cycle
//! ticks and logs a heartbeat, which is enough to watch the pump behave.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::event::WindowEvent;
use winit::window::Window;

use game_shell::app::{AppConfig, Shell};
use game_shell::device::DeviceConfig;
use game_shell::game::{GameError, GameSystem};

const HEARTBEAT: Duration = Duration::from_secs(5);

struct HeartbeatGame {
    window: Option<Arc<Window>>,
    ticks: u64,
    last_report: Instant,
}

impl HeartbeatGame {
    fn new() -> Self {
        Self {
            window: None,
            ticks: 0,
            last_report: Instant::now(),
        }
    }
}

impl GameSystem for HeartbeatGame {
    fn init(&mut self, window: Arc<Window>) -> Result<(), GameError> {
        info!("game subsystem initialized");
        self.window = Some(window);
        Ok(())
    }

    fn tick(&mut self) {
        self.ticks += 1;
        if self.last_report.elapsed() >= HEARTBEAT {
            info!(ticks = self.ticks, "heartbeat");
            self.last_report = Instant::now();
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::Focused(focused) = event {
            info!(focused, "focus changed");
        }
    }

    fn release(&mut self) {
        info!(ticks = self.ticks, "game subsystem released");
        self.window = None;
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load_from_env().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config, using defaults");
        AppConfig::default()
    });

    let device = DeviceConfig::new();
    let shell = Shell::new(config, device.clone(), HeartbeatGame::new());
    shell.run().context("shell exited with error")?;

    Ok(())
}
