//! Shell error types

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

use super::runner::Lifecycle;

/// Errors surfaced by the windowing shell.
///
/// Startup has two OS-facing failure points: building the event loop (which
/// is where the window class gets registered) and creating the window itself.
/// Everything else is either a placement problem we detect ourselves or a
/// game subsystem failure reported through its own boxed error.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The event loop could not be built.
    #[error("failed to build event loop: {0}")]
    EventLoop(#[from] EventLoopError),

    /// No monitor was available to place the window on.
    #[error("no monitor available")]
    NoMonitor,

    /// Exclusive fullscreen was requested but the monitor reports no matching
    /// 32-bit mode, so the display-mode change would be rejected.
    #[error("no {width}x{height} 32-bit display mode available")]
    Placement { width: u32, height: u32 },

    /// The OS rejected window creation.
    #[error("window creation failed: {0}")]
    WindowCreation(#[from] OsError),

    /// The game subsystem failed to initialize.
    #[error("game subsystem initialization failed: {0}")]
    GameInit(#[source] crate::game::GameError),

    /// A lifecycle transition was attempted out of order.
    #[error("cannot {action} while {state:?}")]
    Lifecycle {
        action: &'static str,
        state: Lifecycle,
    },
}
