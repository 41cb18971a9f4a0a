//! Game subsystem contract
//!
//! The shell owns the window and the event queue; everything the game does
//! happens through this trait. `init` runs once the window exists, `tick`
//! runs once per idle cycle of the event queue, and `handle_event` sees
//! every raw window event before the shell applies its own handling.

use std::error::Error;
use std::sync::Arc;

use winit::event::WindowEvent;
use winit::window::Window;

/// Boxed error a game subsystem reports from [`GameSystem::init`].
pub type GameError = Box<dyn Error + Send + Sync>;

/// Trait the external game subsystem implements
pub trait GameSystem {
    /// Called once, after the window is created and the device description
    /// is fully published. The subsystem typically keeps the window handle
    /// for its renderer.
    fn init(&mut self, window: Arc<Window>) -> Result<(), GameError>;

    /// Advances the game by one step. Invoked only when the event queue is
    /// momentarily empty, so event dispatch always has priority.
    fn tick(&mut self);

    /// Receives every raw window event, before the shell's own handling.
    fn handle_event(&mut self, event: &WindowEvent);

    /// Drops subsystem resources. The window is still alive at this point.
    fn release(&mut self);
}
