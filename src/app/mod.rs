//! Windowing shell module
//!
//! Handles window creation, placement, and the event pump.

pub mod config;
mod error;
mod runner;
pub mod window;

pub use config::{AppConfig, WindowConfig};
pub use error::ShellError;
pub use runner::{Lifecycle, Shell};
