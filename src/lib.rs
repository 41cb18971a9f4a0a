//! Game Shell
//!
//! The windowing layer of a game framework: owns the single OS window of the
//! process, resolves display placement, publishes the device description the
//! rendering subsystem consumes, and pumps OS events into the game subsystem.

/// Windowing shell - configuration, placement, and the event pump
pub mod app;

/// Device description channel shared with the rendering subsystem
pub mod device;

/// Contract the game subsystem implements
pub mod game;
