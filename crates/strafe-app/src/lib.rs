//! STRAFE headless runner.
//!
//! Drives the flight engine on its own thread and exposes the latest frame
//! snapshot to whoever is presenting it.

pub mod game_loop;
pub mod state;

pub use strafe_core as core;
