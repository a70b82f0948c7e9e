//! Simulation engine for STRAFE.
//!
//! Owns the hecs ECS world that pools enemies, projectiles and explosion
//! debris, runs the per-frame systems, mirrors every pooled entity into a
//! render scene, and produces `FrameSnapshot`s for the UI.

pub mod engine;
pub mod round;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use engine::{FlightEngine, SimConfig};
pub use scene::{HeadlessScene, RenderScene};
pub use strafe_core as core;
