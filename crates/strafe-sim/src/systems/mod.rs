//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over the world and the engine's owned state.
//! They do not own state themselves; they run in the order listed in
//! `FlightEngine::run_systems`.

pub mod collision;
pub mod debris;
pub mod enemies;
pub mod fire_control;
pub mod orientation;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod world_translation;
