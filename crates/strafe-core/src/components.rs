//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::SceneHandle;

/// Marks an entity as an enemy aircraft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks an entity as an explosion particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Debris;

/// Collision radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Radius(pub f64);

/// Time-to-live for short-lived entities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    /// Seconds left before expiry.
    pub remaining_secs: f64,
    /// Lifetime at spawn, used for fading.
    pub total_secs: f64,
}

/// The render-scene object this entity owns.
/// Pool removal and scene removal always happen together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneLink(pub SceneHandle);
