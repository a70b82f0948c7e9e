//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Round lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for a start signal; the world is seeded but not updated.
    #[default]
    Idle,
    /// Update loop active.
    Running,
    /// Update loop suspended by the player.
    Paused,
    /// Lives exhausted. Only observable inside the frame that caused it;
    /// the round is reset to `Idle` before the frame returns.
    GameOver,
}

impl RoundPhase {
    /// Whether the frame loop should keep re-arming itself.
    pub fn is_live(self) -> bool {
        matches!(self, RoundPhase::Running | RoundPhase::Paused)
    }
}

/// Keys the flight controls respond to, named after their physical codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Pitch down.
    W,
    /// Yaw left.
    A,
    /// Pitch up.
    S,
    /// Yaw right.
    D,
    /// Roll left.
    Q,
    /// Roll right.
    E,
    ShiftLeft,
    ShiftRight,
    /// Fire.
    Space,
    /// Releases pointer lock.
    Escape,
}

/// What a render-scene object represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneObjectKind {
    Enemy,
    Projectile,
    Debris,
}
