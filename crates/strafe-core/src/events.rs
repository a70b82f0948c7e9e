//! Events emitted by the simulation for audio and UI feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a frame.
///
/// Positions are world-local; add the frame's world offset for scene space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A round began.
    RoundStarted,
    /// The player fired a projectile.
    ShotFired,
    /// A projectile destroyed an enemy.
    EnemyDestroyed { position: DVec3, score: u32 },
    /// An enemy rammed the player.
    PlayerHit { position: DVec3, lives: u32 },
    /// An explosion effect was spawned.
    Explosion { position: DVec3 },
    /// Lives ran out. The UI should show the restart overlay.
    GameOver { final_score: u32 },
}
