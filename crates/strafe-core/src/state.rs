//! Frame snapshot: the visible state handed to the UI after each frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::RoundPhase;
use crate::events::GameEvent;
use crate::types::{PlayerFrame, SimTime};

/// Complete visible state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub hud: HudView,
    pub player: PlayerFrame,
    /// Scene translation of the world group.
    pub world_offset: DVec3,
    pub enemy_count: u32,
    pub projectile_count: u32,
    pub debris_count: u32,
    pub events: Vec<GameEvent>,
}

impl FrameSnapshot {
    /// Whether this frame ended a round.
    pub fn game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    }
}

/// Heads-up display values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub lives: u32,
    /// Current speed including boost, rounded.
    pub speed: u32,
}

impl HudView {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }

    pub fn speed_text(&self) -> String {
        format!("Speed: {}", self.speed)
    }
}
