//! Snapshot system: reads the world and round state into a `FrameSnapshot`.
//!
//! This system is read-only. It never modifies the world.

use glam::DVec3;
use hecs::World;

use strafe_core::components::{Debris, Enemy, Projectile};
use strafe_core::enums::RoundPhase;
use strafe_core::events::GameEvent;
use strafe_core::state::{FrameSnapshot, HudView};
use strafe_core::types::{PlayerFrame, SimTime};

use crate::round::RoundState;

/// Build the frame snapshot the UI consumes.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: RoundPhase,
    round: &RoundState,
    player: &PlayerFrame,
    world_offset: DVec3,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        hud: build_hud(round),
        player: *player,
        world_offset,
        enemy_count: count::<Enemy>(world),
        projectile_count: count::<Projectile>(world),
        debris_count: count::<Debris>(world),
        events,
    }
}

/// HUD values; speed includes boost and is rounded for display.
pub fn build_hud(round: &RoundState) -> HudView {
    HudView {
        score: round.score,
        lives: round.lives,
        speed: round.speed().round().max(0.0) as u32,
    }
}

fn count<T: hecs::Component>(world: &World) -> u32 {
    world.query::<&T>().iter().count() as u32
}
