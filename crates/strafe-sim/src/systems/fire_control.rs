//! Fire control: rate-limited projectile spawning while the trigger is held.

use glam::DVec3;
use hecs::{Entity, World};

use strafe_core::config::FlightConfig;
use strafe_core::events::GameEvent;
use strafe_core::input::InputState;
use strafe_core::types::PlayerFrame;

use crate::round::RoundState;
use crate::scene::RenderScene;
use crate::world_setup;

/// Fire one projectile if the trigger is held and the cooldown has elapsed.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    scene: &mut dyn RenderScene,
    input: &InputState,
    round: &mut RoundState,
    config: &FlightConfig,
    player: &PlayerFrame,
    world_offset: DVec3,
    wall_ms: f64,
    events: &mut Vec<GameEvent>,
) -> Option<Entity> {
    if !input.fire_held() || !round.fire_ready(wall_ms, config.fire_cooldown_ms) {
        return None;
    }

    let entity = world_setup::spawn_projectile(world, scene, config, player, world_offset);
    round.last_fire_ms = Some(wall_ms);
    events.push(GameEvent::ShotFired);
    Some(entity)
}
