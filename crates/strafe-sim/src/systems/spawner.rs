//! Spawn cadence: one enemy every `FlightConfig::spawn_interval(score)` seconds.

use glam::DVec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use strafe_core::config::FlightConfig;
use strafe_core::types::PlayerFrame;

use crate::round::RoundState;
use crate::scene::RenderScene;
use crate::world_setup;

/// Count down the spawn timer; on expiry spawn one enemy and rearm.
/// Returns whether an enemy was spawned.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    scene: &mut dyn RenderScene,
    rng: &mut ChaCha8Rng,
    round: &mut RoundState,
    config: &FlightConfig,
    player: &PlayerFrame,
    world_offset: DVec3,
    dt: f64,
) -> bool {
    round.spawn_timer_secs -= dt;
    if round.spawn_timer_secs > 0.0 {
        return false;
    }

    world_setup::spawn_enemy(world, scene, rng, config, player, world_offset, false);
    round.spawn_timer_secs = config.spawn_interval(round.score);
    true
}
