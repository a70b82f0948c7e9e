//! Enemy movement: drift toward the player, bob, recycle once passed.

use glam::DVec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use strafe_core::components::{Enemy, SceneLink};
use strafe_core::config::FlightConfig;
use strafe_core::constants::{BOB_AMPLITUDE, BOB_LATERAL_FREQUENCY, BOB_TIME_FREQUENCY};
use strafe_core::types::{PlayerFrame, Position};

use crate::scene::RenderScene;
use crate::world_setup;

/// Move every enemy, then replace each one that has fallen behind the
/// player with exactly one fresh spawn. Returns how many were recycled.
///
/// The bob is driven by wall-clock time, so it jumps after a pause.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    scene: &mut dyn RenderScene,
    rng: &mut ChaCha8Rng,
    config: &FlightConfig,
    player: &PlayerFrame,
    world_offset: DVec3,
    speed: f64,
    dt: f64,
    wall_ms: f64,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    let drift = player.backward() * speed * dt * config.enemy_drift_factor;

    for (entity, (pos, link, _enemy)) in world.query_mut::<(&mut Position, &SceneLink, &Enemy)>() {
        pos.0 += drift;
        pos.0.y += bob_rate(wall_ms, pos.0.x) * dt;
        scene.move_object(link.0, pos.0);

        let relative = player.to_local(pos.0 + world_offset);
        if relative.z > config.despawn_behind_distance {
            despawn_buffer.push(entity);
        }
    }

    let recycled = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        world_setup::despawn_linked(world, scene, entity);
    }
    for _ in 0..recycled {
        world_setup::spawn_enemy(world, scene, rng, config, player, world_offset, false);
    }
    if recycled > 0 {
        log::trace!("recycled {recycled} enemies behind the player");
    }
    recycled
}

/// Vertical bob speed for an enemy at lateral position `x`.
pub fn bob_rate(wall_ms: f64, x: f64) -> f64 {
    (wall_ms * BOB_TIME_FREQUENCY + x * BOB_LATERAL_FREQUENCY).sin() * BOB_AMPLITUDE
}
