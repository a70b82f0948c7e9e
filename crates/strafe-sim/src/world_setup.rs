//! Entity spawn factories for populating the simulation world.
//!
//! Every factory creates the scene object first and stores its handle on the
//! entity, and [`despawn_linked`] is the only way entities leave the world, so
//! the pools and the render scene never disagree.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use strafe_core::components::*;
use strafe_core::config::FlightConfig;
use strafe_core::constants::*;
use strafe_core::enums::SceneObjectKind;
use strafe_core::types::{PlayerFrame, Position, Velocity};

use crate::scene::RenderScene;

/// Seed the enemies a round starts with.
pub fn seed_enemies(
    world: &mut World,
    scene: &mut dyn RenderScene,
    rng: &mut ChaCha8Rng,
    config: &FlightConfig,
    player: &PlayerFrame,
    world_offset: DVec3,
) {
    for _ in 0..config.initial_enemy_count {
        spawn_enemy(world, scene, rng, config, player, world_offset, true);
    }
}

/// Spawn one enemy somewhere ahead of the player.
///
/// The lateral offset and forward distance are laid out along the player's
/// horizontal heading; the height is absolute. `initial` widens the distance
/// band for the enemies seeded at round start.
pub fn spawn_enemy(
    world: &mut World,
    scene: &mut dyn RenderScene,
    rng: &mut ChaCha8Rng,
    config: &FlightConfig,
    player: &PlayerFrame,
    world_offset: DVec3,
    initial: bool,
) -> Entity {
    let lateral = (rng.gen::<f64>() - 0.5) * config.enemy_lateral_span;
    let height = sample_range(rng, config.enemy_min_height, config.enemy_max_height);
    let min_distance = if initial {
        config.enemy_initial_min_distance
    } else {
        config.enemy_spawn_min_distance
    };
    let distance = sample_range(rng, min_distance, config.enemy_spawn_max_distance);

    let planar = player.heading() * DVec3::new(lateral, 0.0, -distance);
    let scene_position = DVec3::new(
        player.position.x + planar.x,
        height,
        player.position.z + planar.z,
    );
    let local = scene_position - world_offset;

    let handle = scene.add_object(SceneObjectKind::Enemy, local);
    log::trace!("enemy spawned at {local:?} (initial: {initial})");

    world.spawn((
        Enemy,
        Position(local),
        Radius(config.enemy_radius),
        SceneLink(handle),
    ))
}

/// Spawn a projectile just ahead of the airframe, flying along its facing.
pub fn spawn_projectile(
    world: &mut World,
    scene: &mut dyn RenderScene,
    config: &FlightConfig,
    player: &PlayerFrame,
    world_offset: DVec3,
) -> Entity {
    let forward = player.forward();
    let local = player.position + forward * config.muzzle_offset - world_offset;

    let handle = scene.add_object(SceneObjectKind::Projectile, local);

    world.spawn((
        Projectile,
        Position(local),
        Velocity(forward * config.projectile_speed),
        Lifetime {
            remaining_secs: config.projectile_lifetime,
            total_secs: config.projectile_lifetime,
        },
        Radius(config.projectile_radius),
        SceneLink(handle),
    ))
}

/// Burst of debris particles at a world-local position.
pub fn spawn_explosion(
    world: &mut World,
    scene: &mut dyn RenderScene,
    rng: &mut ChaCha8Rng,
    position: DVec3,
) {
    for _ in 0..DEBRIS_PER_EXPLOSION {
        let velocity = DVec3::new(
            (rng.gen::<f64>() - 0.5) * DEBRIS_SPEED_SPAN,
            (rng.gen::<f64>() - 0.5) * DEBRIS_SPEED_SPAN,
            (rng.gen::<f64>() - 0.5) * DEBRIS_SPEED_SPAN,
        );
        let life = DEBRIS_MIN_LIFETIME + rng.gen::<f64>() * DEBRIS_LIFETIME_SPAN;

        let handle = scene.add_object(SceneObjectKind::Debris, position);
        world.spawn((
            Debris,
            Position(position),
            Velocity(velocity),
            Lifetime {
                remaining_secs: life,
                total_secs: life,
            },
            SceneLink(handle),
        ));
    }
}

/// Remove an entity from the pool together with its scene object.
/// Returns false if the entity was already gone.
pub fn despawn_linked(world: &mut World, scene: &mut dyn RenderScene, entity: Entity) -> bool {
    let handle = match world.get::<&SceneLink>(entity) {
        Ok(link) => link.0,
        Err(_) => return false,
    };
    scene.remove_object(handle);
    world.despawn(entity).is_ok()
}

/// Remove every pooled entity and its scene object.
pub fn clear_world(world: &mut World, scene: &mut dyn RenderScene) {
    let linked: Vec<Entity> = world
        .query::<&SceneLink>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in linked {
        despawn_linked(world, scene, entity);
    }
    world.clear();
}

/// Uniform sample in [lo, hi), or `lo` when the band is empty.
fn sample_range(rng: &mut ChaCha8Rng, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
