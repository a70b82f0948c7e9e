//! Collision resolution: projectiles against enemies, the nose against enemies.
//!
//! Both passes snapshot the pools in hecs storage order before mutating
//! anything. On ties the first-iterated match wins: a projectile destroys
//! at most one enemy and an enemy is destroyed by at most one projectile.

use glam::DVec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use strafe_core::components::{Enemy, Projectile, Radius};
use strafe_core::config::FlightConfig;
use strafe_core::events::GameEvent;
use strafe_core::types::{PlayerFrame, Position};

use crate::round::RoundState;
use crate::scene::RenderScene;
use crate::world_setup;

/// A pooled body reduced to what the distance checks need.
#[derive(Debug, Clone, Copy)]
struct Body {
    entity: Entity,
    position: DVec3,
    radius: f64,
}

fn collect<T: hecs::Component>(world: &World) -> Vec<Body> {
    world
        .query::<(&Position, &Radius, &T)>()
        .iter()
        .map(|(entity, (pos, radius, _))| Body {
            entity,
            position: pos.0,
            radius: radius.0,
        })
        .collect()
}

/// Projectile–enemy pass. Returns the number of enemies destroyed.
pub fn resolve_projectile_hits(
    world: &mut World,
    scene: &mut dyn RenderScene,
    rng: &mut ChaCha8Rng,
    round: &mut RoundState,
    config: &FlightConfig,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let projectiles = collect::<Projectile>(world);
    let enemies = collect::<Enemy>(world);
    let mut enemy_alive = vec![true; enemies.len()];
    let mut hits: Vec<(Body, Body)> = Vec::new();

    for projectile in &projectiles {
        let target = enemies.iter().enumerate().find(|(i, enemy)| {
            enemy_alive[*i]
                && projectile.position.distance(enemy.position) < projectile.radius + enemy.radius
        });
        if let Some((i, enemy)) = target {
            enemy_alive[i] = false;
            hits.push((*projectile, *enemy));
        }
    }

    for (projectile, enemy) in &hits {
        round.score += config.kill_reward;
        log::debug!("enemy destroyed at {:?}, score {}", enemy.position, round.score);
        events.push(GameEvent::EnemyDestroyed {
            position: enemy.position,
            score: round.score,
        });
        explode(world, scene, rng, enemy.position, events);
        world_setup::despawn_linked(world, scene, enemy.entity);
        world_setup::despawn_linked(world, scene, projectile.entity);
    }

    hits.len() as u32
}

/// Nose–enemy pass. Each contact costs a life and removes the enemy.
/// Returns true when the last life is lost; remaining contacts are skipped.
#[allow(clippy::too_many_arguments)]
pub fn resolve_player_hits(
    world: &mut World,
    scene: &mut dyn RenderScene,
    rng: &mut ChaCha8Rng,
    round: &mut RoundState,
    config: &FlightConfig,
    player: &PlayerFrame,
    world_offset: DVec3,
    events: &mut Vec<GameEvent>,
) -> bool {
    let nose = player.point_ahead(config.nose_offset);

    for enemy in collect::<Enemy>(world) {
        let reach = enemy.radius + config.player_collision_radius;
        if nose.distance(enemy.position + world_offset) >= reach {
            continue;
        }

        round.lives = round.lives.saturating_sub(1);
        log::debug!("player hit, {} lives left", round.lives);
        events.push(GameEvent::PlayerHit {
            position: enemy.position,
            lives: round.lives,
        });
        explode(world, scene, rng, enemy.position, events);
        world_setup::despawn_linked(world, scene, enemy.entity);

        if round.lives == 0 {
            return true;
        }
    }

    false
}

fn explode(
    world: &mut World,
    scene: &mut dyn RenderScene,
    rng: &mut ChaCha8Rng,
    position: DVec3,
    events: &mut Vec<GameEvent>,
) {
    world_setup::spawn_explosion(world, scene, rng, position);
    events.push(GameEvent::Explosion { position });
}
