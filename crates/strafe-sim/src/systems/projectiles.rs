//! Projectile integration and expiry.

use hecs::{Entity, World};

use strafe_core::components::{Lifetime, Projectile, SceneLink};
use strafe_core::types::{Position, Velocity};

use crate::scene::RenderScene;
use crate::world_setup::despawn_linked;

/// Advance every projectile by velocity * dt and drop the ones whose
/// lifetime has run out. Uses a caller-owned buffer to avoid per-frame allocation.
pub fn run(
    world: &mut World,
    scene: &mut dyn RenderScene,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (pos, vel, life, link, _projectile)) in world.query_mut::<(
        &mut Position,
        &Velocity,
        &mut Lifetime,
        &SceneLink,
        &Projectile,
    )>() {
        pos.0 += vel.0 * dt;
        life.remaining_secs -= dt;
        scene.move_object(link.0, pos.0);
        if life.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        despawn_linked(world, scene, entity);
    }
}
