//! Explosion debris: drift, fade out, expire.

use hecs::{Entity, World};

use strafe_core::components::{Debris, Lifetime, SceneLink};
use strafe_core::types::{Position, Velocity};

use crate::scene::RenderScene;
use crate::world_setup::despawn_linked;

/// Move debris, fade it by remaining life and remove it once expired.
pub fn run(
    world: &mut World,
    scene: &mut dyn RenderScene,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (pos, vel, life, link, _debris)) in world.query_mut::<(
        &mut Position,
        &Velocity,
        &mut Lifetime,
        &SceneLink,
        &Debris,
    )>() {
        pos.0 += vel.0 * dt;
        life.remaining_secs -= dt;
        scene.move_object(link.0, pos.0);
        scene.set_opacity(link.0, fade(life));
        if life.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        despawn_linked(world, scene, entity);
    }
}

/// Opacity for the remaining share of a lifetime, in [0, 1].
pub fn fade(life: &Lifetime) -> f64 {
    if life.total_secs <= 0.0 {
        return 0.0;
    }
    (life.remaining_secs / life.total_secs).clamp(0.0, 1.0)
}
