//! World translation: flying forward by moving the world backward.

use glam::DVec3;

use strafe_core::types::PlayerFrame;

use crate::scene::RenderScene;

/// Shift the world group along the airframe's tail axis by `speed * dt`.
pub fn run(
    world_offset: &mut DVec3,
    scene: &mut dyn RenderScene,
    player: &PlayerFrame,
    speed: f64,
    dt: f64,
) {
    *world_offset += player.backward() * speed * dt;
    scene.set_world_offset(*world_offset);
    scene.set_player_transform(player.position, player.orientation);
}
