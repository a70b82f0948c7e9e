//! Fundamental geometric and simulation types.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// World-local position. Scene position = local + world offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// World-local velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Opaque handle to an object owned by the render scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SceneHandle(pub u64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulation steps taken this round.
    pub frame: u64,
    /// Accumulated simulation time this round (seconds).
    pub elapsed_secs: f64,
    /// Wall-clock timestamp of the latest step (milliseconds).
    pub wall_ms: f64,
}

impl SimTime {
    /// Record one step of `dt` seconds taken at `wall_ms`.
    pub fn advance(&mut self, dt: f64, wall_ms: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
        self.wall_ms = wall_ms;
    }
}

/// The player's airframe: a scene-space position and a unit orientation.
///
/// The airframe looks down its local -Z axis with +Y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerFrame {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Default for PlayerFrame {
    fn default() -> Self {
        Self {
            position: crate::constants::PLAYER_START_POSITION,
            orientation: DQuat::IDENTITY,
        }
    }
}

impl PlayerFrame {
    /// Unit vector the airframe is facing.
    pub fn forward(&self) -> DVec3 {
        (self.orientation * DVec3::NEG_Z).normalize()
    }

    /// Unit vector pointing out of the airframe's tail; the world moves this way.
    pub fn backward(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }

    /// Point `offset` units ahead of the airframe.
    pub fn point_ahead(&self, offset: f64) -> DVec3 {
        self.position + self.orientation * DVec3::new(0.0, 0.0, -offset)
    }

    /// Express a scene-space point in the airframe's own rotated frame.
    /// Positive z means behind the player.
    pub fn to_local(&self, scene_point: DVec3) -> DVec3 {
        self.orientation.inverse() * (scene_point - self.position)
    }

    /// Rotation about +Y that points -Z along the horizontal part of the
    /// facing direction. Identity when the airframe points straight up or down.
    pub fn heading(&self) -> DQuat {
        let forward = self.forward();
        if forward.x.abs() < 1e-9 && forward.z.abs() < 1e-9 {
            return DQuat::IDENTITY;
        }
        DQuat::from_rotation_y((-forward.x).atan2(-forward.z))
    }
}
