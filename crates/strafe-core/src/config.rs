//! Tunable flight parameters.
//!
//! Every field defaults to the matching constant in [`crate::constants`], so a
//! JSON file only needs the values it wants to change.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Errors raised while loading a [`FlightConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The contents were not valid config JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gameplay tuning for one engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub pointer_sensitivity: f64,
    pub yaw_rate: f64,
    pub pitch_rate: f64,
    pub roll_rate: f64,

    pub base_speed: f64,
    pub boost_speed: f64,
    pub starting_lives: u32,
    pub nose_offset: f64,
    pub player_collision_radius: f64,

    pub fire_cooldown_ms: f64,
    pub projectile_speed: f64,
    pub projectile_lifetime: f64,
    pub projectile_radius: f64,
    pub muzzle_offset: f64,

    pub enemy_radius: f64,
    pub enemy_lateral_span: f64,
    pub enemy_min_height: f64,
    pub enemy_max_height: f64,
    pub enemy_spawn_min_distance: f64,
    pub enemy_spawn_max_distance: f64,
    pub enemy_initial_min_distance: f64,
    pub enemy_drift_factor: f64,
    pub despawn_behind_distance: f64,
    pub initial_enemy_count: usize,

    pub spawn_interval_base: f64,
    pub spawn_interval_per_point: f64,
    pub spawn_interval_min: f64,

    pub kill_reward: u32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            pointer_sensitivity: POINTER_SENSITIVITY,
            yaw_rate: YAW_RATE,
            pitch_rate: PITCH_RATE,
            roll_rate: ROLL_RATE,
            base_speed: BASE_SPEED,
            boost_speed: BOOST_SPEED,
            starting_lives: STARTING_LIVES,
            nose_offset: NOSE_OFFSET,
            player_collision_radius: PLAYER_COLLISION_RADIUS,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,
            projectile_radius: PROJECTILE_RADIUS,
            muzzle_offset: MUZZLE_OFFSET,
            enemy_radius: ENEMY_RADIUS,
            enemy_lateral_span: ENEMY_LATERAL_SPAN,
            enemy_min_height: ENEMY_MIN_HEIGHT,
            enemy_max_height: ENEMY_MAX_HEIGHT,
            enemy_spawn_min_distance: ENEMY_SPAWN_MIN_DISTANCE,
            enemy_spawn_max_distance: ENEMY_SPAWN_MAX_DISTANCE,
            enemy_initial_min_distance: ENEMY_INITIAL_MIN_DISTANCE,
            enemy_drift_factor: ENEMY_DRIFT_FACTOR,
            despawn_behind_distance: DESPAWN_BEHIND_DISTANCE,
            initial_enemy_count: INITIAL_ENEMY_COUNT,
            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_per_point: SPAWN_INTERVAL_PER_POINT,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            kill_reward: KILL_REWARD,
        }
    }
}

impl FlightConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Seconds until the next enemy spawn at the given score.
    /// Shrinks as the score grows, floored at `spawn_interval_min`.
    pub fn spawn_interval(&self, score: u32) -> f64 {
        (self.spawn_interval_base - score as f64 * self.spawn_interval_per_point)
            .max(self.spawn_interval_min)
    }
}
