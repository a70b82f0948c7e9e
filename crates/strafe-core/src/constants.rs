//! Simulation constants and tuning parameters.
//!
//! Units are abstract "world units" and seconds unless noted otherwise.
//! Most of these seed the defaults of [`crate::config::FlightConfig`].

use glam::DVec3;

// --- Frame clock ---

/// Largest simulation step a single display frame may take (seconds).
pub const FRAME_DT_MAX: f64 = 0.033;

/// Step used when a frame has no usable elapsed time (first frame, zero delta).
pub const FRAME_DT_FALLBACK: f64 = 0.016;

/// Display refresh rate the headless runner paces itself at (Hz).
pub const TARGET_FRAME_RATE: u32 = 60;

// --- Orientation ---

/// Radians of rotation per unit of pointer motion.
pub const POINTER_SENSITIVITY: f64 = 0.0018;

/// Scale applied to the pointer's distance from the viewport centre when
/// pointer lock is unavailable.
pub const POINTER_FALLBACK_GAIN: f64 = 0.01;

/// Keyboard yaw rate (rad/s).
pub const YAW_RATE: f64 = 1.1;

/// Keyboard pitch rate (rad/s).
pub const PITCH_RATE: f64 = 1.1;

/// Keyboard roll rate (rad/s).
pub const ROLL_RATE: f64 = 1.8;

// --- Player ---

/// Where the airframe sits at round start.
pub const PLAYER_START_POSITION: DVec3 = DVec3::new(0.0, 10.0, 0.0);

/// Cruise speed (units/s).
pub const BASE_SPEED: f64 = 300.0;

/// Extra speed while a boost key is held (units/s).
pub const BOOST_SPEED: f64 = 250.0;

/// Lives at round start.
pub const STARTING_LIVES: u32 = 3;

/// Distance from the airframe to the nose collision point.
pub const NOSE_OFFSET: f64 = 4.0;

/// Collision radius around the nose point.
pub const PLAYER_COLLISION_RADIUS: f64 = 2.0;

// --- Projectiles ---

/// Minimum time between two shots (milliseconds of wall time).
pub const FIRE_COOLDOWN_MS: f64 = 120.0;

/// Projectile speed (units/s).
pub const PROJECTILE_SPEED: f64 = 800.0;

/// Projectile lifetime (seconds).
pub const PROJECTILE_LIFETIME: f64 = 2.0;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f64 = 0.8;

/// Projectiles appear this far ahead of the airframe.
pub const MUZZLE_OFFSET: f64 = 2.0;

// --- Enemies ---

/// Enemy collision radius.
pub const ENEMY_RADIUS: f64 = 6.5;

/// Full width of the lateral spawn band, centred on the player.
pub const ENEMY_LATERAL_SPAN: f64 = 200.0;

/// Lowest spawn height.
pub const ENEMY_MIN_HEIGHT: f64 = 2.0;

/// Highest spawn height.
pub const ENEMY_MAX_HEIGHT: f64 = 60.0;

/// Nearest steady-state spawn distance ahead of the player.
pub const ENEMY_SPAWN_MIN_DISTANCE: f64 = 500.0;

/// Farthest spawn distance ahead of the player.
pub const ENEMY_SPAWN_MAX_DISTANCE: f64 = 1500.0;

/// Nearest spawn distance for the enemies seeded at round start.
pub const ENEMY_INITIAL_MIN_DISTANCE: f64 = 100.0;

/// Enemies drift toward the player at this fraction of the player's speed.
pub const ENEMY_DRIFT_FACTOR: f64 = 0.92;

/// An enemy further than this behind the player (player frame +Z) is recycled.
pub const DESPAWN_BEHIND_DISTANCE: f64 = 50.0;

/// Enemies seeded when a round is reset.
pub const INITIAL_ENEMY_COUNT: usize = 10;

/// Vertical bob: temporal frequency (per millisecond of wall time).
pub const BOB_TIME_FREQUENCY: f64 = 0.002;

/// Vertical bob: phase offset per unit of lateral position.
pub const BOB_LATERAL_FREQUENCY: f64 = 0.02;

/// Vertical bob amplitude (units/s).
pub const BOB_AMPLITUDE: f64 = 3.0;

// --- Spawn cadence ---

/// Spawn interval at score zero (seconds).
pub const SPAWN_INTERVAL_BASE: f64 = 1.6;

/// Spawn interval reduction per point of score (seconds).
pub const SPAWN_INTERVAL_PER_POINT: f64 = 0.002;

/// Spawn interval floor (seconds).
pub const SPAWN_INTERVAL_MIN: f64 = 0.25;

// --- Scoring ---

/// Score awarded per enemy destroyed by a projectile.
pub const KILL_REWARD: u32 = 10;

// --- Explosions ---

/// Debris particles per explosion.
pub const DEBRIS_PER_EXPLOSION: usize = 14;

/// Debris velocity is drawn from [-DEBRIS_SPEED_SPAN/2, DEBRIS_SPEED_SPAN/2) per axis.
pub const DEBRIS_SPEED_SPAN: f64 = 120.0;

/// Shortest debris lifetime (seconds).
pub const DEBRIS_MIN_LIFETIME: f64 = 0.4;

/// Debris lifetime is drawn from [DEBRIS_MIN_LIFETIME, DEBRIS_MIN_LIFETIME + this).
pub const DEBRIS_LIFETIME_SPAN: f64 = 0.5;
