//! Round state: the score, lives and timers of the round in progress.
//!
//! Stored in `FlightEngine`, NOT as ECS entities. Only the per-frame update
//! and round reset mutate it.

use strafe_core::config::FlightConfig;

/// Running state of one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub score: u32,
    pub lives: u32,
    /// Cruise speed (units/s).
    pub base_speed: f64,
    /// Extra speed this frame; non-zero while a boost key is held.
    pub boost: f64,
    /// Wall-clock timestamp (ms) of the last shot, if any.
    pub last_fire_ms: Option<f64>,
    /// Countdown to the next cadence spawn (seconds).
    pub spawn_timer_secs: f64,
}

impl RoundState {
    /// Fresh round: full lives, no score, first cadence spawn due immediately.
    pub fn new(config: &FlightConfig) -> Self {
        Self {
            score: 0,
            lives: config.starting_lives,
            base_speed: config.base_speed,
            boost: 0.0,
            last_fire_ms: None,
            spawn_timer_secs: 0.0,
        }
    }

    /// Current forward speed including boost.
    pub fn speed(&self) -> f64 {
        self.base_speed + self.boost
    }

    /// Whether the fire cooldown has elapsed at `now_ms`.
    pub fn fire_ready(&self, now_ms: f64, cooldown_ms: f64) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms - last > cooldown_ms,
        }
    }
}
