//! Input state: level-triggered keys and an edge-triggered pointer delta.
//!
//! - **Keys** are level-triggered. `is_held(key)` is true every frame the key
//!   is down, which is what the flight axes, boost and fire want.
//!
//! - **Pointer motion** accumulates between frames and is drained exactly once
//!   per frame by `take_pointer_delta()`. Motion that arrives while no frame
//!   runs is carried into the next one.

use std::collections::HashSet;

use crate::constants::POINTER_FALLBACK_GAIN;
use crate::enums::Key;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pointer_dx: f64,
    pointer_dy: f64,
    pointer_locked: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
        if key == Key::Escape {
            self.pointer_locked = false;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// +1 when only `positive` is held, -1 when only `negative` is, else 0.
    pub fn axis(&self, positive: Key, negative: Key) -> f64 {
        let p = if self.is_held(positive) { 1.0 } else { 0.0 };
        let n = if self.is_held(negative) { 1.0 } else { 0.0 };
        p - n
    }

    pub fn boost_held(&self) -> bool {
        self.is_held(Key::ShiftLeft) || self.is_held(Key::ShiftRight)
    }

    pub fn fire_held(&self) -> bool {
        self.is_held(Key::Space)
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
    }

    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// Raw motion from a locked pointer. Ignored when unlocked.
    pub fn pointer_moved(&mut self, dx: f64, dy: f64) {
        if self.pointer_locked {
            self.pointer_dx += dx;
            self.pointer_dy += dy;
        }
    }

    /// Fallback steering without pointer lock: the pointer's distance from
    /// the viewport centre, scaled down. Ignored while locked.
    pub fn pointer_hover(&mut self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        if self.pointer_locked {
            return;
        }
        self.pointer_dx += (x - viewport_width / 2.0) * POINTER_FALLBACK_GAIN;
        self.pointer_dy += (y - viewport_height / 2.0) * POINTER_FALLBACK_GAIN;
    }

    /// Pointer motion accumulated since the previous call, resetting it to zero.
    pub fn take_pointer_delta(&mut self) -> (f64, f64) {
        let delta = (self.pointer_dx, self.pointer_dy);
        self.pointer_dx = 0.0;
        self.pointer_dy = 0.0;
        delta
    }

    /// Forget held keys and pending motion, e.g. when the round is paused.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pointer_dx = 0.0;
        self.pointer_dy = 0.0;
    }
}
