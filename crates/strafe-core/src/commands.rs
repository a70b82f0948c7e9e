//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Key;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Keyboard ---
    /// A key went down.
    KeyDown { key: Key },
    /// A key went up.
    KeyUp { key: Key },

    // --- Pointer ---
    /// Raw pointer motion. Only counts while the pointer is locked.
    PointerMoved { dx: f64, dy: f64 },
    /// Pointer hovering at a client position inside a viewport.
    /// Steers only while the pointer is not locked and a round is running.
    PointerHover {
        x: f64,
        y: f64,
        viewport_width: f64,
        viewport_height: f64,
    },
    /// Pointer lock acquired or released.
    PointerLockChanged { locked: bool },

    // --- Round control ---
    /// Start (or restart) a round from the idle overlay.
    StartRound,
    /// Suspend the update loop.
    Pause,
    /// Resume a paused round.
    Resume,
}
