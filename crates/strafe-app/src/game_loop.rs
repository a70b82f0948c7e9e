//! Frame-loop thread: runs the flight engine at the display rate and
//! publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel. While no round is live
//! the thread blocks on the channel instead of re-arming the frame chain.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use strafe_core::constants::TARGET_FRAME_RATE;
use strafe_core::state::FrameSnapshot;
use strafe_sim::engine::{FlightEngine, SimConfig};

use crate::state::{GameLoopCommand, LoopHandle, SharedSnapshot};

/// Nominal duration of one display frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FRAME_RATE as u64);

/// Spawns the frame loop in a new thread.
pub fn spawn_game_loop(config: SimConfig) -> std::io::Result<LoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("strafe-frame-loop".into())
        .spawn(move || {
            run_game_loop(FlightEngine::new(config), cmd_rx, &shared);
        })?;

    Ok(LoopHandle::new(cmd_tx, latest_snapshot, thread))
}

/// What the loop should do after handling a command.
enum Flow {
    Continue,
    Stop,
}

fn forward(engine: &mut FlightEngine, command: GameLoopCommand) -> Flow {
    match command {
        GameLoopCommand::PlayerCommand(cmd) => {
            engine.queue_command(cmd);
            Flow::Continue
        }
        GameLoopCommand::Shutdown => Flow::Stop,
    }
}

fn publish(latest_snapshot: &Mutex<Option<FrameSnapshot>>, snapshot: FrameSnapshot) {
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

/// The frame loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: FlightEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let clock = Instant::now();
    let mut next_frame_time = Instant::now();
    publish(latest_snapshot, engine.step(0.0, 0.0));
    log::debug!("frame loop started at {TARGET_FRAME_RATE} Hz");

    loop {
        // 1. No live round: park until something arrives
        if !engine.phase().is_live() {
            match cmd_rx.recv() {
                Ok(command) => {
                    if let Flow::Stop = forward(&mut engine, command) {
                        break;
                    }
                }
                Err(mpsc::RecvError) => break,
            }
            next_frame_time = Instant::now();
        }

        // 2. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if let Flow::Stop = forward(&mut engine, command) {
                        log::debug!("frame loop shut down after {} frames", engine.time().frame);
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 3. Run one display frame
        let timestamp_ms = clock.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.frame(timestamp_ms);
        if let Some(final_score) = snapshot.events.iter().find_map(|e| match e {
            strafe_core::events::GameEvent::GameOver { final_score } => Some(*final_score),
            _ => None,
        }) {
            log::info!("round over, final score {final_score}");
        }

        // 4. Store latest snapshot for polling
        publish(latest_snapshot, snapshot);

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind: reset to avoid catch-up spiral
            log::warn!("frame loop fell behind by {:?}", now - next_frame_time);
            next_frame_time = now;
        }
    }

    log::debug!("frame loop shut down after {} frames", engine.time().frame);
}
