//! State shared between the runner front end and the frame-loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use strafe_core::commands::PlayerCommand;
use strafe_core::state::FrameSnapshot;

/// Commands sent to the frame-loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the flight engine.
    PlayerCommand(PlayerCommand),
    /// Stop the frame loop.
    Shutdown,
}

/// Latest snapshot published by the frame loop.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

/// Handle to a running frame loop.
pub struct LoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl LoopHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<GameLoopCommand>,
        latest_snapshot: SharedSnapshot,
        thread: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            latest_snapshot,
            thread: Some(thread),
        }
    }

    /// Forward a player command. Fails once the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> Result<(), mpsc::SendError<GameLoopCommand>> {
        self.command_tx.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Clone of the most recently published snapshot.
    pub fn latest_snapshot(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for the thread to finish.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("frame loop thread panicked");
            }
        }
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
