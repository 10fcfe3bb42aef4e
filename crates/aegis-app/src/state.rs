//! State shared between the driver and the simulation thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use aegis_core::commands::ControlCommand;
use aegis_core::state::SimSnapshot;

/// Commands sent from the driver to the simulation thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A control command to forward to the engine.
    Control(ControlCommand),
    /// Stop the loop after the current frame.
    Shutdown,
}

/// Handles the driver keeps while the simulation thread runs.
///
/// - `command_tx` is `None` until the loop is spawned
/// - `latest_snapshot` is written by the loop after every frame
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the running loop.
    pub fn send(&self, command: LoopCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| format!("Failed to send command: {e}")),
            None => Err("Simulation not started".into()),
        }
    }

    /// Clone of the most recent snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<SimSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(state.send(LoopCommand::Control(ControlCommand::Pause)).is_err());
    }

    #[test]
    fn test_send_forwards_control_command() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        state
            .send(LoopCommand::Control(ControlCommand::SetSpeed { multiplier: 50.0 }))
            .unwrap();

        assert!(matches!(
            rx.try_recv().unwrap(),
            LoopCommand::Control(ControlCommand::SetSpeed { multiplier }) if multiplier == 50.0
        ));
    }
}
