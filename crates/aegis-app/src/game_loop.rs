//! Simulation loop thread: ticks the engine at a fixed frame delta.
//!
//! The engine is moved into the thread. Commands arrive via an `mpsc`
//! channel; events are forwarded on a second channel and the latest snapshot
//! is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use aegis_core::events::SimEvent;
use aegis_core::state::SimSnapshot;
use aegis_sim::SimulationEngine;

use crate::error::AppError;
use crate::state::LoopCommand;

/// How the loop paces itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopOptions {
    /// Real seconds per frame handed to the engine.
    pub frame_delta: f64,
    /// Stop after this many frames; `None` runs until `Shutdown`.
    pub frames: Option<u64>,
    /// Sleep between frames to match wall-clock time.
    pub realtime: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            frame_delta: 1.0 / 60.0,
            frames: Some(600),
            realtime: false,
        }
    }
}

/// What the loop did before it stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopSummary {
    pub frames: u64,
    pub events: usize,
}

/// Spawn the loop on a named thread.
///
/// Returns the command sender and the join handle yielding a `LoopSummary`.
pub fn spawn_sim_loop(
    engine: SimulationEngine,
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    event_tx: mpsc::Sender<SimEvent>,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<LoopSummary>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("aegis-sim-loop".into())
        .spawn(move || run_sim_loop(engine, options, cmd_rx, &latest_snapshot, &event_tx))
        .map_err(|e| AppError::Thread(e.to_string()))?;

    Ok((cmd_tx, handle))
}

/// Runs until the frame budget is spent, `Shutdown` arrives, or the command
/// channel disconnects.
fn run_sim_loop(
    mut engine: SimulationEngine,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
    event_tx: &mpsc::Sender<SimEvent>,
) -> LoopSummary {
    let frame_duration = Duration::try_from_secs_f64(options.frame_delta).unwrap_or(Duration::ZERO);
    let mut summary = LoopSummary::default();
    let mut next_frame_time = Instant::now();

    loop {
        if options.frames.is_some_and(|limit| summary.frames >= limit) {
            break;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Control(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return summary,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return summary,
            }
        }

        // 2. Advance one frame
        let mut snapshot = engine.tick(options.frame_delta);
        summary.frames += 1;
        summary.events += snapshot.events.len();

        // 3. Forward events; a dropped receiver just means nobody is listening
        for event in snapshot.events.iter().cloned() {
            let _ = event_tx.send(event);
        }

        // 4. Store latest snapshot for polling
        snapshot.events.clear();
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Pace to wall-clock time if asked
        if options.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind: reset instead of spiralling to catch up
                next_frame_time = now;
            }
        }
    }

    tracing::info!(frames = summary.frames, events = summary.events, "simulation loop finished");
    summary
}
