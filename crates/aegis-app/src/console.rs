//! Line-based control console on stdin.
//!
//! Each line is one command: `pause`, `resume`, `toggle`, `speed <X>` or
//! `quit`. Lines are forwarded to the simulation thread through `AppState`.

use std::io::BufRead;
use std::sync::Arc;
use std::thread::JoinHandle;

use aegis_core::commands::ControlCommand;

use crate::error::AppError;
use crate::state::{AppState, LoopCommand};

/// Parse one console line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<LoopCommand>, AppError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let command = match word {
        "pause" => LoopCommand::Control(ControlCommand::Pause),
        "resume" => LoopCommand::Control(ControlCommand::Resume),
        "toggle" => LoopCommand::Control(ControlCommand::TogglePlay),
        "speed" => {
            let raw = words
                .next()
                .ok_or_else(|| AppError::Usage("speed needs a value".into()))?;
            let multiplier = raw
                .parse()
                .map_err(|_| AppError::Usage(format!("invalid speed: {raw}")))?;
            LoopCommand::Control(ControlCommand::SetSpeed { multiplier })
        }
        "quit" | "q" => LoopCommand::Shutdown,
        other => return Err(AppError::Usage(format!("unknown console command: {other}"))),
    };
    Ok(Some(command))
}

/// Forward commands read from `reader` until EOF or the loop goes away.
///
/// With `shutdown_on_eof`, EOF stops the loop; an unbounded run would
/// otherwise have no way to end.
pub fn forward_lines(reader: impl BufRead, state: &AppState, shutdown_on_eof: bool) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!("{err}");
                continue;
            }
        };
        let stop = matches!(command, LoopCommand::Shutdown);
        if let Err(err) = state.send(command) {
            tracing::debug!("console closed: {err}");
            return;
        }
        if stop {
            return;
        }
    }

    if shutdown_on_eof {
        if let Err(err) = state.send(LoopCommand::Shutdown) {
            tracing::debug!("console closed: {err}");
        }
    }
}

/// Read stdin on a detached thread.
pub fn spawn_console(state: Arc<AppState>, shutdown_on_eof: bool) -> Result<JoinHandle<()>, AppError> {
    std::thread::Builder::new()
        .name("aegis-console".into())
        .spawn(move || forward_lines(std::io::stdin().lock(), &state, shutdown_on_eof))
        .map_err(|e| AppError::Thread(e.to_string()))
}
