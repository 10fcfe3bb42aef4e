//! `aegis` driver binary.

use std::process;
use std::sync::{mpsc, Arc};

use aegis_app::cli::{self, Command, Options, USAGE};
use aegis_app::console::spawn_console;
use aegis_app::error::AppError;
use aegis_app::game_loop;
use aegis_app::loader::{load_config, load_scenario};
use aegis_app::state::AppState;
use aegis_app::telemetry::init_tracing;
use aegis_core::commands::ControlCommand;
use aegis_sim::SimulationEngine;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match cli::parse(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            eprint!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("{err}\n");
            eprint!("{USAGE}");
            process::exit(2);
        }
    };

    init_tracing("aegis");

    if let Err(err) = run(&options) {
        tracing::error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), AppError> {
    let scenario = load_scenario(&options.scenario)?;
    let config = load_config(options.config.as_deref())?;
    let mut engine = SimulationEngine::new(config, scenario)?;
    if let Some(multiplier) = options.speed {
        engine.queue_command(ControlCommand::SetSpeed { multiplier });
    }

    let state = Arc::new(AppState::new());
    let (event_tx, event_rx) = mpsc::channel();
    let (cmd_tx, handle) = game_loop::spawn_sim_loop(
        engine,
        options.loop_options(),
        state.latest_snapshot.clone(),
        event_tx,
    )?;
    if let Ok(mut tx_lock) = state.command_tx.lock() {
        *tx_lock = Some(cmd_tx);
    }
    // Not joined: it stays blocked on stdin after the loop finishes.
    let _console = spawn_console(state.clone(), options.frames.is_none())?;

    // Ends when the loop thread drops its sender.
    for event in event_rx {
        println!("{event}");
    }

    let summary = handle
        .join()
        .map_err(|_| AppError::Thread("simulation loop panicked".into()))?;

    let Some(snapshot) = state.snapshot() else {
        return Ok(());
    };
    if options.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let stats = &snapshot.stats;
        println!(
            "frames={} sim_time={:.1}s threats={} neutralized={} safe={} agents idle/tracking/recharging={}/{}/{} mean_power={:.1}%",
            summary.frames,
            snapshot.time.elapsed_secs,
            stats.threats_active,
            stats.neutralized,
            stats.debris_safe,
            stats.agents_idle,
            stats.agents_tracking,
            stats.agents_recharging,
            stats.mean_agent_power,
        );
    }
    Ok(())
}
