//! Command-line arguments for the `aegis` driver.

use std::path::PathBuf;

use crate::error::AppError;
use crate::game_loop::LoopOptions;

pub const USAGE: &str = "aegis: headless AEGIS orbital defense simulation\n\
\n\
Usage:\n\
  aegis --scenario <path> [options]\n\
\n\
Options:\n\
  --scenario <path>     Scenario JSON file (required)\n\
  --config <path>       Config JSON file; missing fields use defaults\n\
  --frames <N>          Frames to run, 0 for no limit (default: 600)\n\
  --frame-rate <HZ>     Frames per real second (default: 60)\n\
  --speed <X>           Simulated seconds per real second (default: from config)\n\
  --realtime            Sleep between frames to match wall-clock time\n\
  --json                Print the final snapshot as JSON\n\
  -h, --help            Show this message\n\
\n\
While running, stdin accepts one command per line:\n\
  pause | resume | toggle | speed <X> | quit\n\
EOF stops a run started with --frames 0.\n\
\n\
Example:\n\
  aegis --scenario scenarios/iss_guardian.json --frames 3600 --speed 200\n";

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub scenario: PathBuf,
    pub config: Option<PathBuf>,
    pub frames: Option<u64>,
    pub frame_rate: f64,
    pub speed: Option<f64>,
    pub realtime: bool,
    pub json: bool,
}

impl Options {
    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            frame_delta: 1.0 / self.frame_rate,
            frames: self.frames,
            realtime: self.realtime,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse(args: &[String]) -> Result<Command, AppError> {
    let mut scenario = None;
    let mut config = None;
    let mut frames = Some(600);
    let mut frame_rate: f64 = 60.0;
    let mut speed = None;
    let mut realtime = false;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => return Ok(Command::Help),
            "--scenario" => scenario = Some(PathBuf::from(value(&mut iter, arg)?)),
            "--config" => config = Some(PathBuf::from(value(&mut iter, arg)?)),
            "--frames" => {
                let n: u64 = number(&mut iter, arg)?;
                frames = (n > 0).then_some(n);
            }
            "--frame-rate" => {
                frame_rate = number(&mut iter, arg)?;
                if !(frame_rate.is_finite() && frame_rate > 0.0) {
                    return Err(AppError::Usage(format!(
                        "--frame-rate must be positive, got {frame_rate}"
                    )));
                }
            }
            "--speed" => speed = Some(number(&mut iter, arg)?),
            "--realtime" => realtime = true,
            "--json" => json = true,
            other => return Err(AppError::Usage(format!("unknown argument: {other}"))),
        }
    }

    let scenario = scenario.ok_or_else(|| AppError::Usage("--scenario is required".into()))?;
    Ok(Command::Run(Options {
        scenario,
        config,
        frames,
        frame_rate,
        speed,
        realtime,
        json,
    }))
}

fn value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a String, AppError> {
    iter.next()
        .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

fn number<'a, T: std::str::FromStr>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<T, AppError> {
    let raw = value(iter, flag)?;
    raw.parse()
        .map_err(|_| AppError::Usage(format!("{flag}: not a number: {raw}")))
}
