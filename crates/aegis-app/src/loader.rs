//! Scenario and config files.

use std::fs;
use std::path::Path;

use aegis_core::config::SimConfig;
use aegis_core::scenario::Scenario;

use crate::error::AppError;

fn read(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a scenario file. Validation happens when the engine is built.
pub fn load_scenario(path: &Path) -> Result<Scenario, AppError> {
    let scenario = Scenario::from_json_str(&read(path)?)?;
    tracing::info!(
        path = %path.display(),
        entities = scenario.entities.len(),
        "scenario loaded"
    );
    Ok(scenario)
}

/// Parse and validate a (possibly partial) config file, or use defaults.
pub fn load_config(path: Option<&Path>) -> Result<SimConfig, AppError> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let config: SimConfig = serde_json::from_str(&read(path)?)?;
    config.validate()?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}
