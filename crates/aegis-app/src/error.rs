//! Driver errors. Everything here happens before or around the frame loop;
//! the engine itself does not fail once constructed.

use std::path::PathBuf;

use thiserror::Error;

use aegis_core::error::{ConfigError, ScenarioError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),

    #[error("simulation thread: {0}")]
    Thread(String),
}
