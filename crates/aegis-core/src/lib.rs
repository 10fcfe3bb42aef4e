//! Core types and definitions for the AEGIS orbital defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! identifiers, orbital elements, per-kind entity state, the entity model,
//! events, control commands, configuration, errors, and snapshot views.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod scenario;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
