//! Core types and definitions for the STRAFE flight simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input state, frame snapshots, events, constants
//! and tunable configuration. It has no dependency on any renderer or
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
