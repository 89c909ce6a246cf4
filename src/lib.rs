//! # Connect Four
//!
//! Console Connect Four for two humans, or a human against a computer that
//! looks one move ahead.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, marks, outcome
//! - [`policy`] — Move selection: interactive and heuristic players
//! - [`session`] — Game loop, mode selection, replay
//! - [`ui`] — Console input/output and text rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod policy;
pub mod session;
pub mod ui;
