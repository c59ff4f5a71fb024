//! # Connect Four
//!
//! Two-player Connect Four on a 7x6 gravity grid. The engine validates and
//! applies moves and detects wins incrementally from the chip just placed.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn engine
//! - [`ui`] — Frontends: line-based text prompts and a Ratatui terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
