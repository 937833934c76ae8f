//! # Eight Queens
//!
//! Place eight queens on an 8×8 board one typed position at a time, then
//! check whether any two of them attack each other.
//!
//! ## Modules
//!
//! - [`game`] — Core logic: coordinates, board, validation, placement session
//! - [`ui`] — Plain-text board rendering and a terminal entry screen
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
