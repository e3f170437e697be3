//! # Connect Four
//!
//! Connect Four in the terminal against a second human or a rule-based
//! computer opponent. The UI is built with Ratatui; the game core has no
//! dependency on it and runs headless.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, win detection, move engine, turn/drop state machine
//! - [`ai`]: Agent trait and the priority-rule computer opponent
//! - [`ui`]: Terminal UI: host loop, drop animation, game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
