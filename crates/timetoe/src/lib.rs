//! Timetoe - terminal tic-tac-toe with a time-travel move history.
//!
//! Game rules live in [`timetoe_rules`]; this crate is everything around
//! them.
//!
//! # Architecture
//!
//! - **TUI**: ratatui board, status line and move list
//! - **Replay**: headless command that plays a move list and prints it
//! - **View**: move-list model shared by both front ends
//! - **Config**: TOML settings, logging setup and the command line
//!
//! # Example
//!
//! ```
//! use timetoe::{MoveOrder, OutputFormat, ReplayRequest, parse_moves, run_replay};
//!
//! # fn example() -> anyhow::Result<()> {
//! let request = ReplayRequest {
//!     moves: parse_moves("0,1,4,3,8")?,
//!     jump: None,
//!     order: MoveOrder::Ascending,
//!     format: OutputFormat::Text,
//! };
//! let output = run_replay(&request)?;
//! assert!(output.contains("Winner: X"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod error;
pub mod logging;
mod replay;
pub mod tui;
mod view;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{DEFAULT_CONFIG_PATH, Settings};

// Crate-level exports - Errors
pub use error::{ConfigError, MoveParseError};

// Crate-level exports - Replay
pub use replay::{OutputFormat, ReplayRequest, parse_moves, run as run_replay};

// Crate-level exports - View model
pub use view::{HistoryEntry, MoveOrder, history_entries};

// Crate-level exports - TUI
pub use tui::{App, Focus};
