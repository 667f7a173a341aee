// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal client for goban: command parsing, board rendering,
//! configuration and the interactive session loop.

pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{parse_command, parse_vertex, Command};
pub use config::CliConfig;
pub use session::run_session;
