//! ipacct CLI.
//!
//! This crate wires the nftables collaborators, the counter aggregator and
//! the report together behind the `ipacct` binary: argument parsing,
//! logging, exit codes and the single `account` pass.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod logger;

pub use cli::{parse_from, Cli, CliError, DEFAULT_LOG_FILE, SUPPORTED_FAMILIES};
pub use commands::{execute_account, AccountResult, CommandError, CommandResult};
pub use logger::{FileLogger, Level, Logger, MockLogger, NullLogger, StderrLogger, TeeLogger};
