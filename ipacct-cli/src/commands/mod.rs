//! Command orchestration.

pub mod account;

pub use account::{execute_account, AccountResult};

use std::io;

use crate::cli::CliError;
use ipacct_nft::NftError;
use thiserror::Error;

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CliError),

    #[error("failed to list rules: {0}")]
    Source(#[from] NftError),

    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;
