//! Rule source and counter reset abstractions.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use ipacct_schema::{RuleRecord, RulesetError};
use thiserror::Error;

/// Errors from talking to nftables.
#[derive(Debug, Error)]
pub enum NftError {
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("nft output is not valid UTF-8")]
    InvalidOutput,

    #[error(transparent)]
    Ruleset(#[from] RulesetError),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (killed by signal)".to_string(),
    }
}

/// Something that can list the current accounting rules.
pub trait RuleSource: Send + Sync {
    /// Read every rule of the accounting table, in table order.
    fn list_rules(&self) -> Result<Vec<RuleRecord>, NftError>;
}

/// Something that can zero the accounting counters.
pub trait CounterReset: Send + Sync {
    fn reset_counters(&self) -> Result<(), NftError>;
}

/// Mock nftables for testing.
#[derive(Debug, Default)]
pub struct MockNft {
    rules: Vec<RuleRecord>,
    list_failure: Option<String>,
    reset_failure: Option<String>,
    reset_calls: AtomicUsize,
}

impl MockNft {
    /// Create a mock with an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that lists the given rules.
    pub fn with_rules(rules: Vec<RuleRecord>) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Make `list_rules` fail as if `nft` printed `stderr` and exited 1.
    pub fn fail_list(mut self, stderr: &str) -> Self {
        self.list_failure = Some(stderr.to_string());
        self
    }

    /// Make `reset_counters` fail as if `nft` printed `stderr` and exited 1.
    pub fn fail_reset(mut self, stderr: &str) -> Self {
        self.reset_failure = Some(stderr.to_string());
        self
    }

    /// Number of times `reset_counters` was called.
    pub fn reset_calls(&self) -> usize {
        self.reset_calls.load(Ordering::SeqCst)
    }
}

impl RuleSource for MockNft {
    fn list_rules(&self) -> Result<Vec<RuleRecord>, NftError> {
        match &self.list_failure {
            Some(stderr) => Err(NftError::CommandFailed {
                command: "nft -j list table ip mangle".to_string(),
                code: Some(1),
                stderr: stderr.clone(),
            }),
            None => Ok(self.rules.clone()),
        }
    }
}

impl CounterReset for MockNft {
    fn reset_counters(&self) -> Result<(), NftError> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);
        match &self.reset_failure {
            Some(stderr) => Err(NftError::CommandFailed {
                command: "nft reset counters table ip mangle".to_string(),
                code: Some(1),
                stderr: stderr.clone(),
            }),
            None => Ok(()),
        }
    }
}
