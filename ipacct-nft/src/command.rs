//! `nft` command-line driver.

use std::path::PathBuf;
use std::process::Command;

use ipacct_schema::{parse_ruleset, RuleRecord};

use crate::source::{CounterReset, NftError, RuleSource};

/// Default `nft` executable, resolved through `PATH`.
pub const DEFAULT_NFT_BINARY: &str = "nft";

/// Default address family of the accounting table.
pub const DEFAULT_FAMILY: &str = "ip";

/// Default accounting table name.
pub const DEFAULT_TABLE: &str = "mangle";

/// Reads and resets the counters of one nftables table via the `nft` CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftCli {
    binary: PathBuf,
    family: String,
    table: String,
}

impl Default for NftCli {
    fn default() -> Self {
        Self::new(DEFAULT_NFT_BINARY, DEFAULT_FAMILY, DEFAULT_TABLE)
    }
}

impl NftCli {
    pub fn new(
        binary: impl Into<PathBuf>,
        family: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            binary: binary.into(),
            family: family.into(),
            table: table.into(),
        }
    }

    /// Arguments for `nft -j list table <family> <table>`.
    pub fn list_args(&self) -> Vec<String> {
        vec![
            "-j".to_string(),
            "list".to_string(),
            "table".to_string(),
            self.family.clone(),
            self.table.clone(),
        ]
    }

    /// Arguments for `nft reset counters table <family> <table>`.
    pub fn reset_args(&self) -> Vec<String> {
        vec![
            "reset".to_string(),
            "counters".to_string(),
            "table".to_string(),
            self.family.clone(),
            self.table.clone(),
        ]
    }

    /// Run `nft` with `args` and return its stdout. Non-zero exit is an error.
    fn run(&self, args: &[String]) -> Result<Vec<u8>, NftError> {
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| NftError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(NftError::CommandFailed {
                command: format!("{} {}", self.binary.display(), args.join(" ")),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl RuleSource for NftCli {
    fn list_rules(&self) -> Result<Vec<RuleRecord>, NftError> {
        let stdout = self.run(&self.list_args())?;
        let json = String::from_utf8(stdout).map_err(|_| NftError::InvalidOutput)?;
        Ok(parse_ruleset(&json)?)
    }
}

impl CounterReset for NftCli {
    fn reset_counters(&self) -> Result<(), NftError> {
        self.run(&self.reset_args()).map(|_| ())
    }
}
