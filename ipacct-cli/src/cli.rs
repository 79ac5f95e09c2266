//! CLI argument parsing for ipacct.
//!
//! The accounting chain naming (`COUNTERSIN_*` / `COUNTERSOUT_*`) is fixed;
//! the flags only say where the table and the `nft` tool live and where
//! errors are logged.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ipacct_nft::{NftCli, DEFAULT_FAMILY, DEFAULT_NFT_BINARY, DEFAULT_TABLE};
use thiserror::Error;

use crate::logger::Level;

/// Default error log file.
pub const DEFAULT_LOG_FILE: &str = "/opt/gw/log/ip_accounting.log";

/// Address families nftables tables can belong to.
pub const SUPPORTED_FAMILIES: &[&str] = &["ip", "ip6", "inet", "arp", "bridge", "netdev"];

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("family must be one of ip, ip6, inet, arp, bridge, netdev; got {0:?}")]
    UnsupportedFamily(String),

    #[error("table name must not be empty")]
    EmptyTable,
}

/// Per-IP traffic accounting: print download/upload bytes per address from
/// nftables counters, then reset the counters.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ipacct")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the nft executable.
    #[arg(long, default_value = DEFAULT_NFT_BINARY)]
    pub nft: PathBuf,

    /// Address family of the accounting table.
    #[arg(long, default_value = DEFAULT_FAMILY)]
    pub family: String,

    /// Name of the accounting table.
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// File that error records are appended to.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Print the report but leave the counters untouched.
    #[arg(long, default_value_t = false)]
    pub no_reset: bool,

    /// Increase stderr verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validate the arguments.
    pub fn validate(&self) -> Result<(), CliError> {
        if !SUPPORTED_FAMILIES.contains(&self.family.as_str()) {
            return Err(CliError::UnsupportedFamily(self.family.clone()));
        }
        if self.table.trim().is_empty() {
            return Err(CliError::EmptyTable);
        }
        Ok(())
    }

    /// The `nft` driver for the configured table.
    pub fn nft_cli(&self) -> NftCli {
        NftCli::new(&self.nft, &self.family, &self.table)
    }

    /// Stderr log level.
    pub fn level(&self) -> Level {
        Level::from_count(self.verbose)
    }
}

/// Parse CLI arguments from an iterator (for testing).
pub fn parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
