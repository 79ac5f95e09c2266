//! nftables collaborators for ipacct.
//!
//! This crate provides:
//! - `RuleSource` / `CounterReset` traits (with a mock implementation for testing)
//! - `NftCli`, which drives the `nft` command-line tool

pub mod command;
pub mod source;

pub use command::{NftCli, DEFAULT_FAMILY, DEFAULT_NFT_BINARY, DEFAULT_TABLE};
pub use source::{CounterReset, MockNft, NftError, RuleSource};
