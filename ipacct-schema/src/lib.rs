//! Rule record types for ipacct.
//!
//! This crate provides:
//! - `RuleRecord` / `Expression`, the firewall rule shape the aggregator consumes
//! - A decoder for the JSON document emitted by `nft -j list table ...`

pub mod rule;
pub mod ruleset;

pub use rule::{Expression, RuleRecord};
pub use ruleset::{parse_ruleset, RulesetError};
