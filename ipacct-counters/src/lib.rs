//! Per-IP traffic accounting over firewall rule counters.
//!
//! This crate provides:
//! - Aggregation of rule records into per-IP download/upload tallies
//! - Rendering of the tallies as `<ip> <download> <upload>` lines
//!
//! Nothing here performs I/O beyond writing to a caller-supplied sink.

pub mod aggregate;
pub mod report;

pub use aggregate::{
    aggregate, merge, AggregateResult, Direction, IpTally, INBOUND_CHAIN_PREFIX,
    OUTBOUND_CHAIN_PREFIX,
};
pub use report::{render, write_report};
