//! Counter aggregation.
//!
//! Accounting chains are recognised purely by name prefix:
//! `COUNTERSIN_*` rules count download bytes for the matched address,
//! `COUNTERSOUT_*` rules count upload bytes.

use std::collections::HashMap;

use ipacct_schema::{Expression, RuleRecord};

/// Chain name prefix of inbound (download) accounting chains.
pub const INBOUND_CHAIN_PREFIX: &str = "COUNTERSIN_";

/// Chain name prefix of outbound (upload) accounting chains.
pub const OUTBOUND_CHAIN_PREFIX: &str = "COUNTERSOUT_";

/// Traffic direction of an accounting chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Download,
    Upload,
}

impl Direction {
    /// Classify a chain by its name prefix (case-sensitive).
    pub fn from_chain(chain: &str) -> Option<Self> {
        if chain.starts_with(INBOUND_CHAIN_PREFIX) {
            Some(Direction::Download)
        } else if chain.starts_with(OUTBOUND_CHAIN_PREFIX) {
            Some(Direction::Upload)
        } else {
            None
        }
    }
}

/// Download and upload byte totals for one address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IpTally {
    pub download: u64,
    pub upload: u64,
}

impl IpTally {
    pub fn new(download: u64, upload: u64) -> Self {
        Self { download, upload }
    }

    /// Add bytes to the field for `direction`, saturating at `u64::MAX`.
    pub fn add(&mut self, direction: Direction, bytes: u64) {
        let field = match direction {
            Direction::Download => &mut self.download,
            Direction::Upload => &mut self.upload,
        };
        *field = field.saturating_add(bytes);
    }
}

/// Per-address tallies. Key order is meaningless; see `report::render`.
pub type AggregateResult = HashMap<String, IpTally>;

/// The address and byte count a single rule contributes, if any.
///
/// The last counter and the last plain-string match in the rule win.
fn resolve(rule: &RuleRecord) -> Option<(&str, u64)> {
    let mut ip = None;
    let mut bytes = 0;

    for expr in &rule.expressions {
        match expr {
            Expression::Match { ip: Some(addr) } => ip = Some(addr.as_str()),
            Expression::Counter { bytes: b } => bytes = *b,
            Expression::Match { ip: None } | Expression::Other => {}
        }
    }

    ip.filter(|addr| !addr.is_empty()).map(|addr| (addr, bytes))
}

/// Sum rule counters into per-address download/upload tallies.
///
/// Rules outside the accounting chains, and rules that resolve no address,
/// contribute nothing. Never fails.
pub fn aggregate(records: &[RuleRecord]) -> AggregateResult {
    let mut totals = AggregateResult::new();

    for rule in records {
        let Some(direction) = Direction::from_chain(&rule.chain) else {
            continue;
        };
        let Some((ip, bytes)) = resolve(rule) else {
            continue;
        };

        totals.entry(ip.to_string()).or_default().add(direction, bytes);
    }

    totals
}

/// Fold `other` into `into`, summing tallies of addresses present in both.
pub fn merge(into: &mut AggregateResult, other: AggregateResult) {
    for (ip, tally) in other {
        let entry = into.entry(ip).or_default();
        entry.add(Direction::Download, tally.download);
        entry.add(Direction::Upload, tally.upload);
    }
}
