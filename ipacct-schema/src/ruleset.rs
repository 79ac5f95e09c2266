//! Decoder for the nftables JSON ruleset document.
//!
//! `nft -j list table <family> <table>` emits an object with a single
//! `nftables` array whose entries are tagged by kind (`metainfo`, `table`,
//! `chain`, `rule`, ...). Only `rule` entries are turned into `RuleRecord`s.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::rule::{Expression, RuleRecord};

/// Errors from ruleset decoding.
#[derive(Debug, Error)]
pub enum RulesetError {
    #[error("invalid ruleset JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("ruleset document has no nftables array")]
    MissingRuleset,
}

#[derive(Debug, Deserialize)]
struct RulesetDocument {
    nftables: Option<Vec<RulesetEntry>>,
}

#[derive(Debug, Deserialize)]
struct RulesetEntry {
    #[serde(default)]
    rule: Option<Map<String, Value>>,
}

/// Decode an nftables JSON document into rule records, in document order.
///
/// A document without an `nftables` array (e.g. `{}`) is an error, so the
/// caller neither reports nor resets on output it cannot account for.
pub fn parse_ruleset(json: &str) -> Result<Vec<RuleRecord>, RulesetError> {
    let document: RulesetDocument = serde_json::from_str(json)?;
    let entries = document.nftables.ok_or(RulesetError::MissingRuleset)?;

    Ok(entries
        .iter()
        .filter_map(|entry| entry.rule.as_ref())
        .filter(|rule| !rule.is_empty())
        .map(decode_rule)
        .collect())
}

fn decode_rule(rule: &Map<String, Value>) -> RuleRecord {
    let chain = rule
        .get("chain")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let expressions: Vec<Expression> = rule
        .get("expr")
        .and_then(Value::as_array)
        .map(|exprs| exprs.iter().map(Expression::from_json).collect())
        .unwrap_or_default();

    RuleRecord::new(chain, expressions)
}
