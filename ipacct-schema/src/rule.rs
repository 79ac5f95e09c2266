//! RuleRecord and Expression types.

use serde_json::Value;

/// One clause of a firewall rule.
///
/// Only the two clause kinds that matter for accounting are kept; every
/// other kind collapses into `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A match clause. `ip` is set only when the matched value is a plain string.
    Match { ip: Option<String> },
    /// A counter clause with its accumulated byte count.
    Counter { bytes: u64 },
    /// Any clause kind we do not interpret.
    Other,
}

impl Expression {
    /// Match clause against a single address.
    pub fn ip(addr: impl Into<String>) -> Self {
        Expression::Match {
            ip: Some(addr.into()),
        }
    }

    /// Counter clause with the given byte count.
    pub fn counter(bytes: u64) -> Self {
        Expression::Counter { bytes }
    }

    /// Decode a single entry of a rule's `expr` array.
    ///
    /// Never fails: missing or oddly-shaped fields degrade to "no match" or
    /// zero bytes.
    pub fn from_json(value: &Value) -> Self {
        if let Some(m) = value.get("match") {
            let ip = m.get("right").and_then(Value::as_str).map(str::to_owned);
            return Expression::Match { ip };
        }
        if let Some(c) = value.get("counter") {
            let bytes = c.get("bytes").and_then(Value::as_u64).unwrap_or(0);
            return Expression::Counter { bytes };
        }
        Expression::Other
    }
}

/// A firewall rule as seen by the aggregator: its chain and its clauses in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRecord {
    pub chain: String,
    pub expressions: Vec<Expression>,
}

impl RuleRecord {
    /// Create a rule record.
    pub fn new(chain: impl Into<String>, expressions: Vec<Expression>) -> Self {
        Self {
            chain: chain.into(),
            expressions,
        }
    }

    /// Shorthand for the common "match one address, count bytes" rule.
    pub fn counted(chain: impl Into<String>, ip: impl Into<String>, bytes: u64) -> Self {
        Self::new(chain, vec![Expression::ip(ip), Expression::counter(bytes)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // --- Expression decoding ---

    #[test]
    fn test_match_with_string_right() {
        let value = json!({
            "match": {
                "op": "==",
                "left": {"payload": {"protocol": "ip", "field": "daddr"}},
                "right": "10.0.0.5"
            }
        });
        assert_eq!(Expression::from_json(&value), Expression::ip("10.0.0.5"));
    }

    #[test]
    fn test_match_with_set_right_has_no_ip() {
        let value = json!({
            "match": {
                "op": "==",
                "left": {"payload": {"protocol": "ip", "field": "saddr"}},
                "right": {"set": ["10.0.0.1", "10.0.0.2"]}
            }
        });
        assert_eq!(Expression::from_json(&value), Expression::Match { ip: None });
    }

    #[test]
    fn test_match_with_range_right_has_no_ip() {
        let value = json!({"match": {"right": {"range": ["10.0.0.1", "10.0.0.9"]}}});
        assert_eq!(Expression::from_json(&value), Expression::Match { ip: None });
    }

    #[test]
    fn test_match_with_numeric_right_has_no_ip() {
        let value = json!({"match": {"right": 443}});
        assert_eq!(Expression::from_json(&value), Expression::Match { ip: None });
    }

    #[test]
    fn test_match_without_right() {
        let value = json!({"match": {"op": "=="}});
        assert_eq!(Expression::from_json(&value), Expression::Match { ip: None });
    }

    #[test]
    fn test_counter_with_bytes() {
        let value = json!({"counter": {"packets": 12, "bytes": 3400}});
        assert_eq!(Expression::from_json(&value), Expression::counter(3400));
    }

    #[test]
    fn test_counter_without_bytes_is_zero() {
        let value = json!({"counter": {"packets": 12}});
        assert_eq!(Expression::from_json(&value), Expression::counter(0));
    }

    #[test]
    fn test_counter_with_negative_bytes_is_zero() {
        let value = json!({"counter": {"bytes": -5}});
        assert_eq!(Expression::from_json(&value), Expression::counter(0));
    }

    #[test]
    fn test_counter_max_bytes() {
        let value = json!({"counter": {"bytes": u64::MAX}});
        assert_eq!(Expression::from_json(&value), Expression::counter(u64::MAX));
    }

    #[test]
    fn test_unknown_expression_is_other() {
        assert_eq!(Expression::from_json(&json!({"accept": null})), Expression::Other);
        assert_eq!(
            Expression::from_json(&json!({"jump": {"target": "COUNTERSIN_lan"}})),
            Expression::Other
        );
    }

    #[test]
    fn test_non_object_expression_is_other() {
        assert_eq!(Expression::from_json(&json!("counter")), Expression::Other);
        assert_eq!(Expression::from_json(&json!(null)), Expression::Other);
    }

    // --- RuleRecord constructors ---

    #[test]
    fn test_counted_rule() {
        let rule = RuleRecord::counted("COUNTERSIN_lan", "10.0.0.5", 100);
        assert_eq!(rule.chain, "COUNTERSIN_lan");
        assert_eq!(
            rule.expressions,
            vec![Expression::ip("10.0.0.5"), Expression::counter(100)]
        );
    }
}
