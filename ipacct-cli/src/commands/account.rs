//! Account command orchestration.
//!
//! One accounting pass: list the rules, aggregate and print the per-IP
//! totals, then zero the counters so the next pass starts fresh.

use std::io::Write;

use ipacct_counters::{aggregate, write_report};
use ipacct_nft::{CounterReset, RuleSource};

use crate::cli::Cli;
use crate::logger::Logger;

use super::{CommandError, CommandResult};

/// Result of one accounting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountResult {
    /// Rules read from the table, accounting or not.
    pub rules_seen: usize,
    /// Addresses written to the report.
    pub ips_reported: usize,
    /// Whether the counters were zeroed after reporting.
    pub counters_reset: bool,
}

/// Execute one accounting pass.
///
/// A listing failure aborts before anything is printed or reset. A reset
/// failure is logged and leaves the already-written report valid.
pub fn execute_account<S, R, W, L>(
    args: &Cli,
    source: &S,
    reset: &R,
    out: W,
    logger: &L,
) -> CommandResult<AccountResult>
where
    S: RuleSource,
    R: CounterReset,
    W: Write,
    L: Logger,
{
    args.validate()?;

    logger.debug(&format!(
        "Listing table {} {} via {}",
        args.family,
        args.table,
        args.nft.display()
    ));
    let records = source.list_rules()?;

    let totals = aggregate(&records);
    logger.info(&format!(
        "Aggregated {} rules into {} addresses",
        records.len(),
        totals.len()
    ));

    write_report(&totals, out).map_err(CommandError::Output)?;

    let counters_reset = if args.no_reset {
        logger.info("Leaving counters untouched (--no-reset)");
        false
    } else {
        match reset.reset_counters() {
            Ok(()) => {
                logger.debug("Counters reset");
                true
            }
            Err(e) => {
                logger.error(&format!("failed to reset counters: {}", e));
                false
            }
        }
    };

    Ok(AccountResult {
        rules_seen: records.len(),
        ips_reported: totals.len(),
        counters_reset,
    })
}
