//! Report rendering.
//!
//! One line per address, `<ip> <download> <upload>`, sorted by the address
//! string. Downstream accounting jobs parse these lines, so the format has
//! no header and no extra fields.

use std::io::{self, Write};

use crate::aggregate::AggregateResult;

/// Render tallies as report lines, sorted lexicographically by address.
pub fn render(result: &AggregateResult) -> Vec<String> {
    let mut entries: Vec<_> = result.iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    entries
        .into_iter()
        .map(|(ip, tally)| format!("{} {} {}", ip, tally.download, tally.upload))
        .collect()
}

/// Write the rendered report, one `\n`-terminated line per address.
pub fn write_report<W: Write>(result: &AggregateResult, mut out: W) -> io::Result<()> {
    for line in render(result) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, IpTally};
    use ipacct_schema::RuleRecord;

    fn result_of(entries: &[(&str, u64, u64)]) -> AggregateResult {
        entries
            .iter()
            .map(|&(ip, down, up)| (ip.to_string(), IpTally::new(down, up)))
            .collect()
    }

    // --- render ---

    #[test]
    fn test_render_sample() {
        let records = vec![
            RuleRecord::counted("COUNTERSIN_x", "10.0.0.5", 100),
            RuleRecord::counted("COUNTERSOUT_x", "10.0.0.5", 50),
            RuleRecord::counted("COUNTERSIN_y", "10.0.0.2", 10),
        ];
        assert_eq!(
            render(&aggregate(&records)),
            vec!["10.0.0.2 10 0", "10.0.0.5 100 50"]
        );
    }

    #[test]
    fn test_render_empty() {
        assert!(render(&AggregateResult::new()).is_empty());
    }

    #[test]
    fn test_render_sorts_lexicographically_not_numerically() {
        let result = result_of(&[
            ("2.0.0.1", 1, 1),
            ("10.0.0.1", 2, 2),
            ("192.168.1.10", 3, 3),
            ("192.168.1.9", 4, 4),
        ]);
        assert_eq!(
            render(&result),
            vec![
                "10.0.0.1 2 2",
                "192.168.1.10 3 3",
                "192.168.1.9 4 4",
                "2.0.0.1 1 1",
            ]
        );
    }

    #[test]
    fn test_render_zero_tally() {
        let result = result_of(&[("10.0.0.9", 0, 0)]);
        assert_eq!(render(&result), vec!["10.0.0.9 0 0"]);
    }

    #[test]
    fn test_render_max_values() {
        let result = result_of(&[("10.0.0.1", u64::MAX, u64::MAX)]);
        assert_eq!(
            render(&result),
            vec!["10.0.0.1 18446744073709551615 18446744073709551615"]
        );
    }

    // --- write_report ---

    #[test]
    fn test_write_report_lines() {
        let result = result_of(&[("10.0.0.5", 100, 50), ("10.0.0.2", 10, 0)]);
        let mut out = Vec::new();

        write_report(&result, &mut out).expect("write");

        assert_eq!(String::from_utf8(out).unwrap(), "10.0.0.2 10 0\n10.0.0.5 100 50\n");
    }

    #[test]
    fn test_write_report_empty_writes_nothing() {
        let mut out = Vec::new();
        write_report(&AggregateResult::new(), &mut out).expect("write");
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_report_propagates_io_error() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = result_of(&[("10.0.0.1", 1, 1)]);
        let err = write_report(&result, BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
