//! ipacct binary.
//!
//! Entry point for the `ipacct` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use ipacct_cli::exit::{codes, exit_code};
use ipacct_cli::{execute_account, Cli, FileLogger, Logger, StderrLogger, TeeLogger};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(codes::INVALID_ARGS as u8);
        }
    };

    let logger = TeeLogger::new(
        StderrLogger::new(cli.level()),
        FileLogger::new(&cli.log_file),
    );
    let nft = cli.nft_cli();
    let stdout = io::stdout();

    match execute_account(&cli, &nft, &nft, stdout.lock(), &logger) {
        Ok(result) => {
            logger.debug(&format!(
                "Reported {} addresses from {} rules (counters reset: {})",
                result.ips_reported, result.rules_seen, result.counters_reset
            ));
            ExitCode::from(codes::SUCCESS as u8)
        }
        Err(e) => {
            logger.error(&e.to_string());
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}
