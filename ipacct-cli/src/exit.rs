//! Exit codes for the ipacct CLI.

use crate::commands::CommandError;

/// Exit code constants.
pub mod codes {
    /// Report written. A failed counter reset still exits with this code.
    pub const SUCCESS: i32 = 0;
    /// Invalid arguments.
    pub const INVALID_ARGS: i32 = 1;
    /// Report could not be written to stdout.
    pub const OUTPUT_ERROR: i32 = 2;
    /// Rules could not be listed or decoded.
    pub const SOURCE_ERROR: i32 = 3;
}

/// Map a CommandError to an exit code.
pub fn exit_code(error: &CommandError) -> i32 {
    match error {
        CommandError::InvalidArgument(_) => codes::INVALID_ARGS,
        CommandError::Output(_) => codes::OUTPUT_ERROR,
        CommandError::Source(_) => codes::SOURCE_ERROR,
    }
}
