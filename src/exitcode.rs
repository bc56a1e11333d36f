//! Process exit codes (BSD sysexits.h compatible where not fixed by the CLI contract)

/// Successful termination
pub const OK: i32 = 0;

/// API error, failed job, bad arguments or missing configuration
pub const FAILURE: i32 = 1;

/// Endpoint unreachable: no HTTP response at all
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;
