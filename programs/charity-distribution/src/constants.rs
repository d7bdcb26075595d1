//! Program-wide constants.

/// Number of monthly tranches every schedule is divided into.
pub const DURATION_MONTHS: u8 = 12;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds between two consecutive distributions of the same schedule.
pub const DISTRIBUTION_INTERVAL: i64 = 30 * SECONDS_PER_DAY;

/// Max schedules processed per `execute_distribution_batch` call.
pub const MAX_BATCH_EXECUTE: usize = 5;

/// Accounts per batch entry: schedule, vault, charity token account, donor index.
pub const BATCH_ACCOUNTS_PER_SCHEDULE: usize = 4;

/// Max simultaneously active schedules tracked per donor.
pub const MAX_DONOR_SCHEDULES: usize = 32;

/// USD token prices are fixed-point integers with this many decimals.
pub const USD_PRICE_DECIMALS: u8 = 8;
