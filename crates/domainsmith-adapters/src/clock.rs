//! Clock adapters for migration timestamps.

use chrono::{Local, NaiveDateTime};
use domainsmith_core::application::ports::Clock;

/// Laravel's migration prefix: `2026_10_19_120000`.
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Wall clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn migration_timestamp(&self) -> String {
        Local::now().format(MIGRATION_TIMESTAMP_FORMAT).to_string()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn migration_timestamp(&self) -> String {
        self.at.format(MIGRATION_TIMESTAMP_FORMAT).to_string()
    }
}
