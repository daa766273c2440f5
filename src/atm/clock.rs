use chrono::{Local, NaiveDateTime};

/// Display pattern for transaction timestamps: `DD/MM/YYYY HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Source of the instant stamped on new transactions
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        return Local::now().naive_local();
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        return self.0;
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    return timestamp.format(TIMESTAMP_FORMAT).to_string();
}
