//! Planning cycle representation
//!
//! A cycle is one calendar month's financial planning period, identified by
//! a year-month label such as "2026-06".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents one monthly planning cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cycle {
    pub year: i32,
    pub month: u32,
}

impl Cycle {
    /// Create a cycle for the given year and month
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Get the cycle containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the current cycle
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Get the first day of this cycle
    ///
    /// Date-gated rules (system rollout, SIP activation) compare against
    /// this date.
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Get the next cycle
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous cycle
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a cycle label in "YYYY-MM" format
    pub fn parse(s: &str) -> Result<Self, CycleParseError> {
        let s = s.trim();

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(CycleParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = parts[0]
            .parse()
            .map_err(|_| CycleParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| CycleParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(CycleParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for Cycle {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for Cycle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for cycle parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for CycleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleParseError::InvalidFormat(s) => write!(f, "Invalid cycle format: {}", s),
            CycleParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for CycleParseError {}
