//! Policy configuration for the decision engine
//!
//! The tuning constants behind the allocation rules: baseline income
//! amounts, the expense cap, the emergency reserve target, and the rollout
//! gate dates. Immutable for the life of a process; not user-editable at
//! runtime. Passed explicitly into the engine so the rules can be tested
//! against alternative parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CycleplanError, CycleplanResult};
use crate::models::Money;

fn default_base_salary() -> Money {
    Money::from_major(18_000)
}

fn default_base_freelance() -> Money {
    Money::from_major(12_000)
}

fn default_base_sip() -> Money {
    Money::from_major(10_000)
}

fn default_expense_cap() -> Money {
    Money::from_major(10_000)
}

fn default_emergency_target() -> Money {
    Money::from_major(60_000)
}

fn default_min_buffer() -> Money {
    Money::from_major(2_000)
}

fn default_system_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
}

fn default_sip_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
}

/// Tuning constants for the allocation and planning rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Expected monthly salary baseline
    #[serde(default = "default_base_salary")]
    pub base_salary: Money,

    /// Expected monthly freelance baseline; income above it is "extra"
    #[serde(default = "default_base_freelance")]
    pub base_freelance: Money,

    /// Standard monthly systematic investment contribution
    #[serde(default = "default_base_sip")]
    pub base_sip: Money,

    /// Monthly spending allowance kept in the primary account
    #[serde(default = "default_expense_cap")]
    pub expense_cap: Money,

    /// Emergency reserve level at which contributions divert to investment
    #[serde(default = "default_emergency_target")]
    pub emergency_target: Money,

    /// Minimum balance always left in the primary account
    #[serde(default = "default_min_buffer")]
    pub min_buffer: Money,

    /// First cycle the system is active; earlier cycles are disabled
    #[serde(default = "default_system_start")]
    pub system_start: NaiveDate,

    /// First cycle that funds the systematic investment
    #[serde(default = "default_sip_start")]
    pub sip_start: NaiveDate,
}

impl PolicyConfig {
    /// Amount the primary account should hold each cycle
    pub fn primary_floor(&self) -> Money {
        self.expense_cap + self.min_buffer
    }

    /// Load a policy from a JSON file
    ///
    /// Missing fields fall back to their defaults, so a partial override
    /// file is valid.
    pub fn load(path: &std::path::Path) -> CycleplanResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| CycleplanError::Config(format!("invalid policy file: {}", e)))
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            base_salary: default_base_salary(),
            base_freelance: default_base_freelance(),
            base_sip: default_base_sip(),
            expense_cap: default_expense_cap(),
            emergency_target: default_emergency_target(),
            min_buffer: default_min_buffer(),
            system_start: default_system_start(),
            sip_start: default_sip_start(),
        }
    }
}
