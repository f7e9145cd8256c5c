//! Decision inputs and outputs
//!
//! One cycle's income/expense/balance snapshot goes in; an allocation
//! decision and a list of transfer instructions come out. Nothing here is
//! persisted; both are recomputed from scratch whenever an input changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::{AccountBalances, AccountRole};
use super::cycle::Cycle;
use super::money::Money;

/// One monthly cycle's snapshot, fully populated by the caller
///
/// `salary` is the current cycle's actual; `freelance` is the *previous*
/// cycle's actual (freelance income lands with a one-month lag).
/// `expenses` is informational and does not steer the allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionInputs {
    /// Cycle this snapshot belongs to
    pub cycle: Cycle,
    /// Current-cycle salary actual
    pub salary: Money,
    /// Previous-cycle freelance actual
    pub freelance: Money,
    /// Total spend this cycle (informational)
    pub expenses: Money,
    /// Emergency reserve balance, tracked against the reserve target
    pub emergency_reserve: Money,
    /// Balances of the three planning accounts
    pub balances: AccountBalances,
}

/// Health of the cycle as decided by the allocation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    /// Income covers the full plan
    Stable,
    /// Low income, but expenses and buffer are covered
    Tight,
    /// Income below the expense cap plus minimum buffer
    Risky,
    /// No income this cycle
    Critical,
    /// Cycle predates system rollout; nothing is computed
    Disabled,
}

impl CycleStatus {
    /// True for every state except `Disabled`
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "Stable"),
            Self::Tight => write!(f, "Tight"),
            Self::Risky => write!(f, "Risky"),
            Self::Critical => write!(f, "Critical"),
            Self::Disabled => write!(f, "Disabled"),
        }
    }
}

/// How one cycle's money should be split
///
/// All amounts are non-negative. When `status` is `Disabled` every field
/// is zero and no transfers are planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOutput {
    pub total_income: Money,
    pub extra_freelance: Money,
    pub total_sip: Money,
    pub emergency_allocation: Money,
    pub fun_allocation: Money,
    pub savings_allocation: Money,
    pub final_salary_buffer: Money,
    pub status: CycleStatus,
}

impl DecisionOutput {
    /// All-zero output for cycles before system rollout
    pub fn disabled() -> Self {
        Self {
            status: CycleStatus::Disabled,
            ..Default::default()
        }
    }
}

impl Default for DecisionOutput {
    fn default() -> Self {
        Self {
            total_income: Money::zero(),
            extra_freelance: Money::zero(),
            total_sip: Money::zero(),
            emergency_allocation: Money::zero(),
            fun_allocation: Money::zero(),
            savings_allocation: Money::zero(),
            final_salary_buffer: Money::zero(),
            status: CycleStatus::Disabled,
        }
    }
}

/// A directive to move money between two account roles
///
/// Informational output only; executing the movement is the caller's
/// business. Amounts are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInstruction {
    pub from: AccountRole,
    pub to: AccountRole,
    pub amount: Money,
}

impl TransferInstruction {
    /// Create a transfer instruction
    pub fn new(from: AccountRole, to: AccountRole, amount: Money) -> Self {
        Self { from, to, amount }
    }
}

impl fmt::Display for TransferInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}
