//! Cycle data provider seam
//!
//! The engine consumes one cycle's actuals and balances from a collaborator
//! that owns the underlying records. Only the interface is defined here,
//! plus an in-memory implementation suitable for tests and the CLI.

use std::collections::HashMap;

use crate::models::{AccountBalances, AccountRole, Cycle, DecisionInputs, Money};

/// Source of per-cycle actuals and account balances
///
/// Lookups never fail; a missing category or account yields zero. Account
/// access is by role, with the role-to-account mapping resolved by the
/// implementation.
pub trait CycleDataProvider {
    /// Actual amount recorded for categories whose name contains the given
    /// fragment (case-insensitive) in the given cycle
    fn cycle_actual(&self, cycle: Cycle, category_contains: &str) -> Money;

    /// Total spend recorded for the cycle
    fn cycle_total_spend(&self, cycle: Cycle) -> Money;

    /// Current balance of the account holding the given role
    fn account_balance(&self, role: AccountRole) -> Money;
}

/// In-memory snapshot provider
///
/// Backs the provider trait with plain maps: category actuals keyed by
/// cycle, named account balances, and a role-to-account-name mapping using
/// the same case-insensitive substring convention the account names follow.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotProvider {
    actuals: HashMap<Cycle, Vec<(String, Money)>>,
    spend: HashMap<Cycle, Money>,
    accounts: Vec<(String, Money)>,
    roles: HashMap<AccountRole, String>,
}

impl MemorySnapshotProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a category actual for a cycle
    pub fn with_actual(mut self, cycle: Cycle, category: &str, amount: Money) -> Self {
        self.actuals
            .entry(cycle)
            .or_default()
            .push((category.to_string(), amount));
        self
    }

    /// Record the total spend for a cycle
    pub fn with_spend(mut self, cycle: Cycle, amount: Money) -> Self {
        self.spend.insert(cycle, amount);
        self
    }

    /// Record a named account balance
    pub fn with_account(mut self, name: &str, balance: Money) -> Self {
        self.accounts.push((name.to_string(), balance));
        self
    }

    /// Map a role to an account-name fragment
    pub fn map_role(mut self, role: AccountRole, name_contains: &str) -> Self {
        self.roles.insert(role, name_contains.to_lowercase());
        self
    }
}

impl CycleDataProvider for MemorySnapshotProvider {
    fn cycle_actual(&self, cycle: Cycle, category_contains: &str) -> Money {
        let needle = category_contains.to_lowercase();
        self.actuals
            .get(&cycle)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(name, _)| name.to_lowercase().contains(&needle))
                    .map(|(_, amount)| *amount)
                    .sum()
            })
            .unwrap_or_default()
    }

    fn cycle_total_spend(&self, cycle: Cycle) -> Money {
        self.spend.get(&cycle).copied().unwrap_or_default()
    }

    fn account_balance(&self, role: AccountRole) -> Money {
        let Some(needle) = self.roles.get(&role) else {
            return Money::zero();
        };
        self.accounts
            .iter()
            .find(|(name, _)| name.to_lowercase().contains(needle))
            .map(|(_, balance)| *balance)
            .unwrap_or_default()
    }
}

impl DecisionInputs {
    /// Build one cycle's snapshot from a provider
    ///
    /// Salary comes from the current cycle and freelance from the previous
    /// one (freelance income lands with a one-month lag). The emergency
    /// reserve is read from the buffer-role account. Provider amounts are
    /// already three-decimal fixed point, so no further rounding happens
    /// here.
    pub fn gather(provider: &impl CycleDataProvider, cycle: Cycle) -> Self {
        let balances = AccountBalances::new(
            provider.account_balance(AccountRole::Primary),
            provider.account_balance(AccountRole::Investment),
            provider.account_balance(AccountRole::Buffer),
        );

        Self {
            cycle,
            salary: provider.cycle_actual(cycle, "salary"),
            freelance: provider.cycle_actual(cycle.prev(), "freelance"),
            expenses: provider.cycle_total_spend(cycle),
            emergency_reserve: balances.buffer,
            balances,
        }
    }
}
