//! Account roles and balance snapshots
//!
//! The engine never addresses accounts by name; every account is tagged
//! with the role it plays in the monthly plan.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Role an account plays in the monthly plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Salary-landing account; holds the expense cap and the minimum buffer
    Primary,
    /// Destination for systematic investment contributions
    Investment,
    /// Emergency buffer; drawn on when the primary account runs short
    Buffer,
}

impl AccountRole {
    /// Parse an account role from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "primary" | "salary" => Some(Self::Primary),
            "investment" | "sip" => Some(Self::Investment),
            "buffer" | "emergency" => Some(Self::Buffer),
            _ => None,
        }
    }

    /// All roles, in planning order
    pub const fn all() -> [AccountRole; 3] {
        [Self::Primary, Self::Investment, Self::Buffer]
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "Primary"),
            Self::Investment => write!(f, "Investment"),
            Self::Buffer => write!(f, "Buffer"),
        }
    }
}

/// Point-in-time balances of the three planning accounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalances {
    pub primary: Money,
    pub investment: Money,
    pub buffer: Money,
}

impl AccountBalances {
    /// Create a balance snapshot
    pub fn new(primary: Money, investment: Money, buffer: Money) -> Self {
        Self {
            primary,
            investment,
            buffer,
        }
    }

    /// Get the balance for a role
    pub fn get(&self, role: AccountRole) -> Money {
        match role {
            AccountRole::Primary => self.primary,
            AccountRole::Investment => self.investment,
            AccountRole::Buffer => self.buffer,
        }
    }
}
