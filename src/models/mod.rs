//! Core data models for cycleplan
//!
//! This module contains the data structures the decision engine operates
//! on: money, planning cycles, account roles, and the engine's input and
//! output records.

pub mod account;
pub mod cycle;
pub mod decision;
pub mod money;

pub use account::{AccountBalances, AccountRole};
pub use cycle::Cycle;
pub use decision::{CycleStatus, DecisionInputs, DecisionOutput, TransferInstruction};
pub use money::Money;
