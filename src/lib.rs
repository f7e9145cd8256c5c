//! cycleplan - Monthly cash-flow decision engine
//!
//! This library decides, for one monthly cycle, how money should be split
//! across a systematic investment plan (SIP), an emergency reserve,
//! discretionary spending, general savings, and a protected salary buffer,
//! and derives the minimal inter-account transfers needed to realize the
//! split given three real account balances.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Policy configuration (the tuning constants behind the rules)
//! - `error`: Custom error types
//! - `models`: Core data models (money, cycles, roles, decisions)
//! - `provider`: Cycle data provider seam (actuals and balances)
//! - `services`: The allocation engine and transfer planner
//! - `display`: Terminal rendering helpers
//! - `cli`: Command handlers for the binary
//!
//! Both services are pure, synchronous, and stateless; nothing is
//! persisted. The host recomputes the whole decision whenever any input
//! changes.
//!
//! # Example
//!
//! ```rust
//! use cycleplan::config::PolicyConfig;
//! use cycleplan::models::{AccountBalances, Cycle, DecisionInputs, Money};
//! use cycleplan::services::{AllocationEngine, TransferPlanner};
//!
//! let cycle = Cycle::new(2026, 6);
//! let inputs = DecisionInputs {
//!     cycle,
//!     salary: Money::from_major(18_000),
//!     freelance: Money::from_major(12_000),
//!     expenses: Money::from_major(9_000),
//!     emergency_reserve: Money::zero(),
//!     balances: AccountBalances::new(
//!         Money::from_major(18_000),
//!         Money::from_major(40_000),
//!         Money::from_major(5_000),
//!     ),
//! };
//!
//! let engine = AllocationEngine::new(PolicyConfig::default());
//! let decision = engine.compute(&inputs, cycle.start_date());
//!
//! let planner = TransferPlanner::new(PolicyConfig::default());
//! let transfers = planner.plan(&inputs, &decision);
//! assert!(!transfers.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod provider;
pub mod services;

pub use error::{CycleplanError, CycleplanResult};
