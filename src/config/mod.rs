//! Configuration module for cycleplan
//!
//! Holds the policy configuration: the immutable tuning constants the
//! allocation and planning rules are parameterized by.

pub mod policy;

pub use policy::PolicyConfig;
