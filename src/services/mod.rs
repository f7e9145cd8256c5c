//! Service layer for cycleplan
//!
//! The service layer holds the decision logic: the allocation engine that
//! splits a cycle's income, and the transfer planner that turns the split
//! into account movements. Both are pure, synchronous, and reentrant.

pub mod allocation;
pub mod planner;

pub use allocation::AllocationEngine;
pub use planner::TransferPlanner;
