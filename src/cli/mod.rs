//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer.

pub mod plan;

pub use plan::{handle_config_command, handle_plan_command, PlanArgs};
