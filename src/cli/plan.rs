//! Plan CLI command
//!
//! Bridges clap argument parsing with the allocation engine and the
//! transfer planner.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::config::PolicyConfig;
use crate::display;
use crate::error::CycleplanResult;
use crate::models::{
    AccountBalances, Cycle, DecisionInputs, DecisionOutput, Money, TransferInstruction,
};
use crate::services::{AllocationEngine, TransferPlanner};

/// Arguments for the `plan` command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Planning cycle (e.g. "2026-06")
    #[arg(short, long)]
    pub cycle: String,

    /// Current-cycle salary actual
    #[arg(long)]
    pub salary: String,

    /// Previous-cycle freelance actual
    #[arg(long, default_value = "0")]
    pub freelance: String,

    /// Total spend this cycle (informational)
    #[arg(long, default_value = "0")]
    pub expenses: String,

    /// Emergency reserve balance
    #[arg(long, default_value = "0")]
    pub emergency: String,

    /// Primary (salary-landing) account balance
    #[arg(long, default_value = "0")]
    pub primary: String,

    /// Investment account balance
    #[arg(long, default_value = "0")]
    pub investment: String,

    /// Buffer account balance
    #[arg(long, default_value = "0")]
    pub buffer: String,

    /// Path to a JSON policy override file
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Emit the decision and transfer plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable plan report
#[derive(Debug, Serialize)]
struct PlanReport {
    inputs: DecisionInputs,
    decision: DecisionOutput,
    transfers: Vec<TransferInstruction>,
}

impl PlanArgs {
    fn to_inputs(&self) -> CycleplanResult<DecisionInputs> {
        Ok(DecisionInputs {
            cycle: Cycle::parse(&self.cycle)?,
            salary: Money::parse(&self.salary)?,
            freelance: Money::parse(&self.freelance)?,
            expenses: Money::parse(&self.expenses)?,
            emergency_reserve: Money::parse(&self.emergency)?,
            balances: AccountBalances::new(
                Money::parse(&self.primary)?,
                Money::parse(&self.investment)?,
                Money::parse(&self.buffer)?,
            ),
        })
    }
}

/// Load the policy named by the arguments, or the defaults
pub fn load_policy(path: Option<&PathBuf>) -> CycleplanResult<PolicyConfig> {
    match path {
        Some(path) => PolicyConfig::load(path),
        None => Ok(PolicyConfig::default()),
    }
}

/// Handle the `plan` command
pub fn handle_plan_command(args: &PlanArgs) -> CycleplanResult<()> {
    let policy = load_policy(args.policy.as_ref())?;
    let inputs = args.to_inputs()?;
    let cycle_date = inputs.cycle.start_date();

    let engine = AllocationEngine::new(policy);
    let decision = engine.compute(&inputs, cycle_date);

    let planner = TransferPlanner::new(policy);
    let transfers = planner.plan(&inputs, &decision);

    if args.json {
        let report = PlanReport {
            inputs,
            decision,
            transfers,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", display::render_decision(&inputs, &decision));
        println!();
        print!("{}", display::render_transfers(&transfers));
    }

    Ok(())
}

/// Handle the `config` command
pub fn handle_config_command(policy_path: Option<&PathBuf>) -> CycleplanResult<()> {
    let policy = load_policy(policy_path)?;
    println!("{}", serde_json::to_string_pretty(&policy)?);
    Ok(())
}
