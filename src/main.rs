use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cycleplan::cli::{handle_config_command, handle_plan_command, PlanArgs};

#[derive(Parser)]
#[command(
    name = "cycleplan",
    version,
    about = "Monthly cash-flow decision engine",
    long_about = "cycleplan takes one month's income, expense, and balance \
                  snapshot and decides how the money should be split across \
                  a systematic investment, an emergency reserve, spending, \
                  and savings, then derives the account transfers needed to \
                  realize the split."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the allocation decision and transfer plan for a cycle
    Plan(PlanArgs),

    /// Show the active policy configuration
    Config {
        /// Path to a JSON policy override file
        #[arg(long)]
        policy: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan(args) => handle_plan_command(&args)?,
        Commands::Config { policy } => handle_config_command(policy.as_ref())?,
    }

    Ok(())
}
