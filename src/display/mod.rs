//! Terminal rendering for decisions and transfer plans
//!
//! Plain-string formatting helpers; the cycle status drives an ANSI color
//! band, and amounts render with 2-3 fraction digits.

use crate::models::{CycleStatus, DecisionInputs, DecisionOutput, Money, TransferInstruction};

/// ANSI color code for a cycle status
fn status_color(status: CycleStatus) -> &'static str {
    match status {
        CycleStatus::Stable => "\x1b[32m",   // Green
        CycleStatus::Tight => "\x1b[33m",    // Yellow
        CycleStatus::Risky => "\x1b[35m",    // Magenta
        CycleStatus::Critical => "\x1b[31m", // Red
        CycleStatus::Disabled => "\x1b[2m",  // Dim
    }
}

/// Format a status with its severity color
pub fn format_status(status: CycleStatus) -> String {
    format!("{}{}\x1b[0m", status_color(status), status)
}

/// Format a money amount right-aligned in a fixed-width cell
pub fn format_amount(amount: Money, width: usize) -> String {
    format!("{:>width$}", amount.to_string(), width = width)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Render a decision summary for the terminal
pub fn render_decision(inputs: &DecisionInputs, output: &DecisionOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Cycle {}  [{}]\n",
        inputs.cycle,
        format_status(output.status)
    ));
    out.push_str(&separator(36));
    out.push('\n');

    if !output.status.is_active() {
        out.push_str("Cycle predates system rollout; nothing to allocate.\n");
        return out;
    }

    let rows = [
        ("Total income", output.total_income),
        ("Extra freelance", output.extra_freelance),
        ("SIP", output.total_sip),
        ("Emergency", output.emergency_allocation),
        ("Fun", output.fun_allocation),
        ("Savings", output.savings_allocation),
        ("Salary buffer", output.final_salary_buffer),
        ("Spend this cycle", inputs.expenses),
    ];
    for (label, amount) in rows {
        out.push_str(&format!("{:<18}{}\n", label, format_amount(amount, 14)));
    }

    out
}

/// Render a transfer plan for the terminal
pub fn render_transfers(plan: &[TransferInstruction]) -> String {
    if plan.is_empty() {
        return "No transfers needed.\n".to_string();
    }

    let mut out = String::from("Transfers:\n");
    for transfer in plan {
        out.push_str(&format!(
            "  {:<10} -> {:<10} {}\n",
            transfer.from.to_string(),
            transfer.to.to_string(),
            format_amount(transfer.amount, 12)
        ));
    }
    out
}
