//! Transfer planner
//!
//! Turns an allocation decision into the movements needed between the three
//! planning accounts. A fixed, greedy two-pass settlement: first the primary
//! account is brought to its floor (pushing surplus out or pulling shortfall
//! from the buffer), then any unmet investment target is pulled from
//! whatever buffer remains. Shortfalls produce silent partial transfers;
//! callers needing shortfall visibility compare requested vs. realized sums
//! themselves.
//!
//! Only the investment target and the primary floor are settled by
//! transfers. The emergency, fun, and savings allocations are informational
//! targets for the user.

use crate::config::PolicyConfig;
use crate::models::{AccountRole, DecisionInputs, DecisionOutput, Money, TransferInstruction};

/// Planner that derives transfer instructions from an allocation decision
#[derive(Debug, Clone, Default)]
pub struct TransferPlanner {
    policy: PolicyConfig,
}

impl TransferPlanner {
    /// Create a planner with the given policy
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// Derive the transfers that realize the decision
    ///
    /// Emission order is fixed (Primary→Investment, Primary→Buffer,
    /// Buffer→Primary, Buffer→Investment) so plans are reproducible;
    /// the order carries no execution semantics. Returns an empty plan
    /// for disabled cycles.
    pub fn plan(
        &self,
        inputs: &DecisionInputs,
        output: &DecisionOutput,
    ) -> Vec<TransferInstruction> {
        if !output.status.is_active() {
            return Vec::new();
        }

        let mut plan = Vec::new();
        let mut available_buffer = inputs.balances.buffer;

        let primary_surplus = inputs.salary - self.policy.primary_floor();
        let mut pushed_to_investment = Money::zero();

        if primary_surplus.is_positive() {
            // Primary has more than it needs: investment first, buffer
            // takes the remainder.
            pushed_to_investment = primary_surplus.min(output.total_sip);
            push(
                &mut plan,
                AccountRole::Primary,
                AccountRole::Investment,
                pushed_to_investment,
            );
            push(
                &mut plan,
                AccountRole::Primary,
                AccountRole::Buffer,
                primary_surplus - pushed_to_investment,
            );
        } else if primary_surplus.is_negative() {
            // Primary is short: top it up from the buffer, capped by what
            // the buffer holds.
            let pulled = (-primary_surplus).min(available_buffer);
            push(&mut plan, AccountRole::Buffer, AccountRole::Primary, pulled);
            available_buffer -= pulled;
        }

        // Whatever the salary surplus did not cover of the investment
        // target comes out of the remaining buffer.
        let sip_remaining = output.total_sip - pushed_to_investment;
        if sip_remaining.is_positive() {
            push(
                &mut plan,
                AccountRole::Buffer,
                AccountRole::Investment,
                sip_remaining.min(available_buffer),
            );
        }

        plan
    }
}

/// Append an instruction, dropping zero or negative amounts
fn push(plan: &mut Vec<TransferInstruction>, from: AccountRole, to: AccountRole, amount: Money) {
    if amount.is_positive() {
        plan.push(TransferInstruction::new(from, to, amount));
    }
}
