//! Dashboard summary aggregation.
//!
//! [`compute_summary`] folds the income, commitment, savings and investment
//! collections into the figures every dashboard view reads. It is a pure
//! linear scan: no validation, no rounding, no clamping. Non-finite inputs
//! flow through to the output; rejecting them is the job of
//! [`crate::validate`].

use serde::{Deserialize, Serialize};

use crate::models::{Commitment, IncomeEntry, Investment, SavingsAccount};

/// Percentage reported when nothing is held, or for a full ratio.
const FULL_PERCENT: f64 = 100.0;

/// Derived household figures.
///
/// Recomputed from the current collections on every read; it has no
/// identity of its own and is never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of income amounts.
    pub total_income: f64,
    /// Sum of monthly commitment instalments.
    pub total_commitments: f64,
    /// Sum of savings balances.
    pub total_savings: f64,
    /// Sum of investment market values.
    pub total_investments: f64,
    /// Sum of principals across debt commitments.
    pub total_debt: f64,
    /// Sum of amounts repaid across commitments.
    pub total_paid_debt: f64,
    /// `total_debt - total_paid_debt`; negative when overpaid.
    pub remaining_debt: f64,
    /// Repaid share of the principal in percent; 0 without debt.
    pub debt_progress: f64,
    /// `total_income - total_commitments`.
    pub cash_flow: f64,
    /// `total_savings + total_investments - remaining_debt`.
    pub net_worth: f64,
    /// Halal share of investment value in percent; 100 without holdings.
    pub halal_percentage: f64,
}

impl Summary {
    /// Returns `true` when more has been repaid than was borrowed.
    #[inline]
    #[must_use]
    pub fn is_overpaid(&self) -> bool {
        self.remaining_debt < 0.0_f64
    }

    /// Debt progress clamped to `0..=100`, for progress rings and bars.
    #[inline]
    #[must_use]
    pub fn debt_progress_display(&self) -> f64 {
        self.debt_progress.clamp(0.0_f64, FULL_PERCENT)
    }
}

/// Computes the dashboard [`Summary`] from the household collections.
///
/// Commitments without a principal count as zero debt, and every
/// commitment's `paid_amount` counts towards repaid debt. Ratios with a
/// zero denominator take their defined value: 0 for debt progress, 100 for
/// the halal percentage.
#[must_use]
pub fn compute_summary(
    income: &[IncomeEntry],
    commitments: &[Commitment],
    savings: &[SavingsAccount],
    investments: &[Investment],
) -> Summary {
    let total_income: f64 = income.iter().map(|entry| entry.amount).sum();
    let total_commitments: f64 = commitments.iter().map(|item| item.amount).sum();
    let total_savings: f64 = savings.iter().map(|pot| pot.current_amount).sum();
    let total_investments: f64 = investments.iter().map(|holding| holding.current_value).sum();
    let total_debt: f64 = commitments
        .iter()
        .map(|item| item.total_debt.unwrap_or(0.0_f64))
        .sum();
    let total_paid_debt: f64 = commitments.iter().map(|item| item.paid_amount).sum();
    let halal_investments: f64 = investments
        .iter()
        .filter(|holding| holding.is_halal)
        .map(|holding| holding.current_value)
        .sum();

    let remaining_debt = total_debt - total_paid_debt;
    let debt_progress = if total_debt > 0.0_f64 {
        total_paid_debt / total_debt * FULL_PERCENT
    } else {
        0.0_f64
    };
    let halal_percentage = if total_investments > 0.0_f64 {
        halal_investments / total_investments * FULL_PERCENT
    } else {
        FULL_PERCENT
    };

    let summary = Summary {
        total_income,
        total_commitments,
        total_savings,
        total_investments,
        total_debt,
        total_paid_debt,
        remaining_debt,
        debt_progress,
        cash_flow: total_income - total_commitments,
        net_worth: total_savings + total_investments - remaining_debt,
        halal_percentage,
    };
    tracing::debug!(
        income_rows = income.len(),
        commitment_rows = commitments.len(),
        savings_rows = savings.len(),
        investment_rows = investments.len(),
        net_worth = summary.net_worth,
        "computed summary"
    );
    summary
}
