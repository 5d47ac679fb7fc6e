//! Monthly commitment model (loans, cards, bills).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CommitmentCategory, HouseholdId, MemberId, RecordId, default_true};

/// A recurring monthly obligation.
///
/// When `total_debt` is absent the commitment is a plain bill or
/// subscription rather than a debt instrument; it still counts towards
/// monthly commitments but not towards outstanding debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    /// Unique identifier.
    pub id: RecordId,
    /// Owning household.
    pub household_id: HouseholdId,
    /// Member responsible for the payment.
    #[serde(default)]
    pub member_id: Option<MemberId>,
    /// Display name (e.g. "Loan Kereta").
    pub name: String,
    /// Monthly instalment.
    pub amount: f64,
    /// Day of the month the instalment is due (1-31).
    pub due_date: u8,
    /// Icon name used by the dashboard.
    #[serde(default)]
    pub icon: Option<String>,
    /// Original principal, if this is a debt.
    #[serde(default)]
    pub total_debt: Option<f64>,
    /// Amount repaid so far.
    #[serde(default)]
    pub paid_amount: f64,
    /// Annual interest rate percentage.
    #[serde(default)]
    pub interest_rate: Option<f64>,
    /// First instalment date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Final instalment date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether the commitment is still running.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Grouping used by the dashboard.
    #[serde(default)]
    pub category: Option<CommitmentCategory>,
}

impl Commitment {
    /// Returns `true` if this commitment carries an outstanding principal.
    #[inline]
    #[must_use]
    pub const fn is_debt(&self) -> bool {
        self.total_debt.is_some()
    }

    /// Repayment progress as a percentage of the principal.
    ///
    /// Zero for non-debt commitments and for a zero principal.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self.total_debt {
            Some(total) if total != 0.0_f64 => self.paid_amount / total * 100.0_f64,
            Some(_) | None => 0.0_f64,
        }
    }

    /// Principal still owed, or `None` for non-debt commitments.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Option<f64> {
        self.total_debt.map(|total| total - self.paid_amount)
    }

    /// Days from `today_day` (day of the month) to the next due day.
    ///
    /// A due day already passed this month wraps over a 30-day month.
    #[inline]
    #[must_use]
    pub const fn days_until_due(&self, today_day: u8) -> u8 {
        if self.due_date >= today_day {
            self.due_date - today_day
        } else {
            MONTH_DAYS
                .saturating_add(self.due_date)
                .saturating_sub(today_day)
        }
    }

    /// Returns `true` if the instalment falls due within [`URGENT_DAYS`].
    #[inline]
    #[must_use]
    pub const fn is_urgent(&self, today_day: u8) -> bool {
        self.days_until_due(today_day) <= URGENT_DAYS
    }
}

/// Month length used when a due day wraps into next month.
const MONTH_DAYS: u8 = 30;

/// Commitments due within this many days are flagged urgent.
pub const URGENT_DAYS: u8 = 5;

/// The debt to clear next: the one with the least principal left.
///
/// Only commitments with a positive `total_debt` are considered. On a tie
/// the earlier row wins.
#[must_use]
pub fn next_debt_target(commitments: &[Commitment]) -> Option<&Commitment> {
    commitments
        .iter()
        .filter(|row| row.total_debt.is_some_and(|total| total > 0.0_f64))
        .min_by(|a, b| {
            let left = a.remaining().unwrap_or_default();
            let right = b.remaining().unwrap_or_default();
            left.total_cmp(&right)
        })
}
