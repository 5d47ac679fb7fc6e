//! Insurance and takaful policy model.

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use super::{HouseholdId, InsuranceKind, MemberId, PremiumFrequency, RecordId};

/// An insurance or takaful policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    /// Unique identifier.
    pub id: RecordId,
    /// Owning household.
    pub household_id: HouseholdId,
    /// Insured member.
    #[serde(default)]
    pub member_id: Option<MemberId>,
    /// Display name (e.g. "Medical Card").
    pub name: String,
    /// Coverage type.
    #[serde(rename = "type")]
    pub kind: InsuranceKind,
    /// Insurer or takaful operator.
    pub provider: String,
    /// Premium per charge period.
    pub premium: f64,
    /// Charge period of the premium.
    #[serde(default)]
    pub frequency: PremiumFrequency,
    /// Sum covered.
    #[serde(default)]
    pub coverage: Option<f64>,
    /// Next renewal date.
    #[serde(default)]
    pub renewal_date: Option<NaiveDate>,
    /// Policy reference number.
    #[serde(default)]
    pub policy_number: Option<String>,
    /// Whether this is a Shariah-compliant takaful plan.
    #[serde(default)]
    pub is_takaful: bool,
    /// User notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Sum of premiums across all policies, as the dashboard shows it.
///
/// Premiums are added as recorded, regardless of their charge period.
#[inline]
#[must_use]
pub fn total_premiums(policies: &[Insurance]) -> f64 {
    policies.iter().map(|policy| policy.premium).sum()
}

/// Default look-ahead for [`upcoming_renewals`], in days.
pub const RENEWAL_WINDOW_DAYS: i64 = 60;

/// Policies renewing on or before `today + days_ahead`, earliest first.
///
/// Overdue renewals are included. Policies without a renewal date are not.
#[must_use]
pub fn upcoming_renewals(
    policies: &[Insurance],
    today: NaiveDate,
    days_ahead: i64,
) -> Vec<&Insurance> {
    let horizon = TimeDelta::try_days(days_ahead)
        .and_then(|window| today.checked_add_signed(window))
        .unwrap_or(if days_ahead < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        });
    let mut due: Vec<&Insurance> = policies
        .iter()
        .filter(|policy| policy.renewal_date.is_some_and(|date| date <= horizon))
        .collect();
    due.sort_by_key(|policy| policy.renewal_date);
    due
}
