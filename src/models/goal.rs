//! Financial goal model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{GoalHorizon, HouseholdId, MemberId, RecordId};

/// A savings goal with a deadline and a priority rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier.
    pub id: RecordId,
    /// Owning household.
    pub household_id: HouseholdId,
    /// Member pursuing the goal.
    #[serde(default)]
    pub member_id: Option<MemberId>,
    /// Display name (e.g. "Umrah").
    pub name: String,
    /// Short- or long-term.
    #[serde(rename = "type")]
    pub horizon: GoalHorizon,
    /// Amount needed.
    pub target_amount: f64,
    /// Amount set aside so far.
    #[serde(default)]
    pub current_amount: f64,
    /// Date the goal should be met.
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    /// Rank among goals; 1 is the most urgent.
    #[serde(default)]
    pub priority: Option<u8>,
    /// Emoji icon.
    #[serde(default)]
    pub icon: Option<String>,
    /// Whether the goal has been reached and closed.
    #[serde(default)]
    pub is_completed: bool,
}

impl Goal {
    /// Percentage of the target reached, capped at 100 (0 when the target
    /// is 0).
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target_amount == 0.0_f64 {
            return 0.0_f64;
        }
        (self.current_amount / self.target_amount * 100.0_f64).min(100.0_f64)
    }
}
