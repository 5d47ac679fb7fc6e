//! Savings account model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{HouseholdId, MemberId, RecordId};

/// A savings pot accumulating towards a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAccount {
    /// Unique identifier.
    pub id: RecordId,
    /// Owning household.
    pub household_id: HouseholdId,
    /// Member who owns the pot.
    #[serde(default)]
    pub member_id: Option<MemberId>,
    /// Display name (e.g. "Tabung Haji").
    pub name: String,
    /// Balance saved so far.
    #[serde(default)]
    pub current_amount: f64,
    /// Balance being saved towards.
    pub target_amount: f64,
    /// Date the target should be reached.
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Emoji icon.
    #[serde(default)]
    pub icon: Option<String>,
}

impl SavingsAccount {
    /// Percentage of the target already saved (0 when the target is 0).
    ///
    /// Not capped: a pot past its target reports more than 100.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target_amount == 0.0_f64 {
            return 0.0_f64;
        }
        self.current_amount / self.target_amount * 100.0_f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_and_progress() {
        let json = r#"{
            "id": "1",
            "householdId": "h",
            "name": "Emergency Fund",
            "currentAmount": 15000,
            "targetAmount": 30000
        }"#;
        let pot: SavingsAccount = serde_json::from_str(json).unwrap();
        assert!((pot.progress() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn current_amount_defaults_to_zero() {
        let json = r#"{"id": "1", "householdId": "h", "name": "ASB", "targetAmount": 50000}"#;
        let pot: SavingsAccount = serde_json::from_str(json).unwrap();
        assert!(pot.current_amount.abs() < f64::EPSILON);
    }

    #[test]
    fn zero_target_progress_is_zero() {
        let json = r#"{"id": "1", "householdId": "h", "name": "x", "currentAmount": 10, "targetAmount": 0}"#;
        let pot: SavingsAccount = serde_json::from_str(json).unwrap();
        assert!(pot.progress().abs() < f64::EPSILON);
    }
}
