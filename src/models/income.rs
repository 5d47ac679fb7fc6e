//! Income entry model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{HouseholdId, MemberId, RecordId, default_true};

/// A single income receipt (salary, commission, side income).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
    /// Unique identifier.
    pub id: RecordId,
    /// Owning household.
    pub household_id: HouseholdId,
    /// Member who earned it.
    #[serde(default)]
    pub member_id: Option<MemberId>,
    /// Free-form income type (e.g. "Gaji", "Komisyen").
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount received. Signed; adjustments may be negative.
    pub amount: f64,
    /// Date received (yyyy-MM-dd).
    pub date: NaiveDate,
    /// Whether the income repeats every month.
    #[serde(default = "default_true")]
    pub is_recurring: bool,
    /// User notes.
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_income_defaults_recurring() {
        let json = r#"{
            "id": "1",
            "householdId": "demo-household",
            "memberId": "suami",
            "type": "Gaji",
            "amount": 5500,
            "date": "2025-01-25"
        }"#;
        let income: IncomeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(income.kind, "Gaji");
        assert!(income.is_recurring);
        assert!((income.amount - 5500.0).abs() < f64::EPSILON);
        assert_eq!(income.date, NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
    }

    #[test]
    fn serialize_uses_type_key() {
        let income = IncomeEntry {
            id: RecordId::from("2"),
            household_id: HouseholdId::from("h"),
            member_id: None,
            kind: "Komisyen".to_owned(),
            amount: 800.0,
            date: NaiveDate::from_ymd_opt(2025, 1, 28).unwrap(),
            is_recurring: false,
            notes: None,
        };
        let json = serde_json::to_value(&income).unwrap();
        assert_eq!(json["type"], "Komisyen");
        assert_eq!(json["isRecurring"], false);
    }
}
