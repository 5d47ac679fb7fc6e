//! Ledger transaction model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{HouseholdId, MemberId, RecordId, TransactionKind};

/// A single spending or receipt line in the household ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier.
    pub id: RecordId,
    /// Owning household.
    pub household_id: HouseholdId,
    /// Member who made the transaction.
    #[serde(default)]
    pub member_id: Option<MemberId>,
    /// Description (e.g. "Groceries - Lotus").
    pub description: String,
    /// Signed amount; expenses are negative.
    pub amount: f64,
    /// Transaction date (yyyy-MM-dd).
    pub date: NaiveDate,
    /// Spending category (e.g. "food", "transport").
    pub category: String,
    /// Expense or income.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// User notes.
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_expense() {
        let json = r#"{
            "id": "1",
            "description": "Groceries - Lotus",
            "amount": -250,
            "date": "2025-01-10",
            "category": "food",
            "type": "expense",
            "householdId": "demo-household"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert!((tx.amount + 250.0).abs() < f64::EPSILON);
        assert!(tx.member_id.is_none());
    }

    #[test]
    fn missing_type_fails() {
        let json = r#"{
            "id": "1",
            "description": "x",
            "amount": 1,
            "date": "2025-01-10",
            "category": "food",
            "householdId": "h"
        }"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
