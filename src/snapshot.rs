//! Household snapshot documents.
//!
//! A snapshot is one JSON document holding every collection of a single
//! household, keyed the way the rows are stored (`camelCase` fields,
//! `type` discriminators). It is how real data enters the crate: the
//! document is parsed, validated and turned into an [`AppState`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MyDuitError, Result};
use crate::models::{
    BudgetSettings, Commitment, Faraid, Goal, Household, IncomeEntry, Insurance, Investment,
    Member, SavingsAccount, Transaction, ZakatRecord,
};
use crate::state::{AppState, UiPreferences};

/// Every collection of one household.
///
/// Missing collections default to empty; a missing budget split defaults
/// to 50/30/20.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSnapshot {
    /// The household itself.
    pub household: Household,
    /// Household members.
    #[serde(default)]
    pub members: Vec<Member>,
    /// Income entries.
    #[serde(default)]
    pub income: Vec<IncomeEntry>,
    /// Monthly commitments.
    #[serde(default)]
    pub commitments: Vec<Commitment>,
    /// Ledger, newest first.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Savings pots.
    #[serde(default)]
    pub savings: Vec<SavingsAccount>,
    /// Investment holdings.
    #[serde(default)]
    pub investments: Vec<Investment>,
    /// Insurance and takaful policies.
    #[serde(default)]
    pub insurance: Vec<Insurance>,
    /// Financial goals.
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Current zakat record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zakat: Option<ZakatRecord>,
    /// Estate plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faraid: Option<Faraid>,
    /// Needs/wants/savings split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_settings: Option<BudgetSettings>,
}

impl HouseholdSnapshot {
    /// Parses a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`MyDuitError::Serialization`] if the JSON is malformed or
    /// does not match the row shapes.
    #[inline]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(MyDuitError::from)
    }

    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MyDuitError::Serialization`] if a value cannot be encoded.
    #[inline]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(MyDuitError::from)
    }

    /// Validates the snapshot and turns it into application state.
    ///
    /// # Errors
    ///
    /// Returns [`MyDuitError::Validation`] naming the first rejected record.
    pub fn into_state(self, preferences: UiPreferences) -> Result<AppState> {
        let foreign = self.foreign_rows();
        if foreign > 0 {
            tracing::warn!(
                household = %self.household.id,
                foreign_rows = foreign,
                "snapshot has rows belonging to another household"
            );
        }
        AppState::from_snapshot(self, preferences).map_err(MyDuitError::from)
    }

    /// Number of rows whose `householdId` is not this snapshot's household.
    #[must_use]
    pub fn foreign_rows(&self) -> usize {
        let home = &self.household.id;
        self.members
            .iter()
            .map(|row| &row.household_id)
            .chain(self.income.iter().map(|row| &row.household_id))
            .chain(self.commitments.iter().map(|row| &row.household_id))
            .chain(self.transactions.iter().map(|row| &row.household_id))
            .chain(self.savings.iter().map(|row| &row.household_id))
            .chain(self.investments.iter().map(|row| &row.household_id))
            .chain(self.insurance.iter().map(|row| &row.household_id))
            .chain(self.goals.iter().map(|row| &row.household_id))
            .chain(self.zakat.iter().map(|row| &row.household_id))
            .chain(self.faraid.iter().map(|row| &row.household_id))
            .chain(self.budget_settings.iter().map(|row| &row.household_id))
            .filter(|id| *id != home)
            .count()
    }
}

/// Reads, parses and validates the snapshot at `path`.
///
/// # Errors
///
/// Returns [`MyDuitError::SnapshotRead`] if the file cannot be read, and
/// the parse or validation error otherwise.
pub fn load(path: &Path, preferences: UiPreferences) -> Result<AppState> {
    let json = fs::read_to_string(path).map_err(|source| MyDuitError::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = HouseholdSnapshot::from_json(&json)?;
    tracing::debug!(
        path = %path.display(),
        household = %snapshot.household.id,
        income_rows = snapshot.income.len(),
        commitment_rows = snapshot.commitments.len(),
        "loaded household snapshot"
    );
    snapshot.into_state(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;

    const MINIMAL: &str = r#"{
        "household": { "id": "h-1", "name": "Keluarga Lim" }
    }"#;

    #[test]
    fn minimal_snapshot_defaults() {
        let snapshot = HouseholdSnapshot::from_json(MINIMAL).unwrap();
        assert_eq!(snapshot.household.currency, "MYR");
        assert!(snapshot.income.is_empty());
        assert!(snapshot.budget_settings.is_none());

        let state = snapshot.into_state(UiPreferences::default()).unwrap();
        assert_eq!(state.budget_settings().needs_percentage, 50);
        assert_eq!(state.summary().halal_percentage, 100.0);
    }

    #[test]
    fn parses_rows_with_type_keys() {
        let json = r#"{
            "household": { "id": "h-1", "name": "Keluarga Lim" },
            "income": [
                { "id": "i-1", "householdId": "h-1", "type": "Gaji", "amount": 6000, "date": "2025-01-25" }
            ],
            "commitments": [
                { "id": "c-1", "householdId": "h-1", "name": "Loan Kereta", "amount": 850,
                  "dueDate": 15, "totalDebt": 45000, "paidAmount": 12750, "category": "loan" }
            ],
            "investments": [
                { "id": "v-1", "householdId": "h-1", "name": "Public Gold", "type": "gold",
                  "currentValue": 15000, "costBasis": 12000 }
            ]
        }"#;
        let state = HouseholdSnapshot::from_json(json)
            .unwrap()
            .into_state(UiPreferences::default())
            .unwrap();
        let summary = state.summary();
        assert!((summary.total_income - 6_000.0).abs() < f64::EPSILON);
        assert!((summary.remaining_debt - 32_250.0).abs() < f64::EPSILON);
        assert!((state.zakat_bases().gold - 15_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_row_is_rejected() {
        let json = r#"{
            "household": { "id": "h-1", "name": "Keluarga Lim" },
            "commitments": [
                { "id": "c-9", "householdId": "h-1", "name": "Astro", "amount": 120, "dueDate": 40 }
            ]
        }"#;
        let err = HouseholdSnapshot::from_json(json)
            .unwrap()
            .into_state(UiPreferences::default())
            .unwrap_err();
        match err {
            MyDuitError::Validation(ValidationError::InRecord { collection, id, .. }) => {
                assert_eq!(collection, "commitments");
                assert_eq!(id, "c-9");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn counts_foreign_rows() {
        let json = r#"{
            "household": { "id": "h-1", "name": "Keluarga Lim" },
            "savings": [
                { "id": "s-1", "householdId": "h-1", "name": "Emergency Fund", "currentAmount": 100, "targetAmount": 1000 },
                { "id": "s-2", "householdId": "h-2", "name": "ASB", "currentAmount": 50, "targetAmount": 500 }
            ]
        }"#;
        let snapshot = HouseholdSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.foreign_rows(), 1);
        // Foreign rows are kept.
        let state = snapshot.into_state(UiPreferences::default()).unwrap();
        assert!((state.summary().total_savings - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn demo_snapshot_has_no_foreign_rows() {
        assert_eq!(crate::demo::sample_snapshot().foreign_rows(), 0);
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = HouseholdSnapshot::from_json("{").unwrap_err();
        assert!(matches!(err, MyDuitError::Serialization(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("household.json");
        fs::write(&path, MINIMAL).unwrap();
        let state = load(&path, UiPreferences::default()).unwrap();
        assert_eq!(state.household().name, "Keluarga Lim");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json"), UiPreferences::default()).unwrap_err();
        assert!(matches!(err, MyDuitError::SnapshotRead { .. }));
    }

    #[test]
    fn json_round_trip() {
        let snapshot = AppState::demo(UiPreferences::default()).to_snapshot();
        let parsed = HouseholdSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
