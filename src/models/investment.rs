//! Investment holding model.

use serde::{Deserialize, Serialize};

use super::{HouseholdId, InvestmentKind, MemberId, RecordId, default_true};

/// A single investment holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Unique identifier.
    pub id: RecordId,
    /// Owning household.
    pub household_id: HouseholdId,
    /// Member who owns the holding.
    #[serde(default)]
    pub member_id: Option<MemberId>,
    /// Display name (e.g. "Public Gold").
    pub name: String,
    /// Asset class.
    #[serde(rename = "type")]
    pub kind: InvestmentKind,
    /// Current market value.
    pub current_value: f64,
    /// Amount originally invested.
    pub cost_basis: f64,
    /// Whether the holding is Shariah-compliant.
    #[serde(default = "default_true")]
    pub is_halal: bool,
    /// Managing institution.
    #[serde(default)]
    pub institution: Option<String>,
    /// User notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Investment {
    /// Unrealised gain (negative for a loss).
    #[inline]
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.current_value - self.cost_basis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halal_defaults_to_true() {
        let json = r#"{
            "id": "2",
            "householdId": "h",
            "name": "Public Gold",
            "type": "gold",
            "currentValue": 15000,
            "costBasis": 12000
        }"#;
        let holding: Investment = serde_json::from_str(json).unwrap();
        assert!(holding.is_halal);
        assert_eq!(holding.kind, InvestmentKind::Gold);
        assert!((holding.gain() - 3_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_non_halal() {
        let json = r#"{
            "id": "9",
            "householdId": "h",
            "name": "Brewery Shares",
            "type": "stock",
            "currentValue": 1000,
            "costBasis": 1500,
            "isHalal": false
        }"#;
        let holding: Investment = serde_json::from_str(json).unwrap();
        assert!(!holding.is_halal);
        assert!((holding.gain() + 500.0).abs() < f64::EPSILON);
    }
}
