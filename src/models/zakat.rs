//! Yearly zakat record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::HouseholdId;
use crate::zakat::{ZakatBases, ZakatBreakdown};

/// One household's zakat assessment for a year.
///
/// The household ID and year together identify the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatRecord {
    /// Owning household.
    pub household_id: HouseholdId,
    /// Assessment year.
    pub year: i32,
    /// Yearly income base.
    #[serde(default)]
    pub income_yearly: f64,
    /// Zakat on income.
    #[serde(default)]
    pub income_zakat: f64,
    /// Savings base.
    #[serde(default)]
    pub savings_amount: f64,
    /// Zakat on savings.
    #[serde(default)]
    pub savings_zakat: f64,
    /// Gold base.
    #[serde(default)]
    pub gold_value: f64,
    /// Zakat on gold.
    #[serde(default)]
    pub gold_zakat: f64,
    /// Investment base.
    #[serde(default)]
    pub investment_value: f64,
    /// Zakat on investments.
    #[serde(default)]
    pub investment_zakat: f64,
    /// Total zakat due for the year.
    #[serde(default)]
    pub total_due: f64,
    /// Total zakat paid so far.
    #[serde(default)]
    pub total_paid: f64,
    /// Date of the most recent payment.
    #[serde(default)]
    pub last_paid_date: Option<NaiveDate>,
}

impl ZakatRecord {
    /// Builds an unpaid record from a computed breakdown.
    #[must_use]
    pub fn from_breakdown(
        household_id: HouseholdId,
        year: i32,
        bases: &ZakatBases,
        breakdown: &ZakatBreakdown,
    ) -> Self {
        Self {
            household_id,
            year,
            income_yearly: bases.income,
            income_zakat: breakdown.income_zakat,
            savings_amount: bases.savings,
            savings_zakat: breakdown.savings_zakat,
            gold_value: bases.gold,
            gold_zakat: breakdown.gold_zakat,
            investment_value: bases.investments,
            investment_zakat: breakdown.investment_zakat,
            total_due: breakdown.total_due,
            total_paid: 0.0_f64,
            last_paid_date: None,
        }
    }

    /// Returns `true` once payments cover the amount due.
    #[inline]
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.total_paid >= self.total_due
    }

    /// Amount still to pay (negative when overpaid).
    #[inline]
    #[must_use]
    pub fn outstanding(&self) -> f64 {
        self.total_due - self.total_paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_breakdown_is_unpaid() {
        let bases = ZakatBases {
            income: 100_800.0,
            savings: 35_500.0,
            gold: 15_000.0,
            investments: 133_500.0,
        };
        let breakdown = crate::zakat::compute_zakat(
            bases.income,
            bases.savings,
            bases.gold,
            bases.investments,
        );
        let record = ZakatRecord::from_breakdown(HouseholdId::from("h"), 2025, &bases, &breakdown);
        assert_eq!(record.year, 2025);
        assert!((record.savings_zakat - 887.5).abs() < 1e-9);
        assert!(record.gold_zakat.abs() < f64::EPSILON);
        assert!(!record.is_paid());
        assert!((record.outstanding() - record.total_due).abs() < f64::EPSILON);
    }

    #[test]
    fn deserialize_paid_record() {
        let json = r#"{
            "householdId": "demo-household",
            "year": 2025,
            "incomeZakat": 2520,
            "savingsZakat": 887.5,
            "goldZakat": 375,
            "investmentZakat": 842.5,
            "totalDue": 4625,
            "totalPaid": 4625
        }"#;
        let record: ZakatRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_paid());
        assert!(record.outstanding().abs() < f64::EPSILON);
        assert!(record.income_yearly.abs() < f64::EPSILON);
    }
}
