//! Zakat liability calculation.
//!
//! Savings, gold and investments are each gated on the nisab threshold:
//! a category below nisab owes nothing. Income is charged at the flat rate
//! with no nisab gate. The breakdown also reports whether the combined
//! base reaches nisab; that check is separate from the per-category gates
//! and does not change any amount.

use serde::{Deserialize, Serialize};

use crate::models::{Investment, InvestmentKind};
use crate::summary::Summary;

/// Nisab threshold in ringgit (roughly the value of 85 g of gold).
pub const NISAB_MYR: f64 = 23_000.0;

/// Flat zakat rate (2.5%).
pub const ZAKAT_RATE: f64 = 0.025;

/// Months in a zakat year, used to annualise monthly income.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Nisab threshold and rate applied by the calculator.
///
/// Nisab tracks the gold price, so callers can override the snapshot
/// value in [`NISAB_MYR`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatConfig {
    /// Minimum base, in ringgit, for a gated category to owe zakat.
    pub nisab: f64,
    /// Fraction of the base owed.
    pub rate: f64,
}

impl Default for ZakatConfig {
    #[inline]
    fn default() -> Self {
        Self {
            nisab: NISAB_MYR,
            rate: ZAKAT_RATE,
        }
    }
}

/// Yearly amounts zakat is assessed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatBases {
    /// Yearly income.
    pub income: f64,
    /// Savings held.
    pub savings: f64,
    /// Gold held.
    pub gold: f64,
    /// Investments held.
    pub investments: f64,
}

impl ZakatBases {
    /// Derives bases from the dashboard figures.
    ///
    /// Monthly income is annualised, gold-type holdings form the gold base
    /// and every other holding forms the investment base, so gold is not
    /// counted twice.
    #[must_use]
    pub fn from_snapshot(summary: &Summary, investments: &[Investment]) -> Self {
        let gold: f64 = investments
            .iter()
            .filter(|holding| holding.kind == InvestmentKind::Gold)
            .map(|holding| holding.current_value)
            .sum();
        Self {
            income: summary.total_income * MONTHS_PER_YEAR,
            savings: summary.total_savings,
            gold,
            investments: summary.total_investments - gold,
        }
    }

    /// Sum of all four bases.
    #[inline]
    #[must_use]
    pub fn combined(&self) -> f64 {
        self.income + self.savings + self.gold + self.investments
    }
}

/// Zakat owed per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZakatBreakdown {
    /// Zakat on income (never gated).
    pub income_zakat: f64,
    /// Zakat on savings.
    pub savings_zakat: f64,
    /// Zakat on gold.
    pub gold_zakat: f64,
    /// Zakat on investments.
    pub investment_zakat: f64,
    /// Sum of the four categories.
    pub total_due: f64,
    /// Whether the combined base reaches nisab.
    pub meets_nisab: bool,
}

impl ZakatConfig {
    /// Computes the breakdown for `bases` under this configuration.
    #[must_use]
    pub fn compute(&self, bases: &ZakatBases) -> ZakatBreakdown {
        let income_zakat = bases.income * self.rate;
        let savings_zakat = self.gated(bases.savings);
        let gold_zakat = self.gated(bases.gold);
        let investment_zakat = self.gated(bases.investments);
        let total_due = income_zakat + savings_zakat + gold_zakat + investment_zakat;
        let breakdown = ZakatBreakdown {
            income_zakat,
            savings_zakat,
            gold_zakat,
            investment_zakat,
            total_due,
            meets_nisab: bases.combined() >= self.nisab,
        };
        tracing::debug!(
            total_due = breakdown.total_due,
            meets_nisab = breakdown.meets_nisab,
            "computed zakat"
        );
        breakdown
    }

    /// Zakat on a nisab-gated base.
    fn gated(&self, base: f64) -> f64 {
        if base >= self.nisab {
            base * self.rate
        } else {
            0.0_f64
        }
    }
}

/// Computes zakat with the default nisab and rate.
#[inline]
#[must_use]
pub fn compute_zakat(income: f64, savings: f64, gold: f64, investments: f64) -> ZakatBreakdown {
    ZakatConfig::default().compute(&ZakatBases {
        income,
        savings,
        gold,
        investments,
    })
}
