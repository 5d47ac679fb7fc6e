//! Needs/wants/savings budget split.

use serde::{Deserialize, Serialize};

use super::HouseholdId;

/// Default share of income for needs.
const DEFAULT_NEEDS: u8 = 50;
/// Default share of income for wants.
const DEFAULT_WANTS: u8 = 30;
/// Default share of income for savings.
const DEFAULT_SAVINGS: u8 = 20;

/// How a household divides its income, in whole percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSettings {
    /// Owning household (one split per household).
    pub household_id: HouseholdId,
    /// Percentage for essentials.
    #[serde(default = "default_needs")]
    pub needs_percentage: u8,
    /// Percentage for discretionary spending.
    #[serde(default = "default_wants")]
    pub wants_percentage: u8,
    /// Percentage set aside.
    #[serde(default = "default_savings")]
    pub savings_percentage: u8,
}

/// Income divided according to a [`BudgetSettings`] split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocation {
    /// Amount for essentials.
    pub needs: f64,
    /// Amount for discretionary spending.
    pub wants: f64,
    /// Amount to save.
    pub savings: f64,
}

impl BudgetSettings {
    /// The 50/30/20 split for `household_id`.
    #[inline]
    #[must_use]
    pub const fn standard(household_id: HouseholdId) -> Self {
        Self {
            household_id,
            needs_percentage: DEFAULT_NEEDS,
            wants_percentage: DEFAULT_WANTS,
            savings_percentage: DEFAULT_SAVINGS,
        }
    }

    /// Sum of the three percentages.
    #[inline]
    #[must_use]
    pub fn total_percentage(&self) -> u16 {
        u16::from(self.needs_percentage)
            + u16::from(self.wants_percentage)
            + u16::from(self.savings_percentage)
    }

    /// Divides `total_income` by the configured percentages.
    #[inline]
    #[must_use]
    pub fn allocate(&self, total_income: f64) -> BudgetAllocation {
        let portion = |pct: u8| total_income * f64::from(pct) / 100.0_f64;
        BudgetAllocation {
            needs: portion(self.needs_percentage),
            wants: portion(self.wants_percentage),
            savings: portion(self.savings_percentage),
        }
    }
}

/// Serde default for [`BudgetSettings::needs_percentage`].
const fn default_needs() -> u8 {
    DEFAULT_NEEDS
}

/// Serde default for [`BudgetSettings::wants_percentage`].
const fn default_wants() -> u8 {
    DEFAULT_WANTS
}

/// Serde default for [`BudgetSettings::savings_percentage`].
const fn default_savings() -> u8 {
    DEFAULT_SAVINGS
}
