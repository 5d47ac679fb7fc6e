//! Enumeration types for constrained record values.

use serde::{Deserialize, Serialize};

/// Kind of a monthly commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitmentCategory {
    /// Car, housing, personal or study loan.
    Loan,
    /// Credit card balance.
    CreditCard,
    /// Utility bill (electricity, water, internet).
    Utility,
    /// Recurring subscription with no outstanding principal.
    Subscription,
    /// Anything the dashboard does not group separately.
    #[serde(other)]
    Other,
}

impl CommitmentCategory {
    /// Human-readable label.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loan => "Loan",
            Self::CreditCard => "Credit card",
            Self::Utility => "Utility",
            Self::Subscription => "Subscription",
            Self::Other => "Other",
        }
    }
}

/// Direction of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    /// Money leaving the household.
    Expense,
    /// Money entering the household.
    Income,
}

/// Asset class of an investment holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    /// Unit trust fund (e.g. ASB).
    UnitTrust,
    /// Physical or account-based gold.
    Gold,
    /// Retirement scheme (e.g. KWSP, Tabung Haji).
    Retirement,
    /// Listed equity.
    Stock,
    /// Fixed deposit.
    FixedDeposit,
    /// Any other holding.
    #[serde(other)]
    Other,
}

impl InvestmentKind {
    /// Human-readable label.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnitTrust => "Unit trust",
            Self::Gold => "Gold",
            Self::Retirement => "Retirement",
            Self::Stock => "Stock",
            Self::FixedDeposit => "Fixed deposit",
            Self::Other => "Other",
        }
    }
}

/// Coverage type of an insurance or takaful policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceKind {
    /// Medical card.
    Medical,
    /// Life or family cover.
    Life,
    /// Motor vehicle cover.
    Car,
    /// Home or fire cover.
    Home,
    /// Any other cover.
    #[serde(other)]
    Other,
}

/// How often an insurance premium is charged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PremiumFrequency {
    /// Charged every month.
    #[default]
    Monthly,
    /// Charged every three months.
    Quarterly,
    /// Charged once a year.
    Yearly,
}

/// Planning horizon of a financial goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalHorizon {
    /// Goal due within a couple of years.
    Short,
    /// Long-term goal.
    Long,
}
