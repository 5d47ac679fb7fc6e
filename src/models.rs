//! Data models for MyDuit household records.
//!
//! This module contains strongly-typed representations of every household
//! collection, newtype ID wrappers, and enumeration types for constrained
//! values. Field names serialize in camelCase to match the document store.

mod budget;
mod commitment;
mod enums;
mod faraid;
mod goal;
mod household;
mod ids;
mod income;
mod insurance;
mod investment;
mod savings;
mod transaction;
mod zakat;

pub use budget::{BudgetAllocation, BudgetSettings};
pub use chrono::NaiveDate;
pub use commitment::{Commitment, URGENT_DAYS, next_debt_target};
pub use enums::{
    CommitmentCategory, GoalHorizon, InsuranceKind, InvestmentKind, PremiumFrequency,
    TransactionKind,
};
pub use faraid::{Beneficiary, Faraid, Share};
pub use goal::Goal;
pub use household::{Household, Member};
pub use ids::{HouseholdId, MemberId, RecordId, UserId};
pub use income::IncomeEntry;
pub use insurance::{Insurance, RENEWAL_WINDOW_DAYS, total_premiums, upcoming_renewals};
pub use investment::Investment;
pub use savings::SavingsAccount;
pub use transaction::Transaction;
pub use zakat::ZakatRecord;

/// Serde default for boolean flags the document store defaults to `true`.
const fn default_true() -> bool {
    true
}
