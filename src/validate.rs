//! Data-entry validation.
//!
//! The calculations accept any number they are given. Records entering the
//! application through [`crate::snapshot`] or the [`crate::state::AppState`]
//! setters are checked here first, so the figures on the dashboard come
//! from well-formed rows.

use crate::models::{
    BudgetSettings, Commitment, Faraid, Goal, IncomeEntry, Insurance, Investment, SavingsAccount,
    Transaction, ZakatRecord,
};

/// Highest valid day of the month for a due date.
const MAX_DUE_DATE: u8 = 31;

/// Highest valid whole percentage.
const MAX_PERCENT: u8 = 100;

/// Reasons a record is rejected at the data-entry boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// An amount that must not be negative is negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        /// Offending field (camelCase, as stored).
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// An amount is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Offending field (camelCase, as stored).
        field: &'static str,
    },

    /// A commitment due date is not a day of the month.
    #[error("dueDate must be 1-31, got {due_date}")]
    DueDateOutOfRange {
        /// Rejected day.
        due_date: u8,
    },

    /// A percentage is above 100.
    #[error("{field} must be 0-100, got {value}")]
    PercentageOutOfRange {
        /// Offending field (camelCase, as stored).
        field: &'static str,
        /// Rejected value.
        value: u8,
    },

    /// A budget split does not add up to the whole income.
    #[error("budget percentages must total 100, got {total}")]
    BudgetSplitMismatch {
        /// Sum of the three percentages.
        total: u16,
    },

    /// A required text field is empty.
    #[error("{field} must not be blank")]
    BlankField {
        /// Offending field (camelCase, as stored).
        field: &'static str,
    },

    /// A faraid share is not a fraction like `1/8`.
    #[error("invalid faraid share '{share}'")]
    InvalidShare {
        /// Rejected text.
        share: String,
    },

    /// A row in a collection failed validation.
    #[error("{collection} record {id}: {source}")]
    InRecord {
        /// Collection the row belongs to.
        collection: &'static str,
        /// Identifier of the row.
        id: String,
        /// Underlying failure.
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Attaches the collection and row identifier to this error.
    #[inline]
    #[must_use]
    pub fn in_record<T: ToString + ?Sized>(self, collection: &'static str, id: &T) -> Self {
        Self::InRecord {
            collection,
            id: id.to_string(),
            source: Box::new(self),
        }
    }
}

/// A record that can be checked at the data-entry boundary.
pub trait Validate {
    /// Checks the record, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first invalid field.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Rejects NaN and infinities.
fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field })
    }
}

/// Rejects non-finite and negative amounts.
fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < 0.0_f64 {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Applies [`non_negative`] to an optional amount.
fn optional_non_negative(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |amount| non_negative(field, amount))
}

/// Rejects empty or whitespace-only text.
fn not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(())
}

/// Rejects percentages above 100.
fn percentage(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if value > MAX_PERCENT {
        return Err(ValidationError::PercentageOutOfRange { field, value });
    }
    Ok(())
}

impl Validate for IncomeEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("type", &self.kind)?;
        // Income may be negative (adjustments), but must be a number.
        finite("amount", self.amount)
    }
}

impl Validate for Commitment {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", &self.name)?;
        non_negative("amount", self.amount)?;
        if !(1..=MAX_DUE_DATE).contains(&self.due_date) {
            return Err(ValidationError::DueDateOutOfRange {
                due_date: self.due_date,
            });
        }
        optional_non_negative("totalDebt", self.total_debt)?;
        non_negative("paidAmount", self.paid_amount)?;
        optional_non_negative("interestRate", self.interest_rate)
    }
}

impl Validate for Transaction {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("description", &self.description)?;
        not_blank("category", &self.category)?;
        finite("amount", self.amount)
    }
}

impl Validate for SavingsAccount {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", &self.name)?;
        non_negative("currentAmount", self.current_amount)?;
        non_negative("targetAmount", self.target_amount)
    }
}

impl Validate for Investment {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", &self.name)?;
        non_negative("currentValue", self.current_value)?;
        non_negative("costBasis", self.cost_basis)
    }
}

impl Validate for Insurance {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", &self.name)?;
        not_blank("provider", &self.provider)?;
        non_negative("premium", self.premium)?;
        optional_non_negative("coverage", self.coverage)
    }
}

impl Validate for Goal {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", &self.name)?;
        non_negative("targetAmount", self.target_amount)?;
        non_negative("currentAmount", self.current_amount)
    }
}

impl Validate for ZakatRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        let amounts = [
            ("incomeYearly", self.income_yearly),
            ("incomeZakat", self.income_zakat),
            ("savingsAmount", self.savings_amount),
            ("savingsZakat", self.savings_zakat),
            ("goldValue", self.gold_value),
            ("goldZakat", self.gold_zakat),
            ("investmentValue", self.investment_value),
            ("investmentZakat", self.investment_zakat),
            ("totalDue", self.total_due),
            ("totalPaid", self.total_paid),
        ];
        amounts
            .into_iter()
            .try_for_each(|(field, value)| non_negative(field, value))
    }
}

impl Validate for Faraid {
    fn validate(&self) -> Result<(), ValidationError> {
        non_negative("totalAssets", self.total_assets)?;
        for heir in &self.beneficiaries {
            not_blank("relation", &heir.relation)?;
            non_negative("amount", heir.amount)?;
        }
        Ok(())
    }
}

impl Validate for BudgetSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        percentage("needsPercentage", self.needs_percentage)?;
        percentage("wantsPercentage", self.wants_percentage)?;
        percentage("savingsPercentage", self.savings_percentage)?;
        let total = self.total_percentage();
        if total != u16::from(MAX_PERCENT) {
            return Err(ValidationError::BudgetSplitMismatch { total });
        }
        Ok(())
    }
}

/// Validates every row of a collection, tagging the first failure with the
/// collection name and row ID.
///
/// # Errors
///
/// Returns [`ValidationError::InRecord`] wrapping the first row's error.
pub fn validate_all<'a, T, I, K>(
    collection: &'static str,
    rows: I,
    id_of: fn(&T) -> &K,
) -> Result<(), ValidationError>
where
    T: Validate + 'a,
    I: IntoIterator<Item = &'a T>,
    K: ToString + ?Sized,
{
    rows.into_iter().try_for_each(|row| {
        row.validate()
            .map_err(|err| err.in_record(collection, id_of(row)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CommitmentCategory, HouseholdId, InvestmentKind, NaiveDate, RecordId,
    };

    fn commitment(due_date: u8, paid_amount: f64) -> Commitment {
        Commitment {
            id: RecordId::from("c-1"),
            household_id: HouseholdId::from("h"),
            member_id: None,
            name: "Loan Rumah".to_owned(),
            amount: 1_200.0,
            due_date,
            icon: None,
            total_debt: Some(350_000.0),
            paid_amount,
            interest_rate: None,
            start_date: None,
            end_date: None,
            is_active: true,
            category: Some(CommitmentCategory::Loan),
        }
    }

    #[test]
    fn valid_commitment_passes() {
        assert_eq!(commitment(1, 0.0).validate(), Ok(()));
        assert_eq!(commitment(31, 72_000.0).validate(), Ok(()));
    }

    #[test]
    fn due_date_out_of_range() {
        assert_eq!(
            commitment(0, 0.0).validate(),
            Err(ValidationError::DueDateOutOfRange { due_date: 0 })
        );
        assert_eq!(
            commitment(32, 0.0).validate(),
            Err(ValidationError::DueDateOutOfRange { due_date: 32 })
        );
    }

    #[test]
    fn negative_paid_amount() {
        let err = commitment(1, -5.0).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeAmount {
                field: "paidAmount",
                value: -5.0
            }
        );
        assert_eq!(err.to_string(), "paidAmount must be non-negative, got -5");
    }

    #[test]
    fn non_finite_amount() {
        let income = IncomeEntry {
            id: RecordId::from("i"),
            household_id: HouseholdId::from("h"),
            member_id: None,
            kind: "Gaji".to_owned(),
            amount: f64::INFINITY,
            date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
            is_recurring: true,
            notes: None,
        };
        assert_eq!(
            income.validate(),
            Err(ValidationError::NonFinite { field: "amount" })
        );
    }

    #[test]
    fn negative_income_is_allowed() {
        let income = IncomeEntry {
            id: RecordId::from("i"),
            household_id: HouseholdId::from("h"),
            member_id: None,
            kind: "Pelarasan".to_owned(),
            amount: -100.0,
            date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
            is_recurring: false,
            notes: None,
        };
        assert_eq!(income.validate(), Ok(()));
    }

    #[test]
    fn blank_investment_name() {
        let holding = Investment {
            id: RecordId::from("v"),
            household_id: HouseholdId::from("h"),
            member_id: None,
            name: "   ".to_owned(),
            kind: InvestmentKind::Stock,
            current_value: 1.0,
            cost_basis: 1.0,
            is_halal: true,
            institution: None,
            notes: None,
        };
        assert_eq!(
            holding.validate(),
            Err(ValidationError::BlankField { field: "name" })
        );
    }

    #[test]
    fn budget_split_must_total_100() {
        let mut settings = BudgetSettings::standard(HouseholdId::from("h"));
        assert_eq!(settings.validate(), Ok(()));
        settings.wants_percentage = 40;
        assert_eq!(
            settings.validate(),
            Err(ValidationError::BudgetSplitMismatch { total: 110 })
        );
        settings.needs_percentage = 101;
        assert_eq!(
            settings.validate(),
            Err(ValidationError::PercentageOutOfRange {
                field: "needsPercentage",
                value: 101
            })
        );
    }

    #[test]
    fn validate_all_tags_failing_row() {
        let rows = [commitment(5, 0.0), commitment(40, 0.0)];
        let err = validate_all("commitments", &rows, |row| &row.id).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InRecord {
                collection: "commitments",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "commitments record c-1: dueDate must be 1-31, got 40"
        );
    }
}
