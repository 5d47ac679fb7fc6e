//! Explicit application state.
//!
//! [`AppState`] holds one household's collections and the UI preferences.
//! It is passed by reference to whatever needs dashboard figures; the
//! summary is recomputed from the current collections on every call and
//! never cached.

use serde::{Deserialize, Serialize};

use crate::models::{
    BudgetAllocation, BudgetSettings, Commitment, Faraid, Goal, Household, IncomeEntry,
    Insurance, Investment, Member, SavingsAccount, Transaction, ZakatRecord,
};
use crate::snapshot::HouseholdSnapshot;
use crate::summary::{Summary, compute_summary};
use crate::validate::{Validate, ValidationError, validate_all};
use crate::zakat::{ZakatBases, ZakatConfig};

/// The only state that survives a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    /// Whether amounts are shown or masked.
    #[serde(default = "default_true")]
    pub show_balance: bool,
    /// Whether the demo household is shown instead of real data.
    #[serde(default = "default_true")]
    pub is_demo_mode: bool,
}

impl Default for UiPreferences {
    #[inline]
    fn default() -> Self {
        Self {
            show_balance: true,
            is_demo_mode: true,
        }
    }
}

/// Serde default for [`UiPreferences`] flags.
const fn default_true() -> bool {
    true
}

/// One household's records plus the UI preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The household being viewed.
    household: Household,
    /// Household members.
    members: Vec<Member>,
    /// Income entries.
    income: Vec<IncomeEntry>,
    /// Monthly commitments.
    commitments: Vec<Commitment>,
    /// Ledger, newest first.
    transactions: Vec<Transaction>,
    /// Savings pots.
    savings: Vec<SavingsAccount>,
    /// Investment holdings.
    investments: Vec<Investment>,
    /// Insurance and takaful policies.
    insurance: Vec<Insurance>,
    /// Financial goals.
    goals: Vec<Goal>,
    /// Current year's zakat record.
    zakat: Option<ZakatRecord>,
    /// Estate plan.
    faraid: Option<Faraid>,
    /// Needs/wants/savings split.
    budget_settings: BudgetSettings,
    /// Persisted UI preferences.
    preferences: UiPreferences,
}

impl AppState {
    /// Creates an empty state for `household` with the standard budget
    /// split.
    #[must_use]
    pub fn new(household: Household, preferences: UiPreferences) -> Self {
        let budget_settings = BudgetSettings::standard(household.id.clone());
        Self {
            household,
            members: Vec::new(),
            income: Vec::new(),
            commitments: Vec::new(),
            transactions: Vec::new(),
            savings: Vec::new(),
            investments: Vec::new(),
            insurance: Vec::new(),
            goals: Vec::new(),
            zakat: None,
            faraid: None,
            budget_settings,
            preferences,
        }
    }

    /// State showing the demo household.
    #[must_use]
    pub fn demo(preferences: UiPreferences) -> Self {
        Self::from_parts(crate::demo::sample_snapshot(), preferences)
    }

    /// Builds a state from a validated snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found in the snapshot.
    pub fn from_snapshot(
        snapshot: HouseholdSnapshot,
        preferences: UiPreferences,
    ) -> Result<Self, ValidationError> {
        let state = Self::from_parts(snapshot, preferences);
        state.validate()?;
        Ok(state)
    }

    /// Assembles a state without validating it.
    pub(crate) fn from_parts(snapshot: HouseholdSnapshot, preferences: UiPreferences) -> Self {
        let budget_settings = snapshot
            .budget_settings
            .unwrap_or_else(|| BudgetSettings::standard(snapshot.household.id.clone()));
        Self {
            household: snapshot.household,
            members: snapshot.members,
            income: snapshot.income,
            commitments: snapshot.commitments,
            transactions: snapshot.transactions,
            savings: snapshot.savings,
            investments: snapshot.investments,
            insurance: snapshot.insurance,
            goals: snapshot.goals,
            zakat: snapshot.zakat,
            faraid: snapshot.faraid,
            budget_settings,
            preferences,
        }
    }

    /// Exports the collections as a snapshot document.
    #[must_use]
    pub fn to_snapshot(&self) -> HouseholdSnapshot {
        HouseholdSnapshot {
            household: self.household.clone(),
            members: self.members.clone(),
            income: self.income.clone(),
            commitments: self.commitments.clone(),
            transactions: self.transactions.clone(),
            savings: self.savings.clone(),
            investments: self.investments.clone(),
            insurance: self.insurance.clone(),
            goals: self.goals.clone(),
            zakat: self.zakat.clone(),
            faraid: self.faraid.clone(),
            budget_settings: Some(self.budget_settings.clone()),
        }
    }

    // ── Derived figures ─────────────────────────────────────────────

    /// Dashboard figures for the current collections.
    #[inline]
    #[must_use]
    pub fn summary(&self) -> Summary {
        let active: Vec<Commitment> = self.active_commitments().cloned().collect();
        compute_summary(
            &self.income,
            &active,
            &self.savings,
            &self.investments,
        )
    }

    /// Zakat bases derived from the current collections.
    #[inline]
    #[must_use]
    pub fn zakat_bases(&self) -> ZakatBases {
        ZakatBases::from_snapshot(&self.summary(), &self.investments)
    }

    /// Assesses zakat for `year` from the current collections.
    #[must_use]
    pub fn assess_zakat(&self, config: &ZakatConfig, year: i32) -> ZakatRecord {
        let bases = self.zakat_bases();
        let breakdown = config.compute(&bases);
        ZakatRecord::from_breakdown(self.household.id.clone(), year, &bases, &breakdown)
    }

    /// Monthly income divided by the budget split.
    #[inline]
    #[must_use]
    pub fn budget_allocation(&self) -> BudgetAllocation {
        self.budget_settings.allocate(self.summary().total_income)
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The household being viewed.
    #[inline]
    #[must_use]
    pub const fn household(&self) -> &Household {
        &self.household
    }

    /// Household members.
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Income entries.
    #[inline]
    #[must_use]
    pub fn income(&self) -> &[IncomeEntry] {
        &self.income
    }

    /// Monthly commitments.
    #[inline]
    #[must_use]
    pub fn commitments(&self) -> &[Commitment] {
        &self.commitments
    }

    /// Commitments still running. Finished ones are kept in
    /// [`commitments`](Self::commitments) but never reach the figures.
    #[inline]
    pub fn active_commitments(&self) -> impl Iterator<Item = &Commitment> {
        self.commitments.iter().filter(|row| row.is_active)
    }

    /// Ledger, newest first.
    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Savings pots.
    #[inline]
    #[must_use]
    pub fn savings(&self) -> &[SavingsAccount] {
        &self.savings
    }

    /// Investment holdings.
    #[inline]
    #[must_use]
    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    /// Insurance and takaful policies.
    #[inline]
    #[must_use]
    pub fn insurance(&self) -> &[Insurance] {
        &self.insurance
    }

    /// Financial goals.
    #[inline]
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Current zakat record, if one has been saved.
    #[inline]
    #[must_use]
    pub const fn zakat(&self) -> Option<&ZakatRecord> {
        self.zakat.as_ref()
    }

    /// Estate plan, if one has been saved.
    #[inline]
    #[must_use]
    pub const fn faraid(&self) -> Option<&Faraid> {
        self.faraid.as_ref()
    }

    /// Needs/wants/savings split.
    #[inline]
    #[must_use]
    pub const fn budget_settings(&self) -> &BudgetSettings {
        &self.budget_settings
    }

    /// UI preferences.
    #[inline]
    #[must_use]
    pub const fn preferences(&self) -> UiPreferences {
        self.preferences
    }

    // ── Mutators ────────────────────────────────────────────────────

    /// Replaces the member list.
    #[inline]
    pub fn set_members(&mut self, members: Vec<Member>) {
        self.members = members;
    }

    /// Replaces the income entries.
    ///
    /// # Errors
    ///
    /// Returns the first invalid entry; the state is left unchanged.
    pub fn set_income(&mut self, income: Vec<IncomeEntry>) -> Result<(), ValidationError> {
        validate_all("income", &income, |row| &row.id)?;
        self.income = income;
        Ok(())
    }

    /// Replaces the commitments.
    ///
    /// # Errors
    ///
    /// Returns the first invalid commitment; the state is left unchanged.
    pub fn set_commitments(&mut self, commitments: Vec<Commitment>) -> Result<(), ValidationError> {
        validate_all("commitments", &commitments, |row| &row.id)?;
        self.commitments = commitments;
        Ok(())
    }

    /// Replaces the ledger.
    ///
    /// # Errors
    ///
    /// Returns the first invalid transaction; the state is left unchanged.
    pub fn set_transactions(
        &mut self,
        transactions: Vec<Transaction>,
    ) -> Result<(), ValidationError> {
        validate_all("transactions", &transactions, |row| &row.id)?;
        self.transactions = transactions;
        Ok(())
    }

    /// Adds a transaction at the top of the ledger.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the ledger is left unchanged.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), ValidationError> {
        transaction
            .validate()
            .map_err(|err| err.in_record("transactions", &transaction.id))?;
        self.transactions.insert(0, transaction);
        Ok(())
    }

    /// Replaces the savings pots.
    ///
    /// # Errors
    ///
    /// Returns the first invalid pot; the state is left unchanged.
    pub fn set_savings(&mut self, savings: Vec<SavingsAccount>) -> Result<(), ValidationError> {
        validate_all("savings", &savings, |row| &row.id)?;
        self.savings = savings;
        Ok(())
    }

    /// Replaces the investment holdings.
    ///
    /// # Errors
    ///
    /// Returns the first invalid holding; the state is left unchanged.
    pub fn set_investments(&mut self, investments: Vec<Investment>) -> Result<(), ValidationError> {
        validate_all("investments", &investments, |row| &row.id)?;
        self.investments = investments;
        Ok(())
    }

    /// Replaces the policies.
    ///
    /// # Errors
    ///
    /// Returns the first invalid policy; the state is left unchanged.
    pub fn set_insurance(&mut self, insurance: Vec<Insurance>) -> Result<(), ValidationError> {
        validate_all("insurance", &insurance, |row| &row.id)?;
        self.insurance = insurance;
        Ok(())
    }

    /// Replaces the goals.
    ///
    /// # Errors
    ///
    /// Returns the first invalid goal; the state is left unchanged.
    pub fn set_goals(&mut self, goals: Vec<Goal>) -> Result<(), ValidationError> {
        validate_all("goals", &goals, |row| &row.id)?;
        self.goals = goals;
        Ok(())
    }

    /// Stores the zakat record.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the state is left unchanged.
    pub fn set_zakat(&mut self, zakat: ZakatRecord) -> Result<(), ValidationError> {
        zakat.validate()?;
        self.zakat = Some(zakat);
        Ok(())
    }

    /// Stores the estate plan.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the state is left unchanged.
    pub fn set_faraid(&mut self, faraid: Faraid) -> Result<(), ValidationError> {
        faraid.validate()?;
        self.faraid = Some(faraid);
        Ok(())
    }

    /// Stores the budget split.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the state is left unchanged.
    pub fn set_budget_settings(&mut self, settings: BudgetSettings) -> Result<(), ValidationError> {
        settings.validate()?;
        self.budget_settings = settings;
        Ok(())
    }

    /// Replaces every collection with the demo household, keeping the UI
    /// preferences.
    #[inline]
    pub fn reset_to_sample_data(&mut self) {
        *self = Self::demo(self.preferences);
    }

    /// Flips balance visibility and returns the new value.
    #[inline]
    pub const fn toggle_balance(&mut self) -> bool {
        self.preferences.show_balance = !self.preferences.show_balance;
        self.preferences.show_balance
    }

    /// Switches demo mode on or off.
    #[inline]
    pub const fn set_demo_mode(&mut self, enabled: bool) {
        self.preferences.is_demo_mode = enabled;
    }
}

impl Validate for AppState {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_all("income", &self.income, |row| &row.id)?;
        validate_all("commitments", &self.commitments, |row| &row.id)?;
        validate_all("transactions", &self.transactions, |row| &row.id)?;
        validate_all("savings", &self.savings, |row| &row.id)?;
        validate_all("investments", &self.investments, |row| &row.id)?;
        validate_all("insurance", &self.insurance, |row| &row.id)?;
        validate_all("goals", &self.goals, |row| &row.id)?;
        if let Some(zakat) = self.zakat.as_ref() {
            zakat
                .validate()
                .map_err(|err| err.in_record("zakat", &zakat.year))?;
        }
        if let Some(faraid) = self.faraid.as_ref() {
            faraid
                .validate()
                .map_err(|err| err.in_record("faraid", &faraid.household_id))?;
        }
        self.budget_settings
            .validate()
            .map_err(|err| err.in_record("budgetSettings", &self.budget_settings.household_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HouseholdId, NaiveDate, RecordId, TransactionKind};

    fn empty_state() -> AppState {
        AppState::new(
            Household {
                id: HouseholdId::from("h"),
                name: "Keluarga Test".to_owned(),
                user_id: None,
                currency: "MYR".to_owned(),
            },
            UiPreferences::default(),
        )
    }

    fn expense(id: &str, amount: f64) -> Transaction {
        Transaction {
            id: RecordId::from(id),
            household_id: HouseholdId::from("h"),
            member_id: None,
            description: "Petrol Shell".to_owned(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            category: "transport".to_owned(),
            kind: TransactionKind::Expense,
            notes: None,
        }
    }

    fn salary(amount: f64) -> IncomeEntry {
        IncomeEntry {
            id: RecordId::from("i-1"),
            household_id: HouseholdId::from("h"),
            member_id: None,
            kind: "Gaji".to_owned(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap(),
            is_recurring: true,
            notes: None,
        }
    }

    fn loan(
        id: &str,
        amount: f64,
        total_debt: f64,
        paid_amount: f64,
        is_active: bool,
    ) -> Commitment {
        Commitment {
            id: RecordId::from(id),
            household_id: HouseholdId::from("h"),
            member_id: None,
            name: "Loan Peribadi".to_owned(),
            amount,
            due_date: 5,
            icon: None,
            total_debt: Some(total_debt),
            paid_amount,
            interest_rate: None,
            start_date: None,
            end_date: None,
            is_active,
            category: None,
        }
    }

    #[test]
    fn finished_commitments_do_not_count() {
        let mut state = empty_state();
        state.set_income(vec![salary(1_000.0)]).unwrap();
        state
            .set_commitments(vec![
                loan("c-1", 100.0, 1_000.0, 400.0, true),
                loan("c-2", 900.0, 10_000.0, 2_000.0, false),
            ])
            .unwrap();

        let summary = state.summary();
        assert!((summary.total_commitments - 100.0).abs() < f64::EPSILON);
        assert!((summary.total_debt - 1_000.0).abs() < f64::EPSILON);
        assert!((summary.remaining_debt - 600.0).abs() < f64::EPSILON);
        assert!((summary.cash_flow - 900.0).abs() < f64::EPSILON);

        assert_eq!(state.commitments().len(), 2);
        let active: Vec<&str> = state.active_commitments().map(|c| c.id.as_inner()).collect();
        assert_eq!(active, ["c-1"]);
    }

    #[test]
    fn preferences_default_to_visible_demo() {
        let prefs = UiPreferences::default();
        assert!(prefs.show_balance);
        assert!(prefs.is_demo_mode);
        let parsed: UiPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn empty_state_summary() {
        let state = empty_state();
        let summary = state.summary();
        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.halal_percentage, 100.0);
    }

    #[test]
    fn summary_follows_setters() {
        let mut state = empty_state();
        state.set_income(vec![salary(5_500.0)]).unwrap();
        assert!((state.summary().total_income - 5_500.0).abs() < f64::EPSILON);
        state.set_income(vec![salary(4_200.0)]).unwrap();
        assert!((state.summary().total_income - 4_200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejected_setter_leaves_state_unchanged() {
        let mut state = empty_state();
        state.set_income(vec![salary(5_500.0)]).unwrap();
        let err = state.set_income(vec![salary(f64::NAN)]).unwrap_err();
        assert!(matches!(err, ValidationError::InRecord { .. }));
        assert!((state.summary().total_income - 5_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn add_transaction_prepends() {
        let mut state = empty_state();
        state.add_transaction(expense("t-1", -150.0)).unwrap();
        state.add_transaction(expense("t-2", -45.0)).unwrap();
        assert_eq!(state.transactions()[0].id, RecordId::from("t-2"));
        assert_eq!(state.transactions().len(), 2);
    }

    #[test]
    fn add_invalid_transaction_fails() {
        let mut state = empty_state();
        let mut tx = expense("t-1", -10.0);
        tx.description = String::new();
        assert!(state.add_transaction(tx).is_err());
        assert!(state.transactions().is_empty());
    }

    #[test]
    fn toggle_balance_flips() {
        let mut state = empty_state();
        assert!(!state.toggle_balance());
        assert!(!state.preferences().show_balance);
        assert!(state.toggle_balance());
    }

    #[test]
    fn reset_keeps_preferences() {
        let mut state = empty_state();
        let _shown = state.toggle_balance();
        state.set_demo_mode(false);
        state.reset_to_sample_data();
        assert_eq!(state.household().name, "Keluarga Ahmad");
        assert!(!state.preferences().show_balance);
        assert!(!state.preferences().is_demo_mode);
    }

    #[test]
    fn budget_allocation_uses_total_income() {
        let mut state = empty_state();
        state.set_income(vec![salary(10_000.0)]).unwrap();
        let allocation = state.budget_allocation();
        assert!((allocation.needs - 5_000.0).abs() < 1e-9);
        assert!((allocation.savings - 2_000.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_budget_settings_rejected() {
        let mut state = empty_state();
        let mut settings = BudgetSettings::standard(HouseholdId::from("h"));
        settings.savings_percentage = 0;
        assert_eq!(
            state.set_budget_settings(settings),
            Err(ValidationError::BudgetSplitMismatch { total: 80 })
        );
        assert_eq!(state.budget_settings().total_percentage(), 100);
    }

    #[test]
    fn snapshot_round_trip_preserves_state() {
        let state = AppState::demo(UiPreferences::default());
        let restored =
            AppState::from_snapshot(state.to_snapshot(), state.preferences()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn assess_zakat_for_year() {
        let mut state = empty_state();
        state.set_income(vec![salary(10_000.0)]).unwrap();
        let record = state.assess_zakat(&ZakatConfig::default(), 2025);
        assert_eq!(record.year, 2025);
        assert!((record.income_yearly - 120_000.0).abs() < 1e-9);
        assert!((record.income_zakat - 3_000.0).abs() < 1e-9);
        assert!(record.savings_zakat.abs() < f64::EPSILON);
    }
}
