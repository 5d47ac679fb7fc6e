//! The "Keluarga Ahmad" demo household.
//!
//! Shown while demo mode is on and restored by
//! [`AppState::reset_to_sample_data`].

use crate::models::{
    Beneficiary, BudgetSettings, Commitment, CommitmentCategory, Faraid, Goal, GoalHorizon,
    Household, HouseholdId, IncomeEntry, Insurance, InsuranceKind, Investment, InvestmentKind,
    Member, MemberId, NaiveDate, PremiumFrequency, RecordId, SavingsAccount, Share, Transaction,
    TransactionKind, ZakatRecord,
};
use crate::snapshot::HouseholdSnapshot;
use crate::state::{AppState, UiPreferences};

/// Identifier of the demo household.
pub const DEMO_HOUSEHOLD_ID: &str = "demo-household";

/// Demo state with default preferences.
#[inline]
#[must_use]
pub fn sample_state() -> AppState {
    AppState::demo(UiPreferences::default())
}

/// Every collection of the demo household.
#[must_use]
pub fn sample_snapshot() -> HouseholdSnapshot {
    HouseholdSnapshot {
        household: Household {
            id: household(),
            name: "Keluarga Ahmad".to_owned(),
            user_id: None,
            currency: "MYR".to_owned(),
        },
        members: vec![
            member("suami", "Ahmad", "Suami", "\u{1f468}"),
            member("isteri", "Siti", "Isteri", "\u{1f469}"),
        ],
        income: vec![
            income("1", "suami", "Gaji", 5_500.0, date(2025, 1, 25)),
            income("2", "suami", "Komisyen", 800.0, date(2025, 1, 28)),
            income("3", "isteri", "Gaji", 4_200.0, date(2025, 1, 25)),
        ],
        commitments: vec![
            debt("1", "Loan Kereta", 850.0, 15, CommitmentCategory::Loan, 45_000.0, 12_750.0),
            debt("2", "Loan Rumah", 1_200.0, 1, CommitmentCategory::Loan, 350_000.0, 72_000.0),
            debt("3", "Credit Card", 500.0, 20, CommitmentCategory::CreditCard, 8_500.0, 0.0),
            debt("4", "PTPTN", 200.0, 10, CommitmentCategory::Loan, 25_000.0, 8_000.0),
        ],
        transactions: vec![
            expense("1", "Groceries - Lotus", -250.0, date(2025, 1, 10), "food"),
            expense("2", "Petrol Shell", -150.0, date(2025, 1, 10), "transport"),
            expense("3", "Netflix", -55.0, date(2025, 1, 9), "entertainment"),
            expense("4", "Grab Food", -45.0, date(2025, 1, 9), "food"),
        ],
        savings: vec![
            pot("1", "Emergency Fund", 15_000.0, 30_000.0),
            pot("2", "Tabung Haji", 8_500.0, 20_000.0),
            pot("3", "ASB", 12_000.0, 50_000.0),
        ],
        investments: vec![
            holding("1", "ASB", InvestmentKind::UnitTrust, 25_000.0, 25_000.0),
            holding("2", "Public Gold", InvestmentKind::Gold, 15_000.0, 12_000.0),
            holding("3", "Tabung Haji", InvestmentKind::Retirement, 8_500.0, 8_500.0),
            holding("4", "KWSP", InvestmentKind::Retirement, 85_000.0, 85_000.0),
        ],
        insurance: vec![
            policy("1", "Medical Card", InsuranceKind::Medical, "AIA", 350.0, 500_000.0, false),
            policy("2", "Family Takaful", InsuranceKind::Life, "Prudential BSN", 280.0, 300_000.0, true),
            policy("3", "Car Insurance", InsuranceKind::Car, "Etiqa", 150.0, 85_000.0, false),
        ],
        goals: vec![
            goal("1", "Emergency Fund", GoalHorizon::Short, 30_000.0, 15_000.0, date(2025, 6, 30), 1),
            goal("2", "Down Payment Rumah", GoalHorizon::Long, 50_000.0, 12_000.0, date(2027, 12, 31), 2),
            goal("3", "Umrah", GoalHorizon::Short, 15_000.0, 8_500.0, date(2025, 12, 31), 3),
        ],
        zakat: Some(ZakatRecord {
            household_id: household(),
            year: 2025,
            income_yearly: 100_800.0,
            income_zakat: 2_520.0,
            savings_amount: 35_500.0,
            savings_zakat: 887.5,
            gold_value: 15_000.0,
            gold_zakat: 375.0,
            investment_value: 33_700.0,
            investment_zakat: 842.5,
            total_due: 4_625.0,
            total_paid: 4_625.0,
            last_paid_date: None,
        }),
        faraid: Some(Faraid {
            household_id: household(),
            total_assets: 500_000.0,
            has_wasiat: true,
            wasiat_notes: None,
            beneficiaries: vec![
                heir("Isteri", Share::new_unchecked(1, 8), 62_500.0),
                heir("Anak Lelaki", Share::new_unchecked(7, 12), 291_667.0),
                heir("Anak Perempuan", Share::new_unchecked(7, 24), 145_833.0),
            ],
        }),
        budget_settings: Some(BudgetSettings::standard(household())),
    }
}

/// Demo household ID.
fn household() -> HouseholdId {
    HouseholdId::from(DEMO_HOUSEHOLD_ID)
}

/// Calendar date for literal sample values.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Household member row.
fn member(id: &str, name: &str, role: &str, avatar: &str) -> Member {
    Member {
        id: MemberId::from(id),
        household_id: household(),
        name: name.to_owned(),
        role: role.to_owned(),
        avatar: avatar.to_owned(),
        user_id: None,
    }
}

/// Recurring income row.
fn income(id: &str, member_id: &str, kind: &str, amount: f64, date: NaiveDate) -> IncomeEntry {
    IncomeEntry {
        id: RecordId::from(id),
        household_id: household(),
        member_id: Some(MemberId::from(member_id)),
        kind: kind.to_owned(),
        amount,
        date,
        is_recurring: true,
        notes: None,
    }
}

/// Commitment with an outstanding principal.
fn debt(
    id: &str,
    name: &str,
    amount: f64,
    due_date: u8,
    category: CommitmentCategory,
    total_debt: f64,
    paid_amount: f64,
) -> Commitment {
    Commitment {
        id: RecordId::from(id),
        household_id: household(),
        member_id: None,
        name: name.to_owned(),
        amount,
        due_date,
        icon: None,
        total_debt: Some(total_debt),
        paid_amount,
        interest_rate: None,
        start_date: None,
        end_date: None,
        is_active: true,
        category: Some(category),
    }
}

/// Expense ledger row.
fn expense(id: &str, description: &str, amount: f64, date: NaiveDate, category: &str) -> Transaction {
    Transaction {
        id: RecordId::from(id),
        household_id: household(),
        member_id: None,
        description: description.to_owned(),
        amount,
        date,
        category: category.to_owned(),
        kind: TransactionKind::Expense,
        notes: None,
    }
}

/// Savings pot row.
fn pot(id: &str, name: &str, current_amount: f64, target_amount: f64) -> SavingsAccount {
    SavingsAccount {
        id: RecordId::from(id),
        household_id: household(),
        member_id: None,
        name: name.to_owned(),
        current_amount,
        target_amount,
        target_date: None,
        icon: None,
    }
}

/// Halal investment holding.
fn holding(
    id: &str,
    name: &str,
    kind: InvestmentKind,
    current_value: f64,
    cost_basis: f64,
) -> Investment {
    Investment {
        id: RecordId::from(id),
        household_id: household(),
        member_id: None,
        name: name.to_owned(),
        kind,
        current_value,
        cost_basis,
        is_halal: true,
        institution: None,
        notes: None,
    }
}

/// Monthly-premium policy row.
fn policy(
    id: &str,
    name: &str,
    kind: InsuranceKind,
    provider: &str,
    premium: f64,
    coverage: f64,
    is_takaful: bool,
) -> Insurance {
    Insurance {
        id: RecordId::from(id),
        household_id: household(),
        member_id: None,
        name: name.to_owned(),
        kind,
        provider: provider.to_owned(),
        premium,
        frequency: PremiumFrequency::Monthly,
        coverage: Some(coverage),
        renewal_date: None,
        policy_number: None,
        is_takaful,
        notes: None,
    }
}

/// Open goal row.
fn goal(
    id: &str,
    name: &str,
    horizon: GoalHorizon,
    target_amount: f64,
    current_amount: f64,
    deadline: NaiveDate,
    priority: u8,
) -> Goal {
    Goal {
        id: RecordId::from(id),
        household_id: household(),
        member_id: None,
        name: name.to_owned(),
        horizon,
        target_amount,
        current_amount,
        deadline: Some(deadline),
        priority: Some(priority),
        icon: None,
        is_completed: false,
    }
}

/// Beneficiary row.
fn heir(relation: &str, share: Share, amount: f64) -> Beneficiary {
    Beneficiary {
        relation: relation.to_owned(),
        share,
        amount,
    }
}
