//! CLI dashboard for a MyDuit household.

use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Datelike as _, Local};
use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use myduit::format::{HIDDEN_BALANCE, format_balance, format_currency, format_percent};
use myduit::models::{
    Commitment, Faraid, NaiveDate, RENEWAL_WINDOW_DAYS, next_debt_target, upcoming_renewals,
};
use myduit::storage::{FileStorage, Storage};
use myduit::zakat::{ZakatBases, ZakatConfig};
use myduit::{AppState, UiPreferences};
use owo_colors::OwoColorize;

/// Environment variable overriding the nisab threshold.
const NISAB_ENV: &str = "MYDUIT_NISAB";
/// Environment variable overriding the zakat rate.
const RATE_ENV: &str = "MYDUIT_ZAKAT_RATE";
/// Placeholder for an empty table cell.
const NONE_CELL: &str = "\u{2014}";

/// MyDuit: household finance dashboard for Malaysian families.
#[derive(Debug, Parser)]
#[command(name = "myduit", version, about)]
struct Cli {
    /// Override the preference directory (default: XDG data dir).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Household snapshot (JSON) to read instead of the demo household.
    #[arg(long, global = true, value_name = "FILE")]
    snapshot: Option<PathBuf>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Show the dashboard summary.
    Summary,
    /// List commitments with repayment progress.
    Debts,
    /// Calculate zakat due.
    Zakat(ZakatArgs),
    /// Show the needs/wants/savings budget split.
    Budget,
    /// Show the faraid estate plan.
    Faraid,
    /// Print the household as a snapshot document.
    Export,
    /// Show or hide amounts in later output.
    ToggleBalance,
    /// Switch demo mode on or off.
    DemoMode {
        /// New demo mode setting.
        #[arg(value_enum)]
        mode: Switch,
    },
}

/// On/off argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Switch {
    /// Enable.
    On,
    /// Disable.
    Off,
}

/// Arguments for the `zakat` subcommand.
///
/// Bases not given are derived from the household.
#[derive(Debug, Default, Args)]
struct ZakatArgs {
    /// Yearly income base (RM).
    #[arg(long, value_parser = parse_amount)]
    income: Option<f64>,
    /// Savings base (RM).
    #[arg(long, value_parser = parse_amount)]
    savings: Option<f64>,
    /// Gold base (RM).
    #[arg(long, value_parser = parse_amount)]
    gold: Option<f64>,
    /// Investment base (RM).
    #[arg(long, value_parser = parse_amount)]
    investments: Option<f64>,
    /// Nisab threshold (RM). Falls back to $MYDUIT_NISAB, then 23000.
    #[arg(long, value_parser = parse_amount)]
    nisab: Option<f64>,
    /// Zakat rate as a fraction. Falls back to $MYDUIT_ZAKAT_RATE, then 0.025.
    #[arg(long, value_parser = parse_rate)]
    rate: Option<f64>,
}

impl ZakatArgs {
    /// Applies the explicit bases on top of `derived`.
    fn bases(&self, derived: ZakatBases) -> ZakatBases {
        ZakatBases {
            income: self.income.unwrap_or(derived.income),
            savings: self.savings.unwrap_or(derived.savings),
            gold: self.gold.unwrap_or(derived.gold),
            investments: self.investments.unwrap_or(derived.investments),
        }
    }
}

/// Parses a non-negative ringgit amount for clap.
fn parse_amount(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|err| format!("{err}"))?;
    if !value.is_finite() || value < 0.0_f64 {
        return Err(format!("expected a non-negative amount, got {raw}"));
    }
    Ok(value)
}

/// Parses a rate between 0 and 1 for clap.
fn parse_rate(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|err| format!("{err}"))?;
    if !(0.0_f64..=1.0_f64).contains(&value) {
        return Err(format!("expected a rate between 0 and 1, got {raw}"));
    }
    Ok(value)
}

/// Reads a non-empty environment variable.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Resolves the zakat configuration: flags first, then environment, then
/// the built-in defaults.
fn resolve_zakat_config(
    args: &ZakatArgs,
    env_nisab: Option<String>,
    env_rate: Option<String>,
) -> Result<ZakatConfig, String> {
    let defaults = ZakatConfig::default();
    let nisab = match (args.nisab, env_nisab) {
        (Some(value), _) => value,
        (None, Some(raw)) => parse_amount(&raw).map_err(|err| format!("{NISAB_ENV}: {err}"))?,
        (None, None) => defaults.nisab,
    };
    let rate = match (args.rate, env_rate) {
        (Some(value), _) => value,
        (None, Some(raw)) => parse_rate(&raw).map_err(|err| format!("{RATE_ENV}: {err}"))?,
        (None, None) => defaults.rate,
    };
    Ok(ZakatConfig { nisab, rate })
}

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let _dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let storage = match create_storage(cli.data_dir) {
        Ok(storage) => storage,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to initialize storage: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    dispatch(&storage, cli.snapshot.as_deref(), cli.command)
}

/// Creates the storage backend, using `data_dir` if provided or the
/// default XDG data directory otherwise.
fn create_storage(data_dir: Option<PathBuf>) -> myduit::Result<FileStorage> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => FileStorage::default_dir()?,
    };
    FileStorage::new(dir)
}

/// Dispatches to the appropriate subcommand handler.
fn dispatch<S: Storage>(
    storage: &S,
    snapshot: Option<&Path>,
    command: Command,
) -> io::Result<ExitCode> {
    match command {
        Command::Summary => with_state(storage, snapshot, print_summary),
        Command::Debts => with_state(storage, snapshot, |state| {
            print_debts(state, Local::now().date_naive())
        }),
        Command::Zakat(args) => cmd_zakat(storage, snapshot, &args),
        Command::Budget => with_state(storage, snapshot, print_budget),
        Command::Faraid => with_state(storage, snapshot, |state| {
            print_faraid(state.faraid(), state.preferences().show_balance)
        }),
        Command::Export => with_state(storage, snapshot, print_export),
        Command::ToggleBalance => cmd_toggle_balance(storage),
        Command::DemoMode { mode } => cmd_demo_mode(storage, mode),
    }
}

/// Picks the household to show: the snapshot if one is given, else the
/// demo household while demo mode is on.
fn load_state(
    snapshot: Option<&Path>,
    preferences: UiPreferences,
) -> myduit::Result<Option<AppState>> {
    match snapshot {
        Some(path) => myduit::snapshot::load(path, preferences).map(Some),
        None if preferences.is_demo_mode => Ok(Some(AppState::demo(preferences))),
        None => Ok(None),
    }
}

/// Loads the household and runs `op` on it.
fn with_state<S, F>(storage: &S, snapshot: Option<&Path>, op: F) -> io::Result<ExitCode>
where
    S: Storage,
    F: FnOnce(&AppState) -> io::Result<()>,
{
    let preferences = match storage.preferences() {
        Ok(preferences) => preferences,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to read preferences: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    match load_state(snapshot, preferences) {
        Ok(Some(state)) => {
            op(&state)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            let mut err = io::stderr().lock();
            writeln!(
                err,
                "{} no household data: demo mode is off",
                "error:".red().bold()
            )?;
            writeln!(
                err,
                "  {} pass {} or run {}",
                "hint:".cyan(),
                "--snapshot <FILE>".bold(),
                "myduit demo-mode on".bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to load household: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Executes the `zakat` subcommand.
fn cmd_zakat<S: Storage>(
    storage: &S,
    snapshot: Option<&Path>,
    args: &ZakatArgs,
) -> io::Result<ExitCode> {
    let config = match resolve_zakat_config(args, env_value(NISAB_ENV), env_value(RATE_ENV)) {
        Ok(config) => config,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} invalid zakat setting {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };
    with_state(storage, snapshot, |state| print_zakat(state, args, &config))
}

/// Executes the `toggle-balance` subcommand.
fn cmd_toggle_balance<S: Storage>(storage: &S) -> io::Result<ExitCode> {
    match storage.update_preferences(|prefs| prefs.show_balance = !prefs.show_balance) {
        Ok(prefs) => {
            let state = if prefs.show_balance { "shown" } else { "hidden" };
            writeln!(io::stdout().lock(), "Balances are now {}.", state.bold())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to save preferences: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Executes the `demo-mode` subcommand.
fn cmd_demo_mode<S: Storage>(storage: &S, mode: Switch) -> io::Result<ExitCode> {
    let enabled = mode == Switch::On;
    match storage.update_preferences(|prefs| prefs.is_demo_mode = enabled) {
        Ok(_) => {
            let state = if enabled { "on" } else { "off" };
            writeln!(io::stdout().lock(), "Demo mode is now {}.", state.bold())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to save preferences: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

// ── Output formatting ────────────────────────────────────────────────

/// Signed amount, or the hidden placeholder.
fn signed_balance(amount: f64, show_balance: bool) -> String {
    if show_balance {
        format_currency(amount, true)
    } else {
        HIDDEN_BALANCE.to_owned()
    }
}

/// Debt still owed. Overpayment shows with a minus sign.
fn remaining_balance(amount: f64, show_balance: bool) -> String {
    if amount < 0.0_f64 {
        signed_balance(amount, show_balance)
    } else {
        format_balance(amount, show_balance)
    }
}

/// Green for non-negative amounts, red otherwise.
fn sign_color(amount: f64) -> Color {
    if amount < 0.0_f64 {
        Color::Red
    } else {
        Color::Green
    }
}

/// Creates a table with the shared preset and a cyan header.
fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(
        headers
            .iter()
            .map(|header| Cell::new(header).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

/// Right-aligned cell for amounts.
fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Prints the dashboard summary.
fn print_summary(state: &AppState) -> io::Result<()> {
    let summary = state.summary();
    let show = state.preferences().show_balance;
    let mut out = io::stdout().lock();

    let mut table = new_table(&["Metric", "Value"]);
    let plain: &[(&str, f64)] = &[
        ("Income", summary.total_income),
        ("Commitments", summary.total_commitments),
        ("Savings", summary.total_savings),
        ("Investments", summary.total_investments),
        ("Debt", summary.total_debt),
        ("Debt repaid", summary.total_paid_debt),
    ];
    for &(label, amount) in plain {
        _ = table.add_row(vec![
            Cell::new(label),
            amount_cell(format_balance(amount, show)),
        ]);
    }
    _ = table.add_row(vec![
        Cell::new("Debt remaining"),
        amount_cell(remaining_balance(summary.remaining_debt, show)),
    ]);
    _ = table.add_row(vec![
        Cell::new("Cash flow"),
        amount_cell(signed_balance(summary.cash_flow, show)).fg(sign_color(summary.cash_flow)),
    ]);
    _ = table.add_row(vec![
        Cell::new("Net worth"),
        amount_cell(signed_balance(summary.net_worth, show)).fg(sign_color(summary.net_worth)),
    ]);
    _ = table.add_row(vec![
        Cell::new("Debt progress"),
        amount_cell(format_percent(summary.debt_progress_display())),
    ]);
    _ = table.add_row(vec![
        Cell::new("Halal investments"),
        amount_cell(format_percent(summary.halal_percentage)),
    ]);

    let mode = if state.preferences().is_demo_mode {
        "(demo)"
    } else {
        ""
    };
    writeln!(
        out,
        "{} {}",
        state.household().name.green().bold(),
        mode.dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    if summary.is_overpaid() {
        writeln!(
            out,
            "  {} repayments exceed the recorded principal",
            "note:".yellow()
        )?;
    }
    Ok(())
}

/// Prints running commitments by due day, the next debt to focus on and
/// upcoming insurance renewals.
fn print_debts(state: &AppState, today: NaiveDate) -> io::Result<()> {
    let show_balance = state.preferences().show_balance;
    let mut commitments: Vec<Commitment> = state.active_commitments().cloned().collect();
    commitments.sort_by_key(|item| item.due_date);
    let mut out = io::stdout().lock();
    if commitments.is_empty() {
        writeln!(out, "{}", "No commitments found.".dimmed())?;
    } else {
        let today_day = u8::try_from(today.day()).unwrap_or(1);
        let mut table = new_table(&["Name", "Category", "Monthly", "Due", "Remaining", "Progress"]);
        for item in &commitments {
            let category = item
                .category
                .map_or(NONE_CELL, |category| category.label());
            let (remaining, progress) = item.remaining().map_or_else(
                || (NONE_CELL.to_owned(), NONE_CELL.to_owned()),
                |remaining| {
                    (
                        remaining_balance(remaining, show_balance),
                        format_percent(item.progress()),
                    )
                },
            );
            let days = item.days_until_due(today_day);
            let due = if days == 0 {
                Cell::new("today").fg(Color::Red)
            } else if item.is_urgent(today_day) {
                Cell::new(format!("in {days} days")).fg(Color::Red)
            } else {
                Cell::new(format!("day {}", item.due_date))
            };
            _ = table.add_row(vec![
                Cell::new(&item.name),
                Cell::new(category),
                amount_cell(format_balance(item.amount, show_balance)),
                due,
                amount_cell(remaining),
                amount_cell(progress),
            ]);
        }

        writeln!(
            out,
            "{} {}",
            "Commitments".green().bold(),
            format_args!("({})", commitments.len()).dimmed()
        )?;
        writeln!(out)?;
        writeln!(out, "{table}")?;
        if let Some(target) = next_debt_target(&commitments) {
            writeln!(
                out,
                "  {} {} ({} left)",
                "focus:".cyan(),
                target.name,
                remaining_balance(target.remaining().unwrap_or_default(), show_balance)
            )?;
        }
    }

    let renewals = upcoming_renewals(state.insurance(), today, RENEWAL_WINDOW_DAYS);
    if !renewals.is_empty() {
        let mut table = new_table(&["Policy", "Provider", "Renewal", "Premium"]);
        for policy in &renewals {
            let date = policy
                .renewal_date
                .map_or_else(|| NONE_CELL.to_owned(), |date| date.to_string());
            let renewal = if policy.renewal_date.is_some_and(|date| date < today) {
                Cell::new(date).fg(Color::Red)
            } else {
                Cell::new(date)
            };
            _ = table.add_row(vec![
                Cell::new(&policy.name),
                Cell::new(&policy.provider),
                renewal,
                amount_cell(format_balance(policy.premium, show_balance)),
            ]);
        }
        writeln!(out)?;
        writeln!(
            out,
            "{} {}",
            "Renewals".green().bold(),
            format_args!("(next {RENEWAL_WINDOW_DAYS} days)").dimmed()
        )?;
        writeln!(out)?;
        writeln!(out, "{table}")?;
    }
    Ok(())
}

/// Prints the zakat breakdown and the recorded payment, if any.
fn print_zakat(state: &AppState, args: &ZakatArgs, config: &ZakatConfig) -> io::Result<()> {
    let show = state.preferences().show_balance;
    let bases = args.bases(state.zakat_bases());
    let breakdown = config.compute(&bases);
    let mut out = io::stdout().lock();

    let mut table = new_table(&["Category", "Base", "Zakat"]);
    let rows: &[(&str, f64, f64)] = &[
        ("Income", bases.income, breakdown.income_zakat),
        ("Savings", bases.savings, breakdown.savings_zakat),
        ("Gold", bases.gold, breakdown.gold_zakat),
        ("Investments", bases.investments, breakdown.investment_zakat),
    ];
    for &(label, base, due) in rows {
        _ = table.add_row(vec![
            Cell::new(label),
            amount_cell(format_balance(base, show)),
            amount_cell(format_balance(due, show)),
        ]);
    }
    _ = table.add_row(vec![
        Cell::new("Total").fg(Color::Cyan),
        amount_cell(format_balance(bases.combined(), show)),
        amount_cell(format_balance(breakdown.total_due, show)).fg(Color::Green),
    ]);

    writeln!(
        out,
        "{} {}",
        "Zakat".green().bold(),
        format_args!(
            "(nisab {}, rate {:.1}%)",
            format_currency(config.nisab, false),
            config.rate * 100.0_f64
        )
        .dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    if !breakdown.meets_nisab {
        writeln!(
            out,
            "  {} combined wealth is below nisab",
            "note:".yellow()
        )?;
    }
    if let Some(record) = state.zakat() {
        let status = if record.is_paid() {
            "paid".green().to_string()
        } else {
            format!("{} outstanding", format_balance(record.outstanding(), show))
                .red()
                .to_string()
        };
        writeln!(
            out,
            "  {} {}: {} of {} {status}",
            "recorded".cyan(),
            record.year,
            format_balance(record.total_paid, show),
            format_balance(record.total_due, show)
        )?;
    }
    Ok(())
}

/// Prints the budget split of monthly income.
fn print_budget(state: &AppState) -> io::Result<()> {
    let show = state.preferences().show_balance;
    let settings = state.budget_settings();
    let allocation = state.budget_allocation();
    let mut out = io::stdout().lock();

    let mut table = new_table(&["Bucket", "Share", "Amount"]);
    let rows: &[(&str, u8, f64)] = &[
        ("Needs", settings.needs_percentage, allocation.needs),
        ("Wants", settings.wants_percentage, allocation.wants),
        ("Savings", settings.savings_percentage, allocation.savings),
    ];
    for &(label, share, amount) in rows {
        _ = table.add_row(vec![
            Cell::new(label),
            amount_cell(format!("{share}%")),
            amount_cell(format_balance(amount, show)),
        ]);
    }

    writeln!(
        out,
        "{} {}",
        "Budget".green().bold(),
        format_args!(
            "(income {})",
            format_balance(state.summary().total_income, show)
        )
        .dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Prints the estate plan.
fn print_faraid(faraid: Option<&Faraid>, show_balance: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let Some(plan) = faraid else {
        writeln!(out, "{}", "No estate plan recorded.".dimmed())?;
        return Ok(());
    };

    let mut table = new_table(&["Relation", "Share", "Recorded", "Entitlement"]);
    for heir in &plan.beneficiaries {
        _ = table.add_row(vec![
            Cell::new(&heir.relation),
            Cell::new(heir.share),
            amount_cell(format_balance(heir.amount, show_balance)),
            amount_cell(format_balance(heir.entitlement(plan.total_assets), show_balance)),
        ]);
    }

    let wasiat = if plan.has_wasiat { "with wasiat" } else { "no wasiat" };
    writeln!(
        out,
        "{} {}",
        "Faraid".green().bold(),
        format_args!(
            "(estate {}, {wasiat})",
            format_balance(plan.total_assets, show_balance)
        )
        .dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{table}")?;
    let unallocated = plan.unallocated();
    if unallocated.abs() >= 1.0_f64 {
        writeln!(
            out,
            "  {} {} not allocated to any heir",
            "note:".yellow(),
            signed_balance(unallocated, show_balance)
        )?;
    }
    Ok(())
}

/// Prints the household as a snapshot document.
fn print_export(state: &AppState) -> io::Result<()> {
    let json = state.to_snapshot().to_json().map_err(io::Error::other)?;
    writeln!(io::stdout().lock(), "{json}")
}

/// Entry point.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // Last-resort error output; nothing more to do if stderr fails.
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
