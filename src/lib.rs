//! Household finance core for Malaysian families.
//!
//! This crate aggregates a household's income, commitments, savings and
//! investments into dashboard figures, computes zakat liability against
//! the nisab threshold and formats amounts as ringgit.
//!
//! ```
//! use myduit::demo::sample_state;
//! use myduit::format::format_currency;
//!
//! let state = sample_state();
//! let summary = state.summary();
//! assert_eq!(format_currency(summary.cash_flow, true), "+RM 7,750.00");
//! ```

pub mod demo;
pub mod error;
pub mod format;
pub mod models;
pub mod snapshot;
pub mod state;
pub mod storage;
pub mod summary;
pub mod validate;
pub mod zakat;

pub use error::{MyDuitError, Result};
pub use state::{AppState, UiPreferences};
pub use summary::{Summary, compute_summary};
pub use zakat::{ZakatBreakdown, compute_zakat};
