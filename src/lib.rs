//! Term Deposit Calculator Library
//! # Overview
//!
//! Calculates the final balance of a fixed-term deposit from a principal, an
//! annual interest rate, a term, and how often interest is paid.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (DepositRequest, InterestPaid, DepositError, etc.)
//! - [`core`] - Business logic:
//!   - [`core::calculator`] - Pure balance calculation and validation
//!   - [`core::batch_processor`] - Concurrent calculation of record batches
//! - [`interactive`] - Prompt-driven input collection
//! - [`io`] - CSV reading and result writing for batch files
//! - [`strategy`] - Sync and async batch pipelines
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - stderr diagnostics
//!
//! # Interest Payment
//!
//! - **Monthly**: compounded 12 times a year
//! - **Quarterly**: compounded 4 times a year
//! - **Annually**: compounded once a year
//! - **At maturity**: simple interest on the principal for the whole term
//!
//! Balances are rounded to whole currency units.
//!
//! ```
//! use term_deposit_calculator::{calculate_final_balance, DepositRequest, InterestPaid};
//!
//! let request = DepositRequest {
//!     start_amount: 10000.0,
//!     interest_rate: 1.1,
//!     investment_term: 3.0,
//!     interest_paid: InterestPaid::Monthly,
//! };
//! assert_eq!(calculate_final_balance(&request).unwrap(), 10335.0);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod interactive;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{calculate_final_balance, calculate_raw};
pub use io::write_results_csv;
pub use types::{
    DepositError, DepositId, DepositOutcome, DepositRecord, DepositRequest, InterestPaid,
    InvestmentTerm, RawDepositRequest,
};
