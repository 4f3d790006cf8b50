//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `deposit`: Deposit requests, payment frequency and term types
//! - `error`: Error types for the calculator

pub mod deposit;
pub mod error;

pub use deposit::{
    DepositId, DepositOutcome, DepositRecord, DepositRequest, InterestPaid, InvestmentTerm,
    RawDepositRequest,
};
pub use error::DepositError;
