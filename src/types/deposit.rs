//! Deposit-related types for the term deposit calculator
//!
//! This module defines the request handed to the balance calculator, the
//! interest payment frequency, and the term representation used by the
//! interactive collector.

use super::error::DepositError;
use std::fmt;
use std::str::FromStr;

/// Deposit identifier used by batch input and output
pub type DepositId = u32;

/// How often interest is paid into the deposit
///
/// Every variant except `AtMaturity` compounds: interest is added to the
/// balance and earns interest itself for the rest of the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterestPaid {
    /// Compounded twelve times a year
    Monthly,

    /// Compounded four times a year
    Quarterly,

    /// Compounded once a year
    Annually,

    /// Simple interest, paid once with the principal at the end of the term
    AtMaturity,
}

impl InterestPaid {
    /// All frequencies in menu order
    pub const ALL: [InterestPaid; 4] = [
        InterestPaid::Monthly,
        InterestPaid::Quarterly,
        InterestPaid::Annually,
        InterestPaid::AtMaturity,
    ];

    /// Label shown in the interactive menu
    pub fn label(self) -> &'static str {
        match self {
            InterestPaid::Monthly => "Monthly",
            InterestPaid::Quarterly => "Quarterly",
            InterestPaid::Annually => "Annually",
            InterestPaid::AtMaturity => "At Maturity",
        }
    }

    /// Number of compounding periods per year, `None` for simple interest
    pub fn periods_per_year(self) -> Option<u32> {
        match self {
            InterestPaid::Monthly => Some(12),
            InterestPaid::Quarterly => Some(4),
            InterestPaid::Annually => Some(1),
            InterestPaid::AtMaturity => None,
        }
    }
}

impl fmt::Display for InterestPaid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InterestPaid::Monthly => "monthly",
            InterestPaid::Quarterly => "quarterly",
            InterestPaid::Annually => "annually",
            InterestPaid::AtMaturity => "at maturity",
        };
        f.write_str(text)
    }
}

impl FromStr for InterestPaid {
    type Err = DepositError;

    /// Parse a frequency, ignoring case and surrounding whitespace
    ///
    /// "at maturity" is also accepted with `_`, `-` or no separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(InterestPaid::Monthly),
            "quarterly" => Ok(InterestPaid::Quarterly),
            "annually" => Ok(InterestPaid::Annually),
            "at maturity" | "at_maturity" | "at-maturity" | "atmaturity" => {
                Ok(InterestPaid::AtMaturity)
            }
            _ => Err(DepositError::invalid_frequency(s)),
        }
    }
}

/// Input to the balance calculator
///
/// All three numbers must be strictly positive; the calculator rejects the
/// request otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepositRequest {
    /// Principal deposited at the start of the term
    pub start_amount: f64,

    /// Annual nominal rate as a percentage (1.1 means 1.1%)
    pub interest_rate: f64,

    /// Term length in years; fractional years are allowed
    pub investment_term: f64,

    /// Interest payment frequency
    pub interest_paid: InterestPaid,
}

/// Deposit request as received from a text boundary
///
/// The frequency is still a string here. It is only parsed once the numeric
/// fields have passed validation, see [`crate::core::calculate_raw`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawDepositRequest {
    pub start_amount: f64,
    pub interest_rate: f64,
    pub investment_term: f64,
    pub interest_paid: String,
}

/// One deposit request read from a batch input file
#[derive(Debug, Clone, PartialEq)]
pub struct DepositRecord {
    /// Identifier copied through to the result row
    pub id: DepositId,
    pub request: RawDepositRequest,
}

/// Result of calculating a single batch record
#[derive(Debug, Clone, PartialEq)]
pub struct DepositOutcome {
    pub id: DepositId,
    /// Final balance, or the error that rejected the request
    pub result: Result<f64, DepositError>,
}

/// Investment term as collected from a person: whole years plus months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvestmentTerm {
    pub years: u32,
    /// Remaining months, 0 to 11
    pub months: u32,
}

impl InvestmentTerm {
    pub fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    /// Total length in months; widened so any year count fits
    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * 12 + u64::from(self.months)
    }

    /// Term expressed in (possibly fractional) years
    pub fn in_years(&self) -> f64 {
        f64::from(self.years) + f64::from(self.months) / 12.0
    }

    /// Frequencies a person may pick for this term
    ///
    /// Annual payment is only offered once the term covers a full year, and
    /// is listed last.
    pub fn offered_frequencies(&self) -> Vec<InterestPaid> {
        let mut choices = vec![
            InterestPaid::Monthly,
            InterestPaid::Quarterly,
            InterestPaid::AtMaturity,
        ];
        if self.total_months() >= 12 {
            choices.push(InterestPaid::Annually);
        }
        choices
    }
}
