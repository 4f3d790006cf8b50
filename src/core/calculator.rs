//! Balance calculation
//!
//! Pure functions turning a deposit request into a final balance. Nothing in
//! this module performs I/O or logs; callers decide how to surface errors.

use crate::types::{DepositError, DepositRequest, RawDepositRequest};

/// Calculate the final balance of a term deposit
///
/// Validates that the start amount, interest rate and term are all strictly
/// positive, then applies the formula selected by the payment frequency:
///
/// - compounding frequencies: `start * (1 + rate / n) ^ (term * n)` with
///   `n` periods per year
/// - at maturity: `start * (1 + rate * term)`
///
/// where `rate` is the percentage rate divided by 100. The balance is rounded
/// to the nearest whole currency unit, ties away from zero.
///
/// # Errors
///
/// Returns [`DepositError::InvalidInput`] if any of the three numbers is zero,
/// negative or NaN.
pub fn calculate_final_balance(request: &DepositRequest) -> Result<f64, DepositError> {
    ensure_positive(
        request.start_amount,
        request.interest_rate,
        request.investment_term,
    )?;

    let rate = request.interest_rate / 100.0;
    let term = request.investment_term;

    let growth = match request.interest_paid.periods_per_year() {
        Some(periods) => {
            let periods = f64::from(periods);
            (1.0 + rate / periods).powf(term * periods)
        }
        None => 1.0 + rate * term,
    };

    Ok((request.start_amount * growth).round())
}

/// Calculate the final balance of a request whose frequency is still text
///
/// The numeric fields are validated before the frequency is parsed, so a
/// request that is wrong on both counts reports [`DepositError::InvalidInput`].
///
/// # Errors
///
/// - [`DepositError::InvalidInput`] for a non-positive amount, rate or term
/// - [`DepositError::InvalidFrequency`] for an unrecognized frequency
pub fn calculate_raw(raw: &RawDepositRequest) -> Result<f64, DepositError> {
    ensure_positive(raw.start_amount, raw.interest_rate, raw.investment_term)?;

    let request = DepositRequest {
        start_amount: raw.start_amount,
        interest_rate: raw.interest_rate,
        investment_term: raw.investment_term,
        interest_paid: raw.interest_paid.parse()?,
    };

    calculate_final_balance(&request)
}

// `!(x > 0.0)` rather than `x <= 0.0` so NaN is rejected too.
fn ensure_positive(
    start_amount: f64,
    interest_rate: f64,
    investment_term: f64,
) -> Result<(), DepositError> {
    if !(start_amount > 0.0) || !(interest_rate > 0.0) || !(investment_term > 0.0) {
        return Err(DepositError::InvalidInput);
    }
    Ok(())
}
