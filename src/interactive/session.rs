//! Interactive collection of a deposit request
//!
//! Asks for the start amount, interest rate, term (years, then remaining
//! months) and payment frequency in that order, re-asking whenever an answer
//! does not parse. Annual payment is only offered for terms of at least a
//! year.

use super::prompter::Prompter;
use crate::core::calculate_final_balance;
use crate::types::{DepositError, DepositRequest, InterestPaid, InvestmentTerm};
use std::str::FromStr;

const INVALID_POSITIVE: &str = "Please enter a valid positive number.";
const INVALID_YEARS: &str = "Please enter a valid number of years.";
const INVALID_MONTHS: &str = "Please enter a valid number of months (0-11).";

/// Result of one interactive run, ready for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResult {
    pub request: DepositRequest,
    pub final_balance: f64,
}

/// Format a calculated balance for display
pub fn present(final_balance: f64, interest_paid: InterestPaid) -> String {
    format!(
        "Final balance: ${}, interest paid {}",
        final_balance, interest_paid
    )
}

/// Prompt-driven input collector
pub struct Session<P: Prompter> {
    prompter: P,
}

impl<P: Prompter> Session<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Collect a complete deposit request
    ///
    /// # Errors
    ///
    /// - `DepositError::MissingInput` if the term adds up to zero months
    /// - `DepositError::Prompt` if the prompter fails
    pub fn collect_request(&mut self) -> Result<DepositRequest, DepositError> {
        let start_amount = self.ask(
            "Enter the start deposit amount:",
            INVALID_POSITIVE,
            |v: &f64| *v > 0.0,
        )?;
        let interest_rate = self.ask_with(
            "Enter the interest rate (as a percentage):",
            INVALID_POSITIVE,
            |answer| {
                let number = answer.strip_suffix('%').unwrap_or(answer).trim_end();
                number.parse::<f64>().ok().filter(|v| *v > 0.0)
            },
        )?;
        let years = self.ask("Enter the investment term (years):", INVALID_YEARS, |_: &u32| {
            true
        })?;
        let months = self.ask(
            "Enter the remaining investment term (months):",
            INVALID_MONTHS,
            |v: &u32| *v <= 11,
        )?;

        let term = InvestmentTerm::new(years, months);
        let interest_paid = self.ask_frequency(&term)?;

        if term.total_months() == 0 {
            return Err(DepositError::MissingInput);
        }

        Ok(DepositRequest {
            start_amount,
            interest_rate,
            investment_term: term.in_years(),
            interest_paid,
        })
    }

    /// Collect a request and calculate its final balance
    pub fn run(&mut self) -> Result<SessionResult, DepositError> {
        let request = self.collect_request()?;
        let final_balance = calculate_final_balance(&request)?;
        tracing::debug!(?request, final_balance, "interactive calculation");

        Ok(SessionResult {
            request,
            final_balance,
        })
    }

    fn ask<T: FromStr>(
        &mut self,
        message: &str,
        rejection: &str,
        accept: impl Fn(&T) -> bool,
    ) -> Result<T, DepositError> {
        self.ask_with(message, rejection, |answer| {
            answer.parse::<T>().ok().filter(|value| accept(value))
        })
    }

    /// Ask until `parse` accepts the trimmed answer
    fn ask_with<T>(
        &mut self,
        message: &str,
        rejection: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, DepositError> {
        loop {
            let answer = self.prompter.input(message)?;
            match parse(answer.trim()) {
                Some(value) => return Ok(value),
                None => self.prompter.reject(rejection),
            }
        }
    }

    fn ask_frequency(&mut self, term: &InvestmentTerm) -> Result<InterestPaid, DepositError> {
        let offered = term.offered_frequencies();
        let labels: Vec<&str> = offered.iter().map(|f| f.label()).collect();

        let index = self.prompter.select("How is the interest paid?", &labels)?;
        offered
            .get(index)
            .copied()
            .ok_or_else(|| DepositError::prompt(format!("no choice at index {}", index)))
    }
}
