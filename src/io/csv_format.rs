//! CSV format handling for deposit records and calculation results
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Result output serialization
//!
//! Input columns: `id,start_amount,interest_rate,investment_term,interest_paid`.
//! Output columns: `id,final_balance,error`.

use crate::types::{DepositError, DepositId, DepositOutcome, DepositRecord, RawDepositRequest};
use serde::Deserialize;
use std::io::Write;

/// Output header, written even when there are no result rows
pub const RESULT_HEADER: [&str; 3] = ["id", "final_balance", "error"];

/// CSV record structure for deserialization
///
/// Numeric columns are kept as text so a bad number can be reported with the
/// deposit id and the offending value rather than as a generic serde error.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub id: DepositId,
    pub start_amount: String,
    pub interest_rate: String,
    pub investment_term: String,
    pub interest_paid: String,
}

/// Convert a CsvRecord to a DepositRecord
///
/// Parses the three numeric columns. The frequency column is passed through
/// untouched; it is validated by the calculator after the numbers, so an
/// unknown frequency becomes a result row instead of a skipped record.
///
/// # Returns
///
/// * `Ok(DepositRecord)` - Successfully converted record
/// * `Err(String)` - Error message naming the column, value and deposit id
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<DepositRecord, String> {
    let id = csv_record.id;
    let parse = |column: &str, value: &str| -> Result<f64, String> {
        value
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid {} '{}' for deposit {}", column, value, id))
    };

    Ok(DepositRecord {
        id,
        request: RawDepositRequest {
            start_amount: parse("start_amount", &csv_record.start_amount)?,
            interest_rate: parse("interest_rate", &csv_record.interest_rate)?,
            investment_term: parse("investment_term", &csv_record.investment_term)?,
            interest_paid: csv_record.interest_paid,
        },
    })
}

/// Format an outcome as output columns
///
/// Successful outcomes carry the balance and an empty error column; failed
/// outcomes an empty balance column and the error message.
pub fn outcome_fields(outcome: &DepositOutcome) -> [String; 3] {
    match &outcome.result {
        Ok(balance) => [outcome.id.to_string(), format!("{}", balance), String::new()],
        Err(e) => [outcome.id.to_string(), String::new(), e.to_string()],
    }
}

/// Incremental CSV writer for calculation results
///
/// Writes the header on creation so batches can be appended as they finish.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    /// Create a writer and emit the header row
    pub fn new(output: W) -> Result<Self, DepositError> {
        let mut writer = csv::Writer::from_writer(output);
        writer.write_record(RESULT_HEADER)?;
        Ok(Self { writer })
    }

    /// Append result rows
    pub fn write_outcomes(&mut self, outcomes: &[DepositOutcome]) -> Result<(), DepositError> {
        for outcome in outcomes {
            self.writer.write_record(&outcome_fields(outcome))?;
        }
        Ok(())
    }

    /// Flush buffered rows to the underlying writer
    pub fn finish(mut self) -> Result<(), DepositError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write a complete result file in one call
pub fn write_results_csv(
    outcomes: &[DepositOutcome],
    output: &mut dyn Write,
) -> Result<(), DepositError> {
    let mut writer = ResultWriter::new(output)?;
    writer.write_outcomes(outcomes)?;
    writer.finish()
}
