//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. It streams
//! records from the `SyncReader`, calculates each one and writes result rows
//! as it goes, so memory use stays constant regardless of file size.

use crate::core::calculate_record;
use crate::io::csv_format::ResultWriter;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{BatchSummary, ProcessingStrategy};
use crate::types::DepositError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use term_deposit_calculator::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("deposits.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<BatchSummary, DepositError> {
        let reader = SyncReader::new(input_path)?;
        let mut writer = ResultWriter::new(output)?;
        let mut summary = BatchSummary::default();

        for result in reader {
            match result {
                Ok(record) => {
                    let outcome = [calculate_record(record)];
                    summary.record(&outcome);
                    writer.write_outcomes(&outcome)?;
                }
                Err(e) => {
                    summary.skipped += 1;
                    tracing::warn!("Skipping record: {}", e);
                }
            }
        }

        writer.finish()?;
        tracing::info!(
            calculated = summary.calculated,
            rejected = summary.rejected,
            skipped = summary.skipped,
            "sync batch finished"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_strategy_calculates_deposits() {
        let file = create_temp_csv(
            "id,start_amount,interest_rate,investment_term,interest_paid\n\
             1,10000,1.1,3,at maturity\n\
             2,10000,1.1,3,monthly\n\
             3,10000,1.1,3,quarterly\n\
             4,10000,1.1,3,annually\n",
        );

        let mut output = Vec::new();
        let summary = SyncProcessingStrategy
            .process(file.path(), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,final_balance,error\n1,10330,\n2,10335,\n3,10335,\n4,10334,\n"
        );
        assert_eq!(summary.calculated, 4);
    }

    #[test]
    fn test_sync_strategy_reports_rejected_requests() {
        let file = create_temp_csv(
            "id,start_amount,interest_rate,investment_term,interest_paid\n\
             1,-10000,1.1,3,invalid\n\
             2,10000,1.1,3,invalid\n",
        );

        let mut output = Vec::new();
        let summary = SyncProcessingStrategy
            .process(file.path(), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,final_balance,error\n\
             1,,Invalid input: All values must be positive.\n\
             2,,Invalid interest payment frequency.\n"
        );
        assert_eq!(summary.rejected, 2);
    }

    #[test]
    fn test_sync_strategy_continues_on_malformed_record() {
        let file = create_temp_csv(
            "id,start_amount,interest_rate,investment_term,interest_paid\n\
             1,10000,1.1,3,monthly\n\
             2,10000,one,3,monthly\n\
             3,10000,1.1,3,monthly\n",
        );

        let mut output = Vec::new();
        let summary = SyncProcessingStrategy
            .process(file.path(), &mut output)
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("1,10335,"));
        assert!(!output.contains("\n2,"));
        assert!(output.contains("3,10335,"));
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let mut output = Vec::new();
        let result = SyncProcessingStrategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(result, Err(DepositError::FileNotFound { .. })));
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
