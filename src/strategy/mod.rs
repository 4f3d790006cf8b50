//! Processing strategy module for batch calculation
//!
//! This module defines the Strategy pattern for complete batch pipelines,
//! covering CSV parsing, balance calculation and result output. Different
//! implementations (synchronous, asynchronous batch) are selected at runtime.

use crate::cli::StrategyType;
use crate::types::{DepositError, DepositOutcome};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Counts reported at the end of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records with a final balance
    pub calculated: usize,
    /// Records the calculator rejected (written with an error message)
    pub rejected: usize,
    /// Rows that could not be parsed and were left out of the output
    pub skipped: usize,
}

impl BatchSummary {
    /// Count a slice of outcomes
    pub fn record(&mut self, outcomes: &[DepositOutcome]) {
        for outcome in outcomes {
            match outcome.result {
                Ok(_) => self.calculated += 1,
                Err(_) => self.rejected += 1,
            }
        }
    }
}

/// Processing strategy trait for complete batch pipelines
///
/// Each strategy reads deposit records from a CSV file, calculates them, and
/// writes one result row per valid record to the output, in input order.
pub trait ProcessingStrategy: Send + Sync {
    /// Process deposits from input file and write results to output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - The output cannot be written
    ///
    /// Rows that fail to parse are logged and skipped; rejected requests are
    /// written as result rows. Neither stops processing.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<BatchSummary, DepositError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
