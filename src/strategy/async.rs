//! Asynchronous batch processing strategy
//!
//! Multi-threaded implementation of the ProcessingStrategy trait. Records are
//! read in batches and each batch is calculated across tokio worker threads.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (contiguous partitioning + tokio tasks)
//!     └── ResultWriter (incremental CSV output)
//! ```
//!
//! Batches are processed one after another and each batch's outcomes come back
//! in input order, so the output order matches the sync strategy exactly.

use crate::core::BatchProcessor;
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::ResultWriter;
use crate::strategy::{BatchSummary, ProcessingStrategy};
use crate::types::DepositError;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Configuration for batch processing
///
/// Controls how many records are read per batch and how many worker threads
/// calculate each batch.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of records per batch
    pub batch_size: usize,
    /// Number of worker threads, and partitions per batch
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches,
                default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process deposits from input file and write results to output
    ///
    /// 1. Builds a tokio multi-threaded runtime with the configured worker count
    /// 2. Reads records in batches with `AsyncReader`
    /// 3. Calculates each batch with `BatchProcessor`, waiting before the next read
    /// 4. Appends each batch's result rows to the output
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<BatchSummary, DepositError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| DepositError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let processor = BatchProcessor::new(self.config.max_concurrent_batches);

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => DepositError::file_not_found(input_path),
                    _ => DepositError::from(e),
                })?;

            // csv-async reads through the futures AsyncRead traits
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut writer = ResultWriter::new(output)?;
            let mut summary = BatchSummary::default();

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                let outcomes = processor.process_batch(batch).await;
                summary.record(&outcomes);
                writer.write_outcomes(&outcomes)?;
            }

            writer.finish()?;
            summary.skipped = reader.skipped();
            tracing::info!(
                calculated = summary.calculated,
                rejected = summary.rejected,
                skipped = summary.skipped,
                "async batch finished"
            );

            Ok::<_, DepositError>(summary)
        })
    }
}
