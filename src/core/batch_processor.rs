//! Batch processing with order-preserving partitioning for async calculation
//!
//! This module provides the `BatchProcessor` struct, which splits a batch of
//! deposit records into contiguous partitions and calculates them on
//! concurrent tokio tasks.
//!
//! # Design
//!
//! Every record is independent (the calculator is pure), so partitions need no
//! coordination. Partitions are contiguous slices of the batch and their
//! results are joined in spawn order, which keeps the outcomes in input order.
//!
//! ```text
//! batch ──► [p0][p1]..[pn] ──► tokio::spawn each ──► join in order ──► outcomes
//! ```

use crate::core::calculator::calculate_raw;
use crate::types::{DepositOutcome, DepositRecord};

/// Calculate one batch record, keeping its identifier
pub fn calculate_record(record: DepositRecord) -> DepositOutcome {
    DepositOutcome {
        id: record.id,
        result: calculate_raw(&record.request),
    }
}

/// Batch processor with contiguous partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Upper bound on partitions (and therefore tasks) per batch
    max_partitions: usize,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    ///
    /// A `max_partitions` of zero is treated as one.
    pub fn new(max_partitions: usize) -> Self {
        Self {
            max_partitions: max_partitions.max(1),
        }
    }

    /// Split a batch into at most `max_partitions` contiguous partitions
    ///
    /// # Guarantees
    ///
    /// - Each record appears in exactly one partition
    /// - Concatenating the partitions yields the input batch
    /// - No partition is empty
    pub fn partition(&self, batch: Vec<DepositRecord>) -> Vec<Vec<DepositRecord>> {
        let chunk_size = batch.len().div_ceil(self.max_partitions).max(1);

        let mut partitions = Vec::with_capacity(self.max_partitions);
        let mut records = batch.into_iter().peekable();
        while records.peek().is_some() {
            partitions.push(records.by_ref().take(chunk_size).collect());
        }

        partitions
    }

    /// Calculate every record of one partition in order
    pub fn process_partition(records: Vec<DepositRecord>) -> Vec<DepositOutcome> {
        records.into_iter().map(calculate_record).collect()
    }

    /// Calculate a batch concurrently
    ///
    /// Partitions the batch, spawns one tokio task per partition and joins the
    /// tasks in spawn order. Outcomes are returned in the order of `batch`.
    /// A task that fails to join is logged and its records are dropped.
    pub async fn process_batch(&self, batch: Vec<DepositRecord>) -> Vec<DepositOutcome> {
        let total = batch.len();
        let partitions = self.partition(batch);
        tracing::debug!(
            records = total,
            partitions = partitions.len(),
            "processing batch"
        );

        let tasks: Vec<_> = partitions
            .into_iter()
            .map(|partition| tokio::spawn(async move { Self::process_partition(partition) }))
            .collect();

        let mut outcomes = Vec::with_capacity(total);
        for task in tasks {
            match task.await {
                Ok(partition_outcomes) => outcomes.extend(partition_outcomes),
                Err(e) => tracing::error!("Calculation task failed: {}", e),
            }
        }

        outcomes
    }
}
