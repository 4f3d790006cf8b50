//! Core business logic module
//!
//! This module contains the calculation components:
//! - `calculator` - Pure balance calculation and input validation
//! - `batch_processor` - Concurrent calculation of record batches

pub mod batch_processor;
pub mod calculator;

pub use batch_processor::{calculate_record, BatchProcessor};
pub use calculator::{calculate_final_balance, calculate_raw};
