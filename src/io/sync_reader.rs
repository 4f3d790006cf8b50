//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over deposit records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding `Result<DepositRecord, String>`
//! for each CSV row:
//!
//! ```no_run
//! use term_deposit_calculator::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("deposits.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Deposit {}: {:?}", record.id, record.request),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{DepositError, DepositRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one record at a time; memory use does not grow with the file.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader trims whitespace from all fields and uses an 8KB buffer.
    ///
    /// # Errors
    ///
    /// * `DepositError::FileNotFound` if the path does not exist
    /// * `DepositError::IoError` for any other open failure
    pub fn new(path: &Path) -> Result<Self, DepositError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DepositError::file_not_found(path),
            _ => DepositError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<DepositRecord, String>;

    /// Get the next deposit record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(DepositRecord))` - Successfully parsed record
    /// * `Some(Err(String))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        let next = deserializer.next()?;
        self.line_num += 1;
        // +1 for the header row
        let line = self.line_num + 1;

        match next {
            Ok(csv_record) => {
                Some(convert_csv_record(csv_record).map_err(|e| format!("Line {}: {}", line, e)))
            }
            Err(e) => Some(Err(format!("Line {}: CSV parse error: {}", line, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "id,start_amount,interest_rate,investment_term,interest_paid\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(rows: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(HEADER.as_bytes())
            .and_then(|_| file.write_all(rows.as_bytes()))
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_sync_reader_new_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert_eq!(
            result.unwrap_err(),
            DepositError::FileNotFound {
                path: "nonexistent.csv".to_string()
            }
        );
    }

    #[test]
    fn test_sync_reader_iterates_valid_record() {
        let file = create_temp_csv("1,10000,1.1,3,monthly\n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.request.start_amount, 10000.0);
        assert_eq!(record.request.interest_rate, 1.1);
        assert_eq!(record.request.investment_term, 3.0);
        assert_eq!(record.request.interest_paid, "monthly");
    }

    #[test]
    fn test_sync_reader_includes_line_numbers_in_errors() {
        let file = create_temp_csv(
            "1,10000,1.1,3,monthly\n\
             2,lots,1.1,3,monthly\n\
             3,5000,2.0,1,annually\n",
        );

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());

        let error = records[1].as_ref().unwrap_err();
        assert!(error.contains("Line 3"), "{}", error); // Line 3 because of header
        assert!(error.contains("Invalid start_amount 'lots'"), "{}", error);
    }

    #[test]
    fn test_sync_reader_reports_wrong_field_count() {
        let file = create_temp_csv("1,10000,1.1\n2,10000,1.1,3,quarterly\n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 2);
        let error = records[0].as_ref().unwrap_err();
        assert!(error.contains("Line 2: CSV parse error"), "{}", error);
        assert_eq!(records[1].as_ref().unwrap().id, 2);
    }

    #[test]
    fn test_sync_reader_handles_whitespace() {
        let file = create_temp_csv("  7 ,  10000  , 1.1 , 3 ,  at maturity  \n");

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.request.interest_paid, "at maturity");
    }

    #[test]
    fn test_sync_reader_handles_empty_file_after_header() {
        let file = create_temp_csv("");
        assert_eq!(SyncReader::new(file.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_sync_reader_filter_map_pattern() {
        let file = create_temp_csv(
            "1,10000,1.1,3,monthly\n\
             2,10000,abc,3,monthly\n\
             3,10000,1.1,3,monthly\n",
        );

        let valid: Vec<_> = SyncReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].id, 1);
        assert_eq!(valid[1].id, 3);
    }
}
