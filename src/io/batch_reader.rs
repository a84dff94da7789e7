//! Streaming CSV reader for batch files
//!
//! Provides a streaming iterator over batch operations from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! BatchReader implements the Iterator trait, yielding
//! `Result<Operation, BankError>` for each CSV row:
//!
//! ```no_run
//! use bank_teller::io::batch_reader::BatchReader;
//! use std::path::Path;
//!
//! let reader = BatchReader::new(Path::new("operations.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(operation) => println!("Applying: {:?}", operation),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual row failures are yielded as Err variants with the file
//!   line number attached where it isn't already known
//!
//! # Memory Efficiency
//!
//! Rows are read one at a time; memory usage is O(1) per row, not
//! O(file_size).

use crate::io::csv_format::{convert_record, CsvRecord, Operation};
use crate::types::BankError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming batch-file reader
///
/// Provides an iterator interface over batch operations.
#[derive(Debug)]
pub struct BatchReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl BatchReader {
    /// Create a new BatchReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration. The CSV
    /// reader trims whitespace from all fields and allows flexible field
    /// counts, since each operation uses a different subset of columns.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the batch CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(BatchReader)` if the file opened successfully
    /// * `Err(BankError::IoError)` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, BankError> {
        let file = File::open(path).map_err(|e| BankError::IoError {
            message: format!("Failed to open batch file '{}': {}", path.display(), e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

/// Attach a file line number to errors that don't carry one yet
fn with_line(line: u64, error: BankError) -> BankError {
    match error {
        BankError::ParseError {
            line: None,
            message,
        } => BankError::ParseError {
            line: Some(line),
            message,
        },
        other => other,
    }
}

impl Iterator for BatchReader {
    type Item = Result<Operation, BankError>;

    /// Get the next operation from the batch file
    ///
    /// Reads the next CSV row, deserializes it to CsvRecord, and converts
    /// it to an Operation. Line numbers (header included) are attached to
    /// parse errors for debugging.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Operation))` - Successfully parsed row
    /// * `Some(Err(BankError))` - Parse or conversion failure
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<CsvRecord>();

        match rows.next()? {
            Ok(record) => {
                self.line_num += 1;
                // The header occupies line 1, so data row N lives on line N + 1
                let line = (self.line_num + 1) as u64;
                Some(convert_record(record).map_err(|e| with_line(line, e)))
            }
            Err(e) => {
                self.line_num += 1;
                let line = (self.line_num + 1) as u64;
                Some(Err(with_line(line, e.into())))
            }
        }
    }
}
