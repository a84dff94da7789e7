//! I/O module
//!
//! Handles batch-file parsing and balance-sheet output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, output serialization)
//! - `batch_reader` - Streaming CSV reader with iterator interface
//! - `batch` - Batch pipeline applying operations to a bank

pub mod batch;
pub mod batch_reader;
pub mod csv_format;

pub use batch::{apply_operation, process_batch};
pub use batch_reader::BatchReader;
pub use csv_format::{convert_record, write_balances_csv, CsvRecord, Operation};
