//! Access layer for row-oriented values.
//!
//! - **Interval**: immutable pair of microsecond timestamps
//! - **Value / DataType**: column values a record can hold
//! - **Record**: read-only per-row accessor handed to expressions
//! - **row_file**: bincode row batches on disk

pub mod interval;
pub mod record;
pub mod row_file;
pub mod value;

pub use interval::Interval;
pub use record::{EmptyRecord, Record};
pub use row_file::{read_rows, write_rows};
pub use value::{DataType, Value};
