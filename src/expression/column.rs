//! Interval column reference.

use crate::access::{DataType, Interval, Record, Value};
use crate::expression::{ExpressionError, ExpressionResult, IntervalFunction, PlanSink, Plannable};

/// Reads an interval from a column of the current record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalColumn {
    /// Column index in the record (0-based)
    pub index: usize,
    /// Optional column name for plan output
    pub name: Option<String>,
}

impl IntervalColumn {
    pub fn new(index: usize) -> Self {
        Self { index, name: None }
    }

    pub fn with_name(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: Some(name.into()),
        }
    }
}

impl Plannable for IntervalColumn {
    fn to_plan(&self, sink: &mut dyn PlanSink) {
        match &self.name {
            Some(name) => sink.put_str(name),
            None => {
                sink.val_char('$').val_i64(self.index as i64);
            }
        }
    }
}

impl IntervalFunction for IntervalColumn {
    fn interval(&self, record: &dyn Record) -> ExpressionResult<Interval> {
        match record.value(self.index) {
            Some(Value::Interval(interval)) => Ok(*interval),
            Some(Value::Null) => Ok(Interval::NULL),
            Some(other) => Err(ExpressionError::TypeMismatch {
                expected: DataType::Interval,
                actual: other.data_type(),
                context: format!("interval column {}", self.index),
            }),
            None => Err(ExpressionError::ColumnIndexOutOfBounds {
                index: self.index,
                column_count: record.column_count(),
            }),
        }
    }
}
