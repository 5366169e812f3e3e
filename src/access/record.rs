//! Per-row record access.

use crate::access::Value;

/// Read-only view of a single row handed to expressions during evaluation.
///
/// Expressions borrow a record only for the duration of one call and must not
/// retain it.
pub trait Record {
    /// Value of the column at `index`, or `None` past the last column
    fn value(&self, index: usize) -> Option<&Value>;

    /// Number of columns in the record
    fn column_count(&self) -> usize;
}

impl Record for Vec<Value> {
    fn value(&self, index: usize) -> Option<&Value> {
        self.get(index)
    }

    fn column_count(&self) -> usize {
        self.len()
    }
}

/// Record with no columns, used to evaluate constant expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRecord;

impl Record for EmptyRecord {
    fn value(&self, _index: usize) -> Option<&Value> {
        None
    }

    fn column_count(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Interval;

    #[test]
    fn test_vec_record() {
        let values = vec![Value::Interval(Interval::new(1, 2)), Value::Null];
        let record: &dyn Record = &values;
        assert_eq!(record.column_count(), 2);
        assert_eq!(record.value(1), Some(&Value::Null));
        assert_eq!(record.value(2), None);
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(EmptyRecord.column_count(), 0);
        assert_eq!(EmptyRecord.value(0), None);
    }
}
