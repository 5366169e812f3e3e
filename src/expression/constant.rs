//! Interval constants and constant folding.

use crate::access::{EmptyRecord, Interval, Record};
use crate::expression::{ExpressionResult, IntervalFunction, PlanSink, Plannable};

/// Interval that does not depend on the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalConstant {
    interval: Interval,
}

impl IntervalConstant {
    pub fn new(interval: Interval) -> Self {
        Self { interval }
    }

    pub fn value(&self) -> Interval {
        self.interval
    }
}

impl Plannable for IntervalConstant {
    fn to_plan(&self, sink: &mut dyn PlanSink) {
        sink.val_char('[')
            .val_i64(self.interval.lo())
            .val_char(',')
            .val_i64(self.interval.hi())
            .val_char(']');
    }
}

impl IntervalFunction for IntervalConstant {
    #[inline]
    fn interval(&self, _record: &dyn Record) -> ExpressionResult<Interval> {
        Ok(self.interval)
    }

    fn is_constant(&self) -> bool {
        true
    }
}

/// Replace a constant expression by its value.
///
/// Non-constant expressions are returned untouched. A constant expression is
/// evaluated once against an empty record; if that fails the error is
/// returned and nothing is folded.
pub fn fold_constant(
    function: Box<dyn IntervalFunction>,
) -> ExpressionResult<Box<dyn IntervalFunction>> {
    if !function.is_constant() {
        return Ok(function);
    }

    let interval = function.interval(&EmptyRecord)?;
    log::debug!("folded constant interval expression to {}", interval);
    Ok(Box::new(IntervalConstant::new(interval)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Value;
    use crate::expression::{plan_text, IntervalColumn, OffsetIntervalFunction};

    #[test]
    fn test_constant_ignores_record() {
        let constant = IntervalConstant::new(Interval::new(3, 4));
        let row = vec![Value::Interval(Interval::new(100, 200))];
        assert_eq!(constant.interval(&row).unwrap(), Interval::new(3, 4));
        assert_eq!(constant.interval(&EmptyRecord).unwrap(), Interval::new(3, 4));
        assert!(constant.is_constant());
    }

    #[test]
    fn test_constant_plan() {
        let constant = IntervalConstant::new(Interval::new(-1, 9));
        assert_eq!(plan_text(&constant), "[-1,9]");
    }

    #[test]
    fn test_fold_offset_over_constant() {
        let expression: Box<dyn IntervalFunction> = Box::new(OffsetIntervalFunction::new(
            Box::new(IntervalConstant::new(Interval::new(1000, 2000))),
            500,
        ));
        assert_eq!(plan_text(&expression), "[1000,2000]+500");

        let folded = fold_constant(expression).unwrap();
        assert!(folded.is_constant());
        assert_eq!(plan_text(&folded), "[1500,2500]");
        assert_eq!(folded.interval(&EmptyRecord).unwrap(), Interval::new(1500, 2500));
    }

    #[test]
    fn test_fold_leaves_column_expressions() {
        let expression: Box<dyn IntervalFunction> = Box::new(OffsetIntervalFunction::new(
            Box::new(IntervalColumn::with_name(0, "ts")),
            500,
        ));

        let folded = fold_constant(expression).unwrap();
        assert!(!folded.is_constant());
        assert_eq!(plan_text(&folded), "ts+500");
    }
}
