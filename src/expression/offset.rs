//! Interval shifted by a fixed offset.

use crate::access::{Interval, Record};
use crate::expression::{ExpressionResult, IntervalFunction, PlanSink, Plannable, UnaryFunction};

/// Shifts both bounds of its child's interval by a constant offset.
///
/// The child type defaults to `dyn IntervalFunction` for trees assembled at
/// runtime; a concrete child type gives static dispatch on the per-row path.
///
/// Bounds are shifted with wrapping arithmetic, so evaluation never fails on
/// its own account. Errors from the child are returned as-is.
#[derive(Debug)]
pub struct OffsetIntervalFunction<F: IntervalFunction + ?Sized = dyn IntervalFunction> {
    offset: i64,
    interval: Box<F>,
}

impl<F: IntervalFunction + ?Sized> OffsetIntervalFunction<F> {
    pub fn new(interval: Box<F>, offset: i64) -> Self {
        Self { offset, interval }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl<F: IntervalFunction + ?Sized> UnaryFunction for OffsetIntervalFunction<F> {
    type Arg = F;

    fn arg(&self) -> &F {
        &self.interval
    }
}

impl<F: IntervalFunction + ?Sized> Plannable for OffsetIntervalFunction<F> {
    fn to_plan(&self, sink: &mut dyn PlanSink) {
        sink.val_plan(&*self.interval)
            .val_char('+')
            .val_i64(self.offset);
    }
}

impl<F: IntervalFunction + ?Sized> IntervalFunction for OffsetIntervalFunction<F> {
    #[inline]
    fn interval(&self, record: &dyn Record) -> ExpressionResult<Interval> {
        Ok(self.interval.interval(record)?.shift(self.offset))
    }

    fn is_constant(&self) -> bool {
        self.interval.is_constant()
    }
}
