//! Capabilities implemented by expression nodes.
//!
//! Each capability is its own trait so a node picks exactly the ones it
//! supports: [`IntervalFunction`] for nodes producing intervals,
//! [`UnaryFunction`] for nodes with a single child, and
//! [`Plannable`](crate::expression::Plannable) for plan rendering.

use crate::access::{Interval, Record};
use crate::expression::{ExpressionResult, PlanSink, Plannable};
use std::fmt;
use std::sync::Arc;

/// A node that evaluates to an [`Interval`] for each record.
///
/// Implementations must be referentially transparent per record: evaluating
/// the same record twice yields the same interval. Nodes hold no per-row
/// state, which is what makes sharing one tree across threads sound.
pub trait IntervalFunction: Plannable + Send + Sync + fmt::Debug {
    /// Evaluate against `record`
    fn interval(&self, record: &dyn Record) -> ExpressionResult<Interval>;

    /// Whether the result is independent of the record
    fn is_constant(&self) -> bool {
        false
    }
}

/// A node with exactly one child expression
pub trait UnaryFunction {
    type Arg: ?Sized;

    fn arg(&self) -> &Self::Arg;
}

impl<T: Plannable + ?Sized> Plannable for Box<T> {
    fn to_plan(&self, sink: &mut dyn PlanSink) {
        (**self).to_plan(sink)
    }
}

impl<T: IntervalFunction + ?Sized> IntervalFunction for Box<T> {
    #[inline]
    fn interval(&self, record: &dyn Record) -> ExpressionResult<Interval> {
        (**self).interval(record)
    }

    fn is_constant(&self) -> bool {
        (**self).is_constant()
    }
}

impl<T: Plannable + ?Sized> Plannable for Arc<T> {
    fn to_plan(&self, sink: &mut dyn PlanSink) {
        (**self).to_plan(sink)
    }
}

impl<T: IntervalFunction + ?Sized> IntervalFunction for Arc<T> {
    #[inline]
    fn interval(&self, record: &dyn Record) -> ExpressionResult<Interval> {
        (**self).interval(record)
    }

    fn is_constant(&self) -> bool {
        (**self).is_constant()
    }
}
