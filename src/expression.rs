//! Interval expression framework.
//!
//! This module provides:
//! - Capability traits for interval-producing and single-argument nodes
//! - Plan rendering into a text sink
//! - Interval column references, constants and constant folding
//! - The offset node shifting an interval by a fixed amount

pub mod column;
pub mod constant;
pub mod error;
pub mod function;
pub mod offset;
pub mod plan;

pub use column::IntervalColumn;
pub use constant::{fold_constant, IntervalConstant};
pub use error::{ExpressionError, ExpressionResult};
pub use function::{IntervalFunction, UnaryFunction};
pub use offset::OffsetIntervalFunction;
pub use plan::{plan_text, PlanSink, Plannable, TextPlanSink};
