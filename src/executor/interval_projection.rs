//! Interval projection executor.
//!
//! Evaluates one interval expression against every row of a batch. Rows can be
//! split into contiguous lanes evaluated on separate threads; all lanes share
//! the same expression tree by reference.

use crate::access::{Interval, Value};
use crate::expression::{plan_text, ExpressionResult, IntervalFunction};
use std::thread;

/// Projects a batch of rows onto a single interval expression
#[derive(Debug)]
pub struct IntervalProjection {
    expression: Box<dyn IntervalFunction>,
}

impl IntervalProjection {
    pub fn new(expression: Box<dyn IntervalFunction>) -> Self {
        Self { expression }
    }

    pub fn expression(&self) -> &dyn IntervalFunction {
        self.expression.as_ref()
    }

    /// Plan text of the projected expression
    pub fn explain(&self) -> String {
        plan_text(self.expression.as_ref())
    }

    /// Evaluate every row in order. The first failing row aborts the batch.
    pub fn project(&self, rows: &[Vec<Value>]) -> ExpressionResult<Vec<Interval>> {
        log::debug!("projecting {} rows onto {}", rows.len(), self.explain());
        evaluate_lane(self.expression.as_ref(), rows)
    }

    /// Evaluate rows split across `lanes` threads.
    ///
    /// Output order matches row order. When several lanes fail, the error of
    /// the earliest lane is returned. `lanes == 0` behaves like one lane.
    pub fn project_parallel(
        &self,
        rows: &[Vec<Value>],
        lanes: usize,
    ) -> ExpressionResult<Vec<Interval>> {
        let lanes = lanes.max(1);
        if lanes == 1 || rows.len() < 2 {
            return self.project(rows);
        }

        let chunk_size = rows.len().div_ceil(lanes);
        log::debug!(
            "projecting {} rows onto {} across {} lanes of up to {} rows",
            rows.len(),
            self.explain(),
            lanes,
            chunk_size
        );

        let expression = self.expression.as_ref();
        let results: Vec<ExpressionResult<Vec<Interval>>> = thread::scope(|scope| {
            let handles: Vec<_> = rows
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || evaluate_lane(expression, chunk)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        let mut intervals = Vec::with_capacity(rows.len());
        for lane in results {
            intervals.extend(lane?);
        }
        Ok(intervals)
    }
}

fn evaluate_lane(
    expression: &dyn IntervalFunction,
    rows: &[Vec<Value>],
) -> ExpressionResult<Vec<Interval>> {
    rows.iter().map(|row| expression.interval(row)).collect()
}
