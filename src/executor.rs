//! Executor layer driving expression evaluation over batches of rows.

pub mod interval_projection;

pub use interval_projection::IntervalProjection;
