pub mod access;
pub mod executor;
pub mod expression;
