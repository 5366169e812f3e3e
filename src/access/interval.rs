//! Interval value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed range of two timestamps in microseconds.
///
/// No ordering between `lo` and `hi` is enforced; consumers decide what a
/// reversed interval means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    lo: i64,
    hi: i64,
}

impl Interval {
    /// Null interval sentinel, both bounds at `i64::MIN`
    pub const NULL: Interval = Interval {
        lo: i64::MIN,
        hi: i64::MIN,
    };

    pub fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn lo(&self) -> i64 {
        self.lo
    }

    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Shift both bounds by `offset`, wrapping on overflow.
    #[inline]
    pub fn shift(self, offset: i64) -> Self {
        Self {
            lo: self.lo.wrapping_add(offset),
            hi: self.hi.wrapping_add(offset),
        }
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_accessors() {
        let interval = Interval::new(1000, 2000);
        assert_eq!(interval.lo(), 1000);
        assert_eq!(interval.hi(), 2000);
        assert!(!interval.is_null());
        assert!(Interval::NULL.is_null());
    }

    #[test]
    fn test_reversed_interval_is_allowed() {
        let interval = Interval::new(50, -50);
        assert_eq!(interval.lo(), 50);
        assert_eq!(interval.hi(), -50);
        assert_eq!(interval.shift(10), Interval::new(60, -40));
    }

    #[test]
    fn test_shift_wraps() {
        let interval = Interval::new(i64::MAX, i64::MIN);
        assert_eq!(interval.shift(1), Interval::new(i64::MIN, i64::MIN + 1));
        assert_eq!(interval.shift(-1), Interval::new(i64::MAX - 1, i64::MAX));
    }

    #[test]
    fn test_copy_semantics() {
        let a = Interval::new(1, 2);
        let b = a;
        let c = a.shift(5);
        assert_eq!(a, b);
        assert_eq!(a, Interval::new(1, 2));
        assert_eq!(c, Interval::new(6, 7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(-5, 10).to_string(), "[-5,10]");
    }
}
