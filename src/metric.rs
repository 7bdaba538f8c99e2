//! Dedicated logic for
//! [metrics](https://datatracker.ietf.org/doc/html/rfc6126#section-3.5.2).

use core::fmt;
use std::ops::Add;

/// Value of the infinite metric, indicating an unreachable (retracted) route.
const METRIC_INFINITE: u16 = 0xFFFF;

/// A `Metric` indicates the cost associated with a route. A lower metric means a route is more
/// favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd)]
pub struct Metric(u16);

impl Metric {
    /// Create a new `Metric` with the given value.
    pub const fn new(value: u16) -> Self {
        Metric(value)
    }

    /// Creates a new infinite `Metric`.
    pub const fn infinite() -> Self {
        Metric(METRIC_INFINITE)
    }

    /// Checks if this metric indicates a retracted route.
    pub const fn is_infinite(&self) -> bool {
        self.0 == METRIC_INFINITE
    }

    /// Checks if this metric represents a directly connected route.
    pub const fn is_direct(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            f.pad("Infinite")
        } else {
            f.write_fmt(format_args!("{}", self.0))
        }
    }
}

impl From<u16> for Metric {
    fn from(value: u16) -> Self {
        Metric(value)
    }
}

impl From<Metric> for u16 {
    fn from(value: Metric) -> Self {
        value.0
    }
}

impl Add for Metric {
    type Output = Self;

    fn add(self, rhs: Metric) -> Self::Output {
        if self.is_infinite() || rhs.is_infinite() {
            return Metric::infinite();
        }
        // Saturate below infinity, a sum of finite metrics must stay finite.
        Metric(
            self.0
                .checked_add(rhs.0)
                .map(|r| r.min(METRIC_INFINITE - 1))
                .unwrap_or(METRIC_INFINITE - 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Metric;

    #[test]
    fn add_finite() {
        assert_eq!(Metric::new(10) + Metric::new(5), Metric::new(15));
    }

    #[test]
    fn add_saturates_below_infinite() {
        assert_eq!(
            Metric::new(u16::MAX - 1) + Metric::new(100),
            Metric::new(u16::MAX - 1)
        );
        assert!(!(Metric::new(u16::MAX - 1) + Metric::new(100)).is_infinite());
    }

    #[test]
    fn add_infinite() {
        assert!((Metric::infinite() + Metric::new(1)).is_infinite());
        assert!((Metric::new(1) + Metric::infinite()).is_infinite());
    }

    #[test]
    fn direct() {
        assert!(Metric::new(0).is_direct());
        assert!(!Metric::new(1).is_direct());
    }
}
