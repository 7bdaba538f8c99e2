//! Dedicated logic for
//! [sequence numbers](https://datatracker.ietf.org/doc/html/rfc6126#section-3.2.1).

use core::fmt;
use core::ops::{Add, AddAssign};

/// Cutoff point for the circular comparison of two sequence numbers.
const SEQNO_COMPARE_TRESHOLD: u16 = 32_768;

/// A sequence number carried in Hello, Update and SeqNo request TLVs.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeqNo(u16);

impl SeqNo {
    /// Create a new `SeqNo` with the default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Circular less-than comparison as defined in the babel rfc. This is deliberately not a
    /// [`PartialOrd`](std::cmp::PartialOrd) implementation, as that trait requires transitivity,
    /// which does not hold for wrapping comparisons.
    ///
    /// Values which are exactly 32_768 apart compare as false in both argument orders.
    pub fn lt(&self, other: &Self) -> bool {
        if self.0 == other.0 {
            false
        } else {
            other.0.wrapping_sub(self.0) < SEQNO_COMPARE_TRESHOLD
        }
    }

    /// Circular greater-than comparison, the counterpart of [`SeqNo::lt`].
    pub fn gt(&self, other: &Self) -> bool {
        if self.0 == other.0 {
            false
        } else {
            other.0.wrapping_sub(self.0) > SEQNO_COMPARE_TRESHOLD
        }
    }
}

impl fmt::Display for SeqNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}", self.0))
    }
}

impl From<u16> for SeqNo {
    fn from(value: u16) -> Self {
        SeqNo(value)
    }
}

impl From<SeqNo> for u16 {
    fn from(value: SeqNo) -> Self {
        value.0
    }
}

impl Add<u16> for SeqNo {
    type Output = Self;

    fn add(self, rhs: u16) -> Self::Output {
        SeqNo(self.0.wrapping_add(rhs))
    }
}

impl AddAssign<u16> for SeqNo {
    fn add_assign(&mut self, rhs: u16) {
        *self = SeqNo(self.0.wrapping_add(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::SeqNo;

    #[test]
    fn cmp_eq_seqno() {
        assert_eq!(SeqNo::from(1), SeqNo::from(1));
        assert!(!SeqNo::from(1).lt(&SeqNo::from(1)));
        assert!(!SeqNo::from(1).gt(&SeqNo::from(1)));
    }

    #[test]
    fn cmp_close_seqnos() {
        let s1 = SeqNo::from(10);
        let s2 = SeqNo::from(11);
        assert!(s1.lt(&s2));
        assert!(!s2.lt(&s1));
        assert!(s2.gt(&s1));
        assert!(!s1.gt(&s2));
    }

    #[test]
    fn cmp_wrapping_seqnos() {
        // 65_530 is "before" 5 in circular space.
        let s1 = SeqNo::from(65_530);
        let s2 = SeqNo::from(5);
        assert!(s1.lt(&s2));
        assert!(s2.gt(&s1));

        // Equality quirk at the cutoff point.
        let s1 = SeqNo::from(0);
        let s2 = SeqNo::from(32_768);
        assert!(!s1.lt(&s2));
        assert!(!s2.lt(&s1));
    }

    #[test]
    fn add_wraps() {
        let mut s = SeqNo::from(u16::MAX);
        s += 1;
        assert_eq!(u16::from(s), 0);
        assert_eq!(u16::from(SeqNo::from(u16::MAX) + 2), 1);
    }
}
