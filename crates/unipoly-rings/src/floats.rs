//! Ring and field instances for primitive floats.
//!
//! Floating point coefficients trade exactness for speed; the usual
//! caveats about rounding apply, in particular to division and GCD.

use num_traits::{One, Zero};

use crate::traits::{Field, OrderedRing, Ring};

impl Ring for f64 {
    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        One::is_one(self)
    }
}

impl OrderedRing for f64 {
    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn signum(&self) -> i8 {
        if Zero::is_zero(self) {
            0
        } else if *self > 0.0 {
            1
        } else {
            -1
        }
    }
}

impl Field for f64 {
    fn inv(&self) -> Option<Self> {
        if Zero::is_zero(self) {
            None
        } else {
            Some(1.0 / self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_instance() {
        assert!(Ring::is_zero(&<f64 as Ring>::zero()));
        assert!(Ring::is_one(&<f64 as Ring>::one()));
        assert_eq!(2.5.mul_by_scalar(4), 10.0);
    }

    #[test]
    fn test_field_instance() {
        assert_eq!(4.0.inv(), Some(0.25));
        assert_eq!(0.0.inv(), None);
        assert_eq!(1.0.field_div(&4.0), 0.25);
    }

    #[test]
    fn test_signum() {
        // fully qualified: f64 has an inherent signum returning f64
        assert_eq!(OrderedRing::signum(&-0.5), -1);
        assert_eq!(OrderedRing::signum(&0.0), 0);
        assert_eq!(OrderedRing::signum(&0.5), 1);
    }
}
