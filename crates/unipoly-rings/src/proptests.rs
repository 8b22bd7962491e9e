//! Property-based tests for the coefficient types.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::rationals::Q;
    use crate::traits::{Field, Ring};

    fn small_q() -> impl Strategy<Value = Q> {
        ((-50i64..50i64), (1i64..20i64)).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn q_mul_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn q_additive_inverse(a in small_q()) {
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn q_multiplicative_inverse(a in small_q()) {
            if let Some(inv) = a.inv() {
                prop_assert!((a * inv).is_one());
            } else {
                prop_assert!(a.is_zero());
            }
        }
    }
}
