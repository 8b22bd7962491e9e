//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::gcd::poly_gcd;
    use crate::poly::Polynomial;
    use unipoly_rings::rationals::Q;
    use unipoly_rings::Ring;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Strategy for generating small polynomials (degree up to 4),
    // stored verbatim so trailing zeros are exercised too
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 0..=5).prop_map(Polynomial::from_coeffs)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            prop_assert_eq!(a.add(&Polynomial::zero()), a.clone());
            prop_assert_eq!(a.add_scalar(&Q::zero()), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&Polynomial::one()), a.clone());
            prop_assert_eq!(a.scale(&Q::one()), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            prop_assert!(a.mul(&Polynomial::zero()).is_zero());
            prop_assert!(a.scale(&Q::zero()).is_zero());
        }

        #[test]
        fn poly_sub_then_add_restores(a in small_poly(), b in small_poly()) {
            // (a - b) + b = a
            prop_assert_eq!(a.sub(&b).add(&b), a);
        }

        #[test]
        fn poly_equality_reflexive(a in small_poly()) {
            let mut normalized = a.clone();
            normalized.normalize();
            prop_assert_eq!(&normalized, &a);
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) over a field
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            // deg(a + b) <= max(deg(a), deg(b))
            prop_assert!(a.add(&b).degree() <= a.degree().max(b.degree()));
        }

        // Evaluation properties

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_compose_matches_eval(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a ∘ b)(x) = a(b(x))
            prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
        }

        // Euclidean division

        #[test]
        fn poly_division_law(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = a.div_rem(&b).unwrap();
            // a = q*b + r with deg(r) < deg(b)
            prop_assert_eq!(q.mul(&b).add(&r), a);
            prop_assert!(r.degree() < b.degree());
        }

        #[test]
        fn poly_gcd_divides_both(a in small_poly(), b in nonzero_poly()) {
            let g = poly_gcd(&a, &b);
            let (_, ra) = a.div_rem(&g).unwrap();
            let (_, rb) = b.div_rem(&g).unwrap();
            prop_assert!(ra.is_zero());
            prop_assert!(rb.is_zero());
        }
    }
}
