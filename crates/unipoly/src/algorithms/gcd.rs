//! Polynomial GCD via the Euclidean algorithm.

use unipoly_rings::traits::Field;

use crate::algorithms::div::div_rem;
use crate::poly::Polynomial;

/// Computes the greatest common divisor of two polynomials.
///
/// The higher-degree operand leads, then the standard Euclidean loop
/// replaces `(first, second)` with `(second, first % second)` until the
/// second operand vanishes. The result is the last non-zero remainder,
/// returned as-is (not made monic). `gcd(0, 0)` is the zero polynomial.
#[must_use]
pub fn poly_gcd<F: Field>(a: &Polynomial<F>, b: &Polynomial<F>) -> Polynomial<F> {
    let (mut first, mut second) = if a.degree() > b.degree() {
        (a.normalized(), b.normalized())
    } else {
        (b.normalized(), a.normalized())
    };

    while !second.is_zero() {
        // second is non-zero, so division cannot fail
        let Ok((_, r)) = div_rem(&first, &second) else {
            break;
        };
        first = second;
        second = r;
    }

    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use unipoly_rings::rationals::Q;
    use unipoly_rings::Ring;

    fn poly(coeffs: &[i64]) -> Polynomial<Q> {
        coeffs.iter().map(|&c| Q::from_integer(c)).collect()
    }

    #[test]
    fn test_common_factor() {
        // gcd(x^2 - 1, x^2 - 2x + 1) is an associate of x - 1
        let a = poly(&[-1, 0, 1]);
        let b = poly(&[1, -2, 1]);
        let g = poly_gcd(&a, &b);

        assert_eq!(g.degree(), 1);
        let (_, ra) = div_rem(&a, &g).unwrap();
        let (_, rb) = div_rem(&b, &g).unwrap();
        assert!(ra.is_zero());
        assert!(rb.is_zero());
    }

    #[test]
    fn test_coprime() {
        // x^2 + 1 and x - 1 share no root over Q
        let g = poly_gcd(&poly(&[1, 0, 1]), &poly(&[-1, 1]));
        assert_eq!(g.degree(), 0);
    }

    #[test]
    fn test_gcd_with_zero() {
        let p = poly(&[1, 2]);
        assert_eq!(poly_gcd(&p, &Polynomial::zero()), p);
        assert_eq!(poly_gcd(&Polynomial::zero(), &p), p);
        assert!(poly_gcd(&Polynomial::<Q>::zero(), &Polynomial::zero()).is_zero());
    }

    #[test]
    fn test_operand_order_irrelevant() {
        let a = poly(&[-2, 1]).mul(&poly(&[3, 1]));
        let b = poly(&[-2, 1]).mul(&poly(&[5, 0, 1]));
        let g1 = poly_gcd(&a, &b);
        let g2 = poly_gcd(&b, &a);

        assert_eq!(g1.degree(), 1);
        assert_eq!(g1.degree(), g2.degree());
        // both results divide (x - 2) up to a unit
        assert_eq!(g1.eval(&Q::from_integer(2)), Q::zero());
        assert_eq!(g2.eval(&Q::from_integer(2)), Q::zero());
    }
}
