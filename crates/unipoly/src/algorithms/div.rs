//! Polynomial long division.

use unipoly_rings::traits::Field;

use crate::error::PolyError;
use crate::poly::Polynomial;

/// Divides `a` by `b`, returning `(quotient, remainder)` such that
/// `a = quotient * b + remainder` and `remainder.degree() < b.degree()`.
///
/// Standard Euclidean long division: repeatedly cancel the leading term
/// of the working remainder against the divisor's leading term, placing
/// the ratio at quotient index `deg(remainder) - deg(b)`.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
pub fn div_rem<F: Field>(
    a: &Polynomial<F>,
    b: &Polynomial<F>,
) -> Result<(Polynomial<F>, Polynomial<F>), PolyError> {
    let divisor = b.normalized();
    if divisor.is_zero() {
        return Err(PolyError::DivisionByZero);
    }

    let dividend = a.normalized();
    let db = divisor.coeffs().len();
    if dividend.coeffs().len() < db {
        return Ok((Polynomial::zero(), dividend));
    }

    let lead_inv = divisor
        .leading_coeff()
        .inv()
        .ok_or(PolyError::DivisionByZero)?;

    let mut quotient = vec![F::zero(); dividend.coeffs().len() - db + 1];
    let mut rem: Vec<F> = dividend.coeffs().to_vec();

    while rem.len() >= db {
        let shift = rem.len() - db;
        let q = rem[rem.len() - 1].clone() * lead_inv.clone();
        quotient[shift] = q.clone();

        for (i, bc) in divisor.coeffs().iter().enumerate() {
            rem[shift + i] = rem[shift + i].clone() - q.clone() * bc.clone();
        }

        // The leading term cancels exactly; drop it unconditionally rather
        // than trusting inexact coefficients to produce a literal zero.
        rem.pop();
        while rem.last().map_or(false, |c| c.is_zero()) {
            rem.pop();
        }
    }

    let mut quotient = Polynomial::from_coeffs(quotient);
    quotient.normalize();
    Ok((quotient, Polynomial::from_coeffs(rem)))
}
