//! Dense univariate polynomials over a generic coefficient ring.
//!
//! Coefficients are stored in ascending degree order. Storage is allowed
//! to carry trailing zero coefficients; operations that depend on
//! canonical form (degree, equality, division, rendering) normalize
//! lazily, on private copies where the receiver is not mutated.

use unipoly_rings::traits::{Field, Ring};

use crate::algorithms::{div, gcd};
use crate::error::PolyError;

/// A univariate polynomial `c[0] + c[1]*x + ... + c[n]*x^n`.
///
/// The zero polynomial has degree `-1` and canonically an empty
/// coefficient sequence, though any all-zero sequence behaves the same.
#[derive(Clone, Debug)]
pub struct Polynomial<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> Polynomial<R> {
    /// Creates the scalar-zero polynomial (a single `0` coefficient).
    #[must_use]
    pub fn new() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// The sequence is stored verbatim; trailing zeros are removed lazily
    /// by the operations that need canonical form.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<R>) -> Self {
        Self { coeffs }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates the zero polynomial in canonical (empty) form.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::from_coeffs(vec![R::zero(), R::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::from_coeffs(coeffs)
    }

    /// Removes trailing zero coefficients in place.
    ///
    /// The zero polynomial normalizes to the empty sequence.
    pub fn normalize(&mut self) {
        while self.coeffs.last().map_or(false, |c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Returns a normalized copy, leaving the receiver untouched.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut p = self.clone();
        p.normalize();
        p
    }

    /// Returns the degree: the highest index with a non-zero coefficient,
    /// or `-1` for the zero polynomial.
    ///
    /// Trailing zeros in storage are skipped without mutating it.
    #[must_use]
    pub fn degree(&self) -> isize {
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if !c.is_zero() {
                return i as isize;
            }
        }
        -1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.degree() == -1
    }

    /// Returns the coefficient of x^i.
    ///
    /// Reads beyond the stored length yield `R::zero()`, never an error.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns the stored coefficient sequence (may carry trailing zeros).
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Returns the leading coefficient, or `R::zero()` for the zero
    /// polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> R {
        self.coeffs
            .iter()
            .rev()
            .find(|c| !c.is_zero())
            .cloned()
            .unwrap_or_else(R::zero)
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(R::zero);
            let b = other.coeffs.get(i).cloned().unwrap_or_else(R::zero);
            result.push(a + b);
        }

        let mut res = Self::from_coeffs(result);
        res.normalize();
        res
    }

    /// Adds a scalar to the constant term.
    #[must_use]
    pub fn add_scalar(&self, c: &R) -> Self {
        let mut coeffs = self.coeffs.clone();
        if coeffs.is_empty() {
            coeffs.push(c.clone());
        } else {
            coeffs[0] = coeffs[0].clone() + c.clone();
        }

        let mut res = Self::from_coeffs(coeffs);
        res.normalize();
        res
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        let mut res = Self::from_coeffs(
            self.coeffs.iter().map(|x| x.clone() * c.clone()).collect(),
        );
        res.normalize();
        res
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.scale(&-R::one())
    }

    /// Subtracts two polynomials, defined as `self + other * (-1)`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Subtracts a scalar from the constant term.
    #[must_use]
    pub fn sub_scalar(&self, c: &R) -> Self {
        self.add_scalar(&-c.clone())
    }

    /// Multiplies two polynomials (schoolbook convolution).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                result[i + j] =
                    result[i + j].clone() + self.coeffs[i].clone() * other.coeffs[j].clone();
            }
        }

        let mut res = Self::from_coeffs(result);
        res.normalize();
        res
    }

    /// Computes the composition `self(other(x))`.
    ///
    /// Horner's method in the polynomial ring: iterate the outer
    /// coefficients from highest degree down, multiplying the accumulator
    /// by `other` and adding each coefficient.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let f = self.normalized();
        let g = other.normalized();

        let mut result = Self::zero();
        for c in f.coeffs.iter().rev() {
            result = result.mul(&g).add_scalar(c);
        }
        result
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let p = self.normalized();
        if p.coeffs.len() <= 1 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(p.coeffs.len() - 1);
        for (i, c) in p.coeffs.iter().skip(1).enumerate() {
            result.push(c.mul_by_scalar((i + 1) as i64));
        }

        let mut res = Self::from_coeffs(result);
        res.normalize();
        res
    }
}

impl<F: Field> Polynomial<F> {
    /// Divides by another polynomial, returning `(quotient, remainder)`
    /// with `self = quotient * other + remainder` and
    /// `remainder.degree() < other.degree()`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `other` is the zero
    /// polynomial.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), PolyError> {
        div::div_rem(self, other)
    }

    /// Computes the greatest common divisor via the Euclidean algorithm.
    ///
    /// The result is the last non-zero remainder; it is not normalized to
    /// be monic.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        gcd::poly_gcd(self, other)
    }
}

impl<R: Ring> Default for Polynomial<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Ring> From<R> for Polynomial<R> {
    fn from(c: R) -> Self {
        Self::constant(c)
    }
}

impl<R: Ring> From<Vec<R>> for Polynomial<R> {
    fn from(coeffs: Vec<R>) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl<R: Ring> FromIterator<R> for Polynomial<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::from_coeffs(iter.into_iter().collect())
    }
}
