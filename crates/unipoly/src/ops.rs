//! Operator overloads and equality for [`Polynomial`].
//!
//! Pure operators delegate to the named methods on the type; compound
//! assignment recomputes via the pure form and replaces the receiver's
//! storage wholesale.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use unipoly_rings::traits::{Field, Ring};

use crate::poly::Polynomial;

impl<R: Ring> PartialEq for Polynomial<R> {
    fn eq(&self, other: &Self) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.coeffs() == b.coeffs()
    }
}

impl<R: Ring + Eq> Eq for Polynomial<R> {}

impl<R: Ring> PartialEq<R> for Polynomial<R> {
    fn eq(&self, other: &R) -> bool {
        let p = self.normalized();
        match p.degree() {
            -1 => other.is_zero(),
            0 => p.coeff(0) == *other,
            _ => false,
        }
    }
}

impl<R: Ring> Add for Polynomial<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl<R: Ring> Add for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<R: Ring> Add<R> for Polynomial<R> {
    type Output = Self;

    fn add(self, rhs: R) -> Self::Output {
        self.add_scalar(&rhs)
    }
}

impl<R: Ring> Sub for Polynomial<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl<R: Ring> Sub for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<R: Ring> Sub<R> for Polynomial<R> {
    type Output = Self;

    fn sub(self, rhs: R) -> Self::Output {
        self.sub_scalar(&rhs)
    }
}

impl<R: Ring> Mul for Polynomial<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl<R: Ring> Mul for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<R: Ring> Mul<R> for Polynomial<R> {
    type Output = Self;

    fn mul(self, rhs: R) -> Self::Output {
        self.scale(&rhs)
    }
}

impl<R: Ring> Neg for Polynomial<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl<R: Ring> AddAssign for Polynomial<R> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Polynomial::add(self, &rhs);
    }
}

impl<R: Ring> AddAssign<R> for Polynomial<R> {
    fn add_assign(&mut self, rhs: R) {
        *self = self.add_scalar(&rhs);
    }
}

impl<R: Ring> SubAssign for Polynomial<R> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Polynomial::sub(self, &rhs);
    }
}

impl<R: Ring> SubAssign<R> for Polynomial<R> {
    fn sub_assign(&mut self, rhs: R) {
        *self = self.sub_scalar(&rhs);
    }
}

impl<R: Ring> MulAssign for Polynomial<R> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Polynomial::mul(self, &rhs);
    }
}

impl<R: Ring> MulAssign<R> for Polynomial<R> {
    fn mul_assign(&mut self, rhs: R) {
        *self = self.scale(&rhs);
    }
}

impl<F: Field> Div for Polynomial<F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is the zero polynomial; use
    /// [`Polynomial::div_rem`] for a recoverable error.
    fn div(self, rhs: Self) -> Self::Output {
        match self.div_rem(&rhs) {
            Ok((q, _)) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Field> Rem for Polynomial<F> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is the zero polynomial; use
    /// [`Polynomial::div_rem`] for a recoverable error.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.div_rem(&rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("{e}"),
        }
    }
}
