//! Polynomial algorithms requiring field coefficients.

pub mod div;
pub mod gcd;
