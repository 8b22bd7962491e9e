//! # unipoly
//!
//! Exact univariate polynomial arithmetic over a generic coefficient
//! ring or field.
//!
//! This crate provides:
//! - A dense [`Polynomial`] value type with operator overloads
//! - Euclidean division with remainder and GCD over field coefficients
//! - Horner evaluation and polynomial composition
//! - Algebraic-expression rendering via `Display`
//!
//! ## Quick Start
//!
//! ```
//! use unipoly::Polynomial;
//! use unipoly_rings::Q;
//!
//! // p(x) = 1 + 2x + 3x^2
//! let p: Polynomial<Q> = [1, 2, 3].iter().map(|&c| Q::from_integer(c)).collect();
//! assert_eq!(p.eval(&Q::from_integer(2)), Q::from_integer(17));
//! assert_eq!(p.to_string(), "3*x^2+2*x+1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod error;
pub mod poly;

mod display;
mod ops;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use poly::Polynomial;
