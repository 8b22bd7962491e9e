//! # unipoly-rings
//!
//! Algebraic structures for unipoly.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `OrderedRing`, `Field`
//! - Concrete coefficient types: `Z`, `Q`, and `f64`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── OrderedRing (sign queries, used by rendering)
//!  └── Field (multiplicative inverses, used by division and GCD)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod floats;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, OrderedRing, Ring};
