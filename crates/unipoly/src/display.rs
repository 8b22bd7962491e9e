//! Textual rendering of polynomials as algebraic expressions.
//!
//! Terms are printed highest degree first with the usual conventions:
//! zero terms are omitted, unit coefficients drop to a bare sign, the
//! variable is omitted from the constant term, and only non-leading
//! positive terms carry a `+` prefix.

use std::fmt;

use unipoly_rings::traits::{OrderedRing, Ring};

use crate::poly::Polynomial;

impl<R: OrderedRing + fmt::Display> fmt::Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.normalized();
        let degree = p.degree();
        if degree < 0 {
            return write!(f, "{}", R::zero());
        }
        let degree = degree as usize;

        for k in (0..=degree).rev() {
            let c = p.coeff(k);
            if c.is_zero() {
                continue;
            }

            let is_minus_one = c == -R::one();
            if c.signum() < 0 {
                if is_minus_one {
                    write!(f, "-")?;
                } else {
                    write!(f, "{c}")?;
                    if k != 0 {
                        write!(f, "*")?;
                    }
                }
            } else {
                if k != degree {
                    write!(f, "+")?;
                }
                if !c.is_one() {
                    write!(f, "{c}")?;
                    if k != 0 {
                        write!(f, "*")?;
                    }
                }
            }

            if k > 1 {
                write!(f, "x^{k}")?;
            } else if k == 1 {
                write!(f, "x")?;
            } else if c.is_one() || is_minus_one {
                write!(f, "{}", R::one())?;
            }
        }

        Ok(())
    }
}
