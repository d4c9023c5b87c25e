//! Exact rational numbers over fixed-width integers, always kept in lowest terms.
//!
//! ```
//! use rational::{rat, Rational};
//!
//! let x = rat!(5 / 4) / rat!(15 / 8);
//! assert_eq!(x, Rational::new(4, 6).unwrap());
//! assert_eq!(x.to_string(), "2/3");
//! ```

pub mod numtheory;
pub mod parsing;
pub mod rational;
pub mod tally;

pub use crate::parsing::{ParseRationalError, RationalStream};
pub use crate::rational::{BaseInt, Rational, RationalError};
