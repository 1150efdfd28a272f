//! Evolutionary search for integers with high multiplicative persistence.
//!
//! See <https://oeis.org/A003001>. A random founder seeds a population of
//! mutated clones; the best few survive each generation and refill it with
//! their own mutants.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{MpError, Result};
pub use types::{Individual, RunSummary};
