pub mod persistence;

pub use persistence::{explain, persistence, persistence_of_digits, Breakdown, BreakdownStep};
