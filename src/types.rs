use crate::engines::evaluation::persistence::{explain, persistence_of_digits, Breakdown};
use crate::engines::generation::genome::{to_biguint, to_digit_string, Genome};
use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// One candidate number and its multiplicative persistence.
///
/// The score is computed once, from the final genome, when the individual is
/// built. There is no way to change either afterwards; mutation always yields a
/// new `Individual`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    genome: Genome,
    score: u32,
}

impl Individual {
    pub fn new(genome: Genome) -> Self {
        let score = persistence_of_digits(&genome);
        Self { genome, score }
    }

    pub fn genome(&self) -> &[u8] {
        &self.genome
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.genome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    pub fn digits(&self) -> String {
        to_digit_string(&self.genome)
    }

    /// Full step-by-step trace of this individual's score.
    pub fn breakdown(&self) -> Breakdown {
        explain(&to_biguint(&self.genome))
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with length {} and a MP of {}",
            self.digits(),
            self.len(),
            self.score
        )
    }
}

/// A generation in which the best score went up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Improvement {
    pub iteration: usize,
    pub score: u32,
}

/// Outcome of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: Option<i64>,
    pub iterations: usize,
    pub genome: String,
    pub length: usize,
    pub score: u32,
    pub improvements: Vec<Improvement>,
    pub breakdown: Vec<String>,
}

impl RunSummary {
    pub fn new(
        seed: Option<i64>,
        iterations: usize,
        best: &Individual,
        improvements: Vec<Improvement>,
        breakdown: &Breakdown,
    ) -> Self {
        Self {
            seed,
            iterations,
            genome: best.digits(),
            length: best.len(),
            score: best.score(),
            improvements,
            breakdown: breakdown.step_lines(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
