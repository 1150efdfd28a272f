//! Multiplicative persistence: how many times the decimal digits of a number must
//! be multiplied together before a single digit remains.
//!
//! Both the scoring path ([`persistence`]) and the reporting path ([`explain`])
//! reduce numbers through [`product_of_digits`], so the two cannot disagree.

use num_bigint::BigUint;
use num_traits::One;
use std::fmt;

/// Largest value that counts as "a single digit".
const SINGLE_DIGIT_MAX: u8 = 9;

/// Multiply a sequence of decimal digits together.
///
/// An empty sequence yields 1, the neutral product; callers never reduce an
/// empty sequence because it is not greater than nine.
pub fn product_of_digits(digits: &[u8]) -> BigUint {
    let mut product = BigUint::one();
    for &digit in digits {
        product *= digit;
    }
    product
}

/// One multiplication step: the product of all decimal digits of `n`.
pub fn digit_product(n: &BigUint) -> BigUint {
    product_of_digits(&n.to_radix_be(10))
}

/// Number of digit-multiplication steps until `n` is at most nine.
pub fn persistence(n: &BigUint) -> u32 {
    let nine = BigUint::from(SINGLE_DIGIT_MAX);
    let mut current = n.clone();
    let mut steps = 0;
    while current > nine {
        current = digit_product(&current);
        steps += 1;
    }
    steps
}

/// Persistence of the number spelled by `digits` (most significant first).
///
/// Skips building the integer for the first step. Leading zeros are not part of
/// the number; an empty or all-zero sequence scores 0.
pub fn persistence_of_digits(digits: &[u8]) -> u32 {
    let significant: &[u8] = match digits.iter().position(|&d| d != 0) {
        Some(start) => &digits[start..],
        None => &[],
    };
    match significant {
        [] => 0,
        [single] if *single <= SINGLE_DIGIT_MAX => 0,
        _ => 1 + persistence(&product_of_digits(significant)),
    }
}

/// A single line of a [`Breakdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownStep {
    pub factors: Vec<u8>,
    pub product: BigUint,
}

/// Step-by-step trace of how `number` reduces to a single digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub number: BigUint,
    pub steps: Vec<BreakdownStep>,
}

impl Breakdown {
    pub fn persistence(&self) -> u32 {
        self.steps.len() as u32
    }

    /// One rendered line per step, without the header.
    pub fn step_lines(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let factors: Vec<String> = step.factors.iter().map(u8::to_string).collect();
                format!("MP {}: {} = {}", i + 1, factors.join(" x "), step.product)
            })
            .collect()
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Breakdown the multiplicative persistence of {}:", self.number)?;
        for line in self.step_lines() {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Trace every multiplication step of `n`.
pub fn explain(n: &BigUint) -> Breakdown {
    let nine = BigUint::from(SINGLE_DIGIT_MAX);
    let mut steps = Vec::new();
    let mut current = n.clone();
    while current > nine {
        let factors = current.to_radix_be(10);
        let product = product_of_digits(&factors);
        steps.push(BreakdownStep {
            factors,
            product: product.clone(),
        });
        current = product;
    }
    Breakdown {
        number: n.clone(),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_single_digits_have_zero_persistence() {
        for n in 0..=9u64 {
            assert_eq!(persistence(&big(n)), 0);
        }
        assert_eq!(persistence_of_digits(&[9]), 0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(persistence(&big(99)), 2);
        assert_eq!(persistence(&big(77)), 4);
        assert_eq!(persistence(&big(277777788888899)), 11);
        assert_eq!(persistence_of_digits(&[7, 7]), 4);
    }

    #[test]
    fn test_zero_digit_collapses() {
        // 10 -> 0
        assert_eq!(persistence(&big(10)), 1);
        // 250 -> 0
        assert_eq!(persistence_of_digits(&[2, 5, 0]), 1);
    }

    #[test]
    fn test_empty_digits_score_zero() {
        assert_eq!(persistence_of_digits(&[]), 0);
        assert_eq!(persistence_of_digits(&[0, 0]), 0);
    }

    #[test]
    fn test_leading_zeros_do_not_count() {
        for digits in [vec![0, 7, 7], vec![0, 0, 2, 7, 7], vec![0, 5], vec![0, 1, 0]] {
            let number = BigUint::from_radix_be(&digits, 10).unwrap();
            assert_eq!(persistence_of_digits(&digits), persistence(&number));
        }
        assert_eq!(persistence_of_digits(&[0, 7, 7]), 4);
    }

    #[test]
    fn test_digit_product_beyond_u64() {
        // 9^30 does not fit in 64 bits
        let digits = vec![9u8; 30];
        let product = product_of_digits(&digits);
        assert_eq!(product, BigUint::from(9u8).pow(30));
        assert!(product.bits() > 64);
    }

    #[test]
    fn test_explain_matches_persistence() {
        let breakdown = explain(&big(277));
        assert_eq!(breakdown.persistence(), persistence(&big(277)));
        assert_eq!(breakdown.steps.last().map(|s| s.product.clone()), Some(big(4)));
        assert_eq!(
            breakdown.to_string(),
            "Breakdown the multiplicative persistence of 277:\n\
             MP 1: 2 x 7 x 7 = 98\n\
             MP 2: 9 x 8 = 72\n\
             MP 3: 7 x 2 = 14\n\
             MP 4: 1 x 4 = 4"
        );
    }

    #[test]
    fn test_explain_single_digit_has_header_only() {
        let breakdown = explain(&big(7));
        assert!(breakdown.steps.is_empty());
        assert_eq!(breakdown.to_string(), "Breakdown the multiplicative persistence of 7:");
    }
}
