use num_bigint::BigUint;

/// Genome representation for the persistence search
///
/// A genome is the decimal spelling of a candidate number, most significant digit
/// first. Each gene is a digit value in `1..=9`:
/// - Seeding draws every gene uniformly from `1..=9`
/// - Point mutation swaps a gene for a different digit from `1..=9`
/// - Indel mutation duplicates or deletes genes, so the length drifts
///
/// Zero is never produced by any operator. A zero gene would collapse the digit
/// product to 0 on the first step and end the number's persistence there.
///
/// # Example
///
/// ```
/// use mpevolve::engines::generation::genome::{to_digit_string, Genome};
///
/// let genome: Genome = vec![2, 7, 7];
/// assert_eq!(to_digit_string(&genome), "277");
/// ```
pub type Genome = Vec<u8>;

/// Smallest and largest gene value the operators produce.
pub const MIN_GENE: u8 = 1;
pub const MAX_GENE: u8 = 9;

pub fn to_digit_string(genome: &[u8]) -> String {
    genome.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Integer spelled by the genome. An empty genome is 0.
pub fn to_biguint(genome: &[u8]) -> BigUint {
    BigUint::from_radix_be(genome, 10).unwrap_or_default()
}

/// Parse a string of decimal digits. Returns `None` on any non-digit character.
pub fn parse_digits(s: &str) -> Option<Genome> {
    s.chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}
