use crate::config::EvolutionConfig;
use crate::engines::generation::genome::{Genome, MAX_GENE, MIN_GENE};
use crate::types::Individual;
use rand::Rng;

/// Chance that an indel event deletes rather than duplicates.
const DELETION_SHARE: f64 = 0.5;

/// Per-gene probabilities of the two mutation passes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationRates {
    pub point: f64,
    pub indel: f64,
}

impl From<&EvolutionConfig> for MutationRates {
    fn from(config: &EvolutionConfig) -> Self {
        Self {
            point: config.point_mutation_rate,
            indel: config.indel_mutation_rate,
        }
    }
}

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length)
        .map(|_| rng.gen_range(MIN_GENE..=MAX_GENE))
        .collect()
}

/// Draw a digit from `1..=9` that differs from `current`.
pub fn replacement_digit<R: Rng>(current: u8, rng: &mut R) -> u8 {
    loop {
        let candidate = rng.gen_range(MIN_GENE..=MAX_GENE);
        if candidate != current {
            return candidate;
        }
    }
}

/// Point mutation: each gene is independently swapped for a different digit
pub fn point_mutation<R: Rng>(genome: &[u8], rate: f64, rng: &mut R) -> Genome {
    genome
        .iter()
        .map(|&gene| {
            if rng.gen::<f64>() < rate {
                replacement_digit(gene, rng)
            } else {
                gene
            }
        })
        .collect()
}

/// Indel mutation: walk the buffer left to right while it changes underneath.
///
/// A duplication inserts a copy in front of the current gene, so the next
/// position holds the original gene again. A deletion pulls the next gene into
/// the current slot, and that gene is stepped over. The last remaining gene is
/// never deleted; the draws for it are still taken.
pub fn indel_mutation<R: Rng>(genome: &mut Genome, rate: f64, rng: &mut R) {
    let mut i = 0;
    while i < genome.len() {
        if rng.gen::<f64>() < rate {
            if rng.gen::<f64>() < DELETION_SHARE {
                if genome.len() > 1 {
                    genome.remove(i);
                }
            } else {
                let gene = genome[i];
                genome.insert(i, gene);
            }
        }
        i += 1;
    }
}

/// Produce a scored child from `parent`: point pass, then indel pass.
pub fn mutate<R: Rng>(parent: &Individual, rates: MutationRates, rng: &mut R) -> Individual {
    let mut genome = point_mutation(parent.genome(), rates.point, rng);
    indel_mutation(&mut genome, rates.indel, rng);
    Individual::new(genome)
}

/// Truncation selection: stable sort by score, best first, keep `survivor_count`.
pub fn select_survivors(generation: &mut Vec<Individual>, survivor_count: usize) {
    generation.sort_by(|a, b| b.score().cmp(&a.score()));
    generation.truncate(survivor_count);
}

/// Append `clones_per_survivor` mutants of every current member, in member order.
pub fn reproduce<R: Rng>(
    generation: &mut Vec<Individual>,
    clones_per_survivor: usize,
    rates: MutationRates,
    rng: &mut R,
) {
    let progenitors = generation.len();
    generation.reserve(progenitors * clones_per_survivor);
    for progenitor in 0..progenitors {
        for _ in 0..clones_per_survivor {
            let child = mutate(&generation[progenitor], rates, rng);
            generation.push(child);
        }
    }
}
