use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::persistence::Breakdown;
use crate::engines::generation::operators::{
    mutate, random_genome, reproduce, select_survivors, MutationRates,
};
use crate::error::MpError;
use crate::types::{Improvement, Individual, RunSummary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Truncation-selection search for numbers with high multiplicative persistence.
///
/// One random founder seeds the first generation with mutated clones. Every
/// iteration keeps the best `survivor_count` individuals and refills the
/// generation with their mutants. All randomness comes from the single `rng`
/// owned by the engine, so a seeded run is reproducible.
pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    rates: MutationRates,
    rng: R,
    generation: Vec<Individual>,
    best_score: u32,
    improvements: Vec<Improvement>,
}

pub trait ProgressCallback {
    fn on_new_best(&mut self, iteration: usize, total: usize, best: &Individual);
    fn on_complete(&mut self, best: &Individual, breakdown: &Breakdown);
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_new_best(&mut self, iteration: usize, total: usize, best: &Individual) {
        (**self).on_new_best(iteration, total, best);
    }

    fn on_complete(&mut self, best: &Individual, breakdown: &Breakdown) {
        (**self).on_complete(best, breakdown);
    }
}

impl EvolutionEngine<StdRng> {
    /// Seeded from `config.seed` when present, from OS entropy otherwise.
    pub fn new(config: EvolutionConfig) -> Result<Self, MpError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed as u64),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn with_rng(config: EvolutionConfig, rng: R) -> Result<Self, MpError> {
        config.validate()?;

        if config.refilled_size() != config.population_size {
            log::warn!(
                "Population size {} minus {} survivors is not a multiple of the survivor count; \
                 generations will hold {} individuals after refill",
                config.population_size,
                config.survivor_count,
                config.refilled_size()
            );
        }

        Ok(Self {
            rates: MutationRates::from(&config),
            config,
            rng,
            generation: Vec::new(),
            best_score: 0,
            improvements: Vec::new(),
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn generation(&self) -> &[Individual] {
        &self.generation
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn improvements(&self) -> &[Improvement] {
        &self.improvements
    }

    /// Create the founder and fill the first generation with its mutants.
    /// The founder itself is not a member.
    pub fn initialize(&mut self) -> Individual {
        let founder = Individual::new(random_genome(self.config.starting_length, &mut self.rng));
        log::debug!("Founder: {}", founder);

        self.generation = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size {
            let mutant = mutate(&founder, self.rates, &mut self.rng);
            self.generation.push(mutant);
        }
        self.best_score = 0;
        self.improvements.clear();

        founder
    }

    /// Select, refill and report one iteration.
    pub fn step<C: ProgressCallback>(&mut self, iteration: usize, callback: &mut C) {
        select_survivors(&mut self.generation, self.config.survivor_count);
        reproduce(
            &mut self.generation,
            self.config.clones_per_survivor(),
            self.rates,
            &mut self.rng,
        );

        let Some(top) = self.generation.first() else {
            return;
        };
        log::debug!(
            "Iteration {}: top score {}, generation size {}",
            iteration,
            top.score(),
            self.generation.len()
        );

        if top.score() > self.best_score {
            self.best_score = top.score();
            self.improvements.push(Improvement {
                iteration,
                score: top.score(),
            });
            log::info!("New best MP {} in iteration {}", top.score(), iteration);
            callback.on_new_best(iteration, self.config.num_iterations, top);
        }
    }

    /// Run the evolution process
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<RunSummary, MpError> {
        log::info!(
            "Starting search: length {}, population {}, survivors {}, iterations {}, seed {:?}",
            self.config.starting_length,
            self.config.population_size,
            self.config.survivor_count,
            self.config.num_iterations,
            self.config.seed
        );

        self.initialize();

        for iteration in 0..self.config.num_iterations {
            self.step(iteration, &mut callback);
        }

        let best = self
            .generation
            .first()
            .ok_or_else(|| MpError::Configuration("Generation is empty".to_string()))?;
        let breakdown = best.breakdown();
        callback.on_complete(best, &breakdown);

        Ok(RunSummary::new(
            self.config.seed,
            self.config.num_iterations,
            best,
            self.improvements.clone(),
            &breakdown,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingCallback {
        new_best: Vec<(usize, usize, u32)>,
        completed: Option<(String, u32)>,
    }

    impl ProgressCallback for RecordingCallback {
        fn on_new_best(&mut self, iteration: usize, total: usize, best: &Individual) {
            self.new_best.push((iteration, total, best.score()));
        }

        fn on_complete(&mut self, best: &Individual, breakdown: &Breakdown) {
            self.completed = Some((best.digits(), breakdown.persistence()));
        }
    }

    fn small_config(seed: i64) -> EvolutionConfig {
        EvolutionConfig {
            starting_length: 12,
            population_size: 40,
            survivor_count: 4,
            num_iterations: 15,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected_before_work() {
        let config = EvolutionConfig {
            population_size: 3,
            survivor_count: 4,
            ..Default::default()
        };
        assert!(matches!(EvolutionEngine::new(config), Err(MpError::Configuration(_))));
    }

    #[test]
    fn test_initialize_fills_population() {
        let mut engine = EvolutionEngine::new(small_config(1)).unwrap();
        let founder = engine.initialize();
        assert_eq!(founder.len(), 12);
        assert_eq!(engine.generation().len(), 40);
    }

    #[test]
    fn test_notifications_follow_strict_improvements() {
        let mut engine = EvolutionEngine::new(small_config(11)).unwrap();
        let mut callback = RecordingCallback::default();
        engine.initialize();
        for iteration in 0..15 {
            engine.step(iteration, &mut callback);
        }

        let scores: Vec<u32> = callback.new_best.iter().map(|&(_, _, s)| s).collect();
        assert!(scores.windows(2).all(|w| w[0] < w[1]));
        assert!(callback.new_best.iter().all(|&(_, total, _)| total == 15));
        assert_eq!(engine.improvements().len(), callback.new_best.len());
        assert_eq!(engine.best_score(), scores.last().copied().unwrap_or(0));
    }

    #[test]
    fn test_run_reports_top_individual() {
        let mut engine = EvolutionEngine::new(small_config(3)).unwrap();
        let mut callback = RecordingCallback::default();
        let summary = engine.run(&mut callback).unwrap();

        let top = &engine.generation()[0];
        assert_eq!(summary.genome, top.digits());
        assert_eq!(summary.score, top.score());
        assert_eq!(summary.breakdown.len() as u32, top.score());
        assert_eq!(callback.completed, Some((top.digits(), top.score())));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let first = EvolutionEngine::new(small_config(42))
            .unwrap()
            .run(RecordingCallback::default())
            .unwrap();
        let second = EvolutionEngine::new(small_config(42))
            .unwrap()
            .run(RecordingCallback::default())
            .unwrap();

        assert_eq!(first.genome, second.genome);
        assert_eq!(first.improvements, second.improvements);
    }
}
