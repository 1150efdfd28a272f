use super::traits::ConfigSection;
use crate::error::MpError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub starting_length: usize,
    pub population_size: usize,
    pub survivor_count: usize,
    pub num_iterations: usize,
    pub point_mutation_rate: f64,
    pub indel_mutation_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            starting_length: 50,
            population_size: 1000,
            survivor_count: 10,
            num_iterations: 250,
            point_mutation_rate: 0.50,
            indel_mutation_rate: 0.75,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Offspring each survivor produces per iteration. Integer division, so the
    /// refilled generation can fall short of `population_size`.
    pub fn clones_per_survivor(&self) -> usize {
        if self.survivor_count == 0 {
            return 0;
        }
        (self.population_size - self.survivor_count.min(self.population_size)) / self.survivor_count
    }

    /// Size of the generation right after reproduction.
    pub fn refilled_size(&self) -> usize {
        self.survivor_count + self.survivor_count * self.clones_per_survivor()
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), MpError> {
        if self.population_size == 0 {
            return Err(MpError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if self.survivor_count == 0 {
            return Err(MpError::Configuration(
                "Survivor count must be at least 1".to_string(),
            ));
        }
        if self.survivor_count > self.population_size {
            return Err(MpError::Configuration(format!(
                "Survivor count ({}) must not exceed population size ({})",
                self.survivor_count, self.population_size
            )));
        }
        if self.starting_length == 0 {
            return Err(MpError::Configuration(
                "Starting length must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.point_mutation_rate) {
            return Err(MpError::Configuration(
                "Point mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.indel_mutation_rate) {
            return Err(MpError::Configuration(
                "Indel mutation rate must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EvolutionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.clones_per_survivor(), 99);
        assert_eq!(config.refilled_size(), 1000);
    }

    #[test]
    fn test_more_survivors_than_population_rejected() {
        let config = EvolutionConfig {
            population_size: 5,
            survivor_count: 6,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(MpError::Configuration(_))));
    }

    #[test]
    fn test_zero_survivors_rejected() {
        let config = EvolutionConfig {
            survivor_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.clones_per_survivor(), 0);
    }

    #[test]
    fn test_rates_out_of_range_rejected() {
        let config = EvolutionConfig {
            point_mutation_rate: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EvolutionConfig {
            indel_mutation_rate: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inexact_refill_is_truncated() {
        // (10 - 3) / 3 = 2 clones each, 3 + 6 = 9 after refill
        let config = EvolutionConfig {
            population_size: 10,
            survivor_count: 3,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.clones_per_survivor(), 2);
        assert_eq!(config.refilled_size(), 9);
    }
}
