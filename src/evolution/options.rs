//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable parameter of an evolution
//! run: chromosome and population sizes, the optimisation direction, selection
//! and mutation rates, and the generation/fitness goals that end the run.
//!
//! Sizes and rates are validated when the options are built and whenever a
//! setter changes them, so an engine never starts from an invalid
//! configuration.
//!
//! ## Example
//!
//! ```rust
//! use evogen::evolution::options::{EvolutionOptions, FitnessTarget, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .chromosome_length(5)
//!     .population_size(20)
//!     .target(FitnessTarget::Min)
//!     .generation_goal(50)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_population_size(), 20);
//!
//! // Zero-sized populations are rejected up front
//! assert!(EvolutionOptions::builder().population_size(0).build().is_err());
//! ```
//!
//! ## Defaults
//!
//! | option                     | default |
//! |----------------------------|---------|
//! | `chromosome_length`        | 10      |
//! | `population_size`          | 10      |
//! | `target`                   | `Max`   |
//! | `update_fitness`           | `true`  |
//! | `parent_ratio`             | 0.10    |
//! | `selection_probability`    | 0.50    |
//! | `tournament_size_ratio`    | 0.10    |
//! | `generation_goal`          | 15      |
//! | `fitness_goal`             | `None`  |
//! | `chromosome_mutation_rate` | 0.15    |
//! | `gene_mutation_rate`       | 0.03    |
//! | `parallel_threshold`       | 1000    |
//! | `log_level`                | `None`  |

use std::cmp::Ordering;

use crate::error::{ensure_unit_interval, GeneticError, Result};

/// Direction of optimisation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitnessTarget {
    #[default]
    Max,
    Min,
}

impl FitnessTarget {
    /// Orders two scores best-first: `Less` means `a` is fitter than `b`.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            FitnessTarget::Max => ordering.reverse(),
            FitnessTarget::Min => ordering,
        }
    }

    /// Whether `fitness` has reached `goal` in this direction.
    pub fn reached(self, fitness: f64, goal: f64) -> bool {
        match self {
            FitnessTarget::Max => fitness >= goal,
            FitnessTarget::Min => fitness <= goal,
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    chromosome_length: usize,
    population_size: usize,
    target: FitnessTarget,
    /// Re-evaluate every member each generation instead of only stale ones.
    update_fitness: bool,
    parent_ratio: f64,
    selection_probability: f64,
    tournament_size_ratio: f64,
    generation_goal: usize,
    fitness_goal: Option<f64>,
    chromosome_mutation_rate: f64,
    gene_mutation_rate: f64,
    /// Minimum number of evaluations to run in parallel
    parallel_threshold: usize,
    log_level: LogLevel,
}

impl EvolutionOptions {
    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    pub fn get_chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_target(&self) -> FitnessTarget {
        self.target
    }

    pub fn get_update_fitness(&self) -> bool {
        self.update_fitness
    }

    pub fn get_parent_ratio(&self) -> f64 {
        self.parent_ratio
    }

    pub fn get_selection_probability(&self) -> f64 {
        self.selection_probability
    }

    pub fn get_tournament_size_ratio(&self) -> f64 {
        self.tournament_size_ratio
    }

    pub fn get_generation_goal(&self) -> usize {
        self.generation_goal
    }

    pub fn get_fitness_goal(&self) -> Option<f64> {
        self.fitness_goal
    }

    pub fn get_chromosome_mutation_rate(&self) -> f64 {
        self.chromosome_mutation_rate
    }

    pub fn get_gene_mutation_rate(&self) -> f64 {
        self.gene_mutation_rate
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the chromosome length. Fails for zero.
    pub fn set_chromosome_length(&mut self, chromosome_length: usize) -> Result<()> {
        self.chromosome_length = ensure_positive("Chromosome length", chromosome_length)?;
        Ok(())
    }

    /// Sets the population size. Fails for zero.
    pub fn set_population_size(&mut self, population_size: usize) -> Result<()> {
        self.population_size = ensure_positive("Population size", population_size)?;
        Ok(())
    }

    pub fn set_target(&mut self, target: FitnessTarget) {
        self.target = target;
    }

    pub fn set_update_fitness(&mut self, update_fitness: bool) {
        self.update_fitness = update_fitness;
    }

    pub fn set_parent_ratio(&mut self, parent_ratio: f64) -> Result<()> {
        self.parent_ratio = ensure_unit_interval("Parent ratio", parent_ratio)?;
        Ok(())
    }

    pub fn set_selection_probability(&mut self, selection_probability: f64) -> Result<()> {
        self.selection_probability =
            ensure_unit_interval("Selection probability", selection_probability)?;
        Ok(())
    }

    pub fn set_tournament_size_ratio(&mut self, tournament_size_ratio: f64) -> Result<()> {
        self.tournament_size_ratio =
            ensure_unit_interval("Tournament size ratio", tournament_size_ratio)?;
        Ok(())
    }

    pub fn set_generation_goal(&mut self, generation_goal: usize) {
        self.generation_goal = generation_goal;
    }

    /// Sets the fitness goal. Fails for NaN or infinite goals.
    pub fn set_fitness_goal(&mut self, fitness_goal: Option<f64>) -> Result<()> {
        if let Some(goal) = fitness_goal {
            if !goal.is_finite() {
                return Err(GeneticError::Configuration(format!(
                    "Fitness goal must be finite, got {}",
                    goal
                )));
            }
        }
        self.fitness_goal = fitness_goal;
        Ok(())
    }

    pub fn set_chromosome_mutation_rate(&mut self, rate: f64) -> Result<()> {
        self.chromosome_mutation_rate = ensure_unit_interval("Chromosome mutation rate", rate)?;
        Ok(())
    }

    pub fn set_gene_mutation_rate(&mut self, rate: f64) -> Result<()> {
        self.gene_mutation_rate = ensure_unit_interval("Gene mutation rate", rate)?;
        Ok(())
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            chromosome_length: 10,
            population_size: 10,
            target: FitnessTarget::Max,
            update_fitness: true,
            parent_ratio: 0.10,
            selection_probability: 0.50,
            tournament_size_ratio: 0.10,
            generation_goal: 15,
            fitness_goal: None,
            chromosome_mutation_rate: 0.15,
            gene_mutation_rate: 0.03,
            parallel_threshold: 1000,
            log_level: LogLevel::None,
        }
    }
}

fn ensure_positive(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(GeneticError::Configuration(format!(
            "{} must be an integer greater than 0",
            name
        )));
    }
    Ok(value)
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the defaults; `build` validates the result.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    chromosome_length: Option<usize>,
    population_size: Option<usize>,
    target: Option<FitnessTarget>,
    update_fitness: Option<bool>,
    parent_ratio: Option<f64>,
    selection_probability: Option<f64>,
    tournament_size_ratio: Option<f64>,
    generation_goal: Option<usize>,
    fitness_goal: Option<f64>,
    chromosome_mutation_rate: Option<f64>,
    gene_mutation_rate: Option<f64>,
    parallel_threshold: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn chromosome_length(mut self, value: usize) -> Self {
        self.chromosome_length = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn target(mut self, value: FitnessTarget) -> Self {
        self.target = Some(value);
        self
    }

    pub fn update_fitness(mut self, value: bool) -> Self {
        self.update_fitness = Some(value);
        self
    }

    pub fn parent_ratio(mut self, value: f64) -> Self {
        self.parent_ratio = Some(value);
        self
    }

    pub fn selection_probability(mut self, value: f64) -> Self {
        self.selection_probability = Some(value);
        self
    }

    pub fn tournament_size_ratio(mut self, value: f64) -> Self {
        self.tournament_size_ratio = Some(value);
        self
    }

    pub fn generation_goal(mut self, value: usize) -> Self {
        self.generation_goal = Some(value);
        self
    }

    pub fn fitness_goal(mut self, value: f64) -> Self {
        self.fitness_goal = Some(value);
        self
    }

    pub fn chromosome_mutation_rate(mut self, value: f64) -> Self {
        self.chromosome_mutation_rate = Some(value);
        self
    }

    pub fn gene_mutation_rate(mut self, value: f64) -> Self {
        self.gene_mutation_rate = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance, validating every field.
    pub fn build(self) -> Result<EvolutionOptions> {
        let mut options = EvolutionOptions::default();

        if let Some(value) = self.chromosome_length {
            options.set_chromosome_length(value)?;
        }
        if let Some(value) = self.population_size {
            options.set_population_size(value)?;
        }
        if let Some(value) = self.target {
            options.set_target(value);
        }
        if let Some(value) = self.update_fitness {
            options.set_update_fitness(value);
        }
        if let Some(value) = self.parent_ratio {
            options.set_parent_ratio(value)?;
        }
        if let Some(value) = self.selection_probability {
            options.set_selection_probability(value)?;
        }
        if let Some(value) = self.tournament_size_ratio {
            options.set_tournament_size_ratio(value)?;
        }
        if let Some(value) = self.generation_goal {
            options.set_generation_goal(value);
        }
        options.set_fitness_goal(self.fitness_goal)?;
        if let Some(value) = self.chromosome_mutation_rate {
            options.set_chromosome_mutation_rate(value)?;
        }
        if let Some(value) = self.gene_mutation_rate {
            options.set_gene_mutation_rate(value)?;
        }
        if let Some(value) = self.parallel_threshold {
            options.set_parallel_threshold(value);
        }
        if let Some(value) = self.log_level {
            options.set_log_level(value);
        }

        Ok(options)
    }
}
