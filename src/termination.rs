//! # Termination
//!
//! A termination predicate is checked once per generation, after the members
//! have been evaluated and sorted and before any parent is selected. When it
//! holds, the engine halts and leaves the population fully evaluated and
//! sorted.

use std::fmt::Debug;

use crate::evolution::options::EvolutionOptions;
use crate::gene::Allele;
use crate::population::Population;

pub trait Termination<T: Allele>: Debug + Send + Sync {
    fn should_stop(&self, population: &Population<T>, generation: usize, options: &EvolutionOptions) -> bool;
}

/// Stops at `generation_goal`, or earlier once the best member reaches
/// `fitness_goal` in the configured direction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationOrFitness;

impl<T: Allele> Termination<T> for GenerationOrFitness {
    fn should_stop(&self, population: &Population<T>, generation: usize, options: &EvolutionOptions) -> bool {
        if generation >= options.get_generation_goal() {
            return true;
        }

        let target = options.get_target();
        match (options.get_fitness_goal(), population.best(target)) {
            (Some(goal), Some(best)) => best
                .fitness()
                .is_some_and(|fitness| target.reached(fitness, goal)),
            _ => false,
        }
    }
}

/// Stops at `generation_goal` regardless of fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationGoal;

impl<T: Allele> Termination<T> for GenerationGoal {
    fn should_stop(&self, _population: &Population<T>, generation: usize, options: &EvolutionOptions) -> bool {
        generation >= options.get_generation_goal()
    }
}
