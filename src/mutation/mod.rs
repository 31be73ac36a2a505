//! # Mutation
//!
//! Mutation works on the staged offspring. A [`MutationPolicy`] chooses which
//! offspring mutate; a [`MutationAlgorithm`] changes one chosen chromosome,
//! drawing replacement values from the run's gene factory.

pub mod algorithm;
pub mod policy;

use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::evolution::options::EvolutionOptions;
use crate::factory::GeneFactory;
use crate::gene::Allele;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

pub use algorithm::{PerGeneMutation, SingleGeneMutation};
pub use policy::RandomMutation;

/// Mutates a single chromosome in place.
pub trait MutationAlgorithm<T: Allele>: Debug + Send + Sync {
    fn mutate(
        &self,
        chromosome: &mut Chromosome<T>,
        factory: &dyn GeneFactory<T>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()>;
}

/// Chooses which staged offspring are handed to the mutation algorithm.
pub trait MutationPolicy<T: Allele>: Debug + Send + Sync {
    fn mutate_population(
        &self,
        population: &mut Population<T>,
        algorithm: &dyn MutationAlgorithm<T>,
        factory: &dyn GeneFactory<T>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()>;
}
