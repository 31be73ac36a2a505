//! # Initialization strategies
//!
//! An `Initialization` creates the first generation. Every chromosome is built
//! from its own generator stream split off the engine's generator, so the
//! result is identical whether the chromosomes are built sequentially or on
//! the rayon pool.

use std::fmt::{self, Debug};

use rayon::prelude::*;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::evolution::options::EvolutionOptions;
use crate::factory::GeneFactory;
use crate::gene::{Allele, Gene};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

pub trait Initialization<T: Allele>: Debug + Send + Sync {
    fn initialize(
        &self,
        options: &EvolutionOptions,
        factory: &dyn GeneFactory<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<T>>;
}

/// Fills every gene of every chromosome from the gene factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInitialization;

impl<T: Allele> Initialization<T> for RandomInitialization {
    fn initialize(
        &self,
        options: &EvolutionOptions,
        factory: &dyn GeneFactory<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<T>> {
        let length = options.get_chromosome_length();
        let build = |mut stream: RandomNumberGenerator| -> Chromosome<T> {
            (0..length)
                .map(|_| Gene::new(factory.create(&mut stream)))
                .collect()
        };

        let streams = rng.split(options.get_population_size());
        let members: Vec<Chromosome<T>> = if streams.len() >= options.get_parallel_threshold() {
            streams.into_par_iter().map(build).collect()
        } else {
            streams.into_iter().map(build).collect()
        };

        Ok(Population::new(members))
    }
}

/// Builds whole chromosomes from a user closure receiving the chromosome index.
pub struct ChromosomeInitialization<F> {
    make: F,
}

impl<F> ChromosomeInitialization<F> {
    pub fn new(make: F) -> Self {
        Self { make }
    }
}

impl<F> Debug for ChromosomeInitialization<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChromosomeInitialization").finish_non_exhaustive()
    }
}

impl<T, F> Initialization<T> for ChromosomeInitialization<F>
where
    T: Allele,
    F: Fn(usize, &mut RandomNumberGenerator) -> Vec<T> + Send + Sync,
{
    fn initialize(
        &self,
        options: &EvolutionOptions,
        _factory: &dyn GeneFactory<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<T>> {
        let members = rng
            .split(options.get_population_size())
            .into_iter()
            .enumerate()
            .map(|(index, mut stream)| {
                let values = (self.make)(index, &mut stream);
                check_length(options, values.len())?;
                Ok(Chromosome::from_values(values))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Population::new(members))
    }
}

/// Starts from an explicit list of chromosomes.
#[derive(Debug, Clone)]
pub struct SeededInitialization<T> {
    seeds: Vec<Vec<T>>,
}

impl<T: Allele> SeededInitialization<T> {
    pub fn new(seeds: Vec<Vec<T>>) -> Self {
        Self { seeds }
    }
}

impl<T: Allele> Initialization<T> for SeededInitialization<T> {
    fn initialize(
        &self,
        options: &EvolutionOptions,
        _factory: &dyn GeneFactory<T>,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Population<T>> {
        if self.seeds.len() != options.get_population_size() {
            return Err(GeneticError::Configuration(format!(
                "Seeded population has {} chromosomes but population size is {}",
                self.seeds.len(),
                options.get_population_size()
            )));
        }

        let members = self
            .seeds
            .iter()
            .map(|values| {
                check_length(options, values.len())?;
                Ok(Chromosome::from_values(values.iter().cloned()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Population::new(members))
    }
}

fn check_length(options: &EvolutionOptions, length: usize) -> Result<()> {
    if length != options.get_chromosome_length() {
        return Err(GeneticError::Configuration(format!(
            "Chromosome has {} genes but chromosome length is {}",
            length,
            options.get_chromosome_length()
        )));
    }
    Ok(())
}
