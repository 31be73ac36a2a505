use crate::error::Result;
use crate::evolution::options::EvolutionOptions;
use crate::factory::GeneFactory;
use crate::gene::Allele;
use crate::mutation::{MutationAlgorithm, MutationPolicy};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Each staged offspring mutates independently with probability
/// `chromosome_mutation_rate`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMutation;

impl<T: Allele> MutationPolicy<T> for RandomMutation {
    fn mutate_population(
        &self,
        population: &mut Population<T>,
        algorithm: &dyn MutationAlgorithm<T>,
        factory: &dyn GeneFactory<T>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let rate = options.get_chromosome_mutation_rate();
        for chromosome in population.staging_mut() {
            if rng.gen_bool(rate) {
                algorithm.mutate(chromosome, factory, options, rng)?;
            }
        }
        Ok(())
    }
}
