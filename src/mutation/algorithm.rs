use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::evolution::options::EvolutionOptions;
use crate::factory::GeneFactory;
use crate::gene::{Allele, Gene};
use crate::mutation::MutationAlgorithm;
use crate::rng::RandomNumberGenerator;

/// Replaces each gene independently with probability `gene_mutation_rate`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct PerGeneMutation;

impl<T: Allele> MutationAlgorithm<T> for PerGeneMutation {
    fn mutate(
        &self,
        chromosome: &mut Chromosome<T>,
        factory: &dyn GeneFactory<T>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let rate = options.get_gene_mutation_rate();
        for index in 0..chromosome.len() {
            if rng.gen_bool(rate) {
                chromosome.set_gene(index, Gene::new(factory.create(rng)))?;
            }
        }
        Ok(())
    }
}

/// Replaces exactly one uniformly chosen gene.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleGeneMutation;

impl<T: Allele> MutationAlgorithm<T> for SingleGeneMutation {
    fn mutate(
        &self,
        chromosome: &mut Chromosome<T>,
        factory: &dyn GeneFactory<T>,
        _options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if chromosome.is_empty() {
            return Ok(());
        }
        let index = rng.gen_index(chromosome.len());
        chromosome.set_gene(index, Gene::new(factory.create(rng)))
    }
}
