//! Population-level policies that choose which parents mate.

use tracing::trace;

use crate::chromosome::Chromosome;
use crate::crossover::{CrossoverPairing, Recombination};
use crate::error::Result;
use crate::gene::Allele;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Pairs every parent with the one before it; the first parent pairs with the
/// last. Produces one child per parent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialPairing;

impl<T: Allele> CrossoverPairing<T> for SequentialPairing {
    fn pair(
        &self,
        population: &mut Population<T>,
        recombination: &dyn Recombination<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let pool = population.mating_pool();
        let len = pool.len();

        let children = (0..len)
            .map(|i| recombination.recombine(&pool[i], &pool[(i + len - 1) % len], rng))
            .collect::<Result<Vec<Chromosome<T>>>>()?;

        trace!(children = children.len(), "sequential pairing");
        population.append_offspring(children);
        Ok(())
    }
}

/// Pairs every parent with a uniformly chosen other parent. A lone parent is
/// paired with itself. Produces one child per parent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPairing;

impl<T: Allele> CrossoverPairing<T> for RandomPairing {
    fn pair(
        &self,
        population: &mut Population<T>,
        recombination: &dyn Recombination<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let pool = population.mating_pool();
        let len = pool.len();

        let mut children = Vec::with_capacity(len);
        for i in 0..len {
            let mate = if len == 1 {
                i
            } else {
                let drawn = rng.gen_index(len - 1);
                if drawn >= i {
                    drawn + 1
                } else {
                    drawn
                }
            };
            children.push(recombination.recombine(&pool[i], &pool[mate], rng)?);
        }

        trace!(children = children.len(), "random pairing");
        population.append_offspring(children);
        Ok(())
    }
}
