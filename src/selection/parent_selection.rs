use std::fmt::Debug;

use crate::error::Result;
use crate::evolution::options::EvolutionOptions;
use crate::gene::Allele;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A parent selection strategy copies members of the current generation into
/// the mating pool. Members stay in the population and may be chosen more than
/// once. Strategies run after the members have been evaluated and sorted
/// best-first, and must draw all randomness from the supplied generator.
///
/// # Examples
///
/// ```
/// use evogen::chromosome::Chromosome;
/// use evogen::evolution::options::EvolutionOptions;
/// use evogen::population::Population;
/// use evogen::rng::RandomNumberGenerator;
/// use evogen::selection::{ParentSelection, TournamentSelection};
///
/// let mut population = Population::new(
///     (0..10)
///         .map(|i| {
///             let mut c = Chromosome::from_values(vec![i]);
///             c.set_fitness(i as f64);
///             c
///         })
///         .collect(),
/// );
/// population.sort_by_fitness(Default::default());
///
/// let options = EvolutionOptions::builder().parent_ratio(0.5).build().unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// TournamentSelection
///     .select_parents(&mut population, &options, &mut rng)
///     .unwrap();
///
/// assert_eq!(population.mating_pool().len(), 5);
/// ```
pub trait ParentSelection<T: Allele>: Debug + Send + Sync {
    /// Adds parents to `population`'s mating pool.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The options make the selection impossible to complete
    /// - A member required for selection has no fitness
    fn select_parents(
        &self,
        population: &mut Population<T>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()>;
}

/// Number of parents to gather: `parent_ratio * population_size`, rounded up.
pub(crate) fn parent_target(options: &EvolutionOptions) -> usize {
    (options.get_parent_ratio() * options.get_population_size() as f64).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_target_rounds_up() {
        let options = EvolutionOptions::builder()
            .population_size(10)
            .parent_ratio(0.25)
            .build()
            .unwrap();
        assert_eq!(parent_target(&options), 3);

        let options = EvolutionOptions::builder().parent_ratio(0.0).build().unwrap();
        assert_eq!(parent_target(&options), 0);
    }
}
