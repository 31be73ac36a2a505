use crate::error::Result;
use crate::evolution::options::EvolutionOptions;
use crate::gene::Allele;
use crate::population::{sort_by_fitness, Population};
use crate::selection::survivor_selection::SurvivorSelection;

/// Keeps the `population_size` fittest chromosomes out of members and offspring.
///
/// Members are merged ahead of the offspring and the merge is stable-sorted,
/// so on equal fitness an existing member outranks a newcomer. The best-known
/// chromosome therefore survives as long as it fits in the kept count.
///
/// # Examples
///
/// ```
/// use evogen::chromosome::Chromosome;
/// use evogen::evolution::options::EvolutionOptions;
/// use evogen::population::Population;
/// use evogen::selection::{ElitistSurvivors, SurvivorSelection};
///
/// let scored = |v: i32| {
///     let mut c = Chromosome::from_values(vec![v]);
///     c.set_fitness(v as f64);
///     c
/// };
///
/// let mut population = Population::new(vec![scored(5), scored(1)]);
/// population.append_offspring(vec![scored(3), scored(0)]);
///
/// let options = EvolutionOptions::builder().population_size(2).build().unwrap();
/// ElitistSurvivors.select_survivors(&mut population, &options).unwrap();
/// population.commit_generation();
///
/// assert_eq!(population.members(), &[scored(5), scored(3)]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistSurvivors;

impl<T: Allele> SurvivorSelection<T> for ElitistSurvivors {
    fn select_survivors(&self, population: &mut Population<T>, options: &EvolutionOptions) -> Result<()> {
        let mut merged = population.members().to_vec();
        merged.extend(population.take_staging());

        sort_by_fitness(&mut merged, options.get_target());
        merged.truncate(options.get_population_size());

        population.replace_staging(merged);
        Ok(())
    }
}
