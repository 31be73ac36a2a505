use crate::error::Result;
use crate::evolution::options::EvolutionOptions;
use crate::gene::Allele;
use crate::population::Population;
use crate::selection::survivor_selection::SurvivorSelection;

/// Keeps the staged offspring in order, then tops the generation up with the
/// best current members.
///
/// Offspring beyond `population_size` are dropped from the back of the staging
/// buffer, which holds the most recently prepended offspring at the front.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct FillInBest;

impl<T: Allele> SurvivorSelection<T> for FillInBest {
    fn select_survivors(&self, population: &mut Population<T>, options: &EvolutionOptions) -> Result<()> {
        let size = options.get_population_size();

        let mut next = population.take_staging();
        next.truncate(size);

        let missing = size - next.len();
        next.extend(population.members().iter().take(missing).cloned());

        population.replace_staging(next);
        Ok(())
    }
}
