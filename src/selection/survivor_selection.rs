use std::fmt::Debug;

use crate::error::Result;
use crate::evolution::options::EvolutionOptions;
use crate::gene::Allele;
use crate::population::Population;

/// Trait for survivor selection strategies.
///
/// Survivor selection decides the next generation from the current members
/// and the offspring in the staging buffer. The chosen chromosomes are left in
/// `staging`; the engine then publishes them with
/// [`Population::commit_generation`]. Offspring have been evaluated by the time
/// this runs, and the members are sorted best-first.
pub trait SurvivorSelection<T: Allele>: Debug + Send + Sync {
    fn select_survivors(&self, population: &mut Population<T>, options: &EvolutionOptions) -> Result<()>;
}
