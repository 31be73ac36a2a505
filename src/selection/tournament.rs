use crate::error::{GeneticError, Result};
use crate::evolution::options::EvolutionOptions;
use crate::gene::Allele;
use crate::population::{compare_fitness, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::parent_selection::{parent_target, ParentSelection};

/// Tournament selection by rank.
///
/// Each round samples `tournament_size_ratio * members` members uniformly with
/// replacement, ranks them by fitness, and admits the winner to the mating pool
/// with probability `selection_probability`. A rejected round is simply
/// repeated. Rounds continue until `parent_ratio * population_size` parents
/// have been gathered.
///
/// - Larger tournaments favour the best members more strongly
/// - Lower acceptance probabilities add noise to who gets through
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TournamentSelection;

impl TournamentSelection {
    /// Tournament size for a population of `members`, never less than one.
    fn tournament_size(options: &EvolutionOptions, members: usize) -> usize {
        ((options.get_tournament_size_ratio() * members as f64).round() as usize).max(1)
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament<T: Allele>(
        population: &Population<T>,
        size: usize,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let target = options.get_target();
        let mut group: Vec<usize> = (0..size).map(|_| rng.gen_index(population.len())).collect();
        group.sort_by(|&a, &b| {
            compare_fitness(&population[a], &population[b], target).then(a.cmp(&b))
        });
        group[0]
    }
}

impl<T: Allele> ParentSelection<T> for TournamentSelection {
    fn select_parents(
        &self,
        population: &mut Population<T>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let wanted = parent_target(options);
        if wanted == 0 {
            return Ok(());
        }

        let probability = options.get_selection_probability();
        if probability <= 0.0 {
            return Err(GeneticError::Configuration(
                "Selection probability must be greater than 0 for tournament selection"
                    .to_string(),
            ));
        }

        let size = Self::tournament_size(options, population.len());

        while population.mating_pool().len() < wanted {
            let winner = Self::run_tournament(population, size, options, rng);
            if rng.gen_bool(probability) {
                population.select_as_parent(winner)?;
            }
        }

        Ok(())
    }
}
