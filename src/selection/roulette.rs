use crate::error::{GeneticError, Result};
use crate::evolution::options::{EvolutionOptions, FitnessTarget};
use crate::gene::Allele;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::selection::parent_selection::{parent_target, ParentSelection};

/// Fitness-proportionate (roulette wheel) parent selection.
///
/// Scores are shifted so the worst member has weight zero: for `Max` the
/// weight is `fitness - worst`, for `Min` it is `worst - fitness`. When every
/// member scores the same the wheel degenerates to a uniform draw.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Calculates cumulative selection probabilities for the members.
    ///
    /// # Errors
    ///
    /// Returns an error if a member has not been evaluated.
    fn calculate_probabilities<T: Allele>(
        population: &Population<T>,
        target: FitnessTarget,
    ) -> Result<Vec<f64>> {
        let fitness = population
            .iter()
            .map(|c| {
                c.fitness().ok_or_else(|| {
                    GeneticError::FitnessCalculation(
                        "Roulette selection requires evaluated members".to_string(),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let weights: Vec<f64> = match target {
            FitnessTarget::Max => {
                let worst = fitness.iter().copied().fold(f64::INFINITY, f64::min);
                fitness.iter().map(|f| f - worst).collect()
            }
            FitnessTarget::Min => {
                let worst = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                fitness.iter().map(|f| worst - f).collect()
            }
        };

        let sum: f64 = weights.iter().sum();
        let len = weights.len() as f64;

        let mut cumulative = 0.0;
        let mut probs: Vec<f64> = weights
            .iter()
            .map(|w| {
                cumulative += if sum > 0.0 { w / sum } else { 1.0 / len };
                cumulative
            })
            .collect();

        // Ensure the last probability is exactly 1.0 to avoid floating-point errors
        if let Some(last) = probs.last_mut() {
            *last = 1.0;
        }

        Ok(probs)
    }
}

impl<T: Allele> ParentSelection<T> for RouletteSelection {
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

        let probs = Self::calculate_probabilities(population, options.get_target())?;
        while population.mating_pool().len() < wanted {
            let r = rng.uniform();
            let index = probs.partition_point(|&p| p <= r).min(probs.len() - 1);
            population.select_as_parent(index)?;
        }

        Ok(())
    }
}
