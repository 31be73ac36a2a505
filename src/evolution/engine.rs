use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::{
    builder::EngineBuilder,
    fitness::FitnessFunction,
    operators::Operators,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    factory::GeneFactory,
    gene::Allele,
    persistence::PersistenceSink,
    population::Population,
    rng::RandomNumberGenerator,
};

/// Represents the result of an evolution, containing the best chromosome and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<T> {
    /// The fittest chromosome of the final generation.
    pub chromosome: Chromosome<T>,
    /// The fitness score of the chromosome.
    pub score: f64,
}

/// Where the engine currently is within a generation.
///
/// A generation moves through the stages in declaration order, except that a
/// positive termination check jumps from `CheckingTermination` to `Halted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Evaluating,
    Sorting,
    CheckingTermination,
    SelectingParents,
    Recombining,
    Mutating,
    SelectingSurvivors,
    Committing,
    Halted,
}

/// Outcome of a single call to [`EvolutionEngine::evolve_generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A new generation was committed.
    Continued,
    /// The termination criterion held; the population is evaluated and sorted.
    Halted,
}

/// Drives a population through generations using the configured operators.
///
/// The engine exclusively owns its population. Within a generation the
/// mating pool and staging buffer are scratch space; `members` only changes
/// when a generation commits, so a failed generation leaves the last
/// committed generation in place.
pub struct EvolutionEngine<T: Allele> {
    options: EvolutionOptions,
    operators: Operators<T>,
    fitness: Box<dyn FitnessFunction<T>>,
    factory: Box<dyn GeneFactory<T>>,
    rng: RandomNumberGenerator,
    sink: Option<Box<dyn PersistenceSink>>,
    population: Option<Population<T>>,
    generation: usize,
    stage: Stage,
}

impl<T: Allele> EvolutionEngine<T> {
    pub fn builder() -> EngineBuilder<T> {
        EngineBuilder::new()
    }

    pub(crate) fn from_parts(
        options: EvolutionOptions,
        operators: Operators<T>,
        fitness: Box<dyn FitnessFunction<T>>,
        factory: Box<dyn GeneFactory<T>>,
        rng: RandomNumberGenerator,
        sink: Option<Box<dyn PersistenceSink>>,
        population: Option<Population<T>>,
    ) -> Self {
        Self {
            options,
            operators,
            fitness,
            factory,
            rng,
            sink,
            population,
            generation: 0,
            stage: Stage::Evaluating,
        }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Options may be adjusted between generations.
    pub fn options_mut(&mut self) -> &mut EvolutionOptions {
        &mut self.options
    }

    pub fn operators_mut(&mut self) -> &mut Operators<T> {
        &mut self.operators
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Number of committed generations.
    pub fn current_generation(&self) -> usize {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.stage != Stage::Halted
    }

    pub fn population(&self) -> Option<&Population<T>> {
        self.population.as_ref()
    }

    pub fn population_mut(&mut self) -> Option<&mut Population<T>> {
        self.population.as_mut()
    }

    pub fn into_population(self) -> Option<Population<T>> {
        self.population
    }

    /// Fittest evaluated member of the current population.
    pub fn best(&self) -> Option<&Chromosome<T>> {
        self.population
            .as_ref()
            .and_then(|population| population.best(self.options.get_target()))
    }

    /// Creates the starting population unless one is already present.
    pub fn initialize(&mut self) -> Result<()> {
        if self.population.is_some() {
            return Ok(());
        }

        let population =
            self.operators
                .initialization
                .initialize(&self.options, self.factory.as_ref(), &mut self.rng)?;
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if self.options.get_log_level() != LogLevel::None {
            info!(size = population.len(), "population initialized");
        }
        self.population = Some(population);
        Ok(())
    }

    /// Runs one generation.
    ///
    /// # Errors
    ///
    /// Any operator failure aborts the generation and is returned as-is. The
    /// committed members stay untouched apart from their cached fitness and
    /// ordering; scratch buffers are reset on the next call.
    #[tracing::instrument(level = "debug", skip_all, fields(generation = self.generation))]
    pub fn evolve_generation(&mut self) -> Result<GenerationOutcome> {
        self.initialize()?;

        let Self {
            options,
            operators,
            fitness,
            factory,
            rng,
            sink,
            population,
            generation,
            stage,
        } = self;
        let population = population
            .as_mut()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let target = options.get_target();

        population.reset_mating_pool();
        population.reset_staging();

        enter(stage, Stage::Evaluating);
        evaluate(
            population.members_mut(),
            fitness.as_ref(),
            options.get_update_fitness(),
            options.get_parallel_threshold(),
        )?;

        enter(stage, Stage::Sorting);
        population.sort_by_fitness(target);

        enter(stage, Stage::CheckingTermination);
        if operators.termination.should_stop(population, *generation, options) {
            enter(stage, Stage::Halted);
            if options.get_log_level() != LogLevel::None {
                info!(
                    generation = *generation,
                    best = ?population.best(target).and_then(Chromosome::fitness),
                    "evolution halted"
                );
            }
            return Ok(GenerationOutcome::Halted);
        }

        enter(stage, Stage::SelectingParents);
        operators.parent_selection.select_parents(population, options, rng)?;

        enter(stage, Stage::Recombining);
        operators
            .pairing
            .pair(population, operators.recombination.as_ref(), rng)?;

        enter(stage, Stage::Mutating);
        operators.mutation_policy.mutate_population(
            population,
            operators.mutation.as_ref(),
            factory.as_ref(),
            options,
            rng,
        )?;

        enter(stage, Stage::SelectingSurvivors);
        evaluate(
            population.staging_mut(),
            fitness.as_ref(),
            false,
            options.get_parallel_threshold(),
        )?;
        operators.survivor_selection.select_survivors(population, options)?;
        if population.staging().is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        enter(stage, Stage::Committing);
        population.commit_generation();
        *generation += 1;

        if let Some(best) = population.best(target) {
            let score = best.fitness().unwrap_or(f64::NAN);
            if let Some(sink) = sink.as_mut() {
                sink.record(*generation, score, &best.to_string())?;
            }
            match options.get_log_level() {
                LogLevel::Minimal => info!(generation = *generation, best = score, "generation committed"),
                LogLevel::Verbose => {
                    info!(generation = *generation, best = score, "generation committed");
                    debug!("\n{}", population);
                }
                LogLevel::None => {}
            }
        }

        enter(stage, Stage::Evaluating);
        Ok(GenerationOutcome::Continued)
    }

    /// Runs generations until the termination criterion holds and returns the
    /// fittest member.
    pub fn evolve(&mut self) -> Result<EvolutionResult<T>> {
        while self.evolve_generation()? == GenerationOutcome::Continued {}

        let best = self
            .best()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        Ok(EvolutionResult {
            chromosome: best.clone(),
            score: best.fitness().unwrap_or(f64::NAN),
        })
    }

    /// Runs at most `generations` generations, stopping early on termination.
    pub fn evolve_for(&mut self, generations: usize) -> Result<GenerationOutcome> {
        for _ in 0..generations {
            if self.evolve_generation()? == GenerationOutcome::Halted {
                return Ok(GenerationOutcome::Halted);
            }
        }
        Ok(GenerationOutcome::Continued)
    }
}

impl<T: Allele> std::fmt::Debug for EvolutionEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvolutionEngine")
            .field("options", &self.options)
            .field("operators", &self.operators)
            .field("generation", &self.generation)
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}

fn enter(stage: &mut Stage, next: Stage) {
    trace!(?next, "stage");
    *stage = next;
}

/// Scores the chromosomes that need it. With `update_all` every chromosome is
/// rescored, otherwise only those without a cached fitness.
///
/// Scoring draws no randomness, so the parallel and sequential paths agree.
fn evaluate<T: Allele>(
    chromosomes: &mut [Chromosome<T>],
    fitness: &dyn FitnessFunction<T>,
    update_all: bool,
    parallel_threshold: usize,
) -> Result<()> {
    let pending: Vec<usize> = chromosomes
        .iter()
        .enumerate()
        .filter(|(_, chromosome)| update_all || !chromosome.is_evaluated())
        .map(|(index, _)| index)
        .collect();

    let shared: &[Chromosome<T>] = chromosomes;
    let scores: Vec<f64> = if pending.len() >= parallel_threshold {
        pending
            .par_iter()
            .map(|&index| fitness.score(&shared[index]))
            .collect()
    } else {
        pending
            .iter()
            .map(|&index| fitness.score(&shared[index]))
            .collect()
    };

    if let Some(score) = scores.iter().find(|score| !score.is_finite()) {
        return Err(GeneticError::FitnessCalculation(format!(
            "Non-finite fitness score encountered: {}",
            score
        )));
    }

    for (index, score) in pending.into_iter().zip(scores) {
        chromosomes[index].set_fitness(score);
    }
    Ok(())
}
