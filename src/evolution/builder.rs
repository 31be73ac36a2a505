use crate::{
    crossover::{CrossoverPairing, Recombination},
    error::{GeneticError, Result},
    evolution::{
        fitness::FitnessFunction, operators::Operators, options::EvolutionOptions,
        EvolutionEngine,
    },
    factory::GeneFactory,
    gene::Allele,
    initialization::Initialization,
    mutation::{MutationAlgorithm, MutationPolicy},
    persistence::PersistenceSink,
    population::Population,
    rng::RandomNumberGenerator,
    selection::{ParentSelection, SurvivorSelection},
    termination::Termination,
};

/// Fluent construction of an [`EvolutionEngine`].
///
/// A fitness function and a gene factory are required; everything else falls
/// back to [`EvolutionOptions::default`], [`Operators::default`] and an
/// entropy-seeded generator.
pub struct EngineBuilder<T: Allele> {
    options: Option<EvolutionOptions>,
    operators: Operators<T>,
    fitness: Option<Box<dyn FitnessFunction<T>>>,
    factory: Option<Box<dyn GeneFactory<T>>>,
    rng: Option<RandomNumberGenerator>,
    sink: Option<Box<dyn PersistenceSink>>,
    population: Option<Population<T>>,
}

impl<T: Allele> EngineBuilder<T> {
    pub fn new() -> Self {
        Self {
            options: None,
            operators: Operators::default(),
            fitness: None,
            factory: None,
            rng: None,
            sink: None,
            population: None,
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_fitness<F: FitnessFunction<T> + 'static>(mut self, fitness: F) -> Self {
        self.fitness = Some(Box::new(fitness));
        self
    }

    pub fn with_gene_factory<G: GeneFactory<T> + 'static>(mut self, factory: G) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RandomNumberGenerator::from_seed(seed))
    }

    pub fn with_sink<S: PersistenceSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Starts from an existing population instead of running initialization.
    pub fn with_population(mut self, population: Population<T>) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_operators(mut self, operators: Operators<T>) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_initialization<I: Initialization<T> + 'static>(mut self, initialization: I) -> Self {
        self.operators.initialization = Box::new(initialization);
        self
    }

    pub fn with_parent_selection<S: ParentSelection<T> + 'static>(mut self, selection: S) -> Self {
        self.operators.parent_selection = Box::new(selection);
        self
    }

    pub fn with_pairing<P: CrossoverPairing<T> + 'static>(mut self, pairing: P) -> Self {
        self.operators.pairing = Box::new(pairing);
        self
    }

    pub fn with_recombination<R: Recombination<T> + 'static>(mut self, recombination: R) -> Self {
        self.operators.recombination = Box::new(recombination);
        self
    }

    pub fn with_mutation_policy<M: MutationPolicy<T> + 'static>(mut self, policy: M) -> Self {
        self.operators.mutation_policy = Box::new(policy);
        self
    }

    pub fn with_mutation<M: MutationAlgorithm<T> + 'static>(mut self, mutation: M) -> Self {
        self.operators.mutation = Box::new(mutation);
        self
    }

    pub fn with_survivor_selection<S: SurvivorSelection<T> + 'static>(mut self, selection: S) -> Self {
        self.operators.survivor_selection = Box::new(selection);
        self
    }

    pub fn with_termination<E: Termination<T> + 'static>(mut self, termination: E) -> Self {
        self.operators.termination = Box::new(termination);
        self
    }

    pub fn build(self) -> Result<EvolutionEngine<T>> {
        let fitness = self.fitness.ok_or_else(|| {
            GeneticError::Configuration("Fitness function must be set".to_string())
        })?;
        let factory = self
            .factory
            .ok_or_else(|| GeneticError::Configuration("Gene factory must be set".to_string()))?;

        if let Some(population) = &self.population {
            if population.is_empty() {
                return Err(GeneticError::Configuration(
                    "Starting population cannot be empty".to_string(),
                ));
            }
        }

        Ok(EvolutionEngine::from_parts(
            self.options.unwrap_or_default(),
            self.operators,
            fitness,
            factory,
            self.rng.unwrap_or_default(),
            self.sink,
            self.population,
        ))
    }
}

impl<T: Allele> Default for EngineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
