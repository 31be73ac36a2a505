//! # evogen
//!
//! A configurable generational genetic-algorithm engine. Chromosomes are
//! fixed-length sequences of genes; a population evolves through parent
//! selection, crossover, mutation and survivor selection until a termination
//! criterion holds. Every stage is a pluggable strategy.
//!
//! ```
//! use evogen::evolution::{EvolutionEngine, EvolutionOptions, SumOfGenes};
//! use evogen::factory::UniformGene;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(10)
//!     .chromosome_length(5)
//!     .generation_goal(20)
//!     .build()?;
//!
//! let mut engine = EvolutionEngine::<i32>::builder()
//!     .with_options(options)
//!     .with_fitness(SumOfGenes)
//!     .with_gene_factory(UniformGene::new(1, 10))
//!     .with_seed(42)
//!     .build()?;
//!
//! let result = engine.evolve()?;
//! assert_eq!(engine.current_generation(), 20);
//! assert!(result.score <= 50.0);
//! # Ok::<(), evogen::GeneticError>(())
//! ```

pub mod chromosome;
pub mod crossover;
pub mod error;
pub mod evolution;
pub mod factory;
pub mod gene;
pub mod initialization;
pub mod mutation;
pub mod persistence;
pub mod population;
pub mod rng;
pub mod selection;
pub mod termination;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use gene::Gene;
pub use population::Population;
