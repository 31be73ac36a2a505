pub mod builder;
pub mod engine;
pub mod fitness;
pub mod operators;
pub mod options;

pub use builder::EngineBuilder;
pub use engine::{EvolutionEngine, EvolutionResult, GenerationOutcome, Stage};
pub use fitness::{FitnessFunction, MatchCount, SumOfGenes};
pub use operators::Operators;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, FitnessTarget, LogLevel};
