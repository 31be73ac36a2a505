//! # Operators
//!
//! The pluggable strategy slots of an evolution run. Every slot is a boxed
//! trait object so strategies can be swapped independently; `Default` wires up
//! the standard pipeline:
//!
//! | slot                 | default                         |
//! |----------------------|---------------------------------|
//! | `initialization`     | [`RandomInitialization`]        |
//! | `parent_selection`   | [`TournamentSelection`]         |
//! | `pairing`            | [`SequentialPairing`]           |
//! | `recombination`      | single point, weight 0.5        |
//! | `mutation_policy`    | [`RandomMutation`]              |
//! | `mutation`           | [`PerGeneMutation`]             |
//! | `survivor_selection` | [`ElitistSurvivors`]            |
//! | `termination`        | [`GenerationOrFitness`]         |

use crate::crossover::{CrossoverPairing, Recombination, SequentialPairing, SinglePoint, Weighted};
use crate::gene::Allele;
use crate::initialization::{Initialization, RandomInitialization};
use crate::mutation::{MutationAlgorithm, MutationPolicy, PerGeneMutation, RandomMutation};
use crate::selection::{ElitistSurvivors, ParentSelection, SurvivorSelection, TournamentSelection};
use crate::termination::{GenerationOrFitness, Termination};

#[derive(Debug)]
pub struct Operators<T: Allele> {
    pub initialization: Box<dyn Initialization<T>>,
    pub parent_selection: Box<dyn ParentSelection<T>>,
    pub pairing: Box<dyn CrossoverPairing<T>>,
    pub recombination: Box<dyn Recombination<T>>,
    pub mutation_policy: Box<dyn MutationPolicy<T>>,
    pub mutation: Box<dyn MutationAlgorithm<T>>,
    pub survivor_selection: Box<dyn SurvivorSelection<T>>,
    pub termination: Box<dyn Termination<T>>,
}

impl<T: Allele> Default for Operators<T> {
    fn default() -> Self {
        Self {
            initialization: Box::new(RandomInitialization),
            parent_selection: Box::new(TournamentSelection),
            pairing: Box::new(SequentialPairing),
            recombination: Box::new(Weighted::new(0.5, SinglePoint)),
            mutation_policy: Box::new(RandomMutation),
            mutation: Box::new(PerGeneMutation),
            survivor_selection: Box::new(ElitistSurvivors),
            termination: Box::new(GenerationOrFitness),
        }
    }
}
