//! Stage adapters that turn gene and value producers into full
//! [`Recombination`] algorithms.

use crate::chromosome::Chromosome;
use crate::crossover::arithmetic::{ArithmeticAverage, ArithmeticExtrapolate, ArithmeticRandom};
use crate::crossover::positional::{SinglePoint, UniformRecombination};
use crate::crossover::{GeneRecombination, Recombination, ValueRecombination};
use crate::error::{GeneticError, Result};
use crate::gene::{Allele, Gene};
use crate::rng::RandomNumberGenerator;

/// Rejects weights outside the open interval `(0, 1)`.
pub fn validate_weight(weight: f64) -> Result<f64> {
    if weight > 0.0 && weight < 1.0 {
        Ok(weight)
    } else {
        Err(GeneticError::InvalidWeight(weight))
    }
}

/// Wraps a value-producing stage so it produces genes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WrapValues<V>(pub V);

impl<T, V> GeneRecombination<T> for WrapValues<V>
where
    T: Allele,
    V: ValueRecombination<T>,
{
    fn recombine_genes(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        weight: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Gene<T>>> {
        let values = self.0.recombine_values(first, second, weight, rng)?;
        Ok(values.into_iter().map(Gene::new).collect())
    }
}

/// Validates the weight, runs the gene stage and wraps the result into a
/// chromosome.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<G> {
    weight: f64,
    stage: G,
}

impl<G> Weighted<G> {
    /// Assembles the pipeline. The weight is checked on every recombination.
    pub fn new(weight: f64, stage: G) -> Self {
        Self { weight, stage }
    }

    /// Assembles the pipeline, rejecting an invalid weight immediately.
    pub fn checked(weight: f64, stage: G) -> Result<Self> {
        validate_weight(weight)?;
        Ok(Self::new(weight, stage))
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<T, G> Recombination<T> for Weighted<G>
where
    T: Allele,
    G: GeneRecombination<T>,
{
    fn recombine(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<T>> {
        let weight = validate_weight(self.weight)?;
        let genes = self.stage.recombine_genes(first, second, weight, rng)?;
        Ok(Chromosome::new(genes))
    }
}

/// Runs the gene stage with an even weight and no validation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unweighted<G>(pub G);

impl<T, G> Recombination<T> for Unweighted<G>
where
    T: Allele,
    G: GeneRecombination<T>,
{
    fn recombine(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<T>> {
        let genes = self.0.recombine_genes(first, second, 0.5, rng)?;
        Ok(Chromosome::new(genes))
    }
}

/// Single-point crossover biased toward the first parent by `weight`.
pub fn single_point(weight: f64) -> Result<Weighted<SinglePoint>> {
    Weighted::checked(weight, SinglePoint)
}

/// Per-gene uniform crossover taking the first parent's gene with probability `weight`.
pub fn uniform(weight: f64) -> Result<Weighted<UniformRecombination>> {
    Weighted::checked(weight, UniformRecombination)
}

/// Weighted arithmetic mean of the parents' values.
pub fn average(weight: f64) -> Result<Weighted<WrapValues<ArithmeticAverage>>> {
    Weighted::checked(weight, WrapValues(ArithmeticAverage))
}

/// Extrapolation past the first parent, away from the second.
pub fn extrapolate(weight: f64) -> Result<Weighted<WrapValues<ArithmeticExtrapolate>>> {
    Weighted::checked(weight, WrapValues(ArithmeticExtrapolate))
}

/// Random value between the parents' values, biased toward the first by `weight`.
pub fn random(weight: f64) -> Result<Weighted<WrapValues<ArithmeticRandom>>> {
    Weighted::checked(weight, WrapValues(ArithmeticRandom))
}
