//! # Fitness functions
//!
//! A `FitnessFunction` scores a chromosome. Fitness functions must be pure:
//! the engine may evaluate distinct chromosomes concurrently and relies on the
//! cached score staying valid until the genes change.

use crate::chromosome::Chromosome;
use crate::gene::{Allele, NumericAllele};

pub trait FitnessFunction<T: Allele>: Send + Sync {
    fn score(&self, chromosome: &Chromosome<T>) -> f64;
}

impl<T, F> FitnessFunction<T> for F
where
    T: Allele,
    F: Fn(&Chromosome<T>) -> f64 + Send + Sync,
{
    fn score(&self, chromosome: &Chromosome<T>) -> f64 {
        self(chromosome)
    }
}

/// Scores a numeric chromosome by the sum of its gene values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOfGenes;

impl<T: NumericAllele> FitnessFunction<T> for SumOfGenes {
    fn score(&self, chromosome: &Chromosome<T>) -> f64 {
        chromosome.values().map(|value| value.to_f64()).sum()
    }
}

/// Counts the genes equal to a target value.
#[derive(Debug, Clone)]
pub struct MatchCount<T> {
    target: T,
}

impl<T: Allele> MatchCount<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }
}

impl<T: Allele> FitnessFunction<T> for MatchCount<T> {
    fn score(&self, chromosome: &Chromosome<T>) -> f64 {
        chromosome.values().filter(|value| **value == self.target).count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fitness() {
        let chromosome = Chromosome::from_values(vec![5, 1, 5, 3]);
        assert_eq!(SumOfGenes.score(&chromosome), 14.0);
        assert_eq!(MatchCount::new(5).score(&chromosome), 2.0);
    }

    #[test]
    fn test_closure_fitness() {
        let longest = |c: &Chromosome<char>| c.len() as f64;
        assert_eq!(longest.score(&Chromosome::from_values("abc".chars())), 3.0);
    }
}
