//! # Chromosome
//!
//! An ordered sequence of genes plus a cached fitness. The cache is stale
//! until the engine evaluates the chromosome and becomes stale again after any
//! change to the gene sequence.

use std::fmt::{self, Display};
use std::ops::Index;

use crate::error::{GeneticError, Result};
use crate::gene::{Allele, Gene};

/// One candidate solution.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct Chromosome<T> {
    genes: Vec<Gene<T>>,
    fitness: Option<f64>,
}

impl<T: Allele> Chromosome<T> {
    /// Creates an unevaluated chromosome from genes.
    pub fn new(genes: Vec<Gene<T>>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates an unevaluated chromosome by wrapping raw values into genes.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(Gene::new).collect()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Gene<T>> {
        self.genes.get(index)
    }

    pub fn genes(&self) -> &[Gene<T>] {
        &self.genes
    }

    /// Iterates over the genes.
    pub fn iter(&self) -> std::slice::Iter<'_, Gene<T>> {
        self.genes.iter()
    }

    /// Iterates over the values held by the genes.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.genes.iter().map(Gene::value)
    }

    /// The cached fitness, `None` while stale.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Marks the cached fitness as stale.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    /// Replaces the gene at `index`, invalidating the cached fitness.
    pub fn set_gene(&mut self, index: usize, gene: Gene<T>) -> Result<()> {
        let len = self.genes.len();
        let slot = self
            .genes
            .get_mut(index)
            .ok_or(GeneticError::IndexOutOfRange { index, len })?;
        *slot = gene;
        self.fitness = None;
        Ok(())
    }

    /// Appends a gene, invalidating the cached fitness.
    pub fn push_gene(&mut self, gene: Gene<T>) {
        self.genes.push(gene);
        self.fitness = None;
    }

    pub fn into_genes(self) -> Vec<Gene<T>> {
        self.genes
    }
}

impl<T: Allele> FromIterator<Gene<T>> for Chromosome<T> {
    fn from_iter<I: IntoIterator<Item = Gene<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Allele> Index<usize> for Chromosome<T> {
    type Output = Gene<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl<'a, T: Allele> IntoIterator for &'a Chromosome<T> {
    type Item = &'a Gene<T>;
    type IntoIter = std::slice::Iter<'a, Gene<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

// Identity is the gene sequence; the fitness cache does not participate.
impl<T: PartialEq> PartialEq for Chromosome<T> {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

impl<T: Display> Display for Chromosome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{}", gene)?;
        }
        Ok(())
    }
}
