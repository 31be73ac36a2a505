//! Recombination algorithms that pick whole genes from either parent.

use crate::chromosome::Chromosome;
use crate::crossover::GeneRecombination;
use crate::error::{GeneticError, Result};
use crate::gene::{Allele, Gene};
use crate::rng::RandomNumberGenerator;

/// Checks the parents line up gene for gene and returns their length.
pub(crate) fn paired_length<T: Allele>(first: &Chromosome<T>, second: &Chromosome<T>) -> Result<usize> {
    if first.len() != second.len() {
        return Err(GeneticError::Breeding(format!(
            "Parents have different lengths ({} and {})",
            first.len(),
            second.len()
        )));
    }
    Ok(first.len())
}

/// Draws from `[0, 1)` skewed by `weight`.
///
/// With `t = 2w` below one half and `t = 0.5 / (1 - w)` above it, the draw is
/// `(1 - (1 - x)^t)^(1/t)` for `x ~ Uniform(0, 1)`. The mapping is monotonic
/// in `x`, reduces to `x` itself at `w = 0.5`, and pushes mass toward 1 as
/// `w` grows.
pub(crate) fn skewed_unit(weight: f64, rng: &mut RandomNumberGenerator) -> f64 {
    let x = rng.uniform();
    if weight == 0.5 {
        return x;
    }
    let t = if weight < 0.5 {
        2.0 * weight
    } else {
        0.5 / (1.0 - weight)
    };
    (1.0 - (1.0 - x).powf(t)).powf(1.0 / t)
}

/// Single-point crossover.
///
/// A cut index is drawn (uniformly for an even weight, weight-skewed
/// otherwise), one parent chosen at random supplies the genes before the cut
/// and the other parent the rest. The child has the parents' length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePoint;

impl SinglePoint {
    pub(crate) fn cut_index(len: usize, weight: f64, rng: &mut RandomNumberGenerator) -> usize {
        if weight == 0.5 {
            rng.gen_index(len)
        } else {
            ((len as f64 * skewed_unit(weight, rng)).floor() as usize).min(len - 1)
        }
    }
}

impl<T: Allele> GeneRecombination<T> for SinglePoint {
    fn recombine_genes(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        weight: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Gene<T>>> {
        let len = paired_length(first, second)?;
        if len == 0 {
            return Ok(Vec::new());
        }

        let cut = Self::cut_index(len, weight, rng);
        let (head, tail) = if rng.gen_bool(0.5) {
            (first, second)
        } else {
            (second, first)
        };

        Ok(head.genes()[..cut]
            .iter()
            .chain(&tail.genes()[cut..])
            .map(Gene::from_gene)
            .collect())
    }
}

/// Uniform crossover: every position independently takes the first parent's
/// gene with probability `weight`, else the second's.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRecombination;

impl<T: Allele> GeneRecombination<T> for UniformRecombination {
    fn recombine_genes(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        weight: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Gene<T>>> {
        paired_length(first, second)?;

        Ok(first
            .iter()
            .zip(second.iter())
            .map(|(a, b)| {
                if rng.gen_bool(weight) {
                    Gene::from_gene(a)
                } else {
                    Gene::from_gene(b)
                }
            })
            .collect())
    }
}
