//! # Crossover
//!
//! Crossover runs at two levels. A [`CrossoverPairing`] policy decides which
//! parents of the mating pool are combined; each pair is handed to a
//! [`Recombination`] algorithm that builds one child.
//!
//! Recombination algorithms are assembled from stages:
//!
//! 1. weight validation (optional, [`Weighted`] vs [`Unweighted`])
//! 2. producing the child's raw values ([`ValueRecombination`])
//! 3. wrapping values into genes ([`WrapValues`])
//! 4. wrapping genes into a chromosome ([`Weighted`]/[`Unweighted`])
//!
//! An algorithm plugs in at the stage matching what it naturally produces:
//! positional algorithms already emit genes and implement
//! [`GeneRecombination`], arithmetic ones emit numbers and implement
//! [`ValueRecombination`]. Validation and wrapping are never reimplemented.
//!
//! ## Example
//!
//! ```rust
//! use evogen::chromosome::Chromosome;
//! use evogen::crossover::{self, Recombination};
//! use evogen::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let first = Chromosome::from_values(vec![4, 4, 4]);
//! let second = Chromosome::from_values(vec![6, 6, 6]);
//!
//! let average = crossover::average(0.5).unwrap();
//! let child = average.recombine(&first, &second, &mut rng).unwrap();
//! assert!(child.values().all(|v| *v == 5));
//!
//! assert!(crossover::single_point(1.0).is_err());
//! ```

pub mod arithmetic;
pub mod pairing;
pub mod pipeline;
pub mod positional;

use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::gene::{Allele, Gene};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

pub use arithmetic::{ArithmeticAverage, ArithmeticExtrapolate, ArithmeticRandom};
pub use pairing::{RandomPairing, SequentialPairing};
pub use pipeline::{
    average, extrapolate, random, single_point, uniform, validate_weight, Unweighted, Weighted,
    WrapValues,
};
pub use positional::{SinglePoint, UniformRecombination};

/// Builds one child chromosome from two parents.
pub trait Recombination<T: Allele>: Debug + Send + Sync {
    fn recombine(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome<T>>;
}

/// A recombination stage that emits the child's genes.
///
/// `weight` lies in `(0, 1)` and is the bias toward `first`.
pub trait GeneRecombination<T: Allele>: Debug + Send + Sync {
    fn recombine_genes(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        weight: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Gene<T>>>;
}

/// A recombination stage that emits the child's raw values.
///
/// `weight` lies in `(0, 1)` and is the bias toward `first`.
pub trait ValueRecombination<T: Allele>: Debug + Send + Sync {
    fn recombine_values(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        weight: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>>;
}

/// Chooses which parents of the mating pool mate and stages their children.
pub trait CrossoverPairing<T: Allele>: Debug + Send + Sync {
    /// Recombines pairs from `population`'s mating pool and prepends the
    /// children to its staging buffer.
    fn pair(
        &self,
        population: &mut Population<T>,
        recombination: &dyn Recombination<T>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()>;
}
