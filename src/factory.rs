//! # Gene factories
//!
//! A `GeneFactory` produces fresh gene values. It is used when the initial
//! population is created and whenever mutation replaces a gene. Factories draw
//! from the engine's generator so runs stay reproducible.
//!
//! Any closure `Fn(&mut RandomNumberGenerator) -> T` is a factory:
//!
//! ```rust
//! use evogen::factory::{GeneFactory, UniformGene};
//! use evogen::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let coin = |rng: &mut RandomNumberGenerator| rng.gen_bool(0.5);
//! let _flip: bool = coin.create(&mut rng);
//!
//! let digits = UniformGene::new(1, 10);
//! let value: i32 = digits.create(&mut rng);
//! assert!((1..=10).contains(&value));
//! ```

use rand::distributions::uniform::SampleUniform;

use crate::gene::Allele;
use crate::rng::RandomNumberGenerator;

pub trait GeneFactory<T>: Send + Sync {
    fn create(&self, rng: &mut RandomNumberGenerator) -> T;
}

impl<T, F> GeneFactory<T> for F
where
    F: Fn(&mut RandomNumberGenerator) -> T + Send + Sync,
{
    fn create(&self, rng: &mut RandomNumberGenerator) -> T {
        self(rng)
    }
}

/// Draws values uniformly from the inclusive range `[low, high]`.
#[derive(Debug, Clone)]
pub struct UniformGene<T> {
    low: T,
    high: T,
}

impl<T> UniformGene<T>
where
    T: Allele + SampleUniform + PartialOrd + Copy,
{
    /// Creates a factory for `[low, high]`. The bounds are swapped if given in
    /// descending order.
    pub fn new(low: T, high: T) -> Self {
        if high < low {
            Self {
                low: high,
                high: low,
            }
        } else {
            Self { low, high }
        }
    }
}

impl<T> GeneFactory<T> for UniformGene<T>
where
    T: Allele + SampleUniform + PartialOrd + Copy,
{
    fn create(&self, rng: &mut RandomNumberGenerator) -> T {
        rng.gen_range(self.low..=self.high)
    }
}
