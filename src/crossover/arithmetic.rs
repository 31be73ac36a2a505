//! Recombination algorithms that blend numeric gene values.
//!
//! Integral gene types are rounded back after adding `Uniform(-0.5, 0.5)`
//! jitter, so a blended value of `4.3` becomes `4` seven times in ten and `5`
//! three times in ten instead of always `4`. A blended value the gene type
//! cannot hold is a `Breeding` error.

use crate::chromosome::Chromosome;
use crate::crossover::positional::{paired_length, skewed_unit};
use crate::crossover::ValueRecombination;
use crate::error::{GeneticError, Result};
use crate::gene::NumericAllele;
use crate::rng::RandomNumberGenerator;

/// Converts a blended value back to the gene type.
fn settle<T: NumericAllele>(value: f64, rng: &mut RandomNumberGenerator) -> Result<T> {
    let settled = if T::INTEGRAL {
        (value + rng.gen_range(-0.5..0.5)).round()
    } else {
        value
    };
    T::from_f64(settled).ok_or_else(|| {
        GeneticError::Breeding(format!(
            "Blended value {} does not fit the gene type",
            settled
        ))
    })
}

fn blend<T, F>(
    first: &Chromosome<T>,
    second: &Chromosome<T>,
    rng: &mut RandomNumberGenerator,
    mut combine: F,
) -> Result<Vec<T>>
where
    T: NumericAllele,
    F: FnMut(f64, f64, &mut RandomNumberGenerator) -> f64,
{
    paired_length(first, second)?;

    first
        .values()
        .zip(second.values())
        .map(|(a, b)| {
            let value = combine(a.to_f64(), b.to_f64(), rng);
            settle(value, rng)
        })
        .collect()
}

/// `weight * v1 + (1 - weight) * v2`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticAverage;

impl<T: NumericAllele> ValueRecombination<T> for ArithmeticAverage {
    fn recombine_values(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        weight: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>> {
        blend(first, second, rng, |a, b, _| weight * a + (1.0 - weight) * b)
    }
}

/// `(2 - weight) * v1 + (weight - 1) * v2`.
///
/// The child lies beyond the first parent, on the far side from the second,
/// and may leave the range either parent was drawn from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticExtrapolate;

impl<T: NumericAllele> ValueRecombination<T> for ArithmeticExtrapolate {
    fn recombine_values(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        weight: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>> {
        blend(first, second, rng, |a, b, _| {
            (2.0 - weight) * a + (weight - 1.0) * b
        })
    }
}

/// A random value between the parents' values.
///
/// Uniform for an even weight; otherwise skewed toward the first parent as the
/// weight grows, using the same mapping as single-point crossover.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticRandom;

impl<T: NumericAllele> ValueRecombination<T> for ArithmeticRandom {
    fn recombine_values(
        &self,
        first: &Chromosome<T>,
        second: &Chromosome<T>,
        weight: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<T>> {
        blend(first, second, rng, |a, b, rng| {
            b + skewed_unit(weight, rng) * (a - b)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_average_concentrates_on_mean() {
        let first = Chromosome::from_values(vec![4i32; 500]);
        let second = Chromosome::from_values(vec![6i32; 500]);
        let mut rng = RandomNumberGenerator::from_seed(30);

        let values = ArithmeticAverage
            .recombine_values(&first, &second, 0.5, &mut rng)
            .unwrap();

        assert!(values.iter().all(|v| (4..=6).contains(v)));
        let fives = values.iter().filter(|v| **v == 5).count();
        assert!(fives > 250);
    }

    #[test]
    fn test_integer_rounding_is_unbiased() {
        // 0.7 * 4 + 0.3 * 5 = 4.3
        let first = Chromosome::from_values(vec![4i64; 5000]);
        let second = Chromosome::from_values(vec![5i64; 5000]);
        let mut rng = RandomNumberGenerator::from_seed(31);

        let values = ArithmeticAverage
            .recombine_values(&first, &second, 0.7, &mut rng)
            .unwrap();
        let mean = values.iter().sum::<i64>() as f64 / values.len() as f64;

        assert!(values.iter().all(|v| *v == 4 || *v == 5));
        assert!((mean - 4.3).abs() < 0.05, "mean {}", mean);
    }

    #[test]
    fn test_float_average_is_exact() {
        let first = Chromosome::from_values(vec![1.0f64, 10.0]);
        let second = Chromosome::from_values(vec![3.0f64, 20.0]);
        let mut rng = RandomNumberGenerator::from_seed(1);

        let values = ArithmeticAverage
            .recombine_values(&first, &second, 0.25, &mut rng)
            .unwrap();
        assert_eq!(values, vec![2.5, 17.5]);
    }

    #[test]
    fn test_extrapolate_leaves_parent_range() {
        let first = Chromosome::from_values(vec![10.0f64]);
        let second = Chromosome::from_values(vec![20.0f64]);
        let mut rng = RandomNumberGenerator::from_seed(1);

        let values = ArithmeticExtrapolate
            .recombine_values(&first, &second, 0.5, &mut rng)
            .unwrap();
        assert_eq!(values, vec![5.0]);
    }

    #[test]
    fn test_random_stays_between_parents() {
        let first = Chromosome::from_values(vec![0.0f64; 2000]);
        let second = Chromosome::from_values(vec![10.0f64; 2000]);
        let mut rng = RandomNumberGenerator::from_seed(44);

        let even = ArithmeticRandom
            .recombine_values(&first, &second, 0.5, &mut rng)
            .unwrap();
        let favour_first = ArithmeticRandom
            .recombine_values(&first, &second, 0.9, &mut rng)
            .unwrap();

        let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
        assert!(even.iter().chain(&favour_first).all(|v| (0.0..=10.0).contains(v)));
        assert!((mean(&even) - 5.0).abs() < 0.5);
        assert!(mean(&favour_first) < mean(&even));
    }

    #[test]
    fn test_random_with_equal_parents() {
        let first = Chromosome::from_values(vec![7u32; 10]);
        let mut rng = RandomNumberGenerator::from_seed(44);
        let values = ArithmeticRandom
            .recombine_values(&first, &first, 0.3, &mut rng)
            .unwrap();
        assert!(values.iter().all(|v| *v == 7));
    }

    #[test]
    fn test_integer_extrapolate_rounds_and_rejects_overflow() {
        // 1.5 * 4 - 0.5 * 5 = 3.5
        let first = Chromosome::from_values(vec![4i32; 2000]);
        let second = Chromosome::from_values(vec![5i32; 2000]);
        let mut rng = RandomNumberGenerator::from_seed(32);

        let values = ArithmeticExtrapolate
            .recombine_values(&first, &second, 0.5, &mut rng)
            .unwrap();
        assert!(values.iter().all(|v| *v == 3 || *v == 4));
        let threes = values.iter().filter(|v| **v == 3).count();
        assert!((800..=1200).contains(&threes), "threes {}", threes);

        // 1.5 * 0 - 0.5 * 10 = -5 and 1.5 * 250 - 0.5 * 200 = 275
        let first = Chromosome::from_values(vec![0u8, 250]);
        let second = Chromosome::from_values(vec![10u8, 200]);
        let result = ArithmeticExtrapolate.recombine_values(&first, &second, 0.5, &mut rng);
        assert!(matches!(result, Err(GeneticError::Breeding(_))));
    }

    #[test]
    fn test_integer_random_rounds_within_parents() {
        let first = Chromosome::from_values(vec![0i16; 2000]);
        let second = Chromosome::from_values(vec![3i16; 2000]);
        let mut rng = RandomNumberGenerator::from_seed(33);

        let even = ArithmeticRandom
            .recombine_values(&first, &second, 0.5, &mut rng)
            .unwrap();
        assert!(even.iter().all(|v| (0..=3).contains(v)));
        for value in 0..=3 {
            assert!(even.contains(&value));
        }

        let favour_first = ArithmeticRandom
            .recombine_values(&first, &second, 0.9, &mut rng)
            .unwrap();
        let sum = |v: &[i16]| v.iter().map(|x| *x as i64).sum::<i64>();
        assert!(sum(&favour_first) < sum(&even));
    }

    #[test]
    fn test_random_at_type_bounds_stays_representable() {
        let first = Chromosome::from_values(vec![u8::MAX; 500]);
        let second = Chromosome::from_values(vec![u8::MAX - 1; 500]);
        let mut rng = RandomNumberGenerator::from_seed(34);

        let values = ArithmeticRandom
            .recombine_values(&first, &second, 0.5, &mut rng)
            .unwrap();
        assert!(values.iter().all(|v| *v >= u8::MAX - 1));
    }
}
