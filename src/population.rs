//! # Population
//!
//! The population owns three disjoint slots:
//!
//! - `members`: the current generation, sorted best-first after every
//!   evaluate-and-sort pass.
//! - `mating_pool`: parents chosen for the current generation.
//! - `staging`: the next generation under construction.
//!
//! New offspring are prepended to `staging`, so freshly bred chromosomes
//! (fitness not yet known) sit ahead of entries that were already ranked.
//! Positional survivor policies depend on that order.
//!
//! `commit_generation` is the only way the next generation is published.
//!
//! ## Example
//!
//! ```rust
//! use evogen::{chromosome::Chromosome, population::Population};
//!
//! let mut population = Population::new(vec![
//!     Chromosome::from_values(vec![1, 2]),
//!     Chromosome::from_values(vec![3, 4]),
//! ]);
//!
//! population.select_as_parent(1).unwrap();
//! population.append_offspring(vec![Chromosome::from_values(vec![5, 6])]);
//! population.commit_generation();
//!
//! assert_eq!(population.len(), 1);
//! assert!(population.mating_pool().is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::Index;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::evolution::options::FitnessTarget;
use crate::gene::Allele;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct Population<T> {
    members: Vec<Chromosome<T>>,
    mating_pool: Vec<Chromosome<T>>,
    staging: Vec<Chromosome<T>>,
}

impl<T: Allele> Population<T> {
    pub fn new(members: Vec<Chromosome<T>>) -> Self {
        Self {
            members,
            mating_pool: Vec::new(),
            staging: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Chromosome<T>] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Chromosome<T>] {
        &mut self.members
    }

    pub fn mating_pool(&self) -> &[Chromosome<T>] {
        &self.mating_pool
    }

    pub fn staging(&self) -> &[Chromosome<T>] {
        &self.staging
    }

    pub fn staging_mut(&mut self) -> &mut [Chromosome<T>] {
        &mut self.staging
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome<T>> {
        self.members.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Chromosome<T>> {
        self.members.get(index)
    }

    pub fn contains(&self, chromosome: &Chromosome<T>) -> bool {
        self.members.contains(chromosome)
    }

    /// Publishes `staging` as the new generation and clears both scratch slots.
    pub fn commit_generation(&mut self) {
        self.members = std::mem::take(&mut self.staging);
        self.reset_mating_pool();
    }

    pub fn reset_mating_pool(&mut self) {
        self.mating_pool.clear();
    }

    pub fn reset_staging(&mut self) {
        self.staging.clear();
    }

    /// Removes and returns the member at `index`.
    pub fn remove_member(&mut self, index: usize) -> Result<Chromosome<T>> {
        remove_at(&mut self.members, index)
    }

    /// Removes and returns the parent at `index` of the mating pool.
    pub fn remove_parent(&mut self, index: usize) -> Result<Chromosome<T>> {
        remove_at(&mut self.mating_pool, index)
    }

    /// Removes and returns the offspring at `index` of the staging buffer.
    pub fn remove_offspring(&mut self, index: usize) -> Result<Chromosome<T>> {
        remove_at(&mut self.staging, index)
    }

    /// Prepends `offspring` to the staging buffer, keeping their relative order.
    pub fn append_offspring<I>(&mut self, offspring: I)
    where
        I: IntoIterator<Item = Chromosome<T>>,
    {
        let mut merged: Vec<Chromosome<T>> = offspring.into_iter().collect();
        merged.append(&mut self.staging);
        self.staging = merged;
    }

    /// Inserts a member at `index`, or appends it when `index` is `None`.
    pub fn add_member(&mut self, chromosome: Chromosome<T>, index: Option<usize>) -> Result<()> {
        let len = self.members.len();
        let index = index.unwrap_or(len);
        if index > len {
            return Err(GeneticError::IndexOutOfRange { index, len });
        }
        self.members.insert(index, chromosome);
        Ok(())
    }

    pub fn add_parent(&mut self, chromosome: Chromosome<T>) {
        self.mating_pool.push(chromosome);
    }

    pub fn add_offspring(&mut self, chromosome: Chromosome<T>) {
        self.staging.push(chromosome);
    }

    /// Copies the member at `index` into the mating pool. The member stays in
    /// place and may be selected again.
    pub fn select_as_parent(&mut self, index: usize) -> Result<()> {
        let len = self.members.len();
        let parent = self
            .members
            .get(index)
            .cloned()
            .ok_or(GeneticError::IndexOutOfRange { index, len })?;
        self.mating_pool.push(parent);
        Ok(())
    }

    /// Replaces the member at `index`.
    pub fn set_member(&mut self, index: usize, chromosome: Chromosome<T>) -> Result<()> {
        let len = self.members.len();
        let slot = self
            .members
            .get_mut(index)
            .ok_or(GeneticError::IndexOutOfRange { index, len })?;
        *slot = chromosome;
        Ok(())
    }

    /// Finds the position of `chromosome` among the members.
    ///
    /// Without a guess this is a linear scan. With a guess the search starts at
    /// the guessed position and expands outwards in both directions, wrapping
    /// around the ends, which is quick when the chromosome has only drifted a
    /// few places since the guess was taken.
    pub fn find_index(&self, chromosome: &Chromosome<T>, guess: Option<isize>) -> Result<usize> {
        let Some(guess) = guess else {
            return self
                .members
                .iter()
                .position(|member| member == chromosome)
                .ok_or(GeneticError::ChromosomeNotFound);
        };

        let len = self.members.len() as isize;
        if len == 0 {
            return Err(GeneticError::ChromosomeNotFound);
        }

        // Symmetric modulo into [-len/2, len/2)
        let mut guess = guess.rem_euclid(len);
        if guess >= len / 2 {
            guess -= len;
        }

        // Inclusive bound so the last slot (and a lone member) is checked
        for offset in 0..=len / 2 {
            let left = (guess - offset).rem_euclid(len) as usize;
            if self.members[left] == *chromosome {
                return Ok(left);
            }
            let right = (guess + offset).rem_euclid(len) as usize;
            if self.members[right] == *chromosome {
                return Ok(right);
            }
        }

        Err(GeneticError::ChromosomeNotFound)
    }

    /// Stable-sorts the members best-first. Unevaluated members sink to the end.
    pub fn sort_by_fitness(&mut self, target: FitnessTarget) {
        sort_by_fitness(&mut self.members, target);
    }

    /// The first evaluated member that no other evaluated member beats.
    pub fn best(&self, target: FitnessTarget) -> Option<&Chromosome<T>> {
        self.members
            .iter()
            .filter(|chromosome| chromosome.is_evaluated())
            .fold(None, |best: Option<&Chromosome<T>>, candidate| match best {
                Some(current)
                    if compare_fitness(current, candidate, target) != Ordering::Greater =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            })
    }

    /// Replaces the staging buffer wholesale. Used by survivor selection.
    pub(crate) fn replace_staging(&mut self, staging: Vec<Chromosome<T>>) {
        self.staging = staging;
    }

    pub(crate) fn take_staging(&mut self) -> Vec<Chromosome<T>> {
        std::mem::take(&mut self.staging)
    }
}

fn remove_at<T>(slot: &mut Vec<Chromosome<T>>, index: usize) -> Result<Chromosome<T>> {
    let len = slot.len();
    if index >= len {
        return Err(GeneticError::IndexOutOfRange { index, len });
    }
    Ok(slot.remove(index))
}

/// Orders `a` before `b` (`Less`) when `a` is the fitter one. Unevaluated
/// chromosomes compare after every evaluated one.
pub(crate) fn compare_fitness<T>(a: &Chromosome<T>, b: &Chromosome<T>, target: FitnessTarget) -> Ordering
where
    T: Allele,
{
    match (a.fitness(), b.fitness()) {
        (Some(fa), Some(fb)) => target.compare(fa, fb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub(crate) fn sort_by_fitness<T: Allele>(chromosomes: &mut [Chromosome<T>], target: FitnessTarget) {
    chromosomes.sort_by(|a, b| compare_fitness(a, b, target));
}

impl<T: Allele> Index<usize> for Population<T> {
    type Output = Chromosome<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.members[index]
    }
}

impl<'a, T: Allele> IntoIterator for &'a Population<T> {
    type Item = &'a Chromosome<T>;
    type IntoIter = std::slice::Iter<'a, Chromosome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// One line per member: `Chromosome - <index> <chromosome> / Fitness = <fitness>`.
///
/// Fitness uses `f64`'s `Display`, so whole numbers print without a fractional
/// part (`3.0` shows as `3`). Unevaluated members show `None`.
impl<T: Allele> Display for Population<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chromosome) in self.members.iter().enumerate() {
            match chromosome.fitness() {
                Some(fitness) => writeln!(
                    f,
                    "Chromosome - {} {} / Fitness = {}",
                    index, chromosome, fitness
                )?,
                None => writeln!(f, "Chromosome - {} {} / Fitness = None", index, chromosome)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(values: Vec<i32>, fitness: f64) -> Chromosome<i32> {
        let mut chromosome = Chromosome::from_values(values);
        chromosome.set_fitness(fitness);
        chromosome
    }

    fn sample() -> Population<i32> {
        Population::new(
            (0..6)
                .map(|i| Chromosome::from_values(vec![i, i + 1]))
                .collect(),
        )
    }

    #[test]
    fn test_append_offspring_prepends() {
        let mut population = sample();
        population.add_offspring(Chromosome::from_values(vec![100]));
        population.append_offspring(vec![
            Chromosome::from_values(vec![1]),
            Chromosome::from_values(vec![2]),
        ]);

        let staged: Vec<i32> = population.staging().iter().map(|c| *c[0].value()).collect();
        assert_eq!(staged, vec![1, 2, 100]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut population = sample();
        assert!(matches!(
            population.remove_member(6),
            Err(GeneticError::IndexOutOfRange { index: 6, len: 6 })
        ));
        assert!(population.remove_parent(0).is_err());
        assert!(population.remove_offspring(0).is_err());

        let removed = population.remove_member(2).unwrap();
        assert_eq!(removed, Chromosome::from_values(vec![2, 3]));
        assert_eq!(population.len(), 5);
    }

    #[test]
    fn test_add_member_at_index() {
        let mut population = sample();
        population
            .add_member(Chromosome::from_values(vec![42]), Some(0))
            .unwrap();
        assert_eq!(population[0], Chromosome::from_values(vec![42]));

        population.add_member(Chromosome::from_values(vec![43]), None).unwrap();
        assert_eq!(population[7], Chromosome::from_values(vec![43]));

        assert!(population
            .add_member(Chromosome::from_values(vec![44]), Some(20))
            .is_err());
    }

    #[test]
    fn test_select_as_parent_copies() {
        let mut population = sample();
        population.select_as_parent(3).unwrap();
        population.select_as_parent(3).unwrap();
        assert_eq!(population.len(), 6);
        assert_eq!(population.mating_pool().len(), 2);
        assert!(population.select_as_parent(6).is_err());
    }

    #[test]
    fn test_find_index_with_guess_wraps() {
        let population = sample();
        for target in 0..6 {
            let chromosome = population[target].clone();
            for guess in [-7isize, -1, 0, 2, 5, 11] {
                assert_eq!(population.find_index(&chromosome, Some(guess)).unwrap(), target);
            }
        }

        let missing = Chromosome::from_values(vec![99]);
        assert!(matches!(
            population.find_index(&missing, Some(3)),
            Err(GeneticError::ChromosomeNotFound)
        ));
    }

    #[test]
    fn test_find_index_single_member_with_guess() {
        let population = Population::new(vec![Chromosome::from_values(vec![1])]);
        assert_eq!(
            population
                .find_index(&Chromosome::from_values(vec![1]), Some(4))
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_sort_and_best() {
        let mut population = Population::new(vec![
            scored(vec![1], 1.0),
            Chromosome::from_values(vec![2]),
            scored(vec![3], 3.0),
            scored(vec![4], 2.0),
        ]);

        assert_eq!(population.best(FitnessTarget::Max).unwrap()[0], 3);
        assert_eq!(population.best(FitnessTarget::Min).unwrap()[0], 1);

        population.sort_by_fitness(FitnessTarget::Max);
        let order: Vec<i32> = population.iter().map(|c| *c[0].value()).collect();
        assert_eq!(order, vec![3, 4, 1, 2]);

        population.sort_by_fitness(FitnessTarget::Min);
        let order: Vec<i32> = population.iter().map(|c| *c[0].value()).collect();
        assert_eq!(order, vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_display() {
        let population = Population::new(vec![scored(vec![1, 2], 3.0), scored(vec![5], 5.0)]);
        assert_eq!(
            population.to_string(),
            "Chromosome - 0 [1][2] / Fitness = 3\nChromosome - 1 [5] / Fitness = 5\n"
        );
    }
}
