use evogen::{
    chromosome::Chromosome,
    crossover::{
        self, ArithmeticAverage, CrossoverPairing, GeneRecombination, Recombination,
        SequentialPairing, Unweighted, ValueRecombination, Weighted, WrapValues,
    },
    error::{GeneticError, Result},
    gene::Gene,
    population::Population,
    rng::RandomNumberGenerator,
};

fn parents() -> (Chromosome<i32>, Chromosome<i32>) {
    (
        Chromosome::from_values(vec![0; 8]),
        Chromosome::from_values(vec![1; 8]),
    )
}

#[test]
fn test_weight_bounds() {
    for weight in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
        assert!(matches!(
            crossover::single_point(weight),
            Err(GeneticError::InvalidWeight(_))
        ));
        assert!(crossover::uniform(weight).is_err());
        assert!(crossover::average(weight).is_err());
        assert!(crossover::extrapolate(weight).is_err());
        assert!(crossover::random(weight).is_err());
    }
}

#[test]
fn test_unchecked_weight_fails_on_use() {
    let (first, second) = parents();
    let mut rng = RandomNumberGenerator::from_seed(1);
    let recombination = Weighted::new(1.0, crossover::SinglePoint);

    let result = recombination.recombine(&first, &second, &mut rng);
    assert!(matches!(result, Err(GeneticError::InvalidWeight(_))));
}

#[test]
fn test_single_point_keeps_length_and_shape() {
    let (first, second) = parents();
    let mut rng = RandomNumberGenerator::from_seed(2);

    for weight in [0.1, 0.5, 0.9] {
        let recombination = crossover::single_point(weight).unwrap();
        for _ in 0..50 {
            let child = recombination.recombine(&first, &second, &mut rng).unwrap();
            let values: Vec<i32> = child.values().copied().collect();
            assert_eq!(values.len(), 8);

            // One switch at most between the prefix parent and the suffix parent.
            let switches = values.windows(2).filter(|pair| pair[0] != pair[1]).count();
            assert!(switches <= 1);
            assert!(!child.is_evaluated());
        }
    }
}

#[test]
fn test_uniform_follows_weight() {
    let first = Chromosome::from_values(vec![1; 1000]);
    let second = Chromosome::from_values(vec![0; 1000]);
    let mut rng = RandomNumberGenerator::from_seed(3);

    let child = crossover::uniform(0.8)
        .unwrap()
        .recombine(&first, &second, &mut rng)
        .unwrap();
    let from_first = child.values().filter(|v| **v == 1).count();
    assert!((700..=900).contains(&from_first));
}

#[test]
fn test_arithmetic_on_floats() {
    let first = Chromosome::from_values(vec![2.0_f64, 10.0]);
    let second = Chromosome::from_values(vec![4.0_f64, 20.0]);
    let mut rng = RandomNumberGenerator::from_seed(4);

    let average = crossover::average(0.25)
        .unwrap()
        .recombine(&first, &second, &mut rng)
        .unwrap();
    let values: Vec<f64> = average.values().copied().collect();
    assert!((values[0] - 3.5).abs() < 1e-12);
    assert!((values[1] - 17.5).abs() < 1e-12);

    let extrapolated = crossover::extrapolate(0.5)
        .unwrap()
        .recombine(&first, &second, &mut rng)
        .unwrap();
    let values: Vec<f64> = extrapolated.values().copied().collect();
    assert!((values[0] - 1.0).abs() < 1e-12);
    assert!((values[1] - 5.0).abs() < 1e-12);

    for weight in [0.2, 0.5, 0.8] {
        let child = crossover::random(weight)
            .unwrap()
            .recombine(&first, &second, &mut rng)
            .unwrap();
        let values: Vec<f64> = child.values().copied().collect();
        assert!((2.0..=4.0).contains(&values[0]));
        assert!((10.0..=20.0).contains(&values[1]));
    }
}

#[test]
fn test_integer_average_rounds_both_ways() {
    let first = Chromosome::from_values(vec![4; 2000]);
    let second = Chromosome::from_values(vec![5; 2000]);
    let mut rng = RandomNumberGenerator::from_seed(5);

    let child = crossover::average(0.5)
        .unwrap()
        .recombine(&first, &second, &mut rng)
        .unwrap();
    let fours = child.values().filter(|v| **v == 4).count();
    let fives = child.values().filter(|v| **v == 5).count();
    assert_eq!(fours + fives, 2000);
    assert!((800..=1200).contains(&fours));
}

#[test]
fn test_mismatched_parents() {
    let first = Chromosome::from_values(vec![1, 2, 3]);
    let second = Chromosome::from_values(vec![1, 2]);
    let mut rng = RandomNumberGenerator::from_seed(6);

    let result = crossover::average(0.5)
        .unwrap()
        .recombine(&first, &second, &mut rng);
    assert!(matches!(result, Err(GeneticError::Breeding(_))));
}

/// Emits the larger value per position, ignoring the weight.
#[derive(Debug)]
struct Maximum;

impl ValueRecombination<i32> for Maximum {
    fn recombine_values(
        &self,
        first: &Chromosome<i32>,
        second: &Chromosome<i32>,
        _weight: f64,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<i32>> {
        Ok(first.values().zip(second.values()).map(|(a, b)| *a.max(b)).collect())
    }
}

/// Repeats the first parent's genes in reverse.
#[derive(Debug)]
struct Reverse;

impl GeneRecombination<i32> for Reverse {
    fn recombine_genes(
        &self,
        first: &Chromosome<i32>,
        _second: &Chromosome<i32>,
        _weight: f64,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Gene<i32>>> {
        Ok(first.iter().rev().cloned().collect())
    }
}

#[test]
fn test_custom_stages_plug_in() {
    let first = Chromosome::from_values(vec![1, 9, 3]);
    let second = Chromosome::from_values(vec![4, 2, 6]);
    let mut rng = RandomNumberGenerator::from_seed(7);

    let maximum = Unweighted(WrapValues(Maximum));
    let child = maximum.recombine(&first, &second, &mut rng).unwrap();
    assert_eq!(child.to_string(), "[4][9][6]");

    let reverse = Weighted::checked(0.3, Reverse).unwrap();
    let child = reverse.recombine(&first, &second, &mut rng).unwrap();
    assert_eq!(child.to_string(), "[3][9][1]");

    let averaged = Weighted::checked(0.5, WrapValues(ArithmeticAverage)).unwrap();
    let child = averaged.recombine(&first, &first, &mut rng).unwrap();
    assert_eq!(child, first);
}

#[test]
fn test_sequential_pairing_wraps() {
    let mut population = Population::new(Vec::new());
    for value in [1, 2, 3] {
        population.add_parent(Chromosome::from_values(vec![value]));
    }
    let mut rng = RandomNumberGenerator::from_seed(8);

    let maximum = Unweighted(WrapValues(Maximum));
    SequentialPairing.pair(&mut population, &maximum, &mut rng).unwrap();

    let staged: Vec<String> = population.staging().iter().map(|c| c.to_string()).collect();
    assert_eq!(staged, vec!["[3]", "[2]", "[3]"]);
}

#[test]
fn test_integer_extrapolation_outside_gene_type() {
    let first = Chromosome::from_values(vec![0u8, 250]);
    let second = Chromosome::from_values(vec![10u8, 200]);
    let mut rng = RandomNumberGenerator::from_seed(9);

    let result = crossover::extrapolate(0.5)
        .unwrap()
        .recombine(&first, &second, &mut rng);
    assert!(matches!(result, Err(GeneticError::Breeding(_))));

    let inside = Chromosome::from_values(vec![20u8, 100]);
    let child = crossover::extrapolate(0.5)
        .unwrap()
        .recombine(&inside, &second, &mut rng)
        .unwrap();
    // 1.5 * 20 - 0.5 * 10 = 25 and 1.5 * 100 - 0.5 * 200 = 50
    assert_eq!(child.to_string(), "[25][50]");
}
