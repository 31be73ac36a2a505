use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use evogen::{
    evolution::{EvolutionEngine, EvolutionOptions, SumOfGenes},
    factory::UniformGene,
};

fn engine(population_size: usize, parallel_threshold: usize) -> EvolutionEngine<i64> {
    let options = EvolutionOptions::builder()
        .population_size(population_size)
        .chromosome_length(50)
        .generation_goal(usize::MAX)
        .parallel_threshold(parallel_threshold)
        .build()
        .unwrap();

    let mut engine = EvolutionEngine::<i64>::builder()
        .with_options(options)
        .with_fitness(SumOfGenes)
        .with_gene_factory(UniformGene::new(0, 100))
        .with_seed(7)
        .build()
        .unwrap();
    engine.initialize().unwrap();
    engine
}

fn bench_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    for size in [100, 1000, 5000].iter() {
        group.bench_function(&format!("sequential_{}", size), |b| {
            b.iter_batched(
                || engine(*size, usize::MAX),
                |mut engine| engine.evolve_for(5).unwrap(),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(&format!("parallel_{}", size), |b| {
            b.iter_batched(
                || engine(*size, 1),
                |mut engine| engine.evolve_for(5).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generations);
criterion_main!(benches);
