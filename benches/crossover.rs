use criterion::Criterion;
use pipebird::{random::default_rng, NeuralNetwork, Topology};

fn bench_crossover(bench: &mut Criterion) {
    let mut rng = default_rng();
    let topology = Topology::new(5, 8, 1).unwrap();
    let l = NeuralNetwork::new(topology, &mut rng).unwrap();
    let r = NeuralNetwork::new(topology, &mut rng).unwrap();

    bench.bench_function("crossover", |b| {
        b.iter(|| NeuralNetwork::crossover(&l, &r, &mut rng))
    });

    let mut child = l.clone();
    bench.bench_function("mutate", |b| b.iter(|| child.mutate(0.12, &mut rng)));
}

pub fn benches() {
    #[cfg(not(feature = "smol_bench"))]
    let mut criterion: criterion::Criterion<_> = Criterion::default()
        .sample_size(1000)
        .significance_level(0.1);
    #[cfg(feature = "smol_bench")]
    let mut criterion: criterion::Criterion<_> = {
        use core::time::Duration;
        Criterion::default()
            .measurement_time(Duration::from_millis(1))
            .sample_size(10)
            .nresamples(1)
            .without_plots()
            .configure_from_args()
    };
    bench_crossover(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
