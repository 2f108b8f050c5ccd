use criterion::Criterion;
use pipebird::{
    random::default_rng,
    reproduce::{normalized_fitness, reproduce},
    NeuralNetwork, Topology,
};

fn bench_reproduce(bench: &mut Criterion) {
    let mut rng = default_rng();
    let topology = Topology::new(5, 8, 1).unwrap();
    let networks = (0..120)
        .map(|_| NeuralNetwork::new(topology, &mut rng).unwrap())
        .collect::<Vec<_>>();
    let scores = (0..120u64).map(|s| (s * 37) % 500).collect::<Vec<_>>();
    let parents = networks
        .iter()
        .zip(normalized_fitness(&scores))
        .collect::<Vec<_>>();

    bench.bench_function("reproduce", |b| {
        b.iter(|| reproduce(&parents, 120, 0.12, &mut rng))
    });
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
    bench_reproduce(&mut criterion);
}

fn main() {
    benches();
    criterion::Criterion::default()
        .configure_from_args()
        .final_summary();
}
