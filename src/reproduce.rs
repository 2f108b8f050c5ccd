//! Fitness assignment, selection, and reproduction of a whole generation's networks.

use crate::{
    constants::PIPEBIRD_FITNESS_EXPONENT,
    error::{Error, Result},
    network::NeuralNetwork,
};
use rand::{Rng, RngCore};

/// `score²`, normalised to sum to 1. If nobody scored, everybody's fitness is 0.
pub fn normalized_fitness(scores: &[u64]) -> Vec<f64> {
    let raw = scores
        .iter()
        .map(|s| (*s as f64).powi(PIPEBIRD_FITNESS_EXPONENT))
        .collect::<Vec<_>>();
    let sum = raw.iter().sum::<f64>();
    if sum <= 0. || !sum.is_finite() {
        return vec![0.; raw.len()];
    }
    raw.into_iter().map(|f| f / sum).collect()
}

/// Index of the first member with the highest fitness
pub fn fittest(fitness: &[f64]) -> Option<usize> {
    fitness
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, f)| match best {
            Some((_, record)) if record >= *f => best,
            _ => Some((idx, *f)),
        })
        .map(|(idx, _)| idx)
}

/// Roulette-wheel selection over normalised `fitness`. Members without fitness occupy no part
/// of the wheel. If rounding leaves the threshold positive after a full pass, the last member
/// is picked.
pub fn roulette_select(fitness: &[f64], rng: &mut impl RngCore) -> Option<usize> {
    if fitness.is_empty() {
        return None;
    }

    let mut threshold = rng.random::<f64>();
    for (idx, f) in fitness.iter().enumerate() {
        if *f <= 0. {
            continue;
        }
        threshold -= f;
        if threshold <= 0. {
            return Some(idx);
        }
    }

    tracing::warn!(threshold, "roulette selection fell through to the last member");
    Some(fitness.len() - 1)
}

/// Produce `size` networks from fitted `parents`: the fittest unchanged, then mutated
/// crossovers of roulette-selected pairs.
pub fn reproduce(
    parents: &[(&NeuralNetwork, f64)],
    size: usize,
    mutation_rate: f64,
    rng: &mut impl RngCore,
) -> Result<Vec<NeuralNetwork>> {
    if size == 0 {
        return Ok(vec![]);
    }

    let fitness = parents.iter().map(|(_, f)| *f).collect::<Vec<_>>();
    let Some(elite) = fittest(&fitness) else {
        return Err(Error::EmptyPopulation(size));
    };

    let mut pop = Vec::with_capacity(size);
    pop.push(parents[elite].0.clone());

    while pop.len() < size {
        let (l, r) = match (
            roulette_select(&fitness, rng),
            roulette_select(&fitness, rng),
        ) {
            (Some(l), Some(r)) => (l, r),
            _ => return Err(Error::EmptyPopulation(size)),
        };

        let mut child = NeuralNetwork::crossover(parents[l].0, parents[r].0, rng)?;
        child.mutate(mutation_rate, rng);
        pop.push(child);
    }

    Ok(pop)
}
