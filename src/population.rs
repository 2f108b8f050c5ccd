//! A generation of birds, and the bookkeeping that carries across generations.

use crate::{
    bird::Bird,
    error::{Error, Result},
    network::{NeuralNetwork, Topology},
    reproduce::{fittest, normalized_fitness, reproduce},
};
use rand::RngCore;
use serde::Serialize;

/// Summary of a finished generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_score: u64,
    pub mean_score: f64,
    /// All-time high score, including this generation
    pub high_score: u64,
}

#[derive(Debug, Clone)]
pub struct Population {
    birds: Vec<Bird>,
    topology: Topology,
    generation: usize,
    high_score: u64,
    history: Vec<GenerationStats>,
}

impl Population {
    /// Generation 1: `size` birds with freshly randomised brains
    pub fn new(size: usize, topology: Topology, rng: &mut impl RngCore) -> Result<Self> {
        if size == 0 {
            return Err(Error::config("population size must be positive"));
        }

        let birds = (0..size)
            .map(|_| NeuralNetwork::new(topology, rng).map(Bird::new))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            birds,
            topology,
            generation: 1,
            high_score: 0,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.birds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.birds.is_empty()
    }

    #[inline]
    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    #[inline]
    pub fn birds_mut(&mut self) -> &mut [Bird] {
        &mut self.birds
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best score of any finished generation
    #[inline]
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    #[inline]
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    pub fn alive_count(&self) -> usize {
        self.birds.iter().filter(|b| b.alive).count()
    }

    pub fn all_dead(&self) -> bool {
        self.birds.iter().all(|b| !b.alive)
    }

    /// Best score in the current generation so far
    pub fn best_score(&self) -> u64 {
        self.birds.iter().map(|b| b.score).max().unwrap_or(0)
    }

    /// Assign every bird its normalised fitness from its score
    pub fn evaluate(&mut self) {
        let scores = self.birds.iter().map(|b| b.score).collect::<Vec<_>>();
        for (bird, fitness) in self.birds.iter_mut().zip(normalized_fitness(&scores)) {
            bird.fitness = fitness;
        }
    }

    /// The first bird with the highest fitness. Only meaningful after [Population::evaluate].
    pub fn fittest(&self) -> Option<&Bird> {
        let fitness = self.birds.iter().map(|b| b.fitness).collect::<Vec<_>>();
        fittest(&fitness).map(|idx| &self.birds[idx])
    }

    /// Evaluate the current generation and replace it with its offspring
    pub fn evolve(&mut self, mutation_rate: f64, rng: &mut impl RngCore) -> Result<GenerationStats> {
        self.evaluate();

        let best_score = self.best_score();
        self.high_score = self.high_score.max(best_score);
        let stats = GenerationStats {
            generation: self.generation,
            best_score,
            mean_score: self.birds.iter().map(|b| b.score as f64).sum::<f64>()
                / self.birds.len() as f64,
            high_score: self.high_score,
        };

        let parents = self
            .birds
            .iter()
            .map(|b| (b.brain(), b.fitness))
            .collect::<Vec<_>>();
        let children = reproduce(&parents, self.birds.len(), mutation_rate, rng)?;

        self.birds = children.into_iter().map(Bird::new).collect();
        self.generation += 1;
        self.history.push(stats);

        tracing::info!(
            generation = stats.generation,
            best = stats.best_score,
            mean = stats.mean_score,
            high = stats.high_score,
            "generation finished"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_f64_approx, random::WyRng};

    fn population(size: usize, rng: &mut WyRng) -> Population {
        Population::new(size, Topology::new(5, 8, 1).unwrap(), rng).unwrap()
    }

    #[test]
    fn test_new() {
        let mut rng = WyRng::seeded(0);
        let pop = population(40, &mut rng);
        assert_eq!(pop.len(), 40);
        assert_eq!(pop.generation(), 1);
        assert_eq!(pop.high_score(), 0);
        assert_eq!(pop.alive_count(), 40);
        assert!(!pop.all_dead());
        assert!(pop.birds().iter().all(|b| b.score == 0));

        assert!(Population::new(0, pop.topology(), &mut rng).is_err());
    }

    #[test]
    fn test_evaluate() {
        let mut rng = WyRng::seeded(1);
        let mut pop = population(3, &mut rng);
        for (bird, score) in pop.birds_mut().iter_mut().zip([1, 3, 0]) {
            bird.score = score;
        }
        pop.evaluate();
        let fitness = pop.birds().iter().map(|b| b.fitness).collect::<Vec<_>>();
        assert_f64_approx!(fitness[0], 0.1);
        assert_f64_approx!(fitness[1], 0.9);
        assert_f64_approx!(fitness[2], 0.);
        assert_eq!(pop.fittest().unwrap().score, 3);
    }

    #[test]
    fn test_evaluate_all_zero() {
        let mut rng = WyRng::seeded(2);
        let mut pop = population(4, &mut rng);
        pop.evaluate();
        assert!(pop.birds().iter().all(|b| b.fitness == 0.));
    }

    #[test]
    fn test_evolve() {
        let mut rng = WyRng::seeded(3);
        let mut pop = population(10, &mut rng);
        for (idx, bird) in pop.birds_mut().iter_mut().enumerate() {
            bird.score = idx as u64 * 10;
            bird.alive = false;
        }
        let champion = pop.birds()[9].brain().clone();

        let stats = pop.evolve(0.12, &mut rng).unwrap();
        assert_eq!(stats.generation, 1);
        assert_eq!(stats.best_score, 90);
        assert_f64_approx!(stats.mean_score, 45.);
        assert_eq!(stats.high_score, 90);

        assert_eq!(pop.generation(), 2);
        assert_eq!(pop.high_score(), 90);
        assert_eq!(pop.len(), 10);
        assert_eq!(pop.history(), &[stats]);
        assert_eq!(pop.birds()[0].brain(), &champion);
        assert!(pop.birds().iter().all(|b| b.alive && b.score == 0));
    }

    #[test]
    fn test_high_score_is_all_time() {
        let mut rng = WyRng::seeded(4);
        let mut pop = population(5, &mut rng);
        pop.birds_mut()[2].score = 50;
        pop.evolve(0.12, &mut rng).unwrap();
        pop.birds_mut()[0].score = 20;
        let stats = pop.evolve(0.12, &mut rng).unwrap();
        assert_eq!(stats.best_score, 20);
        assert_eq!(stats.high_score, 50);
        assert_eq!(pop.history().len(), 2);
    }
}
