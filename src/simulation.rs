//! The explicit simulation state a driver owns and ticks: population, course, frame counter,
//! and the single rng every stochastic step draws from.

use crate::{
    bird::BirdView,
    config::Config,
    course::{Course, Pipe, PipeCourse},
    error::{Error, Result},
    network::Topology,
    population::{GenerationStats, Population},
    random::{rng_from, WyRng},
};
use serde::Serialize;

/// When a headless run should stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionTarget {
    /// Stop once this generation has started
    Generation(usize),
    /// Stop once any bird has survived this many ticks
    Score(u64),
}

impl EvolutionTarget {
    fn satisfied(&self, population: &Population) -> bool {
        match self {
            Self::Generation(t) => population.generation() >= *t,
            Self::Score(t) => population.high_score().max(population.best_score()) >= *t,
        }
    }
}

/// Read-only view of everything a renderer or telemetry sink may want
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub generation: usize,
    pub high_score: u64,
    pub best_score: u64,
    pub alive: usize,
    pub frame: u64,
    pub autonomous: bool,
    pub birds: Vec<BirdView>,
    pub pipes: Vec<Pipe>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug)]
pub struct Simulation<C: Course = PipeCourse> {
    config: Config,
    topology: Topology,
    population: Population,
    course: C,
    frame: u64,
    rng: WyRng,
}

impl Simulation<PipeCourse> {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_course(config, PipeCourse::new())
    }
}

impl<C: Course> Simulation<C> {
    /// A simulation whose obstacles come from `course`
    pub fn with_course(config: Config, mut course: C) -> Result<Self> {
        config.validate()?;
        let topology = config.topology()?;
        let mut rng = rng_from(config.seed);
        let population = Population::new(config.population_size, topology, &mut rng)?;
        course.reset();

        tracing::debug!(
            population = config.population_size,
            %topology,
            seed = ?config.seed,
            "simulation created"
        );

        Ok(Self {
            config,
            topology,
            population,
            course,
            frame: 0,
            rng,
        })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    #[inline]
    pub fn course(&self) -> &C {
        &self.course
    }

    /// Ticks since the current generation started
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Start over from a fresh, random generation 1 of `size` birds
    pub fn init_population(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(Error::config("population size must be positive"));
        }
        self.config.population_size = size;
        self.population = Population::new(size, self.topology, &mut self.rng)?;
        self.course.reset();
        self.frame = 0;
        tracing::debug!(population = size, "population initialised");
        Ok(())
    }

    /// [Simulation::init_population] at the configured size
    pub fn restart(&mut self) -> Result<()> {
        self.init_population(self.config.population_size)
    }

    #[inline]
    pub fn autonomous(&self) -> bool {
        self.config.autonomous
    }

    pub fn set_autonomous(&mut self, on: bool) {
        self.config.autonomous = on;
    }

    pub fn toggle_autonomous(&mut self) -> bool {
        self.config.autonomous = !self.config.autonomous;
        self.config.autonomous
    }

    pub fn set_speed(&mut self, speed: usize) -> Result<()> {
        if speed == 0 {
            return Err(Error::config("speed must be positive"));
        }
        self.config.speed = speed;
        Ok(())
    }

    /// Make the first living bird jump. Only honoured while autonomous control is off.
    pub fn manual_jump(&mut self) -> bool {
        if self.config.autonomous {
            return false;
        }
        match self.population.birds_mut().iter_mut().find(|b| b.alive) {
            Some(bird) => {
                bird.jump();
                true
            }
            None => false,
        }
    }

    /// Advance one simulation step. If that leaves every bird dead, the next generation is bred
    /// before returning.
    pub fn tick(&mut self) -> Result<Option<GenerationStats>> {
        self.frame += 1;
        self.course.advance(self.frame, &mut self.rng);

        let pipes = self.course.pipes();
        for bird in self.population.birds_mut().iter_mut().filter(|b| b.alive) {
            if self.config.autonomous {
                bird.think(pipes)?;
            }
            bird.update(pipes);
        }

        if !self.population.all_dead() {
            return Ok(None);
        }

        let stats = self
            .population
            .evolve(self.config.mutation_rate, &mut self.rng)?;
        self.course.reset();
        self.frame = 0;
        Ok(Some(stats))
    }

    /// One rendered frame: `speed` ticks, in sequence
    pub fn step_frame(&mut self) -> Result<()> {
        for _ in 0..self.config.speed {
            self.tick()?;
        }
        Ok(())
    }

    /// Tick until `target` is met or `max_ticks` have passed. Returns whether the target was met.
    pub fn run_until(&mut self, target: EvolutionTarget, max_ticks: u64) -> Result<bool> {
        for _ in 0..max_ticks {
            if target.satisfied(&self.population) {
                return Ok(true);
            }
            self.tick()?;
        }
        Ok(target.satisfied(&self.population))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.population.generation(),
            high_score: self.population.high_score(),
            best_score: self.population.best_score(),
            alive: self.population.alive_count(),
            frame: self.frame,
            autonomous: self.config.autonomous,
            birds: self.population.birds().iter().map(|b| b.view()).collect(),
            pipes: self.course.pipes().to_vec(),
        }
    }
}
