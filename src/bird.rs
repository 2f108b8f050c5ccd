//! A single agent: a network plus the physical state it steers.

use crate::{
    constants::{
        PIPEBIRD_BIRD_RADIUS, PIPEBIRD_BIRD_X, PIPEBIRD_FIELD_HEIGHT, PIPEBIRD_FIELD_WIDTH,
        PIPEBIRD_GRAVITY, PIPEBIRD_INPUT_SIZE, PIPEBIRD_JUMP_THRESHOLD, PIPEBIRD_JUMP_VELOCITY,
        PIPEBIRD_LOOKAHEAD, PIPEBIRD_VELOCITY_OFFSET, PIPEBIRD_VELOCITY_SPAN,
    },
    course::Pipe,
    error::Result,
    network::NeuralNetwork,
};
use serde::Serialize;

/// What a bird chose to do on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Jump,
    Glide,
    /// Nothing ahead to react to
    Idle,
}

#[derive(Debug, Clone)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub alive: bool,
    /// Ticks survived
    pub score: u64,
    /// Normalised reproductive weight, only meaningful once a generation has been evaluated
    pub fitness: f64,
    brain: NeuralNetwork,
}

impl Bird {
    /// A bird at the spawn point, flying with `brain`
    pub fn new(brain: NeuralNetwork) -> Self {
        Self {
            x: PIPEBIRD_BIRD_X,
            y: PIPEBIRD_FIELD_HEIGHT / 2.,
            velocity: 0.,
            alive: true,
            score: 0,
            fitness: 0.,
            brain,
        }
    }

    #[inline]
    pub fn brain(&self) -> &NeuralNetwork {
        &self.brain
    }

    pub fn jump(&mut self) {
        self.velocity = PIPEBIRD_JUMP_VELOCITY;
    }

    /// The nearest pipe whose trailing edge is no further behind us than the lookahead
    pub fn target<'a>(&self, pipes: &'a [Pipe]) -> Option<&'a Pipe> {
        pipes
            .iter()
            .map(|pipe| (pipe, pipe.trailing_edge() - self.x))
            .filter(|(_, d)| *d > PIPEBIRD_LOOKAHEAD)
            .min_by(|(_, l), (_, r)| l.total_cmp(r))
            .map(|(pipe, _)| pipe)
    }

    /// Normalised network input for the current target, if there is one
    pub fn sense(&self, pipes: &[Pipe]) -> Option<[f64; PIPEBIRD_INPUT_SIZE]> {
        self.target(pipes).map(|pipe| {
            [
                self.y / PIPEBIRD_FIELD_HEIGHT,
                (self.velocity + PIPEBIRD_VELOCITY_OFFSET) / PIPEBIRD_VELOCITY_SPAN,
                pipe.gap_top / PIPEBIRD_FIELD_HEIGHT,
                pipe.gap_bottom / PIPEBIRD_FIELD_HEIGHT,
                (pipe.x - self.x) / PIPEBIRD_FIELD_WIDTH,
            ]
        })
    }

    /// Ask the brain whether to jump, and do so
    pub fn think(&mut self, pipes: &[Pipe]) -> Result<Decision> {
        let Some(inputs) = self.sense(pipes) else {
            return Ok(Decision::Idle);
        };

        let output = self.brain.predict(&inputs)?;
        if output.first().is_some_and(|v| *v > PIPEBIRD_JUMP_THRESHOLD) {
            self.jump();
            Ok(Decision::Jump)
        } else {
            Ok(Decision::Glide)
        }
    }

    /// Integrate one tick of physics, then check for death. Surviving the tick scores a point.
    pub fn update(&mut self, pipes: &[Pipe]) {
        if !self.alive {
            return;
        }

        self.velocity += PIPEBIRD_GRAVITY;
        self.y += self.velocity;

        if self.y - PIPEBIRD_BIRD_RADIUS < 0. {
            self.y = PIPEBIRD_BIRD_RADIUS;
            self.velocity = 0.;
        }

        if self.y + PIPEBIRD_BIRD_RADIUS > PIPEBIRD_FIELD_HEIGHT
            || pipes
                .iter()
                .any(|pipe| pipe.hits(self.x, self.y, PIPEBIRD_BIRD_RADIUS))
        {
            self.alive = false;
            return;
        }

        self.score += 1;
    }

    pub fn view(&self) -> BirdView {
        BirdView {
            x: self.x,
            y: self.y,
            velocity: self.velocity,
            alive: self.alive,
            score: self.score,
        }
    }
}

/// Read-only physical state of a bird, for rendering and telemetry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirdView {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub alive: bool,
    pub score: u64,
}
