//! Obstacles scrolling toward the birds. A [Course] is the only source of obstacles a
//! simulation consults, so alternative layouts only need to implement it.

use crate::constants::{
    PIPEBIRD_FIELD_HEIGHT, PIPEBIRD_FIELD_WIDTH, PIPEBIRD_PIPE_GAP, PIPEBIRD_PIPE_INTERVAL,
    PIPEBIRD_PIPE_MARGIN, PIPEBIRD_PIPE_SPAWN_OFFSET, PIPEBIRD_PIPE_VELOCITY, PIPEBIRD_PIPE_WIDTH,
};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// A pair of pipes with an opening between `gap_top` and `gap_bottom`. `x` is the leading edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub x: f64,
    pub width: f64,
    pub gap_top: f64,
    pub gap_bottom: f64,
}

impl Pipe {
    /// A pipe at `x` whose opening is centered on `center`
    pub fn centered(x: f64, center: f64) -> Self {
        Self {
            x,
            width: PIPEBIRD_PIPE_WIDTH,
            gap_top: center - PIPEBIRD_PIPE_GAP / 2.,
            gap_bottom: center + PIPEBIRD_PIPE_GAP / 2.,
        }
    }

    #[inline]
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn offscreen(&self) -> bool {
        self.trailing_edge() < 0.
    }

    /// Whether a circle at (`cx`, `cy`) with radius `r` overlaps either solid part of the pipe
    pub fn hits(&self, cx: f64, cy: f64, r: f64) -> bool {
        cx + r > self.x
            && cx - r < self.trailing_edge()
            && (cy - r < self.gap_top || cy + r > self.gap_bottom)
    }
}

pub trait Course {
    /// Advance the course to `frame`, spawning and culling as needed
    fn advance(&mut self, frame: u64, rng: &mut impl RngCore);

    /// Active obstacles, oldest first
    fn pipes(&self) -> &[Pipe];

    /// Drop every obstacle
    fn reset(&mut self);
}

/// Evenly spaced pipes with randomly placed openings
#[derive(Debug, Clone, Default)]
pub struct PipeCourse {
    pipes: Vec<Pipe>,
}

impl PipeCourse {
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn(&mut self, rng: &mut impl RngCore) {
        let span = PIPEBIRD_FIELD_HEIGHT - PIPEBIRD_PIPE_GAP - 2. * PIPEBIRD_PIPE_MARGIN;
        let center =
            rng.random::<f64>() * span + PIPEBIRD_PIPE_MARGIN + PIPEBIRD_PIPE_GAP / 2.;
        let pipe = Pipe::centered(PIPEBIRD_FIELD_WIDTH + PIPEBIRD_PIPE_SPAWN_OFFSET, center);
        tracing::trace!(gap_top = pipe.gap_top, gap_bottom = pipe.gap_bottom, "spawned pipe");
        self.pipes.push(pipe);
    }
}

impl Course for PipeCourse {
    fn advance(&mut self, frame: u64, rng: &mut impl RngCore) {
        // the first pipe arrives on the first frame, so birds have something to react to
        if frame % PIPEBIRD_PIPE_INTERVAL == 1 % PIPEBIRD_PIPE_INTERVAL {
            self.spawn(rng);
        }
        for pipe in self.pipes.iter_mut() {
            pipe.x -= PIPEBIRD_PIPE_VELOCITY;
        }
        self.pipes.retain(|pipe| !pipe.offscreen());
    }

    fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    fn reset(&mut self) {
        self.pipes.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_f64_approx, random::WyRng};

    #[test]
    fn test_spawn_interval() {
        let mut rng = WyRng::seeded(0);
        let mut course = PipeCourse::new();
        course.advance(1, &mut rng);
        assert_eq!(course.pipes().len(), 1);
        assert_f64_approx!(
            course.pipes()[0].x,
            PIPEBIRD_FIELD_WIDTH + PIPEBIRD_PIPE_SPAWN_OFFSET - PIPEBIRD_PIPE_VELOCITY
        );

        for frame in 2..=PIPEBIRD_PIPE_INTERVAL {
            course.advance(frame, &mut rng);
            assert_eq!(course.pipes().len(), 1);
        }
        course.advance(PIPEBIRD_PIPE_INTERVAL + 1, &mut rng);
        assert_eq!(course.pipes().len(), 2);
        assert_f64_approx!(
            course.pipes()[0].x - course.pipes()[1].x,
            -(PIPEBIRD_PIPE_INTERVAL as f64) * PIPEBIRD_PIPE_VELOCITY
        );
    }

    #[test]
    fn test_gap_within_field() {
        let mut rng = WyRng::seeded(1);
        let mut course = PipeCourse::new();
        for _ in 0..500 {
            course.spawn(&mut rng);
        }
        for pipe in course.pipes() {
            assert_f64_approx!(pipe.gap_bottom - pipe.gap_top, PIPEBIRD_PIPE_GAP);
            assert!(pipe.gap_top >= PIPEBIRD_PIPE_MARGIN);
            assert!(pipe.gap_bottom <= PIPEBIRD_FIELD_HEIGHT - PIPEBIRD_PIPE_MARGIN);
        }
    }

    #[test]
    fn test_offscreen_culled() {
        let mut rng = WyRng::seeded(2);
        let mut course = PipeCourse::new();
        let mut frame = 0;
        while course.pipes().is_empty() {
            frame += 1;
            course.advance(frame, &mut rng);
        }

        // long enough for the first pipe to cross the whole field, short enough that it is the
        // only one that could have left
        let crossing = ((PIPEBIRD_FIELD_WIDTH + PIPEBIRD_PIPE_SPAWN_OFFSET + PIPEBIRD_PIPE_WIDTH)
            / PIPEBIRD_PIPE_VELOCITY) as u64
            + 1;
        let first = course.pipes()[0];
        for _ in 0..crossing {
            frame += 1;
            course.advance(frame, &mut rng);
        }
        assert!(course.pipes().iter().all(|p| !p.offscreen()));
        assert!(course.pipes().iter().all(|p| p.gap_top != first.gap_top));

        course.reset();
        assert!(course.pipes().is_empty());
    }

    #[test]
    fn test_hits() {
        let pipe = Pipe::centered(100., 300.);
        // through the middle of the opening
        assert!(!pipe.hits(140., 300., 12.));
        // clipping the top pipe
        assert!(pipe.hits(140., 225., 12.));
        // clipping the bottom pipe
        assert!(pipe.hits(140., 375., 12.));
        // level with the top pipe, but horizontally clear of it
        assert!(!pipe.hits(80., 100., 12.));
        assert!(!pipe.hits(200., 100., 12.));
        // horizontally grazing
        assert!(pipe.hits(90., 100., 12.));
    }
}
