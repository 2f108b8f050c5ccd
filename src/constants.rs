//! Centralized constants for pipebird physics, course layout and evolution.
//!
//! All tunables that are not part of [crate::config::Config] are defined here with the
//! `PIPEBIRD_` prefix.

// ============================================================================
// Field
// ============================================================================

/// Width of the playing field, in pixels
pub const PIPEBIRD_FIELD_WIDTH: f64 = 900.;

/// Height of the playing field, in pixels. Touching it is fatal
pub const PIPEBIRD_FIELD_HEIGHT: f64 = 600.;

// ============================================================================
// Bird Physics
// ============================================================================

/// Downward acceleration applied every tick
pub const PIPEBIRD_GRAVITY: f64 = 0.7;

/// Velocity set (not added) by a jump
pub const PIPEBIRD_JUMP_VELOCITY: f64 = -9.;

/// Collision radius of a bird
pub const PIPEBIRD_BIRD_RADIUS: f64 = 12.;

/// Fixed horizontal position of every bird
pub const PIPEBIRD_BIRD_X: f64 = 150.;

/// Velocity offset and span used to squash velocity into roughly `[0, 1]`
pub const PIPEBIRD_VELOCITY_OFFSET: f64 = 15.;
pub const PIPEBIRD_VELOCITY_SPAN: f64 = 30.;

/// How far behind a bird a pipe's trailing edge may be while still being considered
pub const PIPEBIRD_LOOKAHEAD: f64 = -50.;

/// Network output above which a bird jumps
pub const PIPEBIRD_JUMP_THRESHOLD: f64 = 0.5;

// ============================================================================
// Course
// ============================================================================

pub const PIPEBIRD_PIPE_WIDTH: f64 = 80.;

/// Vertical size of the opening in each pipe
pub const PIPEBIRD_PIPE_GAP: f64 = 160.;

/// Horizontal distance between consecutive pipes
pub const PIPEBIRD_PIPE_SPACING: f64 = 220.;

/// Pipe scroll speed, per tick
pub const PIPEBIRD_PIPE_VELOCITY: f64 = 3.;

/// Minimum clearance between a gap and the field edges
pub const PIPEBIRD_PIPE_MARGIN: f64 = 40.;

/// Pipes enter this far to the right of the field
pub const PIPEBIRD_PIPE_SPAWN_OFFSET: f64 = 20.;

/// Ticks between pipe spawns
pub const PIPEBIRD_PIPE_INTERVAL: u64 = (PIPEBIRD_PIPE_SPACING / PIPEBIRD_PIPE_VELOCITY) as u64;

// ============================================================================
// Network Topology
// ============================================================================

/// Sensory inputs: y, velocity, gap top, gap bottom, distance
pub const PIPEBIRD_INPUT_SIZE: usize = 5;

/// Single jump / no-jump output
pub const PIPEBIRD_OUTPUT_SIZE: usize = 1;

pub const PIPEBIRD_HIDDEN_SIZE: usize = 8;

/// Initial weights and biases are drawn from `[-scale, scale]`
pub const PIPEBIRD_WEIGHT_SCALE: f64 = 1.;

// ============================================================================
// Evolution Parameters
// ============================================================================

pub const PIPEBIRD_POPULATION_SIZE: usize = 120;

/// Per-weight probability of perturbation in each child
pub const PIPEBIRD_MUTATION_RATE: f64 = 0.12;

/// Perturbations are drawn from `[-scale, scale]`
pub const PIPEBIRD_MUTATION_SCALE: f64 = 0.5;

/// Exponent applied to score before normalisation
pub const PIPEBIRD_FITNESS_EXPONENT: i32 = 2;
