mod macros;

pub mod bird;
pub mod config;
pub mod constants;
pub mod course;
pub mod error;
pub mod matrix;
pub mod network;
pub mod population;
pub mod random;
pub mod reproduce;
pub mod simulation;

pub use bird::{Bird, BirdView, Decision};
pub use config::Config;
pub use course::{Course, Pipe, PipeCourse};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use network::{activate, NeuralNetwork, Topology};
pub use population::{GenerationStats, Population};
pub use simulation::{EvolutionTarget, Simulation, Snapshot};
