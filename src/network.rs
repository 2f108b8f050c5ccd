//! The fixed-topology feed-forward network each bird flies with. Unlike a growing genome, the
//! shape of a network never changes across a lineage, so crossover can line weights up by
//! position alone.

use crate::{
    constants::{PIPEBIRD_MUTATION_SCALE, PIPEBIRD_WEIGHT_SCALE},
    error::{Error, Result},
    matrix::Matrix,
};
use core::fmt;
use rand::RngCore;
use serde::{Deserialize, Serialize};

pub mod activate {
    use core::f64::consts::E;

    pub fn sigmoid(x: f64) -> f64 {
        1. / (1. + E.powf(-x))
    }
}

/// Layer sizes of a 3-layer network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topology {
    pub input: usize,
    pub hidden: usize,
    pub output: usize,
}

impl Topology {
    pub fn new(input: usize, hidden: usize, output: usize) -> Result<Self> {
        let topology = Self {
            input,
            hidden,
            output,
        };
        topology.validate()?;
        Ok(topology)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input == 0 || self.hidden == 0 || self.output == 0 {
            return Err(Error::InvalidTopology {
                input: self.input,
                hidden: self.hidden,
                output: self.output,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.input, self.hidden, self.output)
    }
}

/// input → hidden → output, sigmoid activated at both layers
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetwork {
    topology: Topology,
    /// hidden × input
    weights_ih: Matrix,
    /// output × hidden
    weights_ho: Matrix,
    /// hidden × 1
    bias_h: Matrix,
    /// output × 1
    bias_o: Matrix,
}

impl NeuralNetwork {
    /// A network with every weight and bias uniformly drawn from `[-1, 1]`
    pub fn new(topology: Topology, rng: &mut impl RngCore) -> Result<Self> {
        topology.validate()?;
        let Topology {
            input,
            hidden,
            output,
        } = topology;
        Ok(Self {
            topology,
            weights_ih: Matrix::random(hidden, input, PIPEBIRD_WEIGHT_SCALE, rng)?,
            weights_ho: Matrix::random(output, hidden, PIPEBIRD_WEIGHT_SCALE, rng)?,
            bias_h: Matrix::random(hidden, 1, PIPEBIRD_WEIGHT_SCALE, rng)?,
            bias_o: Matrix::random(output, 1, PIPEBIRD_WEIGHT_SCALE, rng)?,
        })
    }

    /// Assemble a network from explicit parameters, checking every shape against `topology`
    pub fn from_parts(
        topology: Topology,
        weights_ih: Matrix,
        weights_ho: Matrix,
        bias_h: Matrix,
        bias_o: Matrix,
    ) -> Result<Self> {
        topology.validate()?;
        let Topology {
            input,
            hidden,
            output,
        } = topology;
        for (have, want) in [
            (&weights_ih, (hidden, input)),
            (&weights_ho, (output, hidden)),
            (&bias_h, (hidden, 1)),
            (&bias_o, (output, 1)),
        ] {
            if have.shape() != want {
                return Err(Error::DimensionMismatch {
                    op: "from_parts",
                    left: have.shape(),
                    right: want,
                });
            }
        }

        Ok(Self {
            topology,
            weights_ih,
            weights_ho,
            bias_h,
            bias_o,
        })
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Weight and bias matrices, in a fixed order
    pub fn layers(&self) -> [&Matrix; 4] {
        [&self.weights_ih, &self.weights_ho, &self.bias_h, &self.bias_o]
    }

    fn layers_mut(&mut self) -> [&mut Matrix; 4] {
        [
            &mut self.weights_ih,
            &mut self.weights_ho,
            &mut self.bias_h,
            &mut self.bias_o,
        ]
    }

    /// Feed `inputs` forward. Output values are always within `[0, 1]`.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        if inputs.len() != self.topology.input {
            return Err(Error::InputLength {
                expected: self.topology.input,
                got: inputs.len(),
            });
        }

        let inputs = Matrix::from_column(inputs)?;
        let hidden = Matrix::add(
            &Matrix::multiply(&self.weights_ih, &inputs)?,
            &self.bias_h,
        )?
        .map(activate::sigmoid);
        let output = Matrix::add(
            &Matrix::multiply(&self.weights_ho, &hidden)?,
            &self.bias_o,
        )?
        .map(activate::sigmoid);

        Ok(output.to_column())
    }

    /// A child whose every matrix is an independent single point crossover of `a` and `b`
    pub fn crossover(a: &Self, b: &Self, rng: &mut impl RngCore) -> Result<Self> {
        if a.topology != b.topology {
            return Err(Error::TopologyMismatch(
                a.topology.to_string(),
                b.topology.to_string(),
            ));
        }

        Ok(Self {
            topology: a.topology,
            weights_ih: Matrix::crossover(&a.weights_ih, &b.weights_ih, rng)?,
            weights_ho: Matrix::crossover(&a.weights_ho, &b.weights_ho, rng)?,
            bias_h: Matrix::crossover(&a.bias_h, &b.bias_h, rng)?,
            bias_o: Matrix::crossover(&a.bias_o, &b.bias_o, rng)?,
        })
    }

    /// Perturb each weight and bias with probability `rate`
    pub fn mutate(&mut self, rate: f64, rng: &mut impl RngCore) {
        for layer in self.layers_mut() {
            layer.mutate(rate, PIPEBIRD_MUTATION_SCALE, rng);
        }
    }
}
