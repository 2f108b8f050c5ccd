//! Dense 2-D `f64` matrices, plus the genetic primitives (crossover and mutation) that operate
//! on their flattened, row-major values.

use crate::error::{Error, Result};
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Uniform};
use rulinalg::matrix::{BaseMatrix, Matrix as Dense};

/// A matrix whose shape is always at least 1x1. Values are stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(Dense<f64>);

/// Uniform distribution over `[-scale, scale]`
fn symmetric(scale: f64) -> Result<Uniform<f64>> {
    Uniform::new_inclusive(-scale.abs(), scale.abs())
        .map_err(|e| Error::config(format!("cannot sample from ±{scale}: {e}")))
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 || values.len() != rows * cols {
            return Err(Error::InvalidShape {
                rows,
                cols,
                len: values.len(),
            });
        }
        Ok(Self(Dense::new(rows, cols, values)))
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, vec![0.; rows * cols])
    }

    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidShape {
                rows: 0,
                cols: 0,
                len: 0,
            });
        }
        Ok(Self(Dense::identity(size)))
    }

    /// A single column holding `values`
    pub fn from_column(values: &[f64]) -> Result<Self> {
        Self::new(values.len(), 1, values.to_vec())
    }

    /// Every value uniformly drawn from `[-scale, scale]`
    pub fn random(rows: usize, cols: usize, scale: f64, rng: &mut impl RngCore) -> Result<Self> {
        let dist = symmetric(scale)?;
        Self::new(
            rows,
            cols,
            (0..rows * cols).map(|_| dist.sample(rng)).collect(),
        )
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.0.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.0.cols()
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Row-major view of every value
    #[inline]
    pub fn values(&self) -> &[f64] {
        self.0.data()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows() && col < self.cols()).then(|| self.values()[row * self.cols() + col])
    }

    /// Flattened values, which for a column is the column itself
    pub fn to_column(&self) -> Vec<f64> {
        self.values().to_vec()
    }

    /// Standard matrix product `a × b`
    pub fn multiply(a: &Self, b: &Self) -> Result<Self> {
        if a.cols() != b.rows() {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                left: a.shape(),
                right: b.shape(),
            });
        }
        Ok(Self(&a.0 * &b.0))
    }

    /// Elementwise `a + b`
    pub fn add(a: &Self, b: &Self) -> Result<Self> {
        if a.shape() != b.shape() {
            return Err(Error::DimensionMismatch {
                op: "add",
                left: a.shape(),
                right: b.shape(),
            });
        }
        Ok(Self(&a.0 + &b.0))
    }

    /// A new matrix with `f` applied to every value of `self`
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self(Dense::new(
            self.rows(),
            self.cols(),
            self.values().iter().map(|&v| f(v)).collect::<Vec<_>>(),
        ))
    }

    /// Single point crossover on the flattened values: the child takes `a` up to a random cut,
    /// and `b` from there on.
    pub fn crossover(a: &Self, b: &Self, rng: &mut impl RngCore) -> Result<Self> {
        if a.shape() != b.shape() {
            return Err(Error::DimensionMismatch {
                op: "crossover",
                left: a.shape(),
                right: b.shape(),
            });
        }

        let len = a.values().len();
        let cut = rng.random_range(0..len);
        Ok(Self::splice(a, b, cut))
    }

    fn splice(a: &Self, b: &Self, cut: usize) -> Self {
        debug_assert_eq!(a.shape(), b.shape());
        let mut values = Vec::with_capacity(a.values().len());
        values.extend_from_slice(&a.values()[..cut]);
        values.extend_from_slice(&b.values()[cut..]);
        Self(Dense::new(a.rows(), a.cols(), values))
    }

    /// With independent probability `rate`, nudge each value by something in `[-scale, scale]`
    pub fn mutate(&mut self, rate: f64, scale: f64, rng: &mut impl RngCore) {
        let Ok(perturb) = symmetric(scale) else {
            tracing::warn!(scale, "refusing to mutate with an unusable scale");
            return;
        };
        for v in self.0.mut_data().iter_mut() {
            if rng.random::<f64>() < rate {
                *v += perturb.sample(rng);
            }
        }
    }
}
