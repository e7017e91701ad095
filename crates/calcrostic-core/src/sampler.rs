use crate::arith::{Bounds, Op};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Relative likelihood of drawing each operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OpWeights {
    #[serde(rename = "+")]
    pub add: u32,
    #[serde(rename = "-")]
    pub sub: u32,
    #[serde(rename = "x")]
    pub mul: u32,
    #[serde(rename = "/")]
    pub div: u32,
}

impl Default for OpWeights {
    fn default() -> Self {
        Self {
            add: 1,
            sub: 1,
            mul: 1,
            div: 1,
        }
    }
}

impl OpWeights {
    pub fn weight(&self, op: Op) -> u32 {
        match op {
            Op::Add => self.add,
            Op::Sub => self.sub,
            Op::Mul => self.mul,
            Op::Div => self.div,
        }
    }

    /// Same weights with one operator switched off
    pub fn without(mut self, op: Op) -> Self {
        match op {
            Op::Add => self.add = 0,
            Op::Sub => self.sub = 0,
            Op::Mul => self.mul = 0,
            Op::Div => self.div = 0,
        }
        self
    }
}

/// Draw a single cell value within the configured bounds.
pub fn sample_value<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> u32 {
    rng.gen_range(bounds.lo()..=bounds.hi())
}

/// Draws operators, uniformly or by weight.
///
/// Weights that sum to zero fall back to a uniform draw.
#[derive(Debug, Clone)]
pub struct OperatorPicker {
    weighted: Option<WeightedIndex<u32>>,
}

impl OperatorPicker {
    /// Uniform picker
    pub fn uniform() -> Self {
        Self { weighted: None }
    }

    pub fn new(weights: Option<&OpWeights>) -> Self {
        let weighted =
            weights.and_then(|w| WeightedIndex::new(Op::ALL.map(|op| w.weight(op))).ok());
        Self { weighted }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Op {
        match &self.weighted {
            Some(dist) => Op::ALL[dist.sample(rng)],
            None => Op::ALL[rng.gen_range(0..Op::ALL.len())],
        }
    }

    /// Draw three operators for a row or column sequence
    pub fn pick_three<R: Rng + ?Sized>(&self, rng: &mut R) -> [Op; 3] {
        [self.pick(rng), self.pick(rng), self.pick(rng)]
    }
}
