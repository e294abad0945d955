//! Observation and action space types.
//!
//! Gymnasium-style space definitions. The Wordle protocol only needs two
//! kinds: `Discrete` (actions: one index into the vocabulary) and
//! `MultiDiscrete` (observations: the packed feedback vector).

mod discrete;
mod multi_discrete;

pub use discrete::Discrete;
pub use multi_discrete::MultiDiscrete;

use ndarray::{ArrayD, IxDyn};
use rand::Rng;

/// Trait for observation and action spaces
pub trait Space: Clone + Send + Sync {
    /// The type of samples from this space
    type Sample;

    /// Sample a random element from this space
    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Sample;

    /// Check if a value is contained in this space
    fn contains(&self, value: &Self::Sample) -> bool;

    /// Total number of scalar elements in a flattened sample
    fn num_elements(&self) -> usize;
}

/// Enum for dynamic space types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DynSpace {
    Discrete(Discrete),
    MultiDiscrete(MultiDiscrete),
}

impl DynSpace {
    /// Number of scalar elements in a flattened sample
    pub fn num_elements(&self) -> usize {
        match self {
            DynSpace::Discrete(s) => s.num_elements(),
            DynSpace::MultiDiscrete(s) => s.num_elements(),
        }
    }

    /// Sample from this space as a flat array
    pub fn sample<R: Rng>(&self, rng: &mut R) -> ArrayD<f32> {
        match self {
            DynSpace::Discrete(s) => {
                let v = s.sample(rng);
                ArrayD::from_elem(IxDyn(&[1]), v as f32)
            }
            DynSpace::MultiDiscrete(s) => {
                let v = s.sample(rng);
                ArrayD::from_shape_vec(
                    IxDyn(&[v.len()]),
                    v.into_iter().map(|x| x as f32).collect(),
                )
                .unwrap()
            }
        }
    }

    /// Check if a flat array is contained in this space
    pub fn contains(&self, value: &ArrayD<f32>) -> bool {
        match self {
            DynSpace::Discrete(s) => {
                if value.len() != 1 {
                    return false;
                }
                let v = value.iter().next().unwrap().round() as usize;
                s.contains(&v)
            }
            DynSpace::MultiDiscrete(s) => {
                if value.len() != s.num_elements() {
                    return false;
                }
                let v: Vec<usize> = value.iter().map(|&x| x.round() as usize).collect();
                s.contains(&v)
            }
        }
    }
}
