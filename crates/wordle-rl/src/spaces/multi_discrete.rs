//! MultiDiscrete action/observation space

use super::Space;
use rand::Rng;

/// MultiDiscrete space for a vector of discrete dimensions
///
/// Each dimension i has nvec[i] possible values: {0, 1, ..., nvec[i]-1}.
/// Used as the observation space: the packed feedback vector is one slot
/// for the turn counter followed by binary flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiDiscrete {
    /// Number of values for each dimension
    pub nvec: Vec<usize>,
}

impl MultiDiscrete {
    /// Create a new multi-discrete space
    pub fn new(nvec: Vec<usize>) -> Self {
        assert!(!nvec.is_empty(), "MultiDiscrete must have at least 1 dimension");
        assert!(
            nvec.iter().all(|&n| n > 0),
            "All dimensions must have at least 1 element"
        );
        Self { nvec }
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.nvec.len()
    }
}

impl Space for MultiDiscrete {
    type Sample = Vec<usize>;

    fn sample<R: Rng>(&self, rng: &mut R) -> Self::Sample {
        self.nvec.iter().map(|&n| rng.gen_range(0..n)).collect()
    }

    fn contains(&self, value: &Self::Sample) -> bool {
        value.len() == self.nvec.len()
            && value.iter().zip(self.nvec.iter()).all(|(&v, &n)| v < n)
    }

    fn num_elements(&self) -> usize {
        self.nvec.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_multi_discrete_sample() {
        let space = MultiDiscrete::new(vec![7, 2, 2]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let sample = space.sample(&mut rng);
            assert!(space.contains(&sample));
            assert_eq!(sample.len(), 3);
        }
    }

    #[test]
    fn test_multi_discrete_contains() {
        let space = MultiDiscrete::new(vec![3, 2]);
        assert!(space.contains(&vec![2, 1]));
        assert!(!space.contains(&vec![3, 0]));
        assert!(!space.contains(&vec![0, 2]));
        assert!(!space.contains(&vec![0]));
    }

    #[test]
    fn test_multi_discrete_ndim() {
        let space = MultiDiscrete::new(vec![2; 417]);
        assert_eq!(space.ndim(), 417);
        assert_eq!(space.num_elements(), 417);
    }
}
