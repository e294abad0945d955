//! Core environment trait definitions.

use crate::spaces::DynSpace;
use crate::Result;

/// Information returned from environment steps.
///
/// Starts empty on every step; environments attach diagnostics on episode
/// completion.
#[derive(Clone, Debug, Default)]
pub struct EnvInfo {
    /// Episode return (if the episode just ended)
    pub episode_return: Option<f32>,
    /// Episode length in steps (if the episode just ended)
    pub episode_length: Option<f32>,
    /// Custom metrics (kept minimal for performance)
    pub extra: smallvec::SmallVec<[(&'static str, f32); 4]>,
}

impl EnvInfo {
    /// Create empty info
    pub fn new() -> Self {
        Self::default()
    }

    /// Add episode stats
    pub fn with_episode_stats(mut self, ret: f32, len: u32) -> Self {
        self.episode_return = Some(ret);
        self.episode_length = Some(len as f32);
        self
    }

    /// Add a custom metric (use rarely)
    pub fn with_extra(mut self, key: &'static str, value: f32) -> Self {
        self.extra.push((key, value));
        self
    }

    /// Get a value by key (including the episode stats)
    pub fn get(&self, key: &str) -> Option<f32> {
        match key {
            "episode_return" => self.episode_return,
            "episode_length" => self.episode_length,
            _ => self.extra.iter().find(|(k, _)| k == &key).map(|(_, v)| *v),
        }
    }
}

/// Result from a single environment step
#[derive(Clone, Debug)]
pub struct StepResult<O> {
    /// Observation snapshot after the step; independent of the
    /// environment's working state, so it stays valid across later steps
    pub observation: O,
    /// Reward received
    pub reward: f32,
    /// Whether the episode terminated (win or turn exhaustion)
    pub terminated: bool,
    /// Additional info
    pub info: EnvInfo,
}

/// Core trait for turn-based environments.
///
/// Episodes run reset -> step* -> termination. `reset` always succeeds and
/// returns the initial observation; `step` is fallible because calling it on
/// a terminated episode is a usage error ([`crate::EnvError::InvalidState`]),
/// not a game event.
///
/// Actions are indices into the environment's discrete action space.
pub trait Env: Send {
    /// Structured observation type; snapshots are handed out by value
    type Obs: Clone + Send;

    /// Get the observation space
    fn observation_space(&self) -> DynSpace;

    /// Get the action space
    fn action_space(&self) -> DynSpace;

    /// Reset the environment and start a new episode
    ///
    /// # Arguments
    /// * `seed` - Optional seed for the environment's random source; the
    ///   same seed reproduces the same episode setup
    fn reset(&mut self, seed: Option<u64>) -> (Self::Obs, EnvInfo);

    /// Take a single step in the environment
    ///
    /// # Errors
    /// * `InvalidState` if the episode has already terminated
    /// * `InvalidAction` if the action index is out of range
    ///
    /// A failed step performs no mutation.
    fn step(&mut self, action: usize) -> Result<StepResult<Self::Obs>>;

    /// Check if the environment is terminated and needs a reset
    fn is_done(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_info_empty() {
        let info = EnvInfo::new();
        assert!(info.episode_return.is_none());
        assert!(info.episode_length.is_none());
        assert!(info.extra.is_empty());
        assert_eq!(info.get("anything"), None);
    }

    #[test]
    fn test_env_info_episode_stats() {
        let info = EnvInfo::new().with_episode_stats(8.5, 3);
        assert_eq!(info.get("episode_return"), Some(8.5));
        assert_eq!(info.get("episode_length"), Some(3.0));
    }

    #[test]
    fn test_env_info_extra() {
        let info = EnvInfo::new().with_extra("turns_left", 4.0);
        assert_eq!(info.get("turns_left"), Some(4.0));
        assert_eq!(info.get("missing"), None);
    }
}
