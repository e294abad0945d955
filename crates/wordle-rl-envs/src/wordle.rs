//! The Wordle environment.

use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordle_rl::env::{Env, EnvInfo, StepResult};
use wordle_rl::spaces::{Discrete, DynSpace, MultiDiscrete};
use wordle_rl::{EnvError, Result};

use crate::state::FeedbackState;
use crate::{REWARD, WORD_LEN};

/// Wordle as a turn-based environment.
///
/// Each episode hides one goal word from the vocabulary. The agent submits
/// vocabulary indices as guesses; feedback accumulates in a
/// [`FeedbackState`], which is also the observation. Guessing the goal wins
/// the episode with a reward that scales with the turns conserved (except a
/// first-guess win, which pays nothing); exhausting the turn budget loses
/// with `-REWARD`.
///
/// Freshly constructed environments count as terminated, so the first call
/// must be `reset`.
#[derive(Debug)]
pub struct WordleEnv {
    words: Vec<String>,
    sampler: Option<WeightedIndex<f32>>,
    max_turns: usize,
    goal: usize,
    state: FeedbackState,
    terminated: bool,
    rng: StdRng,
}

impl WordleEnv {
    /// Create an environment with uniform goal sampling
    pub fn new(words: Vec<String>, max_turns: usize) -> Result<Self> {
        Self::with_config(words, max_turns, None)
    }

    /// Create an environment that samples goals by word frequency.
    ///
    /// Frequencies are normalized to a distribution; they do not need to
    /// sum to 1.
    pub fn with_frequencies(
        words: Vec<String>,
        max_turns: usize,
        frequencies: Vec<f32>,
    ) -> Result<Self> {
        Self::with_config(words, max_turns, Some(frequencies))
    }

    fn with_config(
        words: Vec<String>,
        max_turns: usize,
        frequencies: Option<Vec<f32>>,
    ) -> Result<Self> {
        if words.is_empty() {
            return Err(EnvError::InvalidVocabulary("empty word list".into()));
        }
        for word in &words {
            if word.len() != WORD_LEN || !word.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(EnvError::InvalidVocabulary(format!(
                    "word {:?} is not {} uppercase letters",
                    word, WORD_LEN
                )));
            }
        }
        if max_turns == 0 {
            return Err(EnvError::ConfigurationMismatch(
                "max_turns must be at least 1".into(),
            ));
        }

        let sampler = match frequencies {
            None => None,
            Some(freqs) => {
                if freqs.len() != words.len() {
                    return Err(EnvError::ConfigurationMismatch(format!(
                        "{} words but {} frequencies",
                        words.len(),
                        freqs.len()
                    )));
                }
                let total: f32 = freqs.iter().sum();
                let dist = WeightedIndex::new(freqs.iter().map(|f| f / total))
                    .map_err(|e| {
                        EnvError::ConfigurationMismatch(format!("bad frequencies: {}", e))
                    })?;
                Some(dist)
            }
        };

        Ok(Self {
            words,
            sampler,
            max_turns,
            goal: 0,
            state: FeedbackState::new(max_turns),
            terminated: true,
            rng: StdRng::from_entropy(),
        })
    }

    /// The vocabulary
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Turn budget per episode
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Index of the current goal word. Hidden from the observation; exposed
    /// for evaluation tooling.
    pub fn goal_index(&self) -> usize {
        self.goal
    }

    /// The current goal word
    pub fn goal_word(&self) -> &str {
        &self.words[self.goal]
    }

    /// Snapshot of the current feedback state
    pub fn observation(&self) -> FeedbackState {
        self.state.clone()
    }

    fn sample_goal(&mut self) -> usize {
        match &self.sampler {
            Some(dist) => dist.sample(&mut self.rng),
            None => self.rng.gen_range(0..self.words.len()),
        }
    }
}

impl Env for WordleEnv {
    type Obs = FeedbackState;

    fn observation_space(&self) -> DynSpace {
        DynSpace::MultiDiscrete(MultiDiscrete::new(FeedbackState::nvec(self.max_turns)))
    }

    fn action_space(&self) -> DynSpace {
        DynSpace::Discrete(Discrete::new(self.words.len()))
    }

    fn reset(&mut self, seed: Option<u64>) -> (FeedbackState, EnvInfo) {
        if let Some(s) = seed {
            self.rng = StdRng::seed_from_u64(s);
        }
        self.state = FeedbackState::new(self.max_turns);
        self.goal = self.sample_goal();
        self.terminated = false;
        debug!("reset: goal index {} of {} words", self.goal, self.words.len());
        (self.state.clone(), EnvInfo::new())
    }

    fn step(&mut self, action: usize) -> Result<StepResult<FeedbackState>> {
        if self.terminated {
            return Err(EnvError::InvalidState);
        }
        if action >= self.words.len() {
            return Err(EnvError::InvalidAction(format!(
                "index {} out of range for {} words",
                action,
                self.words.len()
            )));
        }

        self.state.update(&self.words[action], &self.words[self.goal]);
        let remaining = self.state.remaining_turns();

        let mut reward = 0.0;
        if action == self.goal {
            self.terminated = true;
            // A first-guess win pays nothing; otherwise reward scales with
            // the turns conserved.
            if remaining + 1 < self.max_turns {
                reward = REWARD * (remaining as f32 + 1.0) / self.max_turns as f32;
            }
        } else if remaining == 0 {
            self.terminated = true;
            reward = -REWARD;
        }

        let mut info = EnvInfo::new();
        if self.terminated {
            let turns_used = (self.max_turns - remaining) as u32;
            info = info.with_episode_stats(reward, turns_used);
            debug!(
                "episode over after {} turns: guess {:?}, goal {:?}, reward {}",
                turns_used, self.words[action], self.words[self.goal], reward
            );
        }

        Ok(StepResult {
            observation: self.state.clone(),
            reward,
            terminated: self.terminated,
            info,
        })
    }

    fn is_done(&self) -> bool {
        self.terminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LetterStatus;

    fn test_words() -> Vec<String> {
        [
            "APPAA", "APPAB", "APPAC", "APPAD", "BPPAB", "BPPAC", "BPPAD", "CPPAB", "CPPAC",
            "CPPAD",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_spaces_match_vocabulary() {
        let env = WordleEnv::new(test_words(), 6).unwrap();
        assert_eq!(env.action_space(), DynSpace::Discrete(Discrete::new(10)));
        assert_eq!(
            env.observation_space().num_elements(),
            FeedbackState::FLAT_LEN
        );
    }

    #[test]
    fn test_feedback_accumulates_across_guesses() {
        let mut env = WordleEnv::new(test_words(), 6).unwrap();
        env.reset(Some(13));
        env.goal = 0; // APPAA

        // Guess APPAB: A, P, P, A exact; trailing B absent everywhere.
        let result = env.step(1).unwrap();
        let obs = &result.observation;
        assert_eq!(obs.remaining_turns(), 5);
        for pos in 0..WORD_LEN {
            assert_eq!(obs.status('B', pos), LetterStatus::Absent);
        }
        for pos in [0, 3] {
            assert_eq!(obs.status('A', pos), LetterStatus::Present);
        }
        for pos in [1, 2] {
            assert_eq!(obs.status('P', pos), LetterStatus::Present);
            assert_eq!(obs.status('A', pos), LetterStatus::Absent);
        }
        assert_eq!(obs.status('A', 4), LetterStatus::Maybe);
        assert_eq!(obs.status('P', 4), LetterStatus::Maybe);
        assert!(!result.terminated);
        assert_eq!(result.reward, 0.0);

        // Guess APPAC: adds that C is absent everywhere, keeps the rest.
        let result = env.step(2).unwrap();
        let obs = &result.observation;
        assert_eq!(obs.remaining_turns(), 4);
        for pos in 0..WORD_LEN {
            assert_eq!(obs.status('B', pos), LetterStatus::Absent);
            assert_eq!(obs.status('C', pos), LetterStatus::Absent);
        }
        for pos in [0, 3] {
            assert_eq!(obs.status('A', pos), LetterStatus::Present);
        }

        // Guess the goal on turn 3: reward scales with turns conserved.
        let result = env.step(0).unwrap();
        assert!(result.terminated);
        let expected = REWARD * 4.0 / 6.0;
        assert!((result.reward - expected).abs() < 1e-6);
    }

    #[test]
    fn test_weighted_sampling_follows_frequencies() {
        // All weight on index 7: the goal is always CPPAB.
        let mut freqs = vec![0.0; 10];
        freqs[7] = 3.5;
        let mut env = WordleEnv::with_frequencies(test_words(), 6, freqs).unwrap();

        for seed in 0..5 {
            env.reset(Some(seed));
            assert_eq!(env.goal_index(), 7);
        }
    }

    #[test]
    fn test_frequency_count_mismatch() {
        let err = WordleEnv::with_frequencies(test_words(), 6, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, EnvError::ConfigurationMismatch(_)));
    }

    #[test]
    fn test_zero_max_turns_rejected() {
        let err = WordleEnv::new(test_words(), 0).unwrap_err();
        assert!(matches!(err, EnvError::ConfigurationMismatch(_)));
    }
}
