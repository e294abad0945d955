//! Accumulated guess feedback.
//!
//! `FeedbackState` is the observation: for every letter of the alphabet and
//! every word position it tracks whether the letter is proven absent there,
//! proven present there, or still unknown. Feedback folds in incrementally,
//! one guess at a time; cells only ever move from `Maybe` toward a proven
//! status, never back.

use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::{ALPHABET_LEN, WORD_LEN};

/// Status of one (letter, position) cell.
///
/// Being an enum, exactly one status holds per cell by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterStatus {
    /// Letter proven not at this position
    Absent,
    /// No information yet; still possible
    Maybe,
    /// Letter proven at this position
    Present,
}

impl LetterStatus {
    /// One-hot encoding used in the packed observation vector
    fn one_hot(self) -> [f32; 3] {
        match self {
            LetterStatus::Absent => [1.0, 0.0, 0.0],
            LetterStatus::Maybe => [0.0, 1.0, 0.0],
            LetterStatus::Present => [0.0, 0.0, 1.0],
        }
    }
}

/// Per-episode feedback state: the remaining-turn counter, the set of
/// letters tried so far, and the status grid.
///
/// Created at `reset`, mutated once per `step` by the environment, and
/// handed to callers as independent snapshots via `Clone` (the struct is
/// all inline arrays, so a clone is a deep copy).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackState {
    remaining_turns: usize,
    tried: [bool; ALPHABET_LEN],
    status: [[LetterStatus; WORD_LEN]; ALPHABET_LEN],
}

fn letter_index(c: u8) -> usize {
    debug_assert!(c.is_ascii_uppercase(), "vocabulary must be A-Z uppercase");
    (c - b'A') as usize
}

impl FeedbackState {
    /// Length of the packed observation vector:
    /// turn counter + tried flags + 3-way one-hot per (letter, position)
    pub const FLAT_LEN: usize = 1 + ALPHABET_LEN + 3 * WORD_LEN * ALPHABET_LEN;

    /// Fresh state: full turn budget, nothing tried, every cell `Maybe`
    pub fn new(max_turns: usize) -> Self {
        Self {
            remaining_turns: max_turns,
            tried: [false; ALPHABET_LEN],
            status: [[LetterStatus::Maybe; WORD_LEN]; ALPHABET_LEN],
        }
    }

    /// Remaining turn budget
    pub fn remaining_turns(&self) -> usize {
        self.remaining_turns
    }

    /// Whether `letter` (A-Z) has appeared in any guess this episode
    pub fn tried(&self, letter: char) -> bool {
        self.tried[letter_index(letter as u8)]
    }

    /// Status of `letter` (A-Z) at `pos`
    pub fn status(&self, letter: char, pos: usize) -> LetterStatus {
        self.status[letter_index(letter as u8)][pos]
    }

    /// Fold one guess against the goal into the accumulated feedback.
    ///
    /// Per guess position with letter `c`:
    /// - exact match: `c` is `Present` there and every other letter is
    ///   `Absent` there (only one letter fits a fixed position)
    /// - `c` elsewhere in the goal: `c` is `Absent` at this position only
    /// - `c` not in the goal: `c` is `Absent` at every position
    ///
    /// Duplicate letters get no special accounting: a guess with two copies
    /// of a letter the goal holds once reads the same as two genuinely
    /// misplaced occurrences. Kept as-is for compatibility with models
    /// trained against the reference behavior.
    ///
    /// The caller guarantees `remaining_turns > 0`; the environment enforces
    /// that before calling.
    pub fn update(&mut self, guess: &str, goal: &str) {
        debug_assert!(self.remaining_turns > 0, "update on exhausted episode");
        debug_assert_eq!(guess.len(), WORD_LEN);
        debug_assert_eq!(goal.len(), WORD_LEN);

        self.remaining_turns -= 1;

        let goal = goal.as_bytes();
        for (i, &c) in guess.as_bytes().iter().enumerate() {
            let ci = letter_index(c);
            self.tried[ci] = true;

            if goal[i] == c {
                for li in 0..ALPHABET_LEN {
                    self.status[li][i] = if li == ci {
                        LetterStatus::Present
                    } else {
                        LetterStatus::Absent
                    };
                }
            } else if goal.contains(&c) {
                self.status[ci][i] = LetterStatus::Absent;
            } else {
                self.status[ci] = [LetterStatus::Absent; WORD_LEN];
            }
        }
    }

    /// Pack the state into the flat numeric layout consumed by models:
    /// `[remaining_turns, tried[26], one_hot3[26][5]]`, length
    /// [`FeedbackState::FLAT_LEN`].
    pub fn encode(&self) -> ArrayD<f32> {
        let mut vec = Vec::with_capacity(Self::FLAT_LEN);
        vec.push(self.remaining_turns as f32);
        vec.extend(self.tried.iter().map(|&t| if t { 1.0 } else { 0.0 }));
        for row in &self.status {
            for &cell in row {
                vec.extend_from_slice(&cell.one_hot());
            }
        }
        ArrayD::from_shape_vec(IxDyn(&[Self::FLAT_LEN]), vec).unwrap()
    }

    /// Dimension sizes of the packed layout, for the MultiDiscrete
    /// observation space: `max_turns + 1` values for the counter slot,
    /// binary for everything else
    pub fn nvec(max_turns: usize) -> Vec<usize> {
        let mut nvec = Vec::with_capacity(Self::FLAT_LEN);
        nvec.push(max_turns + 1);
        nvec.resize(Self::FLAT_LEN, 2);
        nvec
    }
}
