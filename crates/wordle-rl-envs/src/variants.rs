//! Named environment presets.
//!
//! Each preset fixes a vocabulary size and a turn budget. Presets are a
//! plain enum plus constructors, not a registry: callers pick one
//! explicitly.

use std::path::Path;

use serde::{Deserialize, Serialize};
use wordle_rl::Result;

use crate::words::{load_words, parse_words};
use crate::WordleEnv;

/// Word list shipped with the crate; used by [`WordleEnv::variant`].
const BUNDLED_WORDS: &str = include_str!("../data/wordle_words.txt");

/// Vocabulary-size presets, all with a budget of 6 turns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// First 10 words
    Ten,
    /// First 100 words
    Hundred,
    /// First 1000 words
    Thousand,
    /// The whole word list
    Full,
}

impl Variant {
    /// Word-list truncation for this preset
    pub fn word_limit(self) -> Option<usize> {
        match self {
            Variant::Ten => Some(10),
            Variant::Hundred => Some(100),
            Variant::Thousand => Some(1000),
            Variant::Full => None,
        }
    }

    /// Turn budget for this preset
    pub fn max_turns(self) -> usize {
        6
    }
}

impl WordleEnv {
    /// Build a preset environment from the bundled word list
    pub fn variant(variant: Variant) -> Result<Self> {
        Self::new(
            parse_words(BUNDLED_WORDS, variant.word_limit()),
            variant.max_turns(),
        )
    }

    /// Build a preset environment from a word-list file
    pub fn variant_from_file<P: AsRef<Path>>(variant: Variant, path: P) -> Result<Self> {
        Self::new(
            load_words(path, variant.word_limit())?,
            variant.max_turns(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordle_rl::env::Env;
    use wordle_rl::spaces::{Discrete, DynSpace};

    #[test]
    fn test_preset_sizes() {
        let env = WordleEnv::variant(Variant::Ten).unwrap();
        assert_eq!(env.action_space(), DynSpace::Discrete(Discrete::new(10)));

        let env = WordleEnv::variant(Variant::Hundred).unwrap();
        assert_eq!(env.action_space(), DynSpace::Discrete(Discrete::new(100)));

        let env = WordleEnv::variant(Variant::Full).unwrap();
        assert!(env.words().len() > 100);
        assert_eq!(env.max_turns(), 6);
    }

    #[test]
    fn test_bundled_words_are_valid() {
        // Construction validates every word, so Full succeeding means the
        // whole bundled list is well formed.
        let env = WordleEnv::variant(Variant::Full).unwrap();
        assert!(env.words().iter().all(|w| w.len() == crate::WORD_LEN));
    }
}
