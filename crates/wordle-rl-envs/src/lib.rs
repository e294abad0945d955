//! Wordle environments for wordle-rl.
//!
//! A deterministic, turn-based Wordle simulator behind the standard
//! reset/step protocol:
//! - [`WordleEnv`] - the environment state machine
//! - [`FeedbackState`] - accumulated per-letter, per-position feedback
//! - [`Variant`] - named vocabulary-size presets
//! - [`words`] - word-list loading
//!
//! Observations are structured ([`FeedbackState`]); agents that want the
//! packed numeric layout call [`FeedbackState::encode`].

mod state;
mod variants;
mod wordle;
pub mod words;

pub use state::{FeedbackState, LetterStatus};
pub use variants::Variant;
pub use wordle::WordleEnv;

/// Fixed word length for every vocabulary word
pub const WORD_LEN: usize = 5;

/// Size of the letter alphabet (A-Z)
pub const ALPHABET_LEN: usize = 26;

/// Reward scale: winning pays up to `REWARD`, exhausting the turns pays
/// `-REWARD`
pub const REWARD: f32 = 10.0;
