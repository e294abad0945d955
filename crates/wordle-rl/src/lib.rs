//! # wordle-rl
//!
//! Protocol crate for the Wordle reinforcement-learning environment.
//!
//! This crate defines the pieces an agent needs to talk to an environment:
//! - the [`env::Env`] trait with the reset/step protocol
//! - [`env::StepResult`] and [`env::EnvInfo`] step outputs
//! - observation/action space types in [`spaces`]
//! - the [`EnvError`] taxonomy shared by all environments
//!
//! The concrete Wordle environment lives in the `wordle-rl-envs` crate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wordle_rl::prelude::*;
//! use wordle_rl_envs::{Variant, WordleEnv};
//!
//! let mut env = WordleEnv::variant(Variant::Ten)?;
//! let (obs, _) = env.reset(Some(42));
//!
//! let result = env.step(3)?;
//! println!("reward: {}", result.reward);
//! ```

pub mod env;
pub mod spaces;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::env::{Env, EnvInfo, StepResult};
    pub use crate::spaces::{Discrete, DynSpace, MultiDiscrete, Space};
    pub use crate::{EnvError, Result};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for environment construction and stepping.
///
/// Construction errors (`InvalidVocabulary`, `ConfigurationMismatch`) are
/// fatal: the environment is never built. Step errors (`InvalidState`,
/// `InvalidAction`) are usage errors; the failed call performs no mutation
/// and the caller can recover with `reset`.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("configuration mismatch: {0}")]
    ConfigurationMismatch(String),

    #[error("step() called on a terminated episode; call reset() first")]
    InvalidState,

    #[error("invalid action: {0}")]
    InvalidAction(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EnvError>;
