//! Environment trait and step outputs.
//!
//! Provides the core `Env` trait that all environments implement, plus the
//! `StepResult`/`EnvInfo` types returned from steps.

mod traits;

pub use traits::{Env, EnvInfo, StepResult};
