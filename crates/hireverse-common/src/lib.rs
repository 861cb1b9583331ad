//! hireverse-common — Shared types, errors, and configuration used across all
//! HireVerse crates.

pub mod error;
pub mod entities;
pub mod ranking_config;

// Re-export commonly used types
pub use error::{HireverseError, Result};
pub use entities::{Difficulty, PrepLevel, Problem, RankedProblem, RankingRequest};
pub use ranking_config::{PaceConfig, RankingConfig, WeightProfile};
